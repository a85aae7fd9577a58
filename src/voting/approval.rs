use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Scored approval: every candidate a ballot scores above zero counts as
/// approved and is credited with that weighted score. This deliberately
/// departs from the canonical approval vote (unweighted, binary +1 per
/// approval) so that stronger approvals and heavier voters count for more.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;
    let mut totals = voting::zeroed_table(&universe);

    for ballot in weighted.values() {
        for (&candidate, &score) in ballot {
            if score > 0.0 {
                *totals.entry(candidate).or_insert(0.0) += score;
            }
        }
    }

    voting::leading_candidate(&totals).ok_or(ElectionError::NoCandidates)
}
