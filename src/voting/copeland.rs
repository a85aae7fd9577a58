use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Copeland scoring: accumulated pairwise win/loss margins.
///
/// For every pair of distinct candidates both present on a ballot, the
/// side with the strictly higher weighted score gains the voter's weight
/// and the other side loses it; equal scores move nothing for that pair.
/// The candidate with the highest net margin wins. Net margins can all be
/// zero or negative; selection handles that rather than assuming a
/// positive best score exists.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;
    let mut nets = voting::zeroed_table(&universe);

    for (voter, ballot) in &weighted {
        let weight = weights.get(voter).copied().unwrap_or(0.0);
        let entries: Vec<(CandidateId, f64)> = ballot
            .iter()
            .map(|(&candidate, &score)| (candidate, score))
            .collect();

        for (i, &(first, first_score)) in entries.iter().enumerate() {
            for &(second, second_score) in &entries[i + 1..] {
                if first_score > second_score {
                    *nets.entry(first).or_insert(0.0) += weight;
                    *nets.entry(second).or_insert(0.0) -= weight;
                } else if second_score > first_score {
                    *nets.entry(second).or_insert(0.0) += weight;
                    *nets.entry(first).or_insert(0.0) -= weight;
                }
            }
        }
    }

    voting::leading_candidate(&nets).ok_or(ElectionError::NoCandidates)
}
