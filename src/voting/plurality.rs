use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Each ballot backs its single top-scored candidate, contributing that
/// weighted score to the candidate's running total; the greatest total
/// wins. A ballot with no positive score has no top choice and backs
/// nobody.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;
    let totals = voting::first_place_totals(&weighted, &universe);
    voting::leading_candidate(&totals).ok_or(ElectionError::NoCandidates)
}
