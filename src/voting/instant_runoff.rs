use log::debug;

use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Instant-runoff elimination.
///
/// Repeatedly tally first-place weighted scores among the candidates
/// still standing and knock out the weakest (smallest id among tied
/// minima), until a single candidate remains. A ballot whose positively
/// scored candidates have all been eliminated goes exhausted and backs
/// nobody for the rest of the count. A universe of one short-circuits
/// without entering the loop.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;

    let mut active = universe;
    while active.len() > 1 {
        let totals = voting::first_place_totals(&weighted, &active);
        let Some(weakest) = voting::trailing_candidate(&totals) else {
            break;
        };
        debug!(
            "instant runoff: eliminating {} at {:.3} ({} candidates left)",
            weakest,
            totals[&weakest],
            active.len() - 1
        );
        active.retain(|&candidate| candidate != weakest);
    }

    active.first().copied().ok_or(ElectionError::NoCandidates)
}
