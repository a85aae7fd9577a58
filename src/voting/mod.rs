//! Election methods over weighted score ballots.
//!
//! Each submodule implements one method behind the same
//! `decide_winner(ballots, weights)` signature; the pieces they all share
//! (weighting, input validation, the deterministic selection rule) live
//! here. Every call is a one-shot, stateless aggregation: nothing survives
//! between rounds.

pub mod approval;
pub mod borda;
pub mod copeland;
pub mod instant_runoff;
pub mod plurality;
pub mod runoff;

use std::collections::BTreeMap;

use log::trace;
use thiserror::Error;

use crate::models::{BallotSet, CandidateId, VoterId, VotingMethod, WeightTable};

/// One voter's ballot after weighting, in candidate-id order.
pub type WeightedBallot = BTreeMap<CandidateId, f64>;

/// All weighted ballots for one round, in voter-id order.
///
/// Ordered maps keep every traversal, and therefore every floating-point
/// accumulation, in identifier order: the outcome cannot depend on the
/// iteration order of the caller's hash maps.
pub type WeightedBallotSet = BTreeMap<VoterId, WeightedBallot>;

/// Per-candidate totals accumulated during one method invocation.
pub type ScoreTable = BTreeMap<CandidateId, f64>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElectionError {
    /// No candidate appears on any ballot. An empty ballot set has an
    /// empty candidate universe and surfaces the same way.
    #[error("no candidates to decide between")]
    NoCandidates,
    /// A voter weight was negative or not finite.
    #[error("invalid weight {weight} for voter {voter}")]
    InvalidWeight { voter: VoterId, weight: f64 },
    /// A ballot score was negative or not finite.
    #[error("invalid score {score} from voter {voter} for candidate {candidate}")]
    InvalidScore {
        voter: VoterId,
        candidate: CandidateId,
        score: f64,
    },
}

impl VotingMethod {
    /// Run this method over one round's ballots and weights.
    pub fn decide(
        &self,
        ballots: &BallotSet,
        weights: &WeightTable,
    ) -> Result<CandidateId, ElectionError> {
        match self {
            VotingMethod::Plurality => plurality::decide_winner(ballots, weights),
            VotingMethod::Runoff => runoff::decide_winner(ballots, weights),
            VotingMethod::BordaCount => borda::decide_winner(ballots, weights),
            VotingMethod::InstantRunoff => instant_runoff::decide_winner(ballots, weights),
            VotingMethod::Approval => approval::decide_winner(ballots, weights),
            VotingMethod::CopelandScoring => copeland::decide_winner(ballots, weights),
        }
    }
}

/// Multiply every score on every ballot by its voter's weight.
///
/// A voter missing from the weight table gets weight 0, so its weighted
/// ballot is all zeros and stays inert in every method without needing to
/// be special-cased. The caller's maps are left untouched.
pub fn apply_weights(ballots: &BallotSet, weights: &WeightTable) -> WeightedBallotSet {
    let mut weighted = WeightedBallotSet::new();
    for (voter, ballot) in ballots {
        let weight = weights.get(voter).copied().unwrap_or(0.0);
        let scores: WeightedBallot = ballot
            .iter()
            .map(|(&candidate, &score)| (candidate, score * weight))
            .collect();
        weighted.insert(*voter, scores);
    }
    weighted
}

/// Validate and weight the raw inputs. Every method starts here; once this
/// returns `Ok` the aggregation itself cannot fail.
pub(crate) fn prepare(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<(WeightedBallotSet, Vec<CandidateId>), ElectionError> {
    validate(ballots, weights)?;
    let weighted = apply_weights(ballots, weights);
    let universe = candidate_universe(&weighted);
    if universe.is_empty() {
        return Err(ElectionError::NoCandidates);
    }
    trace!(
        "prepared round: {} ballots over {} candidates",
        weighted.len(),
        universe.len()
    );
    Ok((weighted, universe))
}

/// Reject negative or non-finite weights and scores. Scanning in id order
/// makes the reported offender deterministic when there are several.
fn validate(ballots: &BallotSet, weights: &WeightTable) -> Result<(), ElectionError> {
    let mut weighed: Vec<&VoterId> = weights.keys().collect();
    weighed.sort();
    for &voter in weighed {
        let weight = weights[&voter];
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(ElectionError::InvalidWeight { voter, weight });
        }
    }

    let mut voters: Vec<&VoterId> = ballots.keys().collect();
    voters.sort();
    for &voter in voters {
        let ballot = &ballots[&voter];
        let mut candidates: Vec<&CandidateId> = ballot.keys().collect();
        candidates.sort();
        for &candidate in candidates {
            let score = ballot[&candidate];
            if !(score.is_finite() && score >= 0.0) {
                return Err(ElectionError::InvalidScore {
                    voter,
                    candidate,
                    score,
                });
            }
        }
    }
    Ok(())
}

/// Every candidate that appears on at least one ballot, in id order.
pub(crate) fn candidate_universe(weighted: &WeightedBallotSet) -> Vec<CandidateId> {
    let mut universe: Vec<CandidateId> = weighted
        .values()
        .flat_map(|ballot| ballot.keys().copied())
        .collect();
    universe.sort();
    universe.dedup();
    universe
}

/// Fresh score table with every listed candidate at zero, so selection is
/// always over the full slate rather than just the candidates that happened
/// to receive something.
pub(crate) fn zeroed_table(candidates: &[CandidateId]) -> ScoreTable {
    candidates.iter().map(|&candidate| (candidate, 0.0)).collect()
}

/// Weighted first-place totals restricted to `candidates`: each ballot
/// backs its highest-scored candidate among them, contributing that
/// weighted score. Ballots with no positive score among them back nobody.
/// Exact per-ballot ties go to the smallest candidate id.
pub(crate) fn first_place_totals(
    weighted: &WeightedBallotSet,
    candidates: &[CandidateId],
) -> ScoreTable {
    let mut totals = zeroed_table(candidates);
    for ballot in weighted.values() {
        let mut top: Option<(CandidateId, f64)> = None;
        for &candidate in candidates {
            let Some(&score) = ballot.get(&candidate) else {
                continue;
            };
            if score <= 0.0 {
                continue;
            }
            let better = match top {
                None => true,
                Some((_, high)) => score > high,
            };
            if better {
                top = Some((candidate, score));
            }
        }
        if let Some((candidate, score)) = top {
            *totals.entry(candidate).or_insert(0.0) += score;
        }
    }
    totals
}

/// Candidate with the greatest total; ties go to the smallest id.
///
/// Tracks best-seen explicitly instead of seeding the comparison with a
/// sentinel score, so tables that are all zero or all negative still
/// select deterministically.
pub fn leading_candidate(table: &ScoreTable) -> Option<CandidateId> {
    let mut best: Option<(CandidateId, f64)> = None;
    for (&candidate, &total) in table {
        let better = match best {
            None => true,
            Some((_, top)) => total > top,
        };
        if better {
            best = Some((candidate, total));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Candidate with the smallest total; ties go to the smallest id. Used by
/// elimination rounds.
pub fn trailing_candidate(table: &ScoreTable) -> Option<CandidateId> {
    let mut worst: Option<(CandidateId, f64)> = None;
    for (&candidate, &total) in table {
        let lower = match worst {
            None => true,
            Some((_, low)) => total < low,
        };
        if lower {
            worst = Some((candidate, total));
        }
    }
    worst.map(|(candidate, _)| candidate)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{BallotSet, CandidateId, VoterId, WeightTable};
    use uuid::Uuid;

    /// Candidate ids order by `n`, which is what tie-break tests lean on.
    pub fn candidate(n: u128) -> CandidateId {
        Uuid::from_u128(n + 1)
    }

    /// Voter ids sit in a range far above the candidate ids.
    pub fn voter(n: u128) -> VoterId {
        Uuid::from_u128(0x1000_0000 + n)
    }

    pub fn ballots(rows: &[(VoterId, &[(CandidateId, f64)])]) -> BallotSet {
        rows.iter()
            .map(|&(voter, scores)| (voter, scores.iter().copied().collect()))
            .collect()
    }

    pub fn weights(rows: &[(VoterId, f64)]) -> WeightTable {
        rows.iter().copied().collect()
    }

    /// Weight 1 for every voter in the set.
    pub fn equal_weights(ballots: &BallotSet) -> WeightTable {
        ballots.keys().map(|&voter| (voter, 1.0)).collect()
    }
}
