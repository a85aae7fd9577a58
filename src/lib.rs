//! weighty-vote: a multi-method engine for weighted preferential voting.
//!
//! Voters submit score ballots over a shared candidate pool; the engine
//! aggregates them under one of six election methods and returns the
//! winning candidate. Ballot collection and weight derivation are the
//! caller's business.

pub mod models;
pub mod voting;

pub use models::{
    Ballot, BallotSet, CandidateId, UnknownMethod, VoterId, VotingMethod, WeightTable,
};
pub use voting::{
    ElectionError, ScoreTable, WeightedBallot, WeightedBallotSet, apply_weights,
    leading_candidate, trailing_candidate,
};
