use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identifies one voter. Voters and candidates live in separate namespaces
/// even though both are UUIDs.
pub type VoterId = Uuid;

/// Identifies one candidate being voted on.
pub type CandidateId = Uuid;

/// Raw scores one voter assigned to the candidates it has an opinion on.
/// What a score *means* (preference strength, approval, rank proxy) is up
/// to the method interpreting it; candidates the voter skipped are simply
/// absent.
pub type Ballot = HashMap<CandidateId, f64>;

/// Every ballot submitted for one round, keyed by the voter that cast it.
pub type BallotSet = HashMap<VoterId, Ballot>;

/// Per-voter voting power. A voter missing from the table counts as
/// weight 0 and cannot influence the outcome.
pub type WeightTable = HashMap<VoterId, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VotingMethod {
    Plurality,
    Runoff,
    BordaCount,
    InstantRunoff,
    Approval,
    CopelandScoring,
}

/// A method name that `VotingMethod::from_str` did not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown voting method: {0}")]
pub struct UnknownMethod(pub String);

impl VotingMethod {
    /// Every method, in a fixed order, for callers that iterate them.
    pub const ALL: [VotingMethod; 6] = [
        VotingMethod::Plurality,
        VotingMethod::Runoff,
        VotingMethod::BordaCount,
        VotingMethod::InstantRunoff,
        VotingMethod::Approval,
        VotingMethod::CopelandScoring,
    ];

    /// Stable name used when a method is selected by string.
    pub fn name(&self) -> &'static str {
        match self {
            VotingMethod::Plurality => "plurality",
            VotingMethod::Runoff => "runoff",
            VotingMethod::BordaCount => "borda-count",
            VotingMethod::InstantRunoff => "instant-runoff",
            VotingMethod::Approval => "approval",
            VotingMethod::CopelandScoring => "copeland-scoring",
        }
    }
}

impl fmt::Display for VotingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VotingMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plurality" => Ok(VotingMethod::Plurality),
            "runoff" => Ok(VotingMethod::Runoff),
            "borda-count" => Ok(VotingMethod::BordaCount),
            "instant-runoff" => Ok(VotingMethod::InstantRunoff),
            "approval" => Ok(VotingMethod::Approval),
            "copeland-scoring" => Ok(VotingMethod::CopelandScoring),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_round_trip() {
        for method in VotingMethod::ALL {
            let parsed: VotingMethod = method.name().parse().unwrap();
            assert_eq!(parsed, method);
            assert_eq!(method.to_string(), method.name());
        }
    }

    #[test]
    fn unknown_method_name_is_rejected() {
        let err = "first-past-the-post".parse::<VotingMethod>().unwrap_err();
        assert_eq!(err, UnknownMethod("first-past-the-post".to_string()));
    }

    #[test]
    fn ballot_set_survives_json_round_trip() {
        let voter = Uuid::new_v4();
        let candidate = Uuid::new_v4();
        let mut ballots = BallotSet::new();
        ballots.insert(voter, HashMap::from([(candidate, 2.5)]));

        let json = serde_json::to_string(&ballots).unwrap();
        let back: BallotSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ballots);
    }

    #[test]
    fn method_serializes_as_variant_name() {
        let json = serde_json::to_string(&VotingMethod::BordaCount).unwrap();
        assert_eq!(json, "\"BordaCount\"");
    }
}
