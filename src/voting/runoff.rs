use log::debug;

use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Two-round runoff over first-place totals.
///
/// Round 1 tallies first-place weighted scores exactly like plurality and
/// keeps the two strongest candidates. If the leader's total is at least
/// twice the runner-up's it wins outright; note that this shortcut only
/// approximates "already has a majority" and is not a true majority test
/// against the whole electorate. Otherwise the finalists go head to head:
/// each ballot backs whichever finalist it scores strictly higher,
/// contributing that weighted score, and a ballot scoring both finalists
/// equally backs neither.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;
    let first_round = voting::first_place_totals(&weighted, &universe);

    // Standings ordered by total, then id, leader first.
    let mut standings: Vec<(CandidateId, f64)> = first_round.into_iter().collect();
    standings.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let (leader, leader_total) = standings[0];
    let Some(&(runner_up, runner_up_total)) = standings.get(1) else {
        // Single-candidate universe: no runoff to hold.
        return Ok(leader);
    };

    if leader_total >= runner_up_total * 2.0 {
        debug!(
            "runoff shortcut: {} leads with {:.3} against {:.3}",
            leader, leader_total, runner_up_total
        );
        return Ok(leader);
    }

    // Second round: head to head between the two finalists.
    let mut leader_final = 0.0;
    let mut runner_up_final = 0.0;
    for ballot in weighted.values() {
        let for_leader = ballot.get(&leader).copied().unwrap_or(0.0);
        let for_runner_up = ballot.get(&runner_up).copied().unwrap_or(0.0);
        if for_leader > for_runner_up {
            leader_final += for_leader;
        } else if for_runner_up > for_leader {
            runner_up_final += for_runner_up;
        }
        // Equal scores: the ballot backs neither finalist.
    }
    debug!(
        "runoff second round: {} at {:.3}, {} at {:.3}",
        leader, leader_final, runner_up, runner_up_final
    );

    if runner_up_final > leader_final {
        Ok(runner_up)
    } else if leader_final > runner_up_final {
        Ok(leader)
    } else {
        Ok(leader.min(runner_up))
    }
}
