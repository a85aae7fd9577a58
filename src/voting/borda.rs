use std::collections::BTreeSet;

use crate::models::{BallotSet, CandidateId, WeightTable};
use crate::voting::{self, ElectionError};

/// Borda count over weighted-score rankings.
///
/// Each ballot ranks its nonzero-scored candidates by weighted score,
/// best first. With `n` candidates in the whole election, the candidate
/// at sorted position `i` (0-based) earns `n - i + 1` points scaled by
/// the voter's weight. Candidates the ballot leaves unranked split the
/// triangular pool `r * (r + 1) / 2` evenly, scaled the same way, where
/// `r` is how many went unranked. Needs the full candidate universe
/// before any single ballot can be scored.
pub fn decide_winner(
    ballots: &BallotSet,
    weights: &WeightTable,
) -> Result<CandidateId, ElectionError> {
    let (weighted, universe) = voting::prepare(ballots, weights)?;
    let n = universe.len() as f64;
    let mut totals = voting::zeroed_table(&universe);

    for (voter, ballot) in &weighted {
        let weight = weights.get(voter).copied().unwrap_or(0.0);

        // Nonzero entries, best weighted score first; equal scores keep
        // id order so the ranking is total.
        let mut ranked: Vec<(CandidateId, f64)> = ballot
            .iter()
            .map(|(&candidate, &score)| (candidate, score))
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        for (i, &(candidate, _)) in ranked.iter().enumerate() {
            let points = n - i as f64 + 1.0;
            *totals.entry(candidate).or_insert(0.0) += points * weight;
        }

        // Everyone this ballot didn't rank shares the leftover points.
        let unranked = n - ranked.len() as f64;
        if unranked > 0.0 {
            let pool = (1.0 + unranked) * unranked / 2.0;
            let share = pool / unranked * weight;
            let ranked_ids: BTreeSet<CandidateId> =
                ranked.iter().map(|&(candidate, _)| candidate).collect();
            for candidate in &universe {
                if !ranked_ids.contains(candidate) {
                    *totals.entry(*candidate).or_insert(0.0) += share;
                }
            }
        }
    }

    voting::leading_candidate(&totals).ok_or(ElectionError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voting::fixtures::{ballots, candidate, equal_weights, voter, weights};

    #[test]
    fn single_voter_ranking_elects_its_favorite() {
        let (x, y, z) = (candidate(1), candidate(2), candidate(3));
        let a = voter(1);
        // x > y > z earns x the most points (4, 3, 2 with n = 3).
        let set = ballots(&[(a, &[(x, 3.0), (y, 2.0), (z, 1.0)])]);

        assert_eq!(decide_winner(&set, &equal_weights(&set)).unwrap(), x);
    }

    #[test]
    fn unranked_candidates_share_the_leftover_pool() {
        let (x, y) = (candidate(1), candidate(2));
        let (a, b) = (voter(1), voter(2));
        // a ranks only x: x earns 3 points, y gets the 1-point pool.
        // b ranks only y at weight 3: y earns 9, x gets 3.
        // Totals x = 6, y = 10.
        let set = ballots(&[(a, &[(x, 1.0)]), (b, &[(y, 1.0)])]);
        let table = weights(&[(a, 1.0), (b, 3.0)]);

        assert_eq!(decide_winner(&set, &table).unwrap(), y);
    }

    #[test]
    fn zero_scored_candidates_count_as_unranked() {
        let (x, y, z) = (candidate(1), candidate(2), candidate(3));
        let (a, b) = (voter(1), voter(2));
        // a scores z zero, so z splits the pool with nothing else and y
        // still outranks it; b's ballot decides between x and y.
        let set = ballots(&[
            (a, &[(x, 2.0), (y, 1.0), (z, 0.0)]),
            (b, &[(y, 5.0), (x, 1.0)]),
        ]);

        // a: x 4, y 3, z pool 1; b: y 4, x 3, z pool 1.
        // Totals: x = 7, y = 7, z = 2, and the tie goes to x's smaller id.
        assert_eq!(decide_winner(&set, &equal_weights(&set)).unwrap(), x);
    }

    #[test]
    fn heavier_voters_dominate_the_ranking() {
        let (x, y) = (candidate(1), candidate(2));
        let (a, b) = (voter(1), voter(2));
        let set = ballots(&[(a, &[(x, 2.0), (y, 1.0)]), (b, &[(y, 2.0), (x, 1.0)])]);

        // Equal weights tie on points; id breaks toward x.
        assert_eq!(decide_winner(&set, &equal_weights(&set)).unwrap(), x);
        // Tilt the weights and b's ordering prevails.
        let table = weights(&[(a, 1.0), (b, 2.0)]);
        assert_eq!(decide_winner(&set, &table).unwrap(), y);
    }
}
