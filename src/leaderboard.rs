//! Leaderboard aggregation

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tournament::{ResultsTable, StrategyId};
use crate::Score;

/// Per-strategy metrics reduced from a results table.
///
/// `wins` and `ties` hold no entry for strategies that never won or tied;
/// absence reads as zero. The `*_for` accessors encode that convention.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Sum of a strategy's scores across all its appearances, either side.
    pub totals: BTreeMap<StrategyId, Score>,
    /// Highest single-game score across all appearances.
    pub best: BTreeMap<StrategyId, Score>,
    /// Pairings where the strategy outscored its opponent.
    pub wins: BTreeMap<StrategyId, u32>,
    /// Pairings that ended level, counted once per side.
    pub ties: BTreeMap<StrategyId, u32>,
}

impl Leaderboard {
    pub fn total_for(&self, id: &str) -> Score {
        self.totals.get(id).copied().unwrap_or(0)
    }

    pub fn best_for(&self, id: &str) -> Score {
        self.best.get(id).copied().unwrap_or(0)
    }

    pub fn wins_for(&self, id: &str) -> u32 {
        self.wins.get(id).copied().unwrap_or(0)
    }

    pub fn ties_for(&self, id: &str) -> u32 {
        self.ties.get(id).copied().unwrap_or(0)
    }

    /// Ids with their totals, ranked by total score descending, then wins
    /// descending, then id ascending.
    pub fn ranking(&self) -> Vec<(StrategyId, Score)> {
        let mut rows: Vec<(StrategyId, Score)> = self
            .totals
            .iter()
            .map(|(id, total)| (id.clone(), *total))
            .collect();
        rows.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| self.wins_for(&b.0).cmp(&self.wins_for(&a.0)))
                .then_with(|| a.0.cmp(&b.0))
        });
        rows
    }
}

/// Reduce a results table into per-strategy metrics.
///
/// Every table entry is folded uniformly. For an entry keyed `(idA, idB)`
/// with scores `(scoreA, scoreB)`: both scores feed the respective totals and
/// bests, and the entry is classified once — a higher score is a win for that
/// side, equal scores are a tie for both sides. Self-pairings go through the
/// same fold, so one self-game contributes twice under its id and (with a
/// symmetric payoff rule) counts as a tie.
///
/// A partial table — from a tournament cut short — aggregates the same way;
/// metrics cover whichever strategies appear in it.
pub fn aggregate(results: &ResultsTable) -> Leaderboard {
    let mut board = Leaderboard::default();

    for ((id_a, id_b), result) in results {
        *board.totals.entry(id_a.clone()).or_insert(0) += result.score_a;
        *board.totals.entry(id_b.clone()).or_insert(0) += result.score_b;

        let best_a = board.best.entry(id_a.clone()).or_insert(result.score_a);
        *best_a = (*best_a).max(result.score_a);
        let best_b = board.best.entry(id_b.clone()).or_insert(result.score_b);
        *best_b = (*best_b).max(result.score_b);

        match result.score_a.cmp(&result.score_b) {
            Ordering::Greater => *board.wins.entry(id_a.clone()).or_insert(0) += 1,
            Ordering::Less => *board.wins.entry(id_b.clone()).or_insert(0) += 1,
            Ordering::Equal => {
                *board.ties.entry(id_a.clone()).or_insert(0) += 1;
                *board.ties.entry(id_b.clone()).or_insert(0) += 1;
            }
        }
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::ScoreMatrix;
    use crate::strategy::{AlwaysCooperate, AlwaysDefect, TitForTat};
    use crate::tournament::{run_tournament, Entrant, PairResult};

    fn classic_board() -> Leaderboard {
        let entrants = vec![
            Entrant::new("always_cooperate", || Box::new(AlwaysCooperate)),
            Entrant::new("always_defect", || Box::new(AlwaysDefect)),
            Entrant::new("tit_for_tat", || Box::new(TitForTat)),
        ];
        let table = run_tournament(&entrants, &ScoreMatrix::classic(), 200).unwrap();
        aggregate(&table)
    }

    fn entry(a: &str, b: &str, score_a: Score, score_b: Score) -> ((StrategyId, StrategyId), PairResult) {
        ((a.to_string(), b.to_string()), PairResult { score_a, score_b })
    }

    #[test]
    fn classic_tournament_totals() {
        let board = classic_board();
        // Each strategy appears in 6 games (both sides of its self-pairing).
        assert_eq!(board.total_for("always_cooperate"), 2400);
        assert_eq!(board.total_for("always_defect"), 2808);
        assert_eq!(board.total_for("tit_for_tat"), 2798);
    }

    #[test]
    fn classic_tournament_bests() {
        let board = classic_board();
        assert_eq!(board.best_for("always_cooperate"), 600);
        assert_eq!(board.best_for("always_defect"), 1000);
        assert_eq!(board.best_for("tit_for_tat"), 600);
    }

    #[test]
    fn classic_tournament_wins_and_ties() {
        let board = classic_board();

        // Always-defect wins all four of its non-tied pairings; nobody else
        // wins anything.
        assert_eq!(board.wins_for("always_defect"), 4);
        assert_eq!(board.wins.values().sum::<u32>(), 4);
        assert!(board.wins_for("always_defect") > board.wins_for("always_cooperate"));

        // Five pairings end level (three self-pairings plus cooperate/TFT
        // both ways); each contributes one tie per side.
        assert_eq!(board.ties.values().sum::<u32>(), 10);
        assert_eq!(board.ties_for("always_cooperate"), 4);
        assert_eq!(board.ties_for("always_defect"), 2);
        assert_eq!(board.ties_for("tit_for_tat"), 4);
    }

    #[test]
    fn losers_are_absent_from_wins_not_zeroed() {
        let board = classic_board();
        assert!(!board.wins.contains_key("always_cooperate"));
        assert!(!board.wins.contains_key("tit_for_tat"));
        assert_eq!(board.wins_for("always_cooperate"), 0);
    }

    #[test]
    fn ranking_orders_by_total_then_wins_then_id() {
        let board = classic_board();
        let ranking = board.ranking();
        let ids: Vec<&str> = ranking.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["always_defect", "tit_for_tat", "always_cooperate"]);

        // Equal totals and wins fall back to id order.
        let table: ResultsTable = [entry("b", "a", 4, 4)].into_iter().collect();
        let tied = aggregate(&table).ranking();
        let ids: Vec<&str> = tied.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn self_pairing_counts_twice_under_one_id() {
        let table: ResultsTable = [entry("self", "self", 10, 10)].into_iter().collect();
        let board = aggregate(&table);
        assert_eq!(board.total_for("self"), 20);
        assert_eq!(board.best_for("self"), 10);
        assert_eq!(board.ties_for("self"), 2);
        assert!(board.wins.is_empty());
    }

    #[test]
    fn partial_tables_aggregate_fine() {
        let table: ResultsTable = [
            entry("a", "b", 30, 12),
            entry("b", "c", 7, 7),
        ]
        .into_iter()
        .collect();
        let board = aggregate(&table);

        assert_eq!(board.total_for("a"), 30);
        assert_eq!(board.total_for("b"), 19);
        assert_eq!(board.total_for("c"), 7);
        assert_eq!(board.wins_for("a"), 1);
        assert_eq!(board.ties_for("b"), 1);
        assert_eq!(board.ties_for("c"), 1);
    }

    #[test]
    fn best_tracks_the_maximum_across_appearances() {
        let table: ResultsTable = [
            entry("a", "b", -3, 9),
            entry("b", "a", 2, -8),
            entry("a", "a", -1, -1),
        ]
        .into_iter()
        .collect();
        let board = aggregate(&table);
        assert_eq!(board.best_for("a"), -1);
        assert_eq!(board.best_for("b"), 9);
        assert_eq!(board.total_for("a"), -13);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_table() -> impl Strategy<Value = ResultsTable> {
            let id = (0u8..5).prop_map(|n| format!("s{n}"));
            let result = (-100i64..100, -100i64..100)
                .prop_map(|(score_a, score_b)| PairResult { score_a, score_b });
            proptest::collection::btree_map((id.clone(), id), result, 0..30)
        }

        proptest! {
            #[test]
            fn wins_plus_tied_pairings_cover_the_table(table in arb_table()) {
                let board = aggregate(&table);
                let wins: u32 = board.wins.values().sum();
                let ties: u32 = board.ties.values().sum();
                // Every entry is classified exactly once; a tie contributes
                // two tie entries, a decided game one win.
                prop_assert_eq!(ties % 2, 0);
                prop_assert_eq!(wins + ties / 2, table.len() as u32);
            }

            #[test]
            fn totals_conserve_scores(table in arb_table()) {
                let board = aggregate(&table);
                let folded: Score = board.totals.values().sum();
                let raw: Score = table
                    .values()
                    .map(|result| result.score_a + result.score_b)
                    .sum();
                prop_assert_eq!(folded, raw);
            }

            #[test]
            fn best_never_below_any_single_game(table in arb_table()) {
                let board = aggregate(&table);
                for ((id_a, id_b), result) in &table {
                    prop_assert!(board.best_for(id_a) >= result.score_a);
                    prop_assert!(board.best_for(id_b) >= result.score_b);
                }
            }
        }
    }
}
