// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Greedy lineup search.

use crate::{Error, Lineup, SolverOracle};

use super::{improves, OptimizationResult, Optimizer};

impl<S> Optimizer<'_, S>
where
    S: SolverOracle,
{
    /// Fixes the branch points one at a time, in snapshot order.
    ///
    /// Each candidate of the current branch point is evaluated with the
    /// earlier branch points at their fixed choice, and the later ones fully
    /// masked.  The best candidate is fixed, the first one winning ties.
    /// Because later branch points are closed during the trials of earlier
    /// ones, the result is only locally optimal.
    ///
    /// A solver error in any trial aborts the search, since the remaining
    /// trials would no longer start from a known mask state.  The returned
    /// score comes from a final evaluation of the complete lineup.
    pub fn greedy(&mut self) -> Result<OptimizationResult, Error> {
        let snapshot = self.snapshot;
        self.reset_counters();
        tracing::info!(
            "Greedy search over {} branch points.",
            snapshot.branches().len()
        );

        let mut lineup = Lineup::new();
        for branch in snapshot.branches() {
            let mut best: Option<(&str, f64)> = None;

            for candidate in &branch.candidates {
                let trial = lineup.with_choice(&branch.point, &candidate.uid);
                let score = self.trial(&trial).inspect_err(|err| {
                    tracing::warn!(
                        "Greedy trial of {} at branch point {} failed: {err}",
                        candidate.uid,
                        branch.point
                    );
                })?;
                tracing::debug!(
                    "Branch point {}: {} scored {score:.2}",
                    branch.point,
                    candidate.uid
                );
                if improves(score, best.map(|(_, s)| s)) {
                    best = Some((candidate.uid.as_str(), score));
                }
            }

            let Some((choice, score)) = best else {
                return Err(Error::internal(format!(
                    "Branch point {} has no candidates.",
                    branch.point
                )));
            };
            tracing::info!(
                "Fixed branch point {}: {} ({}) with score {score:.2}",
                branch.point,
                branch
                    .candidates
                    .iter()
                    .find(|c| c.uid == choice)
                    .map_or(choice, |c| c.label.as_str()),
                choice
            );
            lineup.choose(&branch.point, choice);
        }

        let score = self.trial(&lineup)?;
        tracing::info!("Greedy lineup complete, total oil rate {score:.2}");

        Ok(self.result(lineup, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::test_utils::{additive_score, two_branch_snapshot};
    use crate::solver::test_utils::ScriptedSolver;
    use crate::{Addressing, ErrorKind, LineupConfig, Strategy, TopologySnapshot};

    #[test]
    fn test_greedy_search() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        let mut solver = ScriptedSolver::new().with_scorer(additive_score);

        let result = Optimizer::new(&mut solver, &addressing, &snapshot, &config).greedy()?;
        assert_eq!(result.lineup, Lineup::from_iter([("A", "a1"), ("B", "b1")]));
        assert_eq!(result.score, 23.0);
        // 2 + 3 trials, and the final evaluation.
        assert_eq!(result.evaluations, 6);
        assert_eq!(solver.solves(), 6);

        Ok(())
    }

    #[test]
    fn test_result_is_a_local_optimum() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        let mut solver = ScriptedSolver::new().with_scorer(additive_score);

        let mut optimizer = Optimizer::new(&mut solver, &addressing, &snapshot, &config);
        let result = optimizer.run(Strategy::Greedy)?;

        for branch in snapshot.branches() {
            for candidate in &branch.candidates {
                let neighbour = result.lineup.with_choice(&branch.point, &candidate.uid);
                assert!(optimizer.trial(&neighbour)? <= result.score);
            }
        }

        Ok(())
    }

    #[test]
    fn test_later_branch_points_are_closed_during_trials() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        // Any B candidate opened next to a0 fails, which would abort the
        // search.
        let mut solver = ScriptedSolver::new().with_scorer(|open| {
            let b_open = open.iter().any(|uid| uid.starts_with('b'));
            if b_open && open.contains("a0") {
                None
            } else {
                additive_score(open)
            }
        });

        let result = Optimizer::new(&mut solver, &addressing, &snapshot, &config).greedy()?;
        assert_eq!(result.lineup, Lineup::from_iter([("A", "a1"), ("B", "b1")]));
        assert_eq!(result.failed_trials, 0);

        Ok(())
    }

    #[test]
    fn test_failing_trial_aborts() {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        let mut solver = ScriptedSolver::new().with_scorer(|open| {
            if open.contains("b2") {
                None
            } else {
                additive_score(open)
            }
        });

        let result = Optimizer::new(&mut solver, &addressing, &snapshot, &config).greedy();
        assert!(result.is_err_and(|e| e.kind() == ErrorKind::Solver));
        // a0, a1, b0, b1, b2: nothing after the failure.
        assert_eq!(solver.solves(), 5);
    }

    #[test]
    fn test_no_branch_points() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = TopologySnapshot::new("PROD", vec![], vec![], vec![], []);
        let config = LineupConfig::default();
        let mut solver = ScriptedSolver::new().with_scorer(|_| Some(7.5));

        let result = Optimizer::new(&mut solver, &addressing, &snapshot, &config).greedy()?;
        assert!(result.lineup.is_empty());
        assert_eq!(result.score, 7.5);
        assert_eq!(result.evaluations, 1);

        Ok(())
    }
}
