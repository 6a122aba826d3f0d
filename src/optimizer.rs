// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Search strategies for the lineup that maximizes total oil rate.

mod brute_force;
mod greedy;

#[cfg(test)]
pub(crate) mod test_utils;

use serde::{Deserialize, Serialize};

use crate::{
    apply_lineup, evaluate, Addressing, Error, Lineup, LineupConfig, SolverOracle,
    TopologySnapshot,
};

/// A lineup search strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Evaluates every combination of branch choices.  Exact, but the number
    /// of solves is the product of the candidate counts.
    BruteForce,
    /// Fixes one branch point at a time, in snapshot order.  The number of
    /// solves is the sum of the candidate counts plus one, but the result is
    /// only locally optimal.
    Greedy,
}

/// The outcome of a lineup search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The best lineup found.
    pub lineup: Lineup,
    /// The total oil rate of `lineup`.
    pub score: f64,
    /// The number of lineups that were evaluated, including failed ones.
    pub evaluations: usize,
    /// The number of evaluations that failed with a solver error.
    pub failed_trials: usize,
}

/// Searches for the best lineup of a snapshot, using the solver as the
/// objective.
///
/// The optimizer holds the solver session exclusively for its whole
/// lifetime.  The mask state of the solver after a search is that of the
/// last evaluated lineup.
pub struct Optimizer<'a, S>
where
    S: SolverOracle,
{
    solver: &'a mut S,
    addressing: &'a Addressing,
    snapshot: &'a TopologySnapshot,
    config: &'a LineupConfig,
    evaluations: usize,
    failed_trials: usize,
}

impl<'a, S> Optimizer<'a, S>
where
    S: SolverOracle,
{
    /// Creates a new optimizer.
    pub fn new(
        solver: &'a mut S,
        addressing: &'a Addressing,
        snapshot: &'a TopologySnapshot,
        config: &'a LineupConfig,
    ) -> Self {
        Self {
            solver,
            addressing,
            snapshot,
            config,
            evaluations: 0,
            failed_trials: 0,
        }
    }

    /// Runs the given search strategy.
    pub fn run(&mut self, strategy: Strategy) -> Result<OptimizationResult, Error> {
        match strategy {
            Strategy::BruteForce => self.brute_force(),
            Strategy::Greedy => self.greedy(),
        }
    }

    /// Applies and evaluates one lineup.
    fn trial(&mut self, lineup: &Lineup) -> Result<f64, Error> {
        self.evaluations += 1;
        let score = match apply_lineup(
            &mut *self.solver,
            self.addressing,
            self.snapshot,
            lineup,
            self.config,
        ) {
            Ok(()) => evaluate(&mut *self.solver, self.addressing),
            Err(err) => Err(err),
        };
        if score.is_err() {
            self.failed_trials += 1;
        }
        score
    }

    fn reset_counters(&mut self) {
        self.evaluations = 0;
        self.failed_trials = 0;
    }

    fn result(&self, lineup: Lineup, score: f64) -> OptimizationResult {
        OptimizationResult {
            lineup,
            score,
            evaluations: self.evaluations,
            failed_trials: self.failed_trials,
        }
    }
}

/// Returns true if `score` should replace `best`.  Ties keep the earlier
/// lineup.
fn improves(score: f64, best: Option<f64>) -> bool {
    best.map_or(true, |best| score > best)
}

#[cfg(test)]
mod tests {
    use super::test_utils::{additive_score, two_branch_snapshot};
    use super::*;
    use crate::solver::test_utils::ScriptedSolver;
    use crate::ErrorKind;

    #[test]
    fn test_improves() {
        assert!(improves(0.0, None));
        assert!(improves(1.0, Some(0.5)));
        assert!(!improves(1.0, Some(1.0)));
        assert!(!improves(f64::NAN, Some(1.0)));
    }

    #[test]
    fn test_counters_start_over_after_a_failed_run() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        // The first 6 solves fail.
        let mut solves = 0;
        let mut solver = ScriptedSolver::new().with_scorer(move |open| {
            solves += 1;
            if solves <= 6 {
                None
            } else {
                additive_score(open)
            }
        });
        let mut optimizer = Optimizer::new(&mut solver, &addressing, &snapshot, &config);

        assert!(optimizer
            .run(Strategy::BruteForce)
            .is_err_and(|e| e.kind() == ErrorKind::NoFeasibleLineup));
        let result = optimizer.run(Strategy::BruteForce)?;
        assert_eq!(result.evaluations, 6);
        assert_eq!(result.failed_trials, 0);

        Ok(())
    }

    #[test]
    fn test_counters_start_over_after_an_aborted_greedy_run() -> Result<(), Error> {
        let addressing = Addressing::default();
        let snapshot = two_branch_snapshot();
        let config = LineupConfig::default();
        // Only the first solve fails.
        let mut solves = 0;
        let mut solver = ScriptedSolver::new().with_scorer(move |open| {
            solves += 1;
            if solves == 1 {
                None
            } else {
                additive_score(open)
            }
        });
        let mut optimizer = Optimizer::new(&mut solver, &addressing, &snapshot, &config);

        assert!(optimizer
            .run(Strategy::Greedy)
            .is_err_and(|e| e.kind() == ErrorKind::Solver));
        let result = optimizer.run(Strategy::Greedy)?;
        assert_eq!(result.evaluations, 6);
        assert_eq!(result.failed_trials, 0);
        assert_eq!(result.score, 23.0);

        Ok(())
    }
}
