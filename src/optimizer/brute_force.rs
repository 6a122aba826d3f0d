// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Exhaustive lineup search.

use crate::{Error, Lineup, SolverOracle};

use super::{improves, OptimizationResult, Optimizer};

impl<S> Optimizer<'_, S>
where
    S: SolverOracle,
{
    /// Evaluates every combination of branch choices and returns the best
    /// one.
    ///
    /// Combinations are enumerated in snapshot order, with the last branch
    /// point varying fastest, and the first of equally scoring combinations
    /// wins.  A combination that fails with a solver error is left out, and
    /// the search goes on.  Returns an error if no combination could be
    /// evaluated.
    pub fn brute_force(&mut self) -> Result<OptimizationResult, Error> {
        let snapshot = self.snapshot;
        let branches = snapshot.branches();
        let sizes = branches
            .iter()
            .map(|b| b.candidates.len())
            .collect::<Vec<_>>();
        if let Some(empty) = branches.iter().find(|b| b.candidates.is_empty()) {
            return Err(Error::internal(format!(
                "Branch point {} has no candidates.",
                empty.point
            )));
        }

        self.reset_counters();
        match combinations(&sizes) {
            Some(total) => tracing::info!(
                "Brute-force search over {} branch points, {total} combinations.",
                branches.len()
            ),
            None => tracing::info!(
                "Brute-force search over {} branch points, more than {} combinations.",
                branches.len(),
                usize::MAX
            ),
        }

        let mut best: Option<(Lineup, f64)> = None;
        let mut indices = vec![0; branches.len()];
        loop {
            let lineup = indices
                .iter()
                .zip(branches)
                .map(|(&i, b)| (b.point.as_str(), b.candidates[i].uid.as_str()))
                .collect::<Lineup>();

            match self.trial(&lineup) {
                Ok(score) => {
                    tracing::debug!("Lineup {:?} scored {score:.2}", lineup);
                    if improves(score, best.as_ref().map(|(_, s)| *s)) {
                        tracing::info!("New best {score:.2}");
                        best = Some((lineup, score));
                    }
                }
                Err(err) => {
                    tracing::warn!("Skipping lineup {:?}: {err}", lineup);
                }
            }

            if !advance(&mut indices, &sizes) {
                break;
            }
        }

        let Some((lineup, score)) = best else {
            return Err(Error::no_feasible_lineup(format!(
                "All {} lineup combinations failed to evaluate.",
                self.evaluations
            )));
        };
        Ok(self.result(lineup, score))
    }
}

/// Returns the number of combinations of the given candidate counts, or
/// `None` if it doesn't fit in a `usize`.
fn combinations(sizes: &[usize]) -> Option<usize> {
    sizes
        .iter()
        .try_fold(1usize, |total, &size| total.checked_mul(size))
}

/// Advances `indices` to the next combination, odometer style.  Returns
/// false once all combinations have been visited.
fn advance(indices: &mut [usize], sizes: &[usize]) -> bool {
    for (index, size) in indices.iter_mut().zip(sizes).rev() {
        *index += 1;
        if *index < *size {
            return true;
        }
        *index = 0;
    }
    false
}
