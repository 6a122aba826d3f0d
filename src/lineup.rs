// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Lineups, and their application to the solver as mask/unmask commands.

#[cfg(test)]
pub(crate) mod test_utils;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Addressing, Error, LineupConfig, SolverOracle, TopologySnapshot, TrunkPolicy};

/// An assignment of chosen connections to branch points.
///
/// Branch points without a choice are undecided, and all their candidates
/// get masked when the lineup is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    choices: BTreeMap<String, String>,
}

impl Lineup {
    /// Creates an empty lineup, with every branch point undecided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses `connection` at `branch_point`, replacing any earlier choice.
    pub fn choose(&mut self, branch_point: impl Into<String>, connection: impl Into<String>) {
        self.choices.insert(branch_point.into(), connection.into());
    }

    /// Returns a copy of this lineup with `connection` chosen at
    /// `branch_point`.
    pub fn with_choice(
        &self,
        branch_point: impl Into<String>,
        connection: impl Into<String>,
    ) -> Self {
        let mut lineup = self.clone();
        lineup.choose(branch_point, connection);
        lineup
    }

    /// Returns the connection chosen at `branch_point`, if any.
    pub fn choice(&self, branch_point: &str) -> Option<&str> {
        self.choices.get(branch_point).map(String::as_str)
    }

    /// Returns an iterator over `(branch point, chosen connection)` pairs.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .map(|(bp, c)| (bp.as_str(), c.as_str()))
    }

    /// Returns the number of decided branch points.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if no branch point is decided.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lineup {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            choices: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Checks that every choice of `lineup` names a branch point of `snapshot`
/// and one of that branch point's candidates.
pub fn validate_lineup(snapshot: &TopologySnapshot, lineup: &Lineup) -> Result<(), Error> {
    for (branch_point, choice) in lineup.choices() {
        let Some(branch) = snapshot.branch(branch_point) else {
            return Err(Error::invalid_lineup(format!(
                "{branch_point} is not a branch point."
            )));
        };
        if !branch.has_candidate(choice) {
            return Err(Error::invalid_lineup(format!(
                "{choice} is not a candidate at branch point {branch_point}."
            )));
        }
    }
    Ok(())
}

/// Applies a lineup to the solver.
///
/// Trunks are masked if they are locked, and otherwise unmasked or restored
/// to their initial state depending on the trunk policy.  At every branch
/// point, the chosen candidate is unmasked and all others are masked.
/// Branch points without a choice get all their candidates masked.
///
/// The lineup is validated before any command is issued.  The first failing
/// command aborts the application, leaving the solver partially updated.
pub fn apply_lineup<S: SolverOracle>(
    solver: &mut S,
    addressing: &Addressing,
    snapshot: &TopologySnapshot,
    lineup: &Lineup,
    config: &LineupConfig,
) -> Result<(), Error> {
    validate_lineup(snapshot, lineup)?;

    for trunk in snapshot.trunks() {
        let mask = if config.locked_trunks.contains(&trunk.uid) {
            true
        } else {
            match config.trunk_policy {
                TrunkPolicy::ForceOpen => false,
                TrunkPolicy::RestoreInitial => trunk.initial_masked,
            }
        };
        set_masked(solver, addressing, &trunk.uid, mask)?;
    }

    for branch in snapshot.branches() {
        let chosen = lineup.choice(&branch.point);
        for candidate in &branch.candidates {
            set_masked(
                solver,
                addressing,
                &candidate.uid,
                chosen != Some(candidate.uid.as_str()),
            )?;
        }
    }

    Ok(())
}

fn set_masked<S: SolverOracle>(
    solver: &mut S,
    addressing: &Addressing,
    uid: &str,
    mask: bool,
) -> Result<(), Error> {
    let command = if mask {
        addressing.mask(uid)
    } else {
        addressing.unmask(uid)
    };
    tracing::debug!("Issuing {command}");
    solver.execute(&command)
}
