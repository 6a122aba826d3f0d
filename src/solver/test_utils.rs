// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains an
//! in-memory `SolverOracle` that serves scripted tag values, tracks mask
//! states and records every command it receives.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{Addressing, Error, SolverOracle};

/// Scores the current mask state.  Returning `None` makes the solve fail.
type Scorer = Box<dyn FnMut(&BTreeSet<String>) -> Option<f64>>;

pub(crate) struct ScriptedSolver {
    addressing: Addressing,
    values: HashMap<String, String>,
    failing: HashSet<String>,
    masked: BTreeMap<String, bool>,
    executed: Vec<String>,
    scorer: Option<Scorer>,
    solves: usize,
}

impl ScriptedSolver {
    /// Creates a solver for the `PROD` model, with no values.
    pub(crate) fn new() -> Self {
        ScriptedSolver {
            addressing: Addressing::default(),
            values: HashMap::new(),
            failing: HashSet::new(),
            masked: BTreeMap::new(),
            executed: Vec::new(),
            scorer: None,
            solves: 0,
        }
    }

    /// Serves `value` for `tag`.
    pub(crate) fn with_value(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(tag.into(), value.into());
        self
    }

    /// Makes the given command or tag fail with a solver error.
    pub(crate) fn with_failure(mut self, command_or_tag: impl Into<String>) -> Self {
        self.failing.insert(command_or_tag.into());
        self
    }

    /// Scores every solve with `scorer`, which gets the uids of all
    /// equipment that is currently unmasked.  The score is served as the oil
    /// rate of a single separator.
    pub(crate) fn with_scorer(
        mut self,
        scorer: impl FnMut(&BTreeSet<String>) -> Option<f64> + 'static,
    ) -> Self {
        self.scorer = Some(Box::new(scorer));
        self
    }

    /// Returns the mask state of `uid`, if it was ever masked or unmasked.
    pub(crate) fn masked(&self, uid: &str) -> Option<bool> {
        self.masked.get(uid).copied()
    }

    /// Returns all commands received so far, in order.
    pub(crate) fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Returns the number of network solves received so far.
    pub(crate) fn solves(&self) -> usize {
        self.solves
    }

    fn open(&self) -> BTreeSet<String> {
        self.masked
            .iter()
            .filter(|(_, masked)| !**masked)
            .map(|(uid, _)| uid.clone())
            .collect()
    }

    fn mask_target(command: &str) -> Option<(String, bool)> {
        let (rest, masked) = if let Some(rest) = command.strip_suffix("].UNMASK()") {
            (rest, false)
        } else if let Some(rest) = command.strip_suffix("].MASK()") {
            (rest, true)
        } else {
            return None;
        };
        let (_, selector) = rest.rsplit_once("EQUIP[")?;
        let uid = selector.trim_start_matches('{').trim_end_matches('}');
        Some((uid.to_string(), masked))
    }
}

impl SolverOracle for ScriptedSolver {
    fn execute(&mut self, command: &str) -> Result<(), Error> {
        self.executed.push(command.to_string());
        if self.failing.contains(command) {
            return Err(Error::solver(format!("DoCmd: {command} - scripted failure")));
        }

        if let Some((uid, masked)) = Self::mask_target(command) {
            self.masked.insert(uid, masked);
        } else if command == self.addressing.solve_network() {
            self.solves += 1;
            let open = self.open();
            if let Some(scorer) = self.scorer.as_mut() {
                let Some(score) = scorer(&open) else {
                    return Err(Error::solver(format!(
                        "DoCmd: {command} - network did not converge"
                    )));
                };
                self.values
                    .insert(self.addressing.separator_count(), "1".to_string());
                self.values
                    .insert(self.addressing.separator_oil_rate(0), score.to_string());
            }
        }

        Ok(())
    }

    fn get_value(&mut self, tag: &str) -> Result<String, Error> {
        if self.failing.contains(tag) {
            return Err(Error::solver(format!("DoGet: {tag} - scripted failure")));
        }
        Ok(self.values.get(tag).cloned().unwrap_or_default())
    }
}
