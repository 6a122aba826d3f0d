// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains the
//! snapshot and scoring fixtures shared by the search strategy tests.

use std::collections::BTreeSet;

use crate::lineup::test_utils::branch;
use crate::TopologySnapshot;

/// A snapshot without trunks, with branch points `A` (candidates `a0`, `a1`)
/// and `B` (candidates `b0`, `b1`, `b2`).
pub(crate) fn two_branch_snapshot() -> TopologySnapshot {
    TopologySnapshot::new(
        "PROD",
        vec![],
        vec![branch("A", &["a0", "a1"]), branch("B", &["b0", "b1", "b2"])],
        vec![],
        [],
    )
}

/// Scores a mask state by adding the weight of every open candidate.
pub(crate) fn additive_score(open: &BTreeSet<String>) -> Option<f64> {
    Some(
        open.iter()
            .map(|uid| match uid.as_str() {
                "a0" => 10.0,
                "a1" => 20.0,
                "b0" => 1.0,
                "b1" => 3.0,
                "b2" => 2.0,
                _ => 0.0,
            })
            .sum(),
    )
}
