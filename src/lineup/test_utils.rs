// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains
//! snapshot fixtures shared by the lineup and optimizer tests.

use crate::catalog::Equipment;
use crate::snapshot::{Branch, Trunk, WellRoutes};
use crate::{EquipmentType, TopologySnapshot};

/// A pipe trunk, labelled with its uid.
pub(crate) fn trunk(uid: &str, initial_masked: bool) -> Trunk {
    Trunk {
        uid: uid.to_string(),
        equipment_type: EquipmentType::Pipe,
        label: uid.to_string(),
        initial_masked,
    }
}

/// A branch point with pipe candidates, labelled with their uids.
pub(crate) fn branch(point: &str, candidates: &[&str]) -> Branch {
    Branch {
        point: point.to_string(),
        candidates: candidates
            .iter()
            .map(|c| Equipment::new(*c, EquipmentType::Pipe, *c))
            .collect(),
    }
}

/// The snapshot of `W1 -P1-> J1`, with `J1 -P2-> SEP1` and `J1 -P3-> SEP2`.
pub(crate) fn branching_snapshot() -> TopologySnapshot {
    TopologySnapshot::new(
        "PROD",
        vec![trunk("P1", false)],
        vec![branch("J1", &["P2", "P3"])],
        vec![WellRoutes {
            well: "W1".to_string(),
            routes: vec![],
        }],
        [],
    )
}
