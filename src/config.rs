// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the configuration options for topology extraction
//! and lineup application.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::EquipmentType;

/// Configuration options for [`extract_topology`][crate::extract_topology].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// The equipment types that are scanned as connections.
    pub two_port_types: Vec<EquipmentType>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            two_port_types: EquipmentType::default_two_port_types(),
        }
    }
}

/// What to do with trunks when applying a lineup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrunkPolicy {
    /// Unmask every trunk.
    #[default]
    ForceOpen,
    /// Put every trunk back into the mask state it had when the snapshot was
    /// taken.
    RestoreInitial,
}

/// Configuration options for applying lineups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineupConfig {
    /// The trunk policy.
    pub trunk_policy: TrunkPolicy,

    /// Trunks that are always masked, regardless of the trunk policy.
    pub locked_trunks: BTreeSet<String>,
}

impl LineupConfig {
    /// Creates a config with the given trunk policy and locked trunks.
    pub fn new(
        trunk_policy: TrunkPolicy,
        locked_trunks: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            trunk_policy,
            locked_trunks: locked_trunks.into_iter().map(Into::into).collect(),
        }
    }
}
