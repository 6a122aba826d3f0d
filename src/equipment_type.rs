// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `EquipmentType` enum, which represents the type of
//! an equipment item in a production network model.

use crate::graph_traits::Node;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Represents the type of an equipment item.
///
/// The solver reports equipment types as free-form strings.  Known types are
/// parsed into dedicated variants, anything else is kept in `Other`, so that
/// unknown types are visible instead of silently never matching.
///
/// Values are only ever built by parsing, and are always in canonical form.
/// Parsing the solver spelling of a value returns the same value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentType {
    Well,
    Sep,
    Pipe,
    InlChk,
    InlGen,
    Joint,
    Tank,
    Source,
    Sink,
    Other(OtherType),
}

/// The name of an equipment type without a dedicated [`EquipmentType`]
/// variant.  Always trimmed, upper case, non-empty, and never the name of a
/// known type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OtherType(String);

impl OtherType {
    /// Returns the type name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EquipmentType {
    /// The two-port equipment types that are scanned as edges by default.
    pub fn default_two_port_types() -> Vec<EquipmentType> {
        vec![EquipmentType::Pipe, EquipmentType::InlChk, EquipmentType::InlGen]
    }

    /// Returns the spelling used by the solver for this type.
    pub fn as_solver_str(&self) -> &str {
        match self {
            EquipmentType::Well => "WELL",
            EquipmentType::Sep => "SEP",
            EquipmentType::Pipe => "PIPE",
            EquipmentType::InlChk => "INLCHK",
            EquipmentType::InlGen => "INLGEN",
            EquipmentType::Joint => "JOINT",
            EquipmentType::Tank => "TANK",
            EquipmentType::Source => "SOURCE",
            EquipmentType::Sink => "SINK",
            EquipmentType::Other(name) => name.as_str(),
        }
    }

    /// Returns true for equipment with exactly two ends, which is represented
    /// as an edge in the network graph.
    pub fn is_two_port(&self) -> bool {
        matches!(
            self,
            EquipmentType::Pipe | EquipmentType::InlChk | EquipmentType::InlGen
        )
    }
}

impl From<&str> for EquipmentType {
    fn from(value: &str) -> Self {
        let value = value.trim().to_uppercase();
        match value.as_str() {
            "WELL" => EquipmentType::Well,
            "SEP" => EquipmentType::Sep,
            "PIPE" => EquipmentType::Pipe,
            "INLCHK" => EquipmentType::InlChk,
            "INLGEN" => EquipmentType::InlGen,
            "JOINT" => EquipmentType::Joint,
            "TANK" => EquipmentType::Tank,
            "SOURCE" => EquipmentType::Source,
            "SINK" => EquipmentType::Sink,
            "" => EquipmentType::Other(OtherType("UNKNOWN".to_string())),
            _ => EquipmentType::Other(OtherType(value)),
        }
    }
}

impl From<String> for EquipmentType {
    fn from(value: String) -> Self {
        EquipmentType::from(value.as_str())
    }
}

impl From<EquipmentType> for String {
    fn from(value: EquipmentType) -> Self {
        value.as_solver_str().to_string()
    }
}

impl Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_solver_str())
    }
}

/// Predicates for checking the equipment type of a `Node`.
pub(crate) trait TypePredicates: Node {
    fn is_well(&self) -> bool {
        self.equipment_type() == EquipmentType::Well
    }

    fn is_separator(&self) -> bool {
        self.equipment_type() == EquipmentType::Sep
    }
}

/// Implement the `TypePredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> TypePredicates for T {}
