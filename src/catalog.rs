// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Concrete equipment and connection types, as read from the solver's
//! equipment catalog.

use serde::{Deserialize, Serialize};

use crate::{Edge, EquipmentType, Node};

/// An entry of the equipment catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub uid: String,
    pub equipment_type: EquipmentType,
    pub label: String,
}

impl Equipment {
    /// Creates a new catalog entry.  An empty label falls back to the uid.
    pub fn new(
        uid: impl Into<String>,
        equipment_type: EquipmentType,
        label: impl Into<String>,
    ) -> Self {
        let uid = uid.into();
        let mut label = label.into();
        if label.is_empty() {
            label = uid.clone();
        }
        Self {
            uid,
            equipment_type,
            label,
        }
    }
}

impl Node for Equipment {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn equipment_type(&self) -> EquipmentType {
        self.equipment_type.clone()
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// A two-port equipment item, connecting `end_a` to `end_b`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub uid: String,
    pub end_a: String,
    pub end_b: String,
    pub equipment_type: EquipmentType,
}

impl Link {
    pub fn new(
        uid: impl Into<String>,
        end_a: impl Into<String>,
        end_b: impl Into<String>,
        equipment_type: EquipmentType,
    ) -> Self {
        Self {
            uid: uid.into(),
            end_a: end_a.into(),
            end_b: end_b.into(),
            equipment_type,
        }
    }
}

impl Edge for Link {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn end_a(&self) -> &str {
        &self.end_a
    }

    fn end_b(&self) -> &str {
        &self.end_b
    }

    fn equipment_type(&self) -> EquipmentType {
        self.equipment_type.clone()
    }
}
