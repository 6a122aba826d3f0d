// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The seam to the external network solver: the command/value protocol, and
//! the formatting of the tags and commands addressed to it.

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{EquipmentType, Error};

/**
A session with the external network solver.

Every call blocks until the solver responds.  Implementations return an
[`Error`] of kind [`Solver`][crate::ErrorKind::Solver] when the solver reports
a non-zero error code, with the offending command or tag in the description.

A session holds process-wide model state, which is why everything in this
crate takes it as `&mut`: a lineup search needs exclusive use of the session
from extraction until the search is done.

<details>
<summary>Example implementation wrapping a transport:</summary>

```ignore
impl production_network_graph::SolverOracle for OpenServer {
    fn execute(&mut self, command: &str) -> Result<(), Error> {
        let code = self.do_command(command);
        if code > 0 {
            return Err(Error::solver(format!(
                "DoCmd: {command} - {}",
                self.error_description(code)
            )));
        }
        Ok(())
    }

    fn get_value(&mut self, tag: &str) -> Result<String, Error> {
        let value = self.value(tag);
        match self.last_error(tag) {
            0 => Ok(value),
            code => Err(Error::solver(format!(
                "DoGet: {tag} - {}",
                self.error_description(code)
            ))),
        }
    }
}
```

</details>
*/
pub trait SolverOracle {
    /// Executes a command.
    fn execute(&mut self, command: &str) -> Result<(), Error>;
    /// Reads the value of a tag.
    fn get_value(&mut self, tag: &str) -> Result<String, Error>;
}

/// Formats an identifier as a solver selector.
///
/// Numeric indices and uids (`ID` followed by hex digits) are used verbatim,
/// anything else is treated as a label and wrapped in braces.
pub(crate) fn selector(id: &str) -> String {
    let is_index = !id.is_empty() && id.chars().all(|c| c.is_ascii_digit());
    let is_uid = id
        .strip_prefix("ID")
        .is_some_and(|hex| !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if is_index || is_uid {
        id.to_string()
    } else {
        format!("{{{id}}}")
    }
}

/// Builds the tags and commands for one solver model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Addressing {
    model: String,
}

impl Default for Addressing {
    fn default() -> Self {
        Self::new("PROD")
    }
}

impl Addressing {
    /// Creates an addressing scheme for the model with the given label,
    /// index or uid.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn prefix(&self) -> String {
        format!("GAP.MOD[{}]", selector(&self.model))
    }

    /// The number of catalogued equipment items.
    pub fn equipment_count(&self) -> String {
        format!("{}.EQUIP.COUNT", self.prefix())
    }

    /// A field (`UniqueID`, `Type`, `Label`) of the catalog entry at `index`.
    pub fn equipment_field(&self, index: usize, field: &str) -> String {
        format!("{}.EQUIP[{index}].{field}", self.prefix())
    }

    /// The number of equipment items of the given type.
    pub fn type_count(&self, equipment_type: &EquipmentType) -> String {
        format!("{}.{equipment_type}.COUNT", self.prefix())
    }

    /// A field of the item at `index` among the items of the given type.
    pub fn type_field(&self, equipment_type: &EquipmentType, index: usize, field: &str) -> String {
        format!("{}.{equipment_type}[{index}].{field}", self.prefix())
    }

    /// Whether the equipment item is masked.
    pub fn is_masked(&self, uid: &str) -> String {
        format!("{}.EQUIP[{}].ISMASKED", self.prefix(), selector(uid))
    }

    /// The command masking the equipment item.
    pub fn mask(&self, uid: &str) -> String {
        format!("{}.EQUIP[{}].MASK()", self.prefix(), selector(uid))
    }

    /// The command unmasking the equipment item.
    pub fn unmask(&self, uid: &str) -> String {
        format!("{}.EQUIP[{}].UNMASK()", self.prefix(), selector(uid))
    }

    /// The command solving the whole network.
    pub fn solve_network(&self) -> String {
        "GAP.SOLVENETWORK()".to_string()
    }

    /// The number of separators.
    pub fn separator_count(&self) -> String {
        self.type_count(&EquipmentType::Sep)
    }

    /// The solved oil rate of the separator at `index`.
    pub fn separator_oil_rate(&self, index: usize) -> String {
        self.type_field(&EquipmentType::Sep, index, "SolverResults[0].OilRate")
    }
}
