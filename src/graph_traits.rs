// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module contains the traits that need to be implemented by the types
//! that represent a catalogued equipment item and a two-port connection.

use crate::equipment_type::EquipmentType;

/**
This trait needs to be implemented by the type that represents an entry of the
equipment catalog.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a row read from a reporting database:</summary>

```ignore
impl production_network_graph::Node for db::EquipmentRow {
    fn uid(&self) -> &str {
        &self.unique_id
    }

    fn equipment_type(&self) -> production_network_graph::EquipmentType {
        production_network_graph::EquipmentType::from(self.kind.as_str())
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.unique_id)
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the unique id of the equipment.
    fn uid(&self) -> &str;
    /// Returns the type of the equipment.
    fn equipment_type(&self) -> EquipmentType;
    /// Returns the user-facing label of the equipment.
    fn label(&self) -> &str;
}

/**
This trait needs to be implemented by the type that represents a two-port
equipment item, i.e. a connection between two nodes.

Flow is assumed to go from `end_a` to `end_b`.

<details>
<summary>Example implementation:</summary>

```ignore
impl production_network_graph::Edge for db::PipeRow {
    fn uid(&self) -> &str {
        &self.unique_id
    }

    fn end_a(&self) -> &str {
        &self.end_a_uid
    }

    fn end_b(&self) -> &str {
        &self.end_b_uid
    }

    fn equipment_type(&self) -> production_network_graph::EquipmentType {
        production_network_graph::EquipmentType::Pipe
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the unique id of the connecting equipment.
    fn uid(&self) -> &str;
    /// Returns the unique id of the upstream end.
    fn end_a(&self) -> &str;
    /// Returns the unique id of the downstream end.
    fn end_b(&self) -> &str;
    /// Returns the type of the connecting equipment.
    fn equipment_type(&self) -> EquipmentType;
}
