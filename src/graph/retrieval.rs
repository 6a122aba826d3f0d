// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for retrieving equipment and connections from a [`NetworkGraph`].

use petgraph::visit::EdgeRef;

use crate::equipment_type::TypePredicates;
use crate::iterators::{Catalog, Connections, Outgoing, Wells};
use crate::{Edge, EquipmentType, Error, NetworkGraph, Node};

/// Equipment and connection retrieval.
impl<N, E> NetworkGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the catalog entry with the given `uid`, if it exists.
    pub fn equipment(&self, uid: &str) -> Option<&N> {
        self.catalog_indices.get(uid).map(|&i| &self.catalog[i])
    }

    /// Returns the type of the equipment with the given `uid`, if it is
    /// catalogued.
    pub fn equipment_type(&self, uid: &str) -> Option<EquipmentType> {
        self.equipment(uid).map(|n| n.equipment_type())
    }

    /// Returns the label of the equipment with the given `uid`, falling back
    /// to the uid itself when it is not catalogued.
    pub fn label<'a>(&'a self, uid: &'a str) -> &'a str {
        self.equipment(uid).map(|n| n.label()).unwrap_or(uid)
    }

    /// Returns true if the graph has a node with the given `uid`.
    pub fn has_node(&self, uid: &str) -> bool {
        self.node_indices.contains_key(uid)
    }

    /// Returns the connection with the given `uid`.
    pub fn connection(&self, uid: &str) -> Result<&E, Error> {
        self.edge_indices
            .get(uid)
            .map(|&i| &self.graph[i])
            .ok_or_else(|| {
                Error::equipment_not_found(format!("Connection with uid {} not found.", uid))
            })
    }

    /// Returns an iterator over the catalog entries.
    pub fn catalog(&self) -> Catalog<N> {
        Catalog {
            iter: self.catalog.iter(),
        }
    }

    /// Returns an iterator over the wells in the catalog.
    pub fn wells(&self) -> Wells<N> {
        Wells {
            iter: self.catalog.iter(),
        }
    }

    /// Returns an iterator over the connections in the graph.
    pub fn connections(&self) -> Connections<E> {
        Connections {
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the connections leaving the node with the
    /// given `uid`, in the order they were added to the graph.
    ///
    /// Returns an error if the given `uid` is not a node of the graph.
    pub fn outgoing(&self, uid: &str) -> Result<Outgoing<E>, Error> {
        self.node_indices
            .get(uid)
            .map(|&index| {
                let edges = self
                    .graph
                    .edges_directed(index, petgraph::Direction::Outgoing)
                    .map(|e| e.id())
                    .collect::<Vec<_>>();
                Outgoing::new(&self.graph, edges)
            })
            .ok_or_else(|| {
                Error::equipment_not_found(format!("Node with uid {} not found.", uid))
            })
    }

    pub(crate) fn is_separator(&self, uid: &str) -> bool {
        self.equipment(uid).is_some_and(|n| n.is_separator())
    }
}
