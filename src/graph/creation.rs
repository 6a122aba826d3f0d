// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Methods for creating [`NetworkGraph`] instances from a given equipment
//! catalog and two-port connections.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use crate::{Edge, Error, Node};

use super::{EdgeIndexMap, NetworkGraph, NodeIndexMap};

/// `NetworkGraph` instantiation.
impl<N, E> NetworkGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`NetworkGraph`] from the given catalog entries and
    /// connections.
    ///
    /// Catalog entries are nodes, except for two-port equipment and entries
    /// whose uid is also the uid of a connection.  Connection ends that are
    /// not in the catalog are added as untyped nodes.  Returns an error if a catalog uid or a connection uid is
    /// duplicated, or if a connection has an empty end.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        catalog: NodeIterator,
        connections: EdgeIterator,
    ) -> Result<Self, Error> {
        let (catalog, catalog_indices) = Self::index_catalog(catalog)?;

        let mut ng = Self {
            graph: DiGraph::new(),
            node_indices: NodeIndexMap::new(),
            edge_indices: EdgeIndexMap::new(),
            catalog,
            catalog_indices,
        };

        let connections = connections.into_iter().collect::<Vec<_>>();
        let connection_uids = connections.iter().map(|c| c.uid()).collect::<HashSet<_>>();

        // Catalogued equipment gets its node first, so that wells without
        // any connection are still part of the graph.
        let uids = ng
            .catalog
            .iter()
            .filter(|n| {
                !n.equipment_type().is_two_port() && !connection_uids.contains(n.uid())
            })
            .map(|n| n.uid().to_string())
            .collect::<Vec<_>>();
        for uid in uids {
            ng.node_index_or_insert(&uid);
        }

        ng.add_connections(connections)?;

        tracing::debug!(
            "Created network graph with {} nodes and {} connections.",
            ng.graph.node_count(),
            ng.graph.edge_count()
        );

        Ok(ng)
    }

    fn index_catalog(
        catalog: impl IntoIterator<Item = N>,
    ) -> Result<(Vec<N>, HashMap<String, usize>), Error> {
        let mut entries = vec![];
        let mut indices = HashMap::new();

        for entry in catalog {
            let uid = entry.uid().to_string();
            if uid.is_empty() {
                return Err(Error::invalid_graph(format!(
                    "Catalog entry with label {:?} has no uid.",
                    entry.label()
                )));
            }
            if indices.contains_key(&uid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate equipment uid found: {uid}"
                )));
            }
            indices.insert(uid, entries.len());
            entries.push(entry);
        }

        Ok((entries, indices))
    }

    fn node_index_or_insert(&mut self, uid: &str) -> NodeIndex {
        if let Some(idx) = self.node_indices.get(uid) {
            return *idx;
        }
        let idx = self.graph.add_node(uid.to_string());
        self.node_indices.insert(uid.to_string(), idx);
        idx
    }

    fn add_connections(&mut self, connections: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for connection in connections {
            let uid = connection.uid().to_string();
            let end_a = connection.end_a().to_string();
            let end_b = connection.end_b().to_string();

            if end_a.is_empty() || end_b.is_empty() {
                return Err(Error::invalid_connection(format!(
                    "Connection:{uid} ({end_a}, {end_b}) has a missing end."
                )));
            }
            if self.edge_indices.contains_key(&uid) {
                return Err(Error::invalid_connection(format!(
                    "Duplicate connection uid found: {uid}"
                )));
            }

            let source_idx = self.node_index_or_insert(&end_a);
            let dest_idx = self.node_index_or_insert(&end_b);
            let edge_idx = self.graph.add_edge(source_idx, dest_idx, connection);
            self.edge_indices.insert(uid, edge_idx);
        }

        Ok(())
    }
}
