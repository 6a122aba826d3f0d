// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! A graph representation of the equipment of a production network, and the
//! two-port equipment connecting them.

mod classification;
mod creation;
pub mod iterators;
mod retrieval;
mod routes;

#[cfg(test)]
pub(crate) mod test_utils;

pub use classification::{BranchPoint, Classification};

use crate::{Edge, Node};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::HashMap;

/// Nodes in the `DiGraph` are addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any equipment uid,
/// so that nodes in the `DiGraph` can be retrieved from their uids.
pub(crate) type NodeIndexMap = HashMap<String, NodeIndex>;

/// `EdgeIndexMap` stores the `EdgeIndex` of every two-port equipment uid.
pub(crate) type EdgeIndexMap = HashMap<String, EdgeIndex>;

/// A directed graph of a production network, with flow going from the `EndA`
/// to the `EndB` of every two-port equipment item.
///
/// Node weights are equipment uids.  Nodes are not required to be present in
/// the catalog, in which case they have no type and no label.  Catalog
/// entries are kept separately, in the order they were given, because the
/// order of the wells decides the traversal order of all topology analyses.
pub struct NetworkGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: DiGraph<String, E>,
    node_indices: NodeIndexMap,
    edge_indices: EdgeIndexMap,
    catalog: Vec<N>,
    catalog_indices: HashMap<String, usize>,
}
