// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Iterators over equipment and connections in a `NetworkGraph`.

use petgraph::graph::{DiGraph, EdgeIndex};

use crate::equipment_type::TypePredicates;
use crate::{Edge, Node};

/// An iterator over the catalog entries of a `NetworkGraph`, in catalog
/// order.
pub struct Catalog<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, N>,
}

impl<'a, N> Iterator for Catalog<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// An iterator over the wells of a `NetworkGraph`, in catalog order.
pub struct Wells<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, N>,
}

impl<'a, N> Iterator for Wells<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.by_ref().find(|n| n.is_well())
    }
}

/// An iterator over the connections in a `NetworkGraph`, in insertion order.
pub struct Connections<'a, E>
where
    E: Edge,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<E>>,
}

impl<'a, E> Iterator for Connections<'a, E>
where
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| &e.weight)
    }
}

/// An iterator over the outgoing connections of a node in a `NetworkGraph`.
///
/// `petgraph` lists the edges of a node most-recent first.  This iterator
/// restores insertion order, which is the order in which branch candidates
/// are discovered.
pub struct Outgoing<'a, E>
where
    E: Edge,
{
    pub(crate) graph: &'a DiGraph<String, E>,
    pub(crate) iter: std::iter::Rev<std::vec::IntoIter<EdgeIndex>>,
}

impl<'a, E> Outgoing<'a, E>
where
    E: Edge,
{
    pub(crate) fn new(graph: &'a DiGraph<String, E>, edges: Vec<EdgeIndex>) -> Self {
        Outgoing {
            graph,
            iter: edges.into_iter().rev(),
        }
    }
}

impl<'a, E> Iterator for Outgoing<'a, E>
where
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<E> DoubleEndedIterator for Outgoing<'_, E>
where
    E: Edge,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|i| &self.graph[i])
    }
}

impl<E> ExactSizeIterator for Outgoing<'_, E> where E: Edge {}
