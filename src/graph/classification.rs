// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Classification of connections into trunks and branch candidates.

use std::collections::HashSet;

use crate::{Edge, Error, NetworkGraph, Node};

/// A node with more than one outgoing connection, and its candidate
/// connections in discovery order.
#[derive(Clone, Debug, PartialEq)]
pub struct BranchPoint {
    pub node: String,
    pub candidates: Vec<String>,
}

/// The result of classifying the connections reachable from the wells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Classification {
    /// Connections that are the only way out of their upstream node.
    pub trunks: Vec<String>,
    /// Branch points, in the order they were reached.
    pub branch_points: Vec<BranchPoint>,
}

impl<N, E> NetworkGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Classifies all connections reachable from the wells into trunks and
    /// branch candidates.
    ///
    /// The wells are traversed depth-first, in catalog order, with a single
    /// visited set shared across all wells.  A node with exactly one
    /// outgoing connection contributes a trunk.  A node with more than one
    /// becomes a branch point, and all its candidates are explored, so that
    /// the topology downstream of every choice gets classified.
    ///
    /// Every reachable connection is classified exactly once.  A trunk that
    /// is shared by several wells is reached from whichever well comes first.
    pub fn classify(&self) -> Result<Classification, Error> {
        let mut classification = Classification::default();
        let mut visited = HashSet::new();

        for well in self.wells() {
            self.classify_from(well.uid(), &mut visited, &mut classification)?;
        }

        tracing::debug!(
            "Classified {} trunks and {} branch points.",
            classification.trunks.len(),
            classification.branch_points.len()
        );

        Ok(classification)
    }

    fn classify_from(
        &self,
        start: &str,
        visited: &mut HashSet<String>,
        classification: &mut Classification,
    ) -> Result<(), Error> {
        let mut stack = vec![start.to_string()];

        while let Some(node) = stack.pop() {
            if !visited.insert(node.clone()) {
                continue;
            }

            let outgoing = self.outgoing(&node)?.collect::<Vec<_>>();
            match outgoing.as_slice() {
                [] => {}
                [trunk] => {
                    classification.trunks.push(trunk.uid().to_string());
                    stack.push(trunk.end_b().to_string());
                }
                candidates => {
                    classification.branch_points.push(BranchPoint {
                        node: node.clone(),
                        candidates: candidates.iter().map(|e| e.uid().to_string()).collect(),
                    });
                    // Reversed, so that candidates are explored in order.
                    stack.extend(candidates.iter().rev().map(|e| e.end_b().to_string()));
                }
            }
        }

        Ok(())
    }
}
