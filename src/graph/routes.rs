// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Enumeration of well to separator routes.

use std::collections::HashSet;

use crate::snapshot::WellRoutes;
use crate::{Edge, Error, NetworkGraph, Node};

/// A partially explored route, with the nodes already on it.
struct Frame {
    route: Vec<String>,
    on_route: HashSet<String>,
}

impl<N, E> NetworkGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns all routes from every well to a separator.
    ///
    /// Every well in the catalog gets an entry, in catalog order, even if it
    /// has no route to any separator.  Routes are alternating node and
    /// connection uids, starting at the well and ending at a separator.
    ///
    /// Unlike [`classify`][NetworkGraph::classify], the visited set is local
    /// to each route, so that the same trunk can show up in the routes of
    /// several wells.  A route ends at the first separator it reaches.
    pub fn routes(&self) -> Result<Vec<WellRoutes>, Error> {
        self.wells()
            .map(|well| {
                Ok(WellRoutes {
                    well: well.uid().to_string(),
                    routes: self.routes_from(well.uid())?,
                })
            })
            .collect()
    }

    fn routes_from(&self, well: &str) -> Result<Vec<Vec<String>>, Error> {
        let mut found = vec![];
        let mut stack = vec![Frame {
            route: vec![well.to_string()],
            on_route: HashSet::from([well.to_string()]),
        }];

        while let Some(frame) = stack.pop() {
            let Some(node) = frame.route.last() else {
                return Err(Error::internal("Empty route while enumerating routes."));
            };
            if self.is_separator(node) {
                found.push(frame.route);
                continue;
            }

            // Reversed, so that routes come out in depth-first order.
            for connection in self.outgoing(node)?.rev() {
                let next = connection.end_b();
                if frame.on_route.contains(next) {
                    continue;
                }
                let mut route = frame.route.clone();
                route.push(connection.uid().to_string());
                route.push(next.to_string());
                let mut on_route = frame.on_route.clone();
                on_route.insert(next.to_string());
                stack.push(Frame { route, on_route });
            }
        }

        Ok(found)
    }
}
