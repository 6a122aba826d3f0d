// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The immutable topology snapshot that an optimization run works on, and its
//! serialized form.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::Equipment;
use crate::{Edge, EquipmentType, Error, NetworkGraph, Node};

/// Version of the serialized snapshot layout written by [`save_topology`].
pub const SCHEMA_VERSION: u32 = 1;

/// A connection on a no-choice path from a well.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trunk {
    pub uid: String,
    pub equipment_type: EquipmentType,
    pub label: String,
    /// Whether the trunk was masked in the solver when the snapshot was
    /// taken.
    pub initial_masked: bool,
}

/// A branch point and its mutually exclusive candidate connections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub point: String,
    pub candidates: Vec<Equipment>,
}

impl Branch {
    /// Returns true if `uid` is one of the candidates of this branch point.
    pub fn has_candidate(&self, uid: &str) -> bool {
        self.candidates.iter().any(|c| c.uid == uid)
    }
}

/// All routes from a well to the separators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellRoutes {
    pub well: String,
    pub routes: Vec<Vec<String>>,
}

/// Trunks, branches and routes of a production network, as seen at the
/// start of an optimization run.
///
/// Snapshots are never refreshed.  Only mask states change during a run,
/// structural changes to the model require a new snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    model: String,
    trunks: Vec<Trunk>,
    branches: Vec<Branch>,
    routes: Vec<WellRoutes>,
    /// Type and label of every catalogued node that is part of a route.
    equipment: BTreeMap<String, Equipment>,
}

impl TopologySnapshot {
    /// Creates a snapshot from its parts.
    pub fn new(
        model: impl Into<String>,
        trunks: Vec<Trunk>,
        branches: Vec<Branch>,
        routes: Vec<WellRoutes>,
        equipment: impl IntoIterator<Item = Equipment>,
    ) -> Self {
        Self {
            model: model.into(),
            trunks,
            branches,
            routes,
            equipment: equipment
                .into_iter()
                .map(|e| (e.uid.clone(), e))
                .collect(),
        }
    }

    /// Builds a snapshot by classifying the given graph and enumerating its
    /// routes.
    ///
    /// `is_masked` is called once for every trunk, to record its mask state
    /// at extraction time.
    pub fn from_graph<N, E>(
        graph: &NetworkGraph<N, E>,
        model: impl Into<String>,
        mut is_masked: impl FnMut(&str) -> Result<bool, Error>,
    ) -> Result<Self, Error>
    where
        N: Node,
        E: Edge,
    {
        let classification = graph.classify()?;

        let mut trunks = vec![];
        for uid in classification.trunks {
            let connection = graph.connection(&uid)?;
            trunks.push(Trunk {
                equipment_type: connection.equipment_type(),
                label: graph.label(&uid).to_string(),
                initial_masked: is_masked(&uid)?,
                uid,
            });
        }

        let mut branches = vec![];
        for branch_point in classification.branch_points {
            let mut candidates = vec![];
            for uid in &branch_point.candidates {
                let connection = graph.connection(uid)?;
                candidates.push(Equipment::new(
                    uid.clone(),
                    connection.equipment_type(),
                    graph.label(uid),
                ));
            }
            branches.push(Branch {
                point: branch_point.node,
                candidates,
            });
        }

        let routes = graph.routes()?;
        let equipment = routes
            .iter()
            .flat_map(|r| r.routes.iter().flatten())
            .filter_map(|uid| graph.equipment(uid))
            .map(|n| Equipment::new(n.uid(), n.equipment_type(), n.label()))
            .collect::<Vec<_>>();

        Ok(Self::new(model, trunks, branches, routes, equipment))
    }

    /// Returns the name of the solver model the snapshot was taken from.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the trunks, in classification order.
    pub fn trunks(&self) -> &[Trunk] {
        &self.trunks
    }

    /// Returns the branch points, in classification order.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Returns the branch with the given branch point uid.
    pub fn branch(&self, point: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.point == point)
    }

    /// Returns the routes of every well, in catalog order.
    pub fn routes(&self) -> &[WellRoutes] {
        &self.routes
    }

    /// Returns the routes of the given well, or `None` if it is not a well
    /// of this snapshot.
    pub fn routes_for(&self, well: &str) -> Option<&[Vec<String>]> {
        self.routes
            .iter()
            .find(|r| r.well == well)
            .map(|r| r.routes.as_slice())
    }

    /// Returns the routes of the given well with every uid resolved to its
    /// type and label.
    ///
    /// Uids that are neither catalogued nor a known connection are reported
    /// with an `UNKNOWN` type and the uid as label.
    pub fn named_routes(&self, well: &str) -> Vec<Vec<Equipment>> {
        let connections = self
            .trunks
            .iter()
            .map(|t| Equipment::new(t.uid.clone(), t.equipment_type.clone(), t.label.clone()))
            .chain(self.branches.iter().flat_map(|b| b.candidates.iter().cloned()))
            .map(|e| (e.uid.clone(), e))
            .collect::<HashMap<_, _>>();

        self.routes_for(well)
            .unwrap_or_default()
            .iter()
            .map(|route| {
                route
                    .iter()
                    .map(|uid| {
                        self.equipment
                            .get(uid)
                            .or_else(|| connections.get(uid))
                            .cloned()
                            .unwrap_or_else(|| {
                                Equipment::new(uid.clone(), EquipmentType::from(""), uid.clone())
                            })
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Serialize)]
struct SnapshotDocumentRef<'a> {
    schema_version: u32,
    #[serde(flatten)]
    topology: &'a TopologySnapshot,
}

/// Serializes a snapshot to pretty-printed JSON, tagged with the current
/// [`SCHEMA_VERSION`].
pub fn save_topology(snapshot: &TopologySnapshot) -> Result<String, Error> {
    serde_json::to_string_pretty(&SnapshotDocumentRef {
        schema_version: SCHEMA_VERSION,
        topology: snapshot,
    })
    .map_err(|e| Error::internal(format!("Failed to serialize topology: {e}")))
}

/// Loads a snapshot previously written by [`save_topology`].
///
/// Fails if the data is not valid JSON, has no or a different schema
/// version, or does not describe a snapshot.
pub fn load_topology(bytes: &[u8]) -> Result<TopologySnapshot, Error> {
    let mut document: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::invalid_snapshot(format!("Malformed topology document: {e}")))?;

    let version = document
        .as_object_mut()
        .and_then(|o| o.remove("schema_version"))
        .and_then(|v| v.as_u64());
    match version {
        Some(v) if v == u64::from(SCHEMA_VERSION) => {}
        Some(v) => {
            return Err(Error::invalid_snapshot(format!(
                "Unsupported topology schema version {v}, expected {SCHEMA_VERSION}."
            )))
        }
        None => {
            return Err(Error::invalid_snapshot(
                "Topology document has no schema version.",
            ))
        }
    }

    serde_json::from_value(document)
        .map_err(|e| Error::invalid_snapshot(format!("Invalid topology document: {e}")))
}
