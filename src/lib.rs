// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Production Network Graph

This is a library for extracting the topology of a petroleum production
network from an external network solver, and for searching the valve lineup
that maximizes the total oil rate at the separators.

Wells, joints and separators are the nodes of the network.  Pipes, inline
chokes and other two-port equipment are its edges, with flow going from their
`EndA` to their `EndB`.

## The `Node` and `Edge` traits

The main graph struct is [`NetworkGraph`], instances of which can be created
by passing an iterator of catalog entries and the connections between them to
the [`try_new`][NetworkGraph::try_new] method.

The graph doesn't depend on the concrete equipment types, and instead uses
traits to interact with them.  Any catalog entry type must implement the
[`Node`] trait, and any connection type the [`Edge`] trait.  [`Equipment`] and
[`Link`] are the implementations used when reading from a solver.

## Topology analysis

- [`classify`][NetworkGraph::classify] walks downstream from every well, and
  splits the connections into trunks, the only way out of a node, and the
  candidates of branch points, nodes with more than one way out.
- [`routes`][NetworkGraph::routes] lists every simple path from a well to
  the first separator it reaches.

Both are collected into an immutable [`TopologySnapshot`], either from a graph
with [`TopologySnapshot::from_graph`], or directly from the solver with
[`extract_topology`].  Snapshots can be persisted with [`save_topology`] and
[`load_topology`].

## Lineups

A [`Lineup`] picks one candidate at some of the branch points.
[`apply_lineup`] turns it into mask and unmask commands, and [`evaluate`]
solves the network and returns the total separator oil rate.

The [`Optimizer`] searches for the best lineup, either exhaustively or
greedily, see [`Strategy`].

## The solver

Everything that talks to the solver goes through the [`SolverOracle`] trait,
with tags and commands built by [`Addressing`].
*/

mod catalog;
pub use catalog::{Equipment, Link};

mod config;
pub use config::{ExtractionConfig, LineupConfig, TrunkPolicy};

mod equipment_type;
pub use equipment_type::{EquipmentType, OtherType};

mod error;
pub use error::{Error, ErrorKind};

mod extraction;
pub use extraction::extract_topology;

mod graph;
pub use graph::{iterators, BranchPoint, Classification, NetworkGraph};

mod graph_traits;
pub use graph_traits::{Edge, Node};

mod lineup;
pub use lineup::{apply_lineup, validate_lineup, Lineup};

mod objective;
pub use objective::evaluate;

mod optimizer;
pub use optimizer::{OptimizationResult, Optimizer, Strategy};

mod snapshot;
pub use snapshot::{
    load_topology, save_topology, Branch, TopologySnapshot, Trunk, WellRoutes, SCHEMA_VERSION,
};

mod solver;
pub use solver::{Addressing, SolverOracle};
