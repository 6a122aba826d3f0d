// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module is only compiled when running unit tests and contains features
//! that are shared by the tests of the crate.
//!
//! - the `TestEquipment` and `TestLink` types, which implement the `Node`
//!   and `Edge` traits respectively.
//! - the `NetworkGraphBuilder`, which can declaratively build production
//!   network configurations for use in tests.

use crate::{Edge, EquipmentType, Error, NetworkGraph, Node};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEquipment(String, EquipmentType, String);

impl TestEquipment {
    pub(crate) fn new(uid: &str, equipment_type: EquipmentType) -> Self {
        TestEquipment(uid.to_string(), equipment_type, format!("{uid}-label"))
    }
}

impl Node for TestEquipment {
    fn uid(&self) -> &str {
        &self.0
    }

    fn equipment_type(&self) -> EquipmentType {
        self.1.clone()
    }

    fn label(&self) -> &str {
        &self.2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestLink(String, String, String);

impl TestLink {
    pub(crate) fn new(uid: &str, end_a: &str, end_b: &str) -> Self {
        TestLink(uid.to_string(), end_a.to_string(), end_b.to_string())
    }
}

impl Edge for TestLink {
    fn uid(&self) -> &str {
        &self.0
    }

    fn end_a(&self) -> &str {
        &self.1
    }

    fn end_b(&self) -> &str {
        &self.2
    }

    fn equipment_type(&self) -> EquipmentType {
        EquipmentType::Pipe
    }
}

/// Represents a node added to the `NetworkGraphBuilder`.
#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub(crate) struct NodeHandle(String);

impl NodeHandle {
    /// Returns the uid of the node.
    pub(crate) fn uid(&self) -> &str {
        &self.0
    }
}

/// A builder for creating production network configurations easily, for
/// use in tests.
///
/// Nodes are named after their type and a running counter (`WELL0`,
/// `JOINT1`, ...), pipes are named `P0`, `P1`, ... in the order they are
/// connected.
pub(crate) struct NetworkGraphBuilder {
    catalog: Vec<TestEquipment>,
    links: Vec<TestLink>,
    next_node: usize,
    next_link: usize,
}

impl NetworkGraphBuilder {
    /// Creates a new `NetworkGraphBuilder`.
    pub(crate) fn new() -> Self {
        NetworkGraphBuilder {
            catalog: Vec::new(),
            links: Vec::new(),
            next_node: 0,
            next_link: 0,
        }
    }

    /// Adds a catalogued node to the graph and returns its handle.
    pub(crate) fn add_node(&mut self, equipment_type: EquipmentType) -> NodeHandle {
        let uid = format!("{}{}", equipment_type, self.next_node);
        self.next_node += 1;
        self.catalog
            .push(TestEquipment::new(&uid, equipment_type));
        NodeHandle(uid)
    }

    /// Adds a well to the graph and returns its handle.
    pub(crate) fn well(&mut self) -> NodeHandle {
        self.add_node(EquipmentType::Well)
    }

    /// Adds a joint to the graph and returns its handle.
    pub(crate) fn joint(&mut self) -> NodeHandle {
        self.add_node(EquipmentType::Joint)
    }

    /// Adds a separator to the graph and returns its handle.
    pub(crate) fn separator(&mut self) -> NodeHandle {
        self.add_node(EquipmentType::Sep)
    }

    /// Connects two nodes with a new pipe, and returns the pipe's uid.
    pub(crate) fn connect(&mut self, from: &NodeHandle, to: &NodeHandle) -> String {
        let uid = format!("P{}", self.next_link);
        self.next_link += 1;
        self.links.push(TestLink::new(&uid, from.uid(), to.uid()));
        uid
    }

    /// Adds a chain of joints after `from`, connected by pipes, and returns a
    /// handle to the last joint.
    pub(crate) fn joint_chain(&mut self, from: &NodeHandle, num_joints: usize) -> NodeHandle {
        let mut last = from.clone();
        for _ in 0..num_joints {
            let joint = self.joint();
            self.connect(&last, &joint);
            last = joint;
        }
        last
    }

    /// Builds and returns the network graph from the nodes and links added
    /// to the builder.
    pub(crate) fn build(&self) -> Result<NetworkGraph<TestEquipment, TestLink>, Error> {
        NetworkGraph::try_new(self.catalog.clone(), self.links.clone())
    }
}
