// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! Reading the equipment catalog and connections of a model from the solver,
//! and turning them into a [`TopologySnapshot`].

use crate::catalog::{Equipment, Link};
use crate::{
    Addressing, EquipmentType, Error, ErrorKind, ExtractionConfig, NetworkGraph, SolverOracle,
    TopologySnapshot,
};

/// Extracts the topology of the model addressed by `addressing`.
///
/// Catalog entries without a uid, and connections with a missing uid or
/// end, are skipped.  Any solver error aborts the extraction, as does a
/// count that is not an integer.  The mask state of every trunk is read
/// once, and stored in the snapshot.
pub fn extract_topology<S: SolverOracle>(
    solver: &mut S,
    addressing: &Addressing,
    config: &ExtractionConfig,
) -> Result<TopologySnapshot, Error> {
    let catalog = read_catalog(solver, addressing)?;

    let mut links = vec![];
    for equipment_type in &config.two_port_types {
        links.extend(read_links(solver, addressing, equipment_type)?);
    }

    tracing::info!(
        "Read {} catalog entries and {} connections from model {}.",
        catalog.len(),
        links.len(),
        addressing.model()
    );

    let graph = NetworkGraph::try_new(catalog, links).map_err(|err| match err.kind() {
        ErrorKind::InvalidGraph | ErrorKind::InvalidConnection => {
            Error::graph_extraction(err.description())
        }
        _ => err,
    })?;

    let snapshot = TopologySnapshot::from_graph(&graph, addressing.model(), |uid| {
        let tag = addressing.is_masked(uid);
        let value = solver.get_value(&tag)?;
        Ok(read_int(&tag, &value)?.is_some_and(|v| v != 0))
    })?;

    tracing::info!(
        "Extracted {} trunks, {} branch points and routes for {} wells.",
        snapshot.trunks().len(),
        snapshot.branches().len(),
        snapshot.routes().len()
    );

    Ok(snapshot)
}

fn read_catalog<S: SolverOracle>(
    solver: &mut S,
    addressing: &Addressing,
) -> Result<Vec<Equipment>, Error> {
    let count = read_count(solver, &addressing.equipment_count())?;

    let mut catalog = Vec::with_capacity(count);
    for index in 0..count {
        let uid = solver.get_value(&addressing.equipment_field(index, "UniqueID"))?;
        let uid = uid.trim();
        if uid.is_empty() {
            tracing::warn!("Skipping catalog entry {index} without a uid.");
            continue;
        }
        let equipment_type = solver.get_value(&addressing.equipment_field(index, "Type"))?;
        let label = solver.get_value(&addressing.equipment_field(index, "Label"))?;
        catalog.push(Equipment::new(
            uid,
            EquipmentType::from(equipment_type.as_str()),
            label.trim(),
        ));
    }

    Ok(catalog)
}

fn read_links<S: SolverOracle>(
    solver: &mut S,
    addressing: &Addressing,
    equipment_type: &EquipmentType,
) -> Result<Vec<Link>, Error> {
    let count = read_count(solver, &addressing.type_count(equipment_type))?;

    let mut links = Vec::with_capacity(count);
    for index in 0..count {
        let mut field = |name: &str| -> Result<String, Error> {
            let value = solver.get_value(&addressing.type_field(equipment_type, index, name))?;
            Ok(value.trim().to_string())
        };
        let uid = field("UniqueID")?;
        let end_a = field("EndA.UniqueID")?;
        let end_b = field("EndB.UniqueID")?;

        if uid.is_empty() || end_a.is_empty() || end_b.is_empty() {
            tracing::warn!(
                "Skipping {equipment_type}[{index}] with missing fields: uid {uid:?}, \
                 ends ({end_a:?}, {end_b:?})"
            );
            continue;
        }
        links.push(Link::new(uid, end_a, end_b, equipment_type.clone()));
    }

    Ok(links)
}

/// Reads a count.  An empty value counts as zero.
fn read_count<S: SolverOracle>(solver: &mut S, tag: &str) -> Result<usize, Error> {
    let value = solver.get_value(tag)?;
    match read_int(tag, &value)? {
        None => Ok(0),
        Some(count) => usize::try_from(count)
            .map_err(|_| Error::graph_extraction(format!("{tag} is negative: {count}"))),
    }
}

fn read_int(tag: &str, value: &str) -> Result<Option<i64>, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| Error::graph_extraction(format!("{tag} is not an integer: {value:?}")))
}
