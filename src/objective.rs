// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! The objective of a lineup search: total oil rate over all separators.

use crate::{Addressing, Error, SolverOracle};

/// Solves the network and returns the sum of the solved oil rates of all
/// separators.
///
/// A failing solve, or an unreadable separator count, is an error.  A
/// separator whose oil rate can't be read, or isn't a finite number,
/// contributes `0.0`.
pub fn evaluate<S: SolverOracle>(solver: &mut S, addressing: &Addressing) -> Result<f64, Error> {
    solver.execute(&addressing.solve_network())?;

    let count_tag = addressing.separator_count();
    let count = solver.get_value(&count_tag)?;
    let count = count.trim().parse::<usize>().map_err(|_| {
        Error::solver(format!("DoGet: {count_tag} - not a separator count: {count:?}"))
    })?;

    let mut total = 0.0;
    for index in 0..count {
        let tag = addressing.separator_oil_rate(index);
        match solver.get_value(&tag) {
            Ok(value) => match value.trim().parse::<f64>() {
                Ok(rate) if rate.is_finite() => total += rate,
                _ => tracing::warn!("Separator {index} oil rate {value:?} counted as 0.0"),
            },
            Err(err) => tracing::warn!("Separator {index} oil rate counted as 0.0: {err}"),
        }
    }

    Ok(total)
}
