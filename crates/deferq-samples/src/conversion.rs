//! Eager conversion samples.

use std::sync::Arc;

use deferq_core::config::QueryConfig;
use deferq_data::{Formula1, Racer};
use deferq_operators::{from_vec, Sequence};

use crate::error::Result;

pub fn to_list(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let racers: Vec<Arc<Racer>> = f1
        .champions()
        .filter(|r| r.starts > 200)
        .order_by_descending(|r| r.starts)
        .to_vec();
    Ok(racers.iter().map(|r| format!("{} {}", r, r.starts)).collect())
}

pub fn to_lookup(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let by_car = f1
        .champions()
        .flatten(|r| r.cars.clone(), |r, car| (car, r.clone()))
        .to_lookup(|(car, _)| car.clone(), |(_, racer)| racer);
    if !by_car.contains("Williams") {
        return Ok(Vec::new());
    }
    Ok(by_car["Williams"].iter().map(|r| r.to_string()).collect())
}

/// Views an untyped champion list as racers before querying it.
pub fn cast(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let list = from_vec(f1.untyped_champions());
    let racers = list
        .cast::<Arc<Racer>>()
        .iterate()
        .collect::<deferq_core::Result<Vec<_>>>()?;
    let usa = from_vec(racers)
        .filter(|r| r.country == "USA")
        .order_by_descending(|r| r.wins)
        .project(|r| r.describe());
    Ok(usa.to_vec())
}
