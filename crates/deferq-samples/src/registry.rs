//! Name → sample table.

use deferq_core::config::QueryConfig;
use deferq_data::Formula1;
use tracing::debug;

use crate::error::{Result, SampleError};
use crate::{conversion, filtering, generation, grouping, paging, sets};

pub type SampleFn = fn(&Formula1, &QueryConfig) -> Result<Vec<String>>;

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub run: SampleFn,
}

/// Explicit sample table, in listing order.
#[derive(Debug, Clone)]
pub struct Registry {
    samples: Vec<Sample>,
}

const BUILTIN: &[(&str, &str, SampleFn)] = &[
    ("filter", "champions from Brazil or Austria with more than 15 wins", filtering::filter),
    ("filter-index", "last name starting with A at an odd position", filtering::filter_index),
    ("filter-type", "strings out of a mixed collection", filtering::filter_type),
    ("compound", "Ferrari champions by last name", filtering::compound),
    ("group", "countries with several champions", grouping::group),
    ("group-nested", "countries with several champions and their names", grouping::group_nested),
    ("aggregate-count", "champions with several titles", grouping::aggregate_count),
    ("aggregate-sum", "countries with the most wins", grouping::aggregate_sum),
    ("partition", "champion names, one page at a time", paging::partition),
    ("set", "champions with both Ferrari and McLaren", sets::set),
    ("except", "podium finishers who never became champion", sets::except),
    ("zip", "Italian champions with their starts", sets::zip),
    ("to-list", "champions with more than 200 starts", conversion::to_list),
    ("to-lookup", "Williams champions through a car lookup", conversion::to_lookup),
    ("cast", "USA champions out of an untyped list", conversion::cast),
    ("range", "the numbers 1 to 20", generation::range),
    ("deferred", "one query evaluated against two captured values", generation::deferred),
];

impl Registry {
    pub fn builtin() -> Self {
        Self {
            samples: BUILTIN
                .iter()
                .map(|&(name, description, run)| Sample {
                    name,
                    description,
                    run,
                })
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Sample> {
        self.samples
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SampleError::UnknownSample(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.samples.iter().map(|s| s.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Validate `cfg`, then run the named sample.
    pub fn run(&self, name: &str, f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
        let sample = self.get(name)?;
        cfg.validate()?;
        debug!(sample = sample.name, ?cfg, "running sample");
        let lines = (sample.run)(f1, cfg)?;
        debug!(sample = sample.name, lines = lines.len(), "sample finished");
        Ok(lines)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let registry = Registry::builtin();
        let names: HashSet<_> = registry.names().collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn unknown_sample_is_an_error() {
        let registry = Registry::builtin();
        let err = registry.get("nope").unwrap_err();
        assert!(matches!(err, SampleError::UnknownSample(ref n) if n == "nope"));
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let f1 = Formula1::shared().unwrap();
        let cfg = QueryConfig {
            page_size: 0,
            ..QueryConfig::default()
        };
        let err = Registry::builtin().run("partition", f1, &cfg).unwrap_err();
        assert!(matches!(err, SampleError::Query(deferq_core::Error::Config(_))));
    }

    #[test]
    fn every_sample_runs_on_the_embedded_dataset() {
        let f1 = Formula1::shared().unwrap();
        let cfg = QueryConfig::default();
        let registry = Registry::builtin();
        for sample in registry.iter() {
            let lines = registry.run(sample.name, f1, &cfg).unwrap();
            assert!(!lines.is_empty(), "{} produced no output", sample.name);
        }
    }
}
