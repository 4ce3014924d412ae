//! Filtering and compound-from samples.

use deferq_core::config::QueryConfig;
use deferq_data::{Entry, Formula1};
use deferq_operators::{from_vec, Sequence};

use crate::error::Result;

pub fn filter(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let racers = f1
        .champions()
        .filter(|r| r.wins > 15 && (r.country == "Brazil" || r.country == "Austria"));
    Ok(racers.iterate().map(|r| r.describe()).collect())
}

pub fn filter_index(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let racers = f1
        .champions()
        .filter_indexed(|r, index| r.last_name.starts_with('A') && index % 2 != 0);
    Ok(racers.iterate().map(|r| r.describe()).collect())
}

pub fn filter_type(_f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let data = from_vec(vec![
        Entry::from("one"),
        Entry::from(2i64),
        Entry::from(3i64),
        Entry::from("four"),
        Entry::from("five"),
        Entry::from(6i64),
    ]);
    Ok(data.of_type::<String>().to_vec())
}

/// Champions who drove a Ferrari, by last name.
pub fn compound(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let drivers = f1
        .champions()
        .flatten(|r| r.cars.clone(), |r, car| (r.clone(), car))
        .filter(|(_, car)| car == "Ferrari")
        .order_by(|(r, _)| r.last_name.clone())
        .project(|(r, _)| r.full_name());
    Ok(drivers.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(sample: fn(&Formula1, &QueryConfig) -> Result<Vec<String>>) -> Vec<String> {
        sample(Formula1::shared().unwrap(), &QueryConfig::default()).unwrap()
    }

    #[test]
    fn filter_keeps_brazil_and_austria_winners() {
        assert_eq!(
            run(filter),
            vec![
                "Niki Lauda, Austria; starts: 173, wins: 25",
                "Nelson Piquet, Brazil; starts: 204, wins: 23",
                "Ayrton Senna, Brazil; starts: 161, wins: 41",
            ]
        );
    }

    #[test]
    fn filter_index_uses_source_positions() {
        let lines = run(filter_index);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Alberto Ascari"));
        assert!(lines[1].starts_with("Fernando Alonso"));
    }

    #[test]
    fn filter_type_keeps_strings() {
        assert_eq!(run(filter_type), vec!["one", "four", "five"]);
    }

    #[test]
    fn compound_lists_ferrari_drivers_by_last_name() {
        let lines = run(compound);
        assert_eq!(lines.first().map(String::as_str), Some("Alberto Ascari"));
        assert!(lines.contains(&"Michael Schumacher".to_string()));
        let mut sorted = lines.clone();
        sorted.sort_by_key(|name| name.rsplit(' ').next().map(str::to_string));
        assert_eq!(lines, sorted);
    }
}
