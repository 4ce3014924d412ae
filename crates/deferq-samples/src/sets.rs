//! Set-operation and zip samples.

use std::sync::Arc;

use deferq_core::config::QueryConfig;
use deferq_data::{Formula1, Racer, RacerRef};
use deferq_operators::Sequence;

use crate::error::Result;

/// Champions who drove `car`, ordered by last name. Lazy and restartable.
pub fn racers_by_car<'f>(f1: &'f Formula1, car: &'f str) -> impl Sequence<Item = Arc<Racer>> + 'f {
    f1.champions()
        .flatten(|r| r.cars.clone(), |r, c| (r.clone(), c))
        .filter(move |(_, c)| c == car)
        .order_by(|(r, _)| r.last_name.clone())
        .project(|(r, _)| r)
}

pub fn set(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let both = racers_by_car(f1, "Ferrari").intersect(racers_by_car(f1, "McLaren"));
    let mut lines = vec!["World champions with Ferrari and McLaren".to_string()];
    lines.extend(both.iterate().map(|r| r.to_string()));
    Ok(lines)
}

/// Every podium finisher, in season order, one entry per placing.
pub fn podium_finishers(f1: &Formula1) -> impl Sequence<Item = RacerRef> + '_ {
    f1.championships()
        .flatten(|c| c.podium().map(RacerRef::clone), |_, finisher| finisher)
}

pub fn except(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let champions = f1.champions().project(|r| r.racer_ref());
    let never_champion = podium_finishers(f1).except(champions);
    Ok(never_champion.iterate().map(|r| r.to_string()).collect())
}

pub fn zip(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let italians = || {
        f1.champions()
            .filter(|r| r.country == "Italy")
            .order_by_descending(|r| r.wins)
    };
    let names = italians().project(|r| r.full_name());
    let starts = italians().project(|r| r.starts);
    let zipped = names.zip(starts, |name, starts| format!("{name}, starts: {starts}"));
    Ok(zipped.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f1() -> &'static Formula1 {
        Formula1::shared().unwrap()
    }

    #[test]
    fn ferrari_and_mclaren_champions() {
        let lines = set(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(lines[1..], ["Niki Lauda", "Kimi Räikkönen"]);
    }

    #[test]
    fn except_lists_each_non_champion_once() {
        let lines = except(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(lines.first().map(String::as_str), Some("Luigi Fagioli"));
        assert_eq!(lines.iter().filter(|l| *l == "Stirling Moss").count(), 1);
        assert!(!lines.contains(&"Ayrton Senna".to_string()));
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn zip_pairs_names_with_starts() {
        let lines = zip(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec!["Alberto Ascari, starts: 32", "Nino Farina, starts: 33"]
        );
    }
}
