//! Grouping and aggregation samples.

use deferq_core::config::QueryConfig;
use deferq_data::Formula1;
use deferq_operators::Sequence;

use crate::count_arg;
use crate::error::Result;

/// `Country    N` for every country with at least `min_group_size` champions,
/// most champions first.
pub fn group(f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
    let min = cfg.min_group_size;
    let countries = f1
        .champions()
        .group_by(|r| r.country.clone())
        .order_by_descending(|g| g.len())
        .then_by(|g| g.key().clone())
        .filter(move |g| g.len() >= min)
        .project(|g| format!("{:<10} {}", g.key(), g.len()));
    Ok(countries.to_vec())
}

/// Like [`group`], followed by each country's champions ordered by last name.
pub fn group_nested(f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
    let min = cfg.min_group_size;
    let countries = f1
        .champions()
        .group_by(|r| r.country.clone())
        .order_by_descending(|g| g.len())
        .then_by(|g| g.key().clone())
        .filter(move |g| g.len() >= min)
        .project(|g| {
            let names = (&g)
                .order_by(|r| r.last_name.clone())
                .project(|r| r.full_name())
                .to_vec();
            [format!("{:<10} {}", g.key(), g.len()), names.join("; ")]
        });
    Ok(countries.iterate().flatten().collect())
}

pub fn aggregate_count(f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
    let min = cfg.min_titles;
    let racers = f1
        .champions()
        .filter(move |r| r.titles() >= min)
        .order_by_descending(|r| r.titles())
        .then_by(|r| r.last_name.clone())
        .project(|r| format!("{} {}", r, r.titles()));
    Ok(racers.to_vec())
}

/// Countries ranked by the summed wins of their champions.
pub fn aggregate_sum(f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
    let countries = f1
        .champions()
        .group_by(|r| r.country.clone())
        .project(|g| {
            let wins: u32 = g.sum(|r| r.wins);
            let (country, _) = g.into_parts();
            (country, wins)
        })
        .order_by_descending(|(_, wins)| *wins)
        .then_by(|(country, _)| country.clone())
        .take(count_arg(cfg.top_countries))
        .project(|(country, wins)| format!("{country} {wins}"));
    Ok(countries.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f1() -> &'static Formula1 {
        Formula1::shared().unwrap()
    }

    #[test]
    fn group_counts_countries() {
        let lines = group(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(lines[0], "UK         10");
        assert_eq!(lines[1], "Brazil     3");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn group_threshold_is_inclusive() {
        let cfg = QueryConfig {
            min_group_size: 3,
            ..QueryConfig::default()
        };
        let lines = group(f1(), &cfg).unwrap();
        assert_eq!(
            lines,
            vec!["UK         10", "Brazil     3", "Finland    3", "Germany    3"]
        );
    }

    #[test]
    fn group_nested_lists_names_under_each_country() {
        let lines = group_nested(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(lines[2], "Brazil     3");
        assert_eq!(lines[3], "Emerson Fittipaldi; Nelson Piquet; Ayrton Senna");
    }

    #[test]
    fn aggregate_count_orders_by_titles() {
        let lines = aggregate_count(f1(), &QueryConfig::default()).unwrap();
        assert_eq!(lines[0], "Michael Schumacher 7");
        assert_eq!(lines[1], "Juan Manuel Fangio 5");
        assert_eq!(lines[2], "Alain Prost 4");
        assert_eq!(lines[3], "Sebastian Vettel 4");
    }

    #[test]
    fn aggregate_sum_takes_top_countries() {
        let cfg = QueryConfig {
            top_countries: 2,
            ..QueryConfig::default()
        };
        let lines = aggregate_sum(f1(), &cfg).unwrap();
        assert_eq!(lines, vec!["UK 206", "Germany 156"]);
    }
}
