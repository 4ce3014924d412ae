//! Generator and deferred-evaluation samples.

use deferq_core::capture::Capture;
use deferq_core::config::QueryConfig;
use deferq_data::Formula1;
use deferq_operators::Sequence;

use crate::error::Result;

pub fn range(_f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let values = deferq_operators::range(1, 20)?.project(|n| n.to_string());
    Ok(vec![values.to_vec().join(" ")])
}

/// One query, two traversals: the captured country changes in between and
/// the second traversal observes the new value.
pub fn deferred(f1: &Formula1, _cfg: &QueryConfig) -> Result<Vec<String>> {
    let country = Capture::new("Brazil".to_string());
    let names = f1
        .champions()
        .filter_with(&country, |c, r| r.country == *c)
        .order_by(|r| r.last_name.clone())
        .project(|r| r.full_name());

    let mut lines = Vec::with_capacity(2);
    lines.push(format!("{}: {}", country.get(), names.to_vec().join(", ")));
    country.set("Austria".to_string());
    lines.push(format!("{}: {}", country.get(), names.to_vec().join(", ")));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_prints_one_to_twenty() {
        let lines = range(Formula1::shared().unwrap(), &QueryConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec!["1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20"]
        );
    }

    #[test]
    fn deferred_observes_the_later_capture() {
        let lines = deferred(Formula1::shared().unwrap(), &QueryConfig::default()).unwrap();
        assert_eq!(
            lines,
            vec![
                "Brazil: Emerson Fittipaldi, Nelson Piquet, Ayrton Senna",
                "Austria: Niki Lauda, Jochen Rindt",
            ]
        );
    }
}
