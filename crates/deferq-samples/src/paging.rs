//! Paging samples built on skip and take.

use deferq_core::config::QueryConfig;
use deferq_data::Formula1;
use deferq_operators::Sequence;

use crate::count_arg;
use crate::error::Result;

/// Champion names ordered by last then first name, `page_size` per page.
///
/// Each page re-runs the ordered query and skips into it.
pub fn partition(f1: &Formula1, cfg: &QueryConfig) -> Result<Vec<String>> {
    cfg.validate()?;
    let page_size = cfg.page_size;
    let names = f1
        .champions()
        .order_by(|r| r.last_name.clone())
        .then_by(|r| r.first_name.clone())
        .project(|r| r.full_name());

    let pages = names.count().div_ceil(page_size);
    let mut lines = Vec::new();
    for page in 0..pages {
        lines.push(format!("Page {page}"));
        let current = (&names)
            .skip(count_arg(page * page_size))
            .take(count_arg(page_size));
        lines.extend(current.iterate());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cover_every_champion_once() {
        let f1 = Formula1::shared().unwrap();
        let lines = partition(f1, &QueryConfig::default()).unwrap();
        let headers = lines.iter().filter(|l| l.starts_with("Page ")).count();
        assert_eq!(headers, 7);
        assert_eq!(lines.len(), 7 + 33);
        assert_eq!(lines[0], "Page 0");
        assert_eq!(lines[1], "Fernando Alonso");
        assert_eq!(lines.last().map(String::as_str), Some("Jacques Villeneuve"));
    }

    #[test]
    fn page_size_follows_config() {
        let f1 = Formula1::shared().unwrap();
        let cfg = QueryConfig {
            page_size: 10,
            ..QueryConfig::default()
        };
        let lines = partition(f1, &cfg).unwrap();
        assert_eq!(lines[11], "Page 1");
    }
}
