//! The dataset provider.

use std::collections::HashMap;
use std::sync::Arc;

use deferq_operators::source::{from_slice, FromSlice};
use once_cell::sync::OnceCell;

use crate::entry::Entry;
use crate::error::Result;
use crate::model::{ChampionshipResult, Racer, RacerRef};

const CHAMPIONS_JSON: &str = include_str!("../data/champions.json");
const CHAMPIONSHIPS_JSON: &str = include_str!("../data/championships.json");

static SHARED: OnceCell<Formula1> = OnceCell::new();

/// Champions and season podiums, in file order.
#[derive(Debug, Clone)]
pub struct Formula1 {
    champions: Vec<Arc<Racer>>,
    championships: Vec<Arc<ChampionshipResult>>,
    by_name: HashMap<RacerRef, usize>,
}

impl Formula1 {
    /// Process-wide dataset parsed from the embedded tables on first use.
    pub fn shared() -> Result<&'static Formula1> {
        SHARED.get_or_try_init(|| Self::load_from_str(CHAMPIONS_JSON, CHAMPIONSHIPS_JSON))
    }

    /// Parse a dataset from two JSON arrays. Every racer is validated.
    pub fn load_from_str(champions: &str, championships: &str) -> Result<Self> {
        let racers: Vec<Racer> = serde_json::from_str(champions)?;
        let seasons: Vec<ChampionshipResult> = serde_json::from_str(championships)?;
        for racer in &racers {
            racer.validate()?;
        }
        let by_name = racers
            .iter()
            .enumerate()
            .map(|(idx, racer)| (racer.racer_ref(), idx))
            .collect();
        Ok(Self {
            champions: racers.into_iter().map(Arc::new).collect(),
            championships: seasons.into_iter().map(Arc::new).collect(),
            by_name,
        })
    }

    pub fn champions(&self) -> FromSlice<'_, Arc<Racer>> {
        from_slice(&self.champions)
    }

    pub fn championships(&self) -> FromSlice<'_, Arc<ChampionshipResult>> {
        from_slice(&self.championships)
    }

    /// The champion record behind a podium name, if that person won a title.
    pub fn resolve(&self, name: &RacerRef) -> Option<&Arc<Racer>> {
        self.by_name.get(name).map(|&idx| &self.champions[idx])
    }

    /// Champions as an untyped collection.
    pub fn untyped_champions(&self) -> Vec<Entry> {
        self.champions.iter().cloned().map(Entry::Racer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use deferq_operators::Sequence;

    #[test]
    fn embedded_dataset_loads() {
        let f1 = Formula1::shared().unwrap();
        assert_eq!(f1.champions().count(), 33);
        assert_eq!(f1.championships().count(), 29);
        let first = f1.champions().first().unwrap();
        assert_eq!(first.to_string(), "Nino Farina");
    }

    #[test]
    fn podium_names_resolve_to_champions() {
        let f1 = Formula1::shared().unwrap();
        let senna = f1.resolve(&RacerRef::new("Ayrton", "Senna")).unwrap();
        assert_eq!(senna.wins, 41);
        assert!(f1.resolve(&RacerRef::new("Stirling", "Moss")).is_none());
    }

    #[test]
    fn invariant_violations_are_rejected() {
        let champions = r#"[{"first_name":"A","last_name":"B","country":"X",
            "starts":1,"wins":2,"years":[1999],"cars":["Z"]}]"#;
        let err = Formula1::load_from_str(champions, "[]").unwrap_err();
        assert!(matches!(err, DataError::Invariant { ref racer, .. } if racer == "A B"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Formula1::load_from_str("{", "[]").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
