//! Closed element type for untyped collections of dataset values.

use std::sync::Arc;

use deferq_core::types::{Downcast, Scalar, TypeName};

use crate::model::{ChampionshipResult, Racer};

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Racer(Arc<Racer>),
    Championship(Arc<ChampionshipResult>),
    Scalar(Scalar),
}

impl TypeName for Entry {
    fn type_name(&self) -> &'static str {
        match self {
            Entry::Racer(_) => "racer",
            Entry::Championship(_) => "championship",
            Entry::Scalar(s) => s.type_name(),
        }
    }
}

impl Downcast<Arc<Racer>> for Entry {
    const TARGET: &'static str = "racer";

    fn downcast(self) -> Result<Arc<Racer>, Self> {
        match self {
            Entry::Racer(r) => Ok(r),
            other => Err(other),
        }
    }
}

impl Downcast<Arc<ChampionshipResult>> for Entry {
    const TARGET: &'static str = "championship";

    fn downcast(self) -> Result<Arc<ChampionshipResult>, Self> {
        match self {
            Entry::Championship(c) => Ok(c),
            other => Err(other),
        }
    }
}

impl Downcast<String> for Entry {
    const TARGET: &'static str = <Scalar as Downcast<String>>::TARGET;

    fn downcast(self) -> Result<String, Self> {
        match self {
            Entry::Scalar(s) => Downcast::<String>::downcast(s).map_err(Entry::Scalar),
            other => Err(other),
        }
    }
}

impl Downcast<i64> for Entry {
    const TARGET: &'static str = <Scalar as Downcast<i64>>::TARGET;

    fn downcast(self) -> Result<i64, Self> {
        match self {
            Entry::Scalar(s) => Downcast::<i64>::downcast(s).map_err(Entry::Scalar),
            other => Err(other),
        }
    }
}

impl From<Scalar> for Entry {
    fn from(value: Scalar) -> Self {
        Entry::Scalar(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Scalar(value.into())
    }
}

impl From<i64> for Entry {
    fn from(value: i64) -> Self {
        Entry::Scalar(value.into())
    }
}

impl From<Arc<Racer>> for Entry {
    fn from(value: Arc<Racer>) -> Self {
        Entry::Racer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deferq_core::error::Error;
    use deferq_operators::{from_vec, Sequence};

    fn racer(last: &str) -> Arc<Racer> {
        Arc::new(Racer {
            first_name: "X".into(),
            last_name: last.into(),
            country: "USA".into(),
            starts: 10,
            wins: 1,
            years: vec![1961],
            cars: vec!["Ferrari".into()],
        })
    }

    #[test]
    fn of_type_picks_racers_out_of_mixed_entries() {
        let entries = vec![Entry::from("one"), Entry::Racer(racer("Hill")), Entry::from(2i64)];
        let racers = from_vec(entries.clone()).of_type::<Arc<Racer>>().to_vec();
        assert_eq!(racers.len(), 1);
        assert_eq!(racers[0].last_name, "Hill");
        let strings = from_vec(entries).of_type::<String>().to_vec();
        assert_eq!(strings, vec!["one".to_string()]);
    }

    #[test]
    fn cast_reports_entry_kind() {
        let entries = vec![Entry::Racer(racer("Hill")), Entry::from("oops")];
        let out = from_vec(entries).cast::<Arc<Racer>>().to_vec();
        assert!(out[0].is_ok());
        assert_eq!(
            out[1],
            Err(Error::TypeMismatch {
                expected: "racer",
                actual: "string",
                position: 1,
            })
        );
    }
}
