//! Dataset records. Pure data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// A world champion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Racer {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub starts: u32,
    pub wins: u32,
    /// Championship years.
    pub years: Vec<u16>,
    pub cars: Vec<String>,
}

impl Racer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Long form: `First Last, Country; starts: N, wins: M`.
    pub fn describe(&self) -> String {
        format!(
            "{}, {}; starts: {}, wins: {}",
            self, self.country, self.starts, self.wins
        )
    }

    pub fn titles(&self) -> usize {
        self.years.len()
    }

    pub fn drove(&self, car: &str) -> bool {
        self.cars.iter().any(|c| c == car)
    }

    pub fn racer_ref(&self) -> RacerRef {
        RacerRef::new(self.first_name.clone(), self.last_name.clone())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let reason = if self.wins > self.starts {
            format!("{} wins exceed {} starts", self.wins, self.starts)
        } else if self.years.is_empty() {
            "no championship years".to_string()
        } else if self.cars.is_empty() {
            "no cars".to_string()
        } else {
            return Ok(());
        };
        Err(DataError::Invariant {
            racer: self.full_name(),
            reason,
        })
    }
}

impl fmt::Display for Racer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Name of a podium finisher. Resolves to a [`Racer`] only when that person
/// also became champion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RacerRef {
    pub first_name: String,
    pub last_name: String,
}

impl RacerRef {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for RacerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Top three of one season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChampionshipResult {
    pub year: u16,
    pub first: RacerRef,
    pub second: RacerRef,
    pub third: RacerRef,
}

impl ChampionshipResult {
    /// Podium in finishing order.
    pub fn podium(&self) -> [&RacerRef; 3] {
        [&self.first, &self.second, &self.third]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn senna() -> Racer {
        Racer {
            first_name: "Ayrton".into(),
            last_name: "Senna".into(),
            country: "Brazil".into(),
            starts: 161,
            wins: 41,
            years: vec![1988, 1990, 1991],
            cars: vec!["McLaren".into()],
        }
    }

    #[test]
    fn display_forms() {
        let r = senna();
        assert_eq!(r.to_string(), "Ayrton Senna");
        assert_eq!(r.describe(), "Ayrton Senna, Brazil; starts: 161, wins: 41");
        assert_eq!(r.racer_ref().to_string(), "Ayrton Senna");
    }

    #[test]
    fn validate_rejects_broken_records() {
        assert!(senna().validate().is_ok());

        let mut r = senna();
        r.wins = 200;
        assert!(matches!(r.validate(), Err(DataError::Invariant { .. })));

        let mut r = senna();
        r.years.clear();
        assert!(r.validate().is_err());

        let mut r = senna();
        r.cars.clear();
        assert!(r.validate().is_err());
    }
}
