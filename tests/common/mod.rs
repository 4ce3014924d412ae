//! Shared fixtures for integration tests.

#![allow(dead_code)]

use deferq::data::Formula1;

/// Senna, Piquet and Fangio, in that order.
pub const THREE_RACERS: &str = r#"[
  {"first_name": "Ayrton", "last_name": "Senna", "country": "Brazil",
   "starts": 161, "wins": 41, "years": [1988, 1990, 1991], "cars": ["McLaren"]},
  {"first_name": "Nelson", "last_name": "Piquet", "country": "Brazil",
   "starts": 204, "wins": 23, "years": [1981, 1983, 1987], "cars": ["Williams", "Brabham"]},
  {"first_name": "Juan Manuel", "last_name": "Fangio", "country": "Argentina",
   "starts": 51, "wins": 24, "years": [1951, 1954, 1955, 1956, 1957], "cars": ["Ferrari", "Maserati"]}
]"#;

pub const TWO_SEASONS: &str = r#"[
  {"year": 1988,
   "first": {"first_name": "Ayrton", "last_name": "Senna"},
   "second": {"first_name": "Alain", "last_name": "Prost"},
   "third": {"first_name": "Gerhard", "last_name": "Berger"}},
  {"year": 1957,
   "first": {"first_name": "Juan Manuel", "last_name": "Fangio"},
   "second": {"first_name": "Stirling", "last_name": "Moss"},
   "third": {"first_name": "Luigi", "last_name": "Musso"}}
]"#;

pub fn three_racers() -> Formula1 {
    Formula1::load_from_str(THREE_RACERS, TWO_SEASONS).expect("fixture parses")
}

pub fn shared() -> &'static Formula1 {
    Formula1::shared().expect("embedded dataset parses")
}
