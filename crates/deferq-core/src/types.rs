//! Closed value type for untyped collections, and the conversion traits used
//! by `cast`/`of_type`.
//!
//! An "untyped" collection is a sequence of some closed sum type (this
//! `Scalar`, or a domain enum built on top of it). Viewing an element as `T`
//! is a run-time tag check expressed through [`Downcast`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Str(String),
}

/// Run-time name of the variant an element currently holds.
pub trait TypeName {
    fn type_name(&self) -> &'static str;
}

/// Attempt to view `self` as `T`, handing the value back on mismatch.
pub trait Downcast<T>: Sized {
    /// Name of `T` used in mismatch reports.
    const TARGET: &'static str;

    fn downcast(self) -> Result<T, Self>;
}

impl TypeName for Scalar {
    fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::I64(_) => "i64",
            Scalar::F64(_) => "f64",
            Scalar::Str(_) => "string",
        }
    }
}

impl Downcast<bool> for Scalar {
    const TARGET: &'static str = "bool";

    fn downcast(self) -> Result<bool, Self> {
        match self {
            Scalar::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl Downcast<i64> for Scalar {
    const TARGET: &'static str = "i64";

    fn downcast(self) -> Result<i64, Self> {
        match self {
            Scalar::I64(i) => Ok(i),
            other => Err(other),
        }
    }
}

impl Downcast<f64> for Scalar {
    const TARGET: &'static str = "f64";

    fn downcast(self) -> Result<f64, Self> {
        match self {
            Scalar::F64(f) => Ok(f),
            other => Err(other),
        }
    }
}

impl Downcast<String> for Scalar {
    const TARGET: &'static str = "string";

    fn downcast(self) -> Result<String, Self> {
        match self {
            Scalar::Str(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::I64(i)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::F64(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_hands_back_mismatched_value() {
        let v = Scalar::from("four");
        let res: Result<i64, Scalar> = v.downcast();
        let back = res.unwrap_err();
        assert_eq!(back, Scalar::Str("four".into()));
        assert_eq!(back.type_name(), "string");
    }

    #[test]
    fn downcast_matching_variant() {
        let s: Result<String, Scalar> = Scalar::from("one").downcast();
        assert_eq!(s.unwrap(), "one");
        let i: Result<i64, Scalar> = Scalar::I64(2).downcast();
        assert_eq!(i.unwrap(), 2);
    }
}
