//! Name sets for registration operations.
//!
//! `register` and `include` accept either one name or a set of names; this
//! module provides the conversion type that makes both call shapes work.

/// One name or a set of names.
///
/// Registration operations take `impl Into<Names>`, so callers can pass a
/// single `&str`, a `String`, an array, a slice or a `Vec` without any
/// ceremony.
#[derive(Debug, Clone)]
pub struct Names(Vec<String>);

impl Names {
    /// Consume the set, yielding the names in caller order.
    pub(crate) fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|name| name.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}
