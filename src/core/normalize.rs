// src/core/normalize.rs
//
// Class labels in the source sheet are free text ("VI A", "vi a", "VIA ").
// Everything downstream keys on the canonical form produced here.

use std::fmt;

use crate::config::consts::MIN_CLASS_LEN;

/// Canonical class key: uppercase ASCII-or-Unicode letters only, no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(String);

impl ClassId {
    /// Normalize with the default minimum length.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_class(Some(raw), MIN_CLASS_LEN)
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassId {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Canonicalize a raw period cell. `None` means "no class": absent, blank,
/// too short, or containing anything other than letters once whitespace is gone.
pub fn normalize_class(raw: Option<&str>, min_len: usize) -> Option<ClassId> {
    let raw = raw?.trim();
    if raw.is_empty() { return None; }

    let clean: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    let len = clean.chars().count();
    if len >= min_len && clean.chars().all(char::is_alphabetic) {
        Some(ClassId(clean))
    } else {
        None
    }
}

/// String form of [`normalize_class`]: empty string for "no class".
pub fn normalize(raw: &str) -> String {
    ClassId::parse(raw).map(|c| c.0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_and_case_variants_collapse() {
        assert_eq!(normalize("VI A"), "VIA");
        assert_eq!(normalize("VI  A"), "VIA");
        assert_eq!(normalize("vi a"), "VIA");
        assert_eq!(normalize("  ix\tb "), "IXB");
        assert_eq!(normalize("XA"), "XA");
    }

    #[test]
    fn rejects_noise() {
        assert_eq!(normalize("X"), "");
        assert_eq!(normalize("7B"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("VI-A"), "");
        assert_eq!(normalize("12"), "");
    }

    #[test]
    fn absent_cell_is_no_class() {
        assert_eq!(normalize_class(None, 2), None);
    }

    #[test]
    fn min_len_is_a_policy() {
        assert_eq!(normalize_class(Some("X"), 1).as_ref().map(ClassId::as_str), Some("X"));
        assert_eq!(normalize_class(Some("VIA"), 4), None);
    }
}
