// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `n` chars (not bytes) of `s`.
pub fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// School name → file stem fragment: spaces become `_`, path-hostile chars are dropped.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == '_') && !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { fallback.to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  MR   K  MOHAPATRA "), "MR K MOHAPATRA");
    }

    #[test]
    fn take_chars_is_char_safe() {
        assert_eq!(take_chars("MATHEMATICS", 4), "MATH");
        assert_eq!(take_chars("ÉCO", 2), "ÉC");
        assert_eq!(take_chars("PE", 4), "PE");
    }

    #[test]
    fn file_stems() {
        assert_eq!(sanitize_file_stem("Jawahar Navodaya Vidyalaya Baksa", "School"),
            "Jawahar_Navodaya_Vidyalaya_Baksa");
        assert_eq!(sanitize_file_stem("  A/B  School ", "School"), "AB_School");
        assert_eq!(sanitize_file_stem("///", "School"), "School");
    }
}
