// src/csv.rs
use std::io::Write;

use crate::error::Result;

/* ---------------- Writing ---------------- */

/// Write ragged rows (title rows have one cell, blank separators none) to any writer.
pub fn write_rows<W: Write>(w: W, rows: &[Vec<String>], sep: u8) -> Result<()> {
    let mut out = ::csv::WriterBuilder::new()
        .delimiter(sep)
        .flexible(true)
        .from_writer(w);
    for row in rows {
        if row.is_empty() {
            // zero-field records are rejected; a lone empty field comes out as `""`
            out.write_record([""])?;
        } else {
            out.write_record(row)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render rows to a string (clipboard/stdout use).
pub fn to_export_string(rows: &[Vec<String>], sep: u8) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, rows, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_and_quoting() {
        let rows = vec![
            vec![s!("School, Town")],
            vec![],
            vec![s!("DAY"), s!("P1"), s!("P2")],
            vec![s!("MON"), s!(""), s!("MATH/LAB")],
        ];
        let s = to_export_string(&rows, b',').unwrap();
        assert_eq!(s, "\"School, Town\"\n\"\"\nDAY,P1,P2\nMON,,MATH/LAB\n");
    }

    #[test]
    fn tab_separated() {
        let rows = vec![vec![s!("DAY"), s!("P1")]];
        assert_eq!(to_export_string(&rows, b'\t').unwrap(), "DAY\tP1\n");
    }
}
