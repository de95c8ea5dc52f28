//! Rendering of duplicate-pair reports as plain text or JSON lines.

use std::io::{self, Write};

use matcher::DuplicatePair;
use serde::Serialize;

/// A [`DuplicatePair`] joined with the text of both documents.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PairReport<'a> {
    pub first: usize,
    pub second: usize,
    pub similarity: f64,
    pub first_text: &'a str,
    pub second_text: &'a str,
}

impl<'a> PairReport<'a> {
    /// Join a pair with its documents. `None` if the pair does not index `docs`.
    pub fn resolve<S: AsRef<str>>(pair: &DuplicatePair, docs: &'a [S]) -> Option<Self> {
        let (first_text, second_text) = pair.texts(docs)?;
        Some(Self {
            first: pair.first,
            second: pair.second,
            similarity: pair.similarity,
            first_text,
            second_text,
        })
    }
}

/// Format a similarity with six significant digits, trailing zeros dropped.
pub fn format_similarity(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Write one block per pair:
///
/// ```text
/// Duplicate pair (Jaccard: 0.846154):
///  - <first document>
///  - <second document>
///
/// ```
pub fn write_text_report<W, S>(out: &mut W, pairs: &[DuplicatePair], docs: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for report in pairs.iter().filter_map(|p| PairReport::resolve(p, docs)) {
        writeln!(
            out,
            "Duplicate pair (Jaccard: {}):",
            format_similarity(report.similarity)
        )?;
        writeln!(out, " - {}", report.first_text)?;
        writeln!(out, " - {}", report.second_text)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Write one JSON object per line per pair.
pub fn write_json_report<W, S>(out: &mut W, pairs: &[DuplicatePair], docs: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for report in pairs.iter().filter_map(|p| PairReport::resolve(p, docs)) {
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(first: usize, second: usize, similarity: f64) -> DuplicatePair {
        DuplicatePair {
            first,
            second,
            similarity,
        }
    }

    #[test]
    fn similarity_formatting() {
        assert_eq!(format_similarity(1.0), "1");
        assert_eq!(format_similarity(0.0), "0");
        assert_eq!(format_similarity(0.5), "0.5");
        assert_eq!(format_similarity(11.0 / 13.0), "0.846154");
        assert_eq!(format_similarity(10.0 / 13.0), "0.769231");
    }

    #[test]
    fn text_report_layout() {
        let docs = ["alpha beta", "gamma", "alpha beta"];
        let mut out = Vec::new();
        write_text_report(&mut out, &[pair(0, 2, 1.0)], &docs).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Duplicate pair (Jaccard: 1):\n - alpha beta\n - alpha beta\n\n"
        );
    }

    #[test]
    fn json_report_has_one_object_per_line() {
        let docs = ["a", "b", "c"];
        let mut out = Vec::new();
        write_json_report(&mut out, &[pair(0, 1, 0.75), pair(1, 2, 1.0)], &docs).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["first"], 0);
        assert_eq!(first["second"], 1);
        assert_eq!(first["similarity"], 0.75);
        assert_eq!(first["first_text"], "a");
        assert_eq!(first["second_text"], "b");
    }

    #[test]
    fn pairs_outside_corpus_are_skipped() {
        let docs = ["only one"];
        let mut out = Vec::new();
        write_text_report(&mut out, &[pair(0, 3, 1.0)], &docs).unwrap();
        assert!(out.is_empty());
    }
}
