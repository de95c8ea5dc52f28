//! Corpus loading for the CLI and library callers.
//!
//! A corpus is an ordered list of documents; a document's identity is its
//! position. Three on-disk layouts are understood, see [`InputFormat`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse JSON corpus: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("unknown input format '{0}' (expected lines, paragraphs or json)")]
    UnknownFormat(String),
}

/// How documents are laid out in a corpus file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One document per non-blank line.
    #[default]
    Lines,
    /// Documents separated by one or more blank lines; inner newlines kept.
    Paragraphs,
    /// A JSON array of strings.
    Json,
}

impl FromStr for InputFormat {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lines" => Ok(InputFormat::Lines),
            "paragraphs" => Ok(InputFormat::Paragraphs),
            "json" => Ok(InputFormat::Json),
            other => Err(CorpusError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::Lines => "lines",
            InputFormat::Paragraphs => "paragraphs",
            InputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Read and split a corpus file.
///
/// Any byte content is accepted. Invalid UTF-8 sequences decode to U+FFFD,
/// which the tokenizer treats as a delimiter like every other non-ASCII byte.
pub fn load_corpus<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Vec<String>, CorpusError> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    parse_corpus(&content, format)
}

/// Split corpus text that is already in memory.
pub fn parse_corpus(content: &str, format: InputFormat) -> Result<Vec<String>, CorpusError> {
    let docs = match format {
        InputFormat::Lines => content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect(),
        InputFormat::Paragraphs => split_paragraphs(content),
        InputFormat::Json => serde_json::from_str(content)?,
    };
    Ok(docs)
}

fn split_paragraphs(content: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                docs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        docs.push(current.join("\n"));
    }
    docs
}
