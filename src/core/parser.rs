//! Parsing of accent dictionary lines.
//!
//! A line carries three tab-separated fields: the vocabulary term, its reading
//! (empty for kana-only words) and an accent notation such as `(名)2,(代)0,2`.
//! A parenthesized tag applies to its own segment and to every following
//! untagged segment until the next tag.

use crate::domain::model::AccentGroup;
use regex::Regex;
use std::num::ParseIntError;
use std::str::Utf8Error;
use std::sync::LazyLock;
use thiserror::Error;

static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\t]+)\t([^\t]*)\t([^\t]+)$").unwrap());
static PARTS_OF_SPEECH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line is not valid UTF-8 ({lossy}): {source}")]
    InvalidUtf8 {
        lossy: String,
        #[source]
        source: Utf8Error,
    },

    #[error("Failed to parse line: {line}")]
    MalformedLine { line: String },

    #[error("Invalid accent {segment:?}: {source}")]
    MalformedAccent {
        segment: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub vocab: String,
    pub reading: String,
    pub accents: Vec<AccentGroup>,
}

/// Decodes one raw input line, without its trailing newline.
pub fn decode_line(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|source| ParseError::InvalidUtf8 {
        lossy: String::from_utf8_lossy(bytes).into_owned(),
        source,
    })
}

pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let captures = LINE_PATTERN
        .captures(line)
        .ok_or_else(|| ParseError::MalformedLine {
            line: line.to_string(),
        })?;

    let vocab = &captures[1];
    // TODO: readings are sometimes partly katakana; normalize to hiragana once
    // downstream lookups need it.
    let reading = match &captures[2] {
        // kana-only words have no separate reading
        "" => vocab,
        reading => reading,
    };
    let accents = parse_accents(&captures[3])?;

    Ok(ParsedLine {
        vocab: vocab.to_string(),
        reading: reading.to_string(),
        accents,
    })
}

/// Decodes an accent notation into groups keyed by part of speech.
///
/// Groups come out in the order their tag was first seen. Accents within a
/// group keep their source order.
pub fn parse_accents(notation: &str) -> Result<Vec<AccentGroup>, ParseError> {
    let mut groups: Vec<(&str, Vec<u32>)> = Vec::new();
    let mut current_key = "";

    for segment in notation.split(',') {
        if let Some(captures) = PARTS_OF_SPEECH_PATTERN.captures(segment) {
            if let Some(key) = captures.get(1) {
                current_key = key.as_str();
            }
        }

        let accent_text = PARTS_OF_SPEECH_PATTERN.replace_all(segment, "");
        let accent = accent_text
            .parse::<u32>()
            .map_err(|source| ParseError::MalformedAccent {
                segment: segment.to_string(),
                source,
            })?;

        match groups.iter_mut().find(|(key, _)| *key == current_key) {
            Some((_, accents)) => accents.push(accent),
            None => groups.push((current_key, vec![accent])),
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, accents)| {
            AccentGroup::new(key.split(';').map(str::to_string).collect(), accents)
        })
        .collect())
}
