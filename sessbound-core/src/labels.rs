//! Session-start label sequences and raw label normalization

use crate::boundary::BoundarySet;
use crate::error::ValidationError;
use std::fmt;

/// Marker the labelling export writes for a session start
pub const START_MARKER: &str = "[START]";

/// Validated sequence of session-start flags for one conversation
///
/// Index `i` is `1` when message `i` starts a new session and `0` when it
/// continues the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct LabelSequence {
    labels: Vec<u8>,
}

impl LabelSequence {
    /// Create a sequence, rejecting any value other than 0 or 1
    pub fn new(labels: Vec<u8>) -> Result<Self, ValidationError> {
        if let Some((index, value)) = labels.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(ValidationError::InvalidLabel {
                index,
                value: value.to_string(),
            });
        }
        Ok(Self { labels })
    }

    /// Create a sequence from boolean flags
    pub fn from_flags<I: IntoIterator<Item = bool>>(flags: I) -> Self {
        Self {
            labels: flags.into_iter().map(u8::from).collect(),
        }
    }

    /// Parse raw exported labels, accepting only unambiguous 0/1 values
    pub fn from_raw(raw: &[RawLabel]) -> Result<Self, ValidationError> {
        let labels = raw
            .iter()
            .enumerate()
            .map(|(index, label)| {
                label.strict().ok_or_else(|| ValidationError::InvalidLabel {
                    index,
                    value: label.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { labels })
    }

    /// Normalize raw exported labels: start markers become 1, anything else 0
    pub fn from_raw_lenient(raw: &[RawLabel]) -> Self {
        Self {
            labels: raw.iter().map(RawLabel::lenient).collect(),
        }
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the sequence has no messages
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels as a slice of 0/1 values
    pub fn as_slice(&self) -> &[u8] {
        &self.labels
    }

    /// Whether message `index` starts a session
    pub fn is_start(&self, index: usize) -> bool {
        self.labels.get(index).is_some_and(|&v| v == 1)
    }

    /// Number of session starts
    pub fn start_count(&self) -> usize {
        self.labels.iter().filter(|&&v| v == 1).count()
    }

    /// Indices of all session starts
    pub fn boundaries(&self) -> BoundarySet {
        BoundarySet::from_labels(&self.labels)
    }
}

impl TryFrom<Vec<u8>> for LabelSequence {
    type Error = ValidationError;

    fn try_from(labels: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<LabelSequence> for Vec<u8> {
    fn from(sequence: LabelSequence) -> Self {
        sequence.labels
    }
}

/// A label value as it appears in an exported labelling file
///
/// Exports mix numeric flags (`1`, `1.0`), textual markers (`"[START]"`)
/// and missing cells (`null`), so every shape is kept until normalization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum RawLabel {
    /// Missing cell
    Missing,
    /// Boolean flag
    Flag(bool),
    /// Numeric flag
    Number(f64),
    /// Textual flag or marker
    Text(String),
}

impl RawLabel {
    /// Strict interpretation: `Some(0|1)` for unambiguous values, `None` otherwise
    pub fn strict(&self) -> Option<u8> {
        match self {
            RawLabel::Flag(flag) => Some(u8::from(*flag)),
            RawLabel::Number(n) if *n == 0.0 => Some(0),
            RawLabel::Number(n) if *n == 1.0 => Some(1),
            RawLabel::Text(text) => match text.trim() {
                "0" | "0.0" => Some(0),
                "1" | "1.0" => Some(1),
                _ => None,
            },
            _ => None,
        }
    }

    /// Lenient interpretation used for labelling exports
    ///
    /// Unlabelled messages are exported as missing cells, so everything that
    /// is not an explicit start is a continuation.
    pub fn lenient(&self) -> u8 {
        match self {
            RawLabel::Flag(flag) => u8::from(*flag),
            RawLabel::Number(n) => u8::from(*n == 1.0),
            RawLabel::Text(text) => {
                let text = text.trim();
                u8::from(text == "1" || text == "1.0" || text.eq_ignore_ascii_case(START_MARKER))
            }
            RawLabel::Missing => 0,
        }
    }
}

impl fmt::Display for RawLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLabel::Missing => write!(f, "null"),
            RawLabel::Flag(flag) => write!(f, "{flag}"),
            RawLabel::Number(n) => write!(f, "{n}"),
            RawLabel::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<u8> for RawLabel {
    fn from(value: u8) -> Self {
        RawLabel::Number(f64::from(value))
    }
}

impl From<&str> for RawLabel {
    fn from(value: &str) -> Self {
        RawLabel::Text(value.to_string())
    }
}
