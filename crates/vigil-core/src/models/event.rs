use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Channel an event was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceChannel {
    Social,
    News,
    Forum,
    Review,
    Blog,
    Other,
}

impl SourceChannel {
    pub const ALL: [SourceChannel; 6] = [
        Self::Social,
        Self::News,
        Self::Forum,
        Self::Review,
        Self::Blog,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::News => "news",
            Self::Forum => "forum",
            Self::Review => "review",
            Self::Blog => "blog",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SourceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceChannel {
    type Err = String;

    /// Accepts the canonical names plus common platform aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "social" | "twitter" | "x" | "facebook" | "instagram" | "tiktok" | "linkedin" => {
                Ok(Self::Social)
            }
            "news" | "press" => Ok(Self::News),
            "forum" | "reddit" => Ok(Self::Forum),
            "review" | "app_store" | "play_store" | "trustpilot" => Ok(Self::Review),
            "blog" => Ok(Self::Blog),
            "other" => Ok(Self::Other),
            "" => Err("channel is empty".to_string()),
            other => Err(format!("unknown channel `{other}`")),
        }
    }
}

/// An event record as received from an external feed. Every field is
/// optional so malformed records can be diagnosed instead of rejected
/// wholesale at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub source_channel: Option<String>,
    pub author_handle: Option<String>,
    pub text: Option<String>,
}

/// A validated, immutable social-media-style event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub source_channel: SourceChannel,
    pub author_handle: String,
    pub text: String,
}

impl RawEvent {
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        source_channel: SourceChannel,
        author_handle: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            source_channel,
            author_handle: author_handle.into(),
            text: text.into(),
        }
    }

    /// Validate a loose record at position `index` of its input sequence.
    ///
    /// `text` must be present but may be empty; every other field must be
    /// present and non-blank. Timestamps are RFC 3339.
    pub fn from_record(index: usize, record: &EventRecord) -> Result<Self, ValidationError> {
        let id = required(index, "id", record.id.as_deref())?;
        let raw_ts = required(index, "timestamp", record.timestamp.as_deref())?;
        let timestamp = DateTime::parse_from_rfc3339(raw_ts)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| ValidationError::InvalidField {
                index,
                field: "timestamp",
                reason: e.to_string(),
            })?;
        let raw_channel = required(index, "source_channel", record.source_channel.as_deref())?;
        let source_channel =
            raw_channel
                .parse::<SourceChannel>()
                .map_err(|reason| ValidationError::InvalidField {
                    index,
                    field: "source_channel",
                    reason,
                })?;
        let author_handle = required(index, "author_handle", record.author_handle.as_deref())?;
        let text = record.text.as_deref().ok_or(ValidationError::MissingField {
            index,
            field: "text",
        })?;

        Ok(Self {
            id: id.to_string(),
            timestamp,
            source_channel,
            author_handle: author_handle.to_string(),
            text: text.to_string(),
        })
    }
}

fn required<'a>(
    index: usize,
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::MissingField { index, field }),
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField { index, field }),
        Some(v) => Ok(v.trim()),
    }
}

/// PII categories the redactor masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Phone,
    Email,
    Iban,
    SocialHandle,
}

impl PiiCategory {
    pub fn placeholder(&self) -> &'static str {
        use crate::constants::*;
        match self {
            Self::Phone => PHONE_PLACEHOLDER,
            Self::Email => EMAIL_PLACEHOLDER,
            Self::Iban => IBAN_PLACEHOLDER,
            Self::SocialHandle => HANDLE_PLACEHOLDER,
        }
    }
}

/// A single replacement applied to an event's text. Offsets refer to the
/// text of the pass that produced the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redaction {
    pub category: PiiCategory,
    pub pattern_name: String,
    pub placeholder: String,
    pub start: usize,
    pub end: usize,
}

/// A raw event plus its PII-free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactedEvent {
    pub event: RawEvent,
    pub redacted_text: String,
    /// Stable pseudonym for the author, used to measure reach without
    /// exposing the handle downstream.
    pub author_key: String,
    pub redactions: Vec<Redaction>,
}

impl RedactedEvent {
    pub fn id(&self) -> &str {
        &self.event.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.event.timestamp
    }

    pub fn channel(&self) -> SourceChannel {
        self.event.source_channel
    }

    pub fn redaction_count(&self) -> usize {
        self.redactions.len()
    }
}
