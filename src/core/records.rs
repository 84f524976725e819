//! Upstream response records.
//!
//! The upstream is loose about JSON types (numbers sometimes arrive as
//! strings, the closing flag has been both a boolean and a label), so every
//! displayed field decodes through the [`lenient`] helpers and defaults
//! when missing. A record that is only partially populated still renders.

use serde::Deserialize;

/// Top-level response body from any of the three endpoints.
///
/// Well-formed responses carry either `message`/`details` or records,
/// never both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEnvelope {
    /// Total number of matching records.
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_records: Option<u64>,
    /// Number of records in this page.
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_return: Option<u64>,
    /// 1-based position of the first unread record, when more remain.
    #[serde(default, deserialize_with = "lenient::count")]
    pub next_record_position: Option<u64>,
    /// Validation error reported under a 200 status.
    #[serde(default)]
    pub message: Option<String>,
    /// Detail lines accompanying `message`.
    #[serde(default, deserialize_with = "lenient::lines")]
    pub details: Vec<String>,
    /// Meeting records (meeting-list and meeting endpoints).
    #[serde(default)]
    pub meeting_record: Option<Vec<MeetingRecord>>,
    /// Speech records (speech endpoint).
    #[serde(default)]
    pub speech_record: Option<Vec<SpeechRecord>>,
}

impl SearchEnvelope {
    /// Continuation cursor, ignoring a zero position.
    #[must_use]
    pub fn next_position(&self) -> Option<u64> {
        self.next_record_position.filter(|&n| n > 0)
    }
}

/// One sitting of a committee or plenary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingRecord {
    /// Stable meeting record identifier.
    #[serde(rename = "issueID", deserialize_with = "lenient::string")]
    pub issue_id: String,
    /// Diet session number.
    #[serde(deserialize_with = "lenient::string")]
    pub session: String,
    /// House name.
    #[serde(deserialize_with = "lenient::string")]
    pub name_of_house: String,
    /// Meeting name.
    #[serde(deserialize_with = "lenient::string")]
    pub name_of_meeting: String,
    /// Issue number within the session.
    #[serde(deserialize_with = "lenient::string")]
    pub issue: String,
    /// Meeting date.
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    /// Held while the Diet was in recess.
    #[serde(deserialize_with = "lenient::truthy")]
    pub closing: bool,
    /// Meeting page URL.
    #[serde(rename = "meetingURL", deserialize_with = "lenient::string")]
    pub meeting_url: String,
    /// Scanned PDF URL.
    #[serde(rename = "pdfURL", deserialize_with = "lenient::optional_string")]
    pub pdf_url: Option<String>,
    /// Nested speeches, minimal or full depending on the endpoint.
    #[serde(deserialize_with = "lenient::list")]
    pub speech_record: Vec<MeetingSpeech>,
}

/// A speech nested in a [`MeetingRecord`].
///
/// The meeting-list endpoint fills only id, order, speaker and URL; the
/// meeting endpoint adds the body and speaker details.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeetingSpeech {
    /// Stable speech identifier.
    #[serde(rename = "speechID", deserialize_with = "lenient::string")]
    pub speech_id: String,
    /// Order of the speech within the meeting.
    #[serde(deserialize_with = "lenient::string")]
    pub speech_order: String,
    /// Speaker name.
    #[serde(deserialize_with = "lenient::string")]
    pub speaker: String,
    /// Reading of the speaker name.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_yomi: Option<String>,
    /// Parliamentary group.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_group: Option<String>,
    /// Position (minister, committee member, ...).
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_position: Option<String>,
    /// Witness role.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_role: Option<String>,
    /// Speech body.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speech: Option<String>,
    /// First page of the speech in the printed record.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub start_page: Option<String>,
    /// Speech page URL.
    #[serde(rename = "speechURL", deserialize_with = "lenient::string")]
    pub speech_url: String,
}

/// A speech returned by the speech endpoint, with its meeting context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechRecord {
    /// Stable speech identifier.
    #[serde(rename = "speechID", deserialize_with = "lenient::string")]
    pub speech_id: String,
    /// Owning meeting record identifier.
    #[serde(rename = "issueID", deserialize_with = "lenient::string")]
    pub issue_id: String,
    /// Diet session number.
    #[serde(deserialize_with = "lenient::string")]
    pub session: String,
    /// House name.
    #[serde(deserialize_with = "lenient::string")]
    pub name_of_house: String,
    /// Meeting name.
    #[serde(deserialize_with = "lenient::string")]
    pub name_of_meeting: String,
    /// Issue number within the session.
    #[serde(deserialize_with = "lenient::string")]
    pub issue: String,
    /// Meeting date.
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    /// Held while the Diet was in recess.
    #[serde(deserialize_with = "lenient::truthy")]
    pub closing: bool,
    /// Order of the speech within the meeting.
    #[serde(deserialize_with = "lenient::string")]
    pub speech_order: String,
    /// Speaker name.
    #[serde(deserialize_with = "lenient::string")]
    pub speaker: String,
    /// Reading of the speaker name.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_yomi: Option<String>,
    /// Parliamentary group.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_group: Option<String>,
    /// Position.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_position: Option<String>,
    /// Witness role.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub speaker_role: Option<String>,
    /// Speech body.
    #[serde(deserialize_with = "lenient::string")]
    pub speech: String,
    /// First page of the speech in the printed record.
    #[serde(deserialize_with = "lenient::optional_string")]
    pub start_page: Option<String>,
    /// Speech page URL.
    #[serde(rename = "speechURL", deserialize_with = "lenient::string")]
    pub speech_url: String,
    /// Meeting page URL.
    #[serde(rename = "meetingURL", deserialize_with = "lenient::string")]
    pub meeting_url: String,
    /// Scanned PDF URL.
    #[serde(rename = "pdfURL", deserialize_with = "lenient::optional_string")]
    pub pdf_url: Option<String>,
}

/// Deserializers that accept the loose JSON types seen upstream.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Scalar as text; null or missing becomes empty.
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(scalar_text(Value::deserialize(d)?).unwrap_or_default())
    }

    /// Scalar as text; null, missing and empty become `None`.
    pub fn optional_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(scalar_text(Value::deserialize(d)?).filter(|s| !s.is_empty()))
    }

    /// Non-negative count from a number or numeric string.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Truthiness: `true`, a non-empty string or a non-zero number.
    pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Bool(b) => b,
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::Null => false,
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    /// Detail lines; a single string is one line.
    pub fn lines<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
            Value::Null => Vec::new(),
            other => scalar_text(other).into_iter().collect(),
        })
    }

    /// Sequence that tolerates null.
    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
    }
}
