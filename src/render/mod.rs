//! Rendering of search envelopes into tool text.
//!
//! One renderer serves all three modes. [`RenderMode::layout`] is the
//! per-mode table of which record sequence is read (and, for meetings, how
//! much of each nested speech is shown) and which delimiter closes a
//! record block; the
//! truncation rule and URL lines are shared.
//!
//! Order of checks matters: an envelope carrying `message` is an error
//! block even when records are also present, and only then is an empty
//! record sequence reported as "no results".

mod truncate;

use std::fmt::Write as FmtWrite;

use crate::core::{MeetingRecord, MeetingSpeech, SearchEnvelope, SpeechRecord};

pub use truncate::{BODY_LIMIT, TRUNCATION_MARKER, truncate_body};

/// Rendered when the mode's record sequence is empty.
pub const NO_RESULTS: &str = "検索結果が見つかりませんでした。";

/// Prefix of a semantic-error block.
const ERROR_PREFIX: &str = "エラー: ";

/// Prefix of a caught pipeline failure.
const FAULT_PREFIX: &str = "エラーが発生しました: ";

/// Detail shown for a body that could not be decoded.
pub const UNKNOWN_ERROR: &str = "不明なエラー";

/// Rendering shape, fixed per tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Meetings with a compact `[order] speaker` list.
    MeetingSummary,
    /// Meetings with full nested speech blocks.
    MeetingFull,
    /// Flat speech records.
    SpeechFlat,
}

/// Which record sequence a mode reads, and for meetings how the nested
/// speeches are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Records {
    Meetings(NestedSpeeches),
    Speeches,
}

/// How nested speeches inside a meeting are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NestedSpeeches {
    /// One `[order] speaker` line each.
    Compact,
    /// Annotated header, truncated body and URL.
    Full,
}

/// Per-mode rendering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    records: Records,
    delimiter: &'static str,
}

impl RenderMode {
    const fn layout(self) -> Layout {
        match self {
            Self::MeetingSummary => Layout {
                records: Records::Meetings(NestedSpeeches::Compact),
                delimiter: "---\n",
            },
            Self::MeetingFull => Layout {
                records: Records::Meetings(NestedSpeeches::Full),
                delimiter: "===\n\n",
            },
            Self::SpeechFlat => Layout {
                records: Records::Speeches,
                delimiter: "---\n",
            },
        }
    }

    /// Line that closes each record block in this mode.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        self.layout().delimiter
    }
}

/// Renders `envelope` for `mode`.
#[must_use]
pub fn render(envelope: &SearchEnvelope, mode: RenderMode) -> String {
    if let Some(message) = envelope.message.as_deref().filter(|m| !m.is_empty()) {
        return render_error(message, &envelope.details);
    }

    let layout = mode.layout();
    let count = match layout.records {
        Records::Meetings(_) => envelope.meeting_record.as_ref().map_or(0, Vec::len),
        Records::Speeches => envelope.speech_record.as_ref().map_or(0, Vec::len),
    };
    if count == 0 {
        return NO_RESULTS.to_string();
    }

    let mut out = String::new();
    write_header(&mut out, envelope);

    match layout.records {
        Records::Meetings(nested) => {
            for (index, meeting) in envelope.meeting_record.iter().flatten().enumerate() {
                write_meeting(&mut out, index + 1, meeting, nested);
                out.push_str(layout.delimiter);
            }
        }
        Records::Speeches => {
            for (index, speech) in envelope.speech_record.iter().flatten().enumerate() {
                write_speech(&mut out, index + 1, speech);
                out.push_str(layout.delimiter);
            }
        }
    }

    out
}

/// Error block for an upstream `message`, one detail per line.
#[must_use]
pub fn render_error(message: &str, details: &[String]) -> String {
    format!("{ERROR_PREFIX}{message}\n{}", details.join("\n"))
}

/// Text returned for a failure caught anywhere in the tool pipeline.
#[must_use]
pub fn render_fault(detail: &str) -> String {
    format!("{FAULT_PREFIX}{detail}")
}

fn write_header(out: &mut String, envelope: &SearchEnvelope) {
    let _ = writeln!(
        out,
        "検索結果: {}件中 {}件を表示",
        display_count(envelope.number_of_records),
        display_count(envelope.number_of_return),
    );
    if let Some(next) = envelope.next_position() {
        let _ = writeln!(out, "次の結果を取得するには startRecord={next} を指定してください");
    }
    out.push('\n');
}

fn display_count(count: Option<u64>) -> String {
    count.map_or_else(|| "-".to_string(), |n| n.to_string())
}

const fn closing_mark(closing: bool) -> &'static str {
    if closing { "（閉会中）" } else { "" }
}

/// `name（position）［group］《role》`, omitting absent annotations.
fn write_speaker(
    out: &mut String,
    speaker: &str,
    position: Option<&str>,
    group: Option<&str>,
    role: Option<&str>,
) {
    out.push_str(speaker);
    if let Some(position) = position {
        let _ = write!(out, "（{position}）");
    }
    if let Some(group) = group {
        let _ = write!(out, "［{group}］");
    }
    if let Some(role) = role {
        let _ = write!(out, "《{role}》");
    }
    out.push('\n');
}

fn write_meeting(out: &mut String, index: usize, meeting: &MeetingRecord, nested: NestedSpeeches) {
    let _ = writeln!(
        out,
        "【{index}】{} {} 第{}号",
        meeting.name_of_house, meeting.name_of_meeting, meeting.issue
    );
    let _ = writeln!(out, "日付: {}{}", meeting.date, closing_mark(meeting.closing));
    let _ = writeln!(out, "回次: 第{}回国会", meeting.session);
    let _ = writeln!(out, "会議録ID: {}", meeting.issue_id);
    let _ = writeln!(out, "会議URL: {}", meeting.meeting_url);
    if let Some(pdf) = &meeting.pdf_url {
        let _ = writeln!(out, "PDF: {pdf}");
    }

    match nested {
        NestedSpeeches::Compact => {
            if !meeting.speech_record.is_empty() {
                out.push_str("該当発言:\n");
                for speech in &meeting.speech_record {
                    let _ = writeln!(out, "  - [{}] {}", speech.speech_order, speech.speaker);
                }
            }
        }
        NestedSpeeches::Full => {
            out.push('\n');
            if !meeting.speech_record.is_empty() {
                out.push_str("【発言記録】\n");
                for speech in &meeting.speech_record {
                    write_nested_speech(out, speech);
                }
            }
        }
    }
}

fn write_nested_speech(out: &mut String, speech: &MeetingSpeech) {
    let _ = write!(out, "\n[{}] ", speech.speech_order);
    write_speaker(
        out,
        &speech.speaker,
        speech.speaker_position.as_deref(),
        speech.speaker_group.as_deref(),
        speech.speaker_role.as_deref(),
    );
    if let Some(body) = &speech.speech {
        let _ = writeln!(out, "{}", truncate_body(body, BODY_LIMIT));
    }
    let _ = writeln!(out, "発言URL: {}", speech.speech_url);
    out.push_str("－－－\n");
}

fn write_speech(out: &mut String, index: usize, speech: &SpeechRecord) {
    let _ = write!(out, "【{index}】");
    write_speaker(
        out,
        &speech.speaker,
        speech.speaker_position.as_deref(),
        speech.speaker_group.as_deref(),
        speech.speaker_role.as_deref(),
    );
    let _ = writeln!(
        out,
        "{} {} 第{}号",
        speech.name_of_house, speech.name_of_meeting, speech.issue
    );
    let _ = writeln!(
        out,
        "日付: {}{} 発言番号: {}",
        speech.date,
        closing_mark(speech.closing),
        speech.speech_order
    );
    let _ = writeln!(out, "回次: 第{}回国会", speech.session);

    out.push_str("\n発言内容:\n");
    let _ = writeln!(out, "{}\n", truncate_body(&speech.speech, BODY_LIMIT));

    let _ = writeln!(out, "発言ID: {}", speech.speech_id);
    let _ = writeln!(out, "会議録ID: {}", speech.issue_id);
    let _ = writeln!(out, "発言URL: {}", speech.speech_url);
    let _ = writeln!(out, "会議URL: {}", speech.meeting_url);
    if let Some(pdf) = &speech.pdf_url {
        let _ = writeln!(out, "PDF: {pdf}");
    }
}
