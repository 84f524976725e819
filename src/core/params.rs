//! Search parameters shared by all three tools.
//!
//! Field names on the wire (and in tool arguments) are the upstream API's
//! own camelCase names. Every field is optional and absence means "no
//! filter": nothing here substitutes a default value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chamber filter (`nameOfHouse`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
pub enum NameOfHouse {
    /// 衆議院: House of Representatives.
    #[serde(rename = "衆議院")]
    Representatives,
    /// 参議院: House of Councillors.
    #[serde(rename = "参議院")]
    Councillors,
    /// 両院: both houses.
    #[serde(rename = "両院")]
    Both,
    /// 両院協議会: joint conference committee.
    #[serde(rename = "両院協議会")]
    JointConference,
}

impl NameOfHouse {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Representatives => "衆議院",
            Self::Councillors => "参議院",
            Self::Both => "両院",
            Self::JointConference => "両院協議会",
        }
    }
}

/// Speaker role filter (`speakerRole`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
pub enum SpeakerRole {
    /// 証人: sworn witness.
    #[serde(rename = "証人")]
    Witness,
    /// 参考人: unsworn expert witness.
    #[serde(rename = "参考人")]
    Reference,
    /// 公述人: public hearing speaker.
    #[serde(rename = "公述人")]
    PublicHearing,
}

impl SpeakerRole {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Witness => "証人",
            Self::Reference => "参考人",
            Self::PublicHearing => "公述人",
        }
    }
}

/// Which part of the record the keyword search covers (`searchRange`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
pub enum SearchRange {
    /// 冒頭: the preamble (attendance lists and agenda).
    #[serde(rename = "冒頭")]
    Preamble,
    /// 本文: the body of the proceedings.
    #[serde(rename = "本文")]
    Body,
    /// 冒頭・本文: both.
    #[serde(rename = "冒頭・本文")]
    PreambleAndBody,
}

impl SearchRange {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preamble => "冒頭",
            Self::Body => "本文",
            Self::PreambleAndBody => "冒頭・本文",
        }
    }
}

/// Response format requested from the upstream (`recordPacking`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum RecordPacking {
    /// JSON body.
    #[default]
    Json,
    /// XML body.
    Xml,
}

impl RecordPacking {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// Structured search request accepted by every tool.
///
/// Rustdoc on each field is for readers of this crate; the `description`
/// attributes are what the host sees in the tool schema. Numeric fields
/// take any JSON integer so that range checks stay with the upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    /// 1-based position of the first record to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "取得開始位置（デフォルト1）", range(min = 1))]
    pub start_record: Option<i64>,

    /// Page size. The catalog publishes a per-tool ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "最大取得件数")]
    pub maximum_records: Option<i64>,

    /// Chamber filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "院名（衆議院、参議院、両院、両院協議会）")]
    pub name_of_house: Option<NameOfHouse>,

    /// Meeting name; space-separated terms are OR-ed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "会議名（例：本会議、予算委員会）。半角スペース区切りでOR検索")]
    pub name_of_meeting: Option<String>,

    /// Keywords in the speech body; space-separated terms are AND-ed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言内容の検索キーワード。半角スペース区切りでAND検索")]
    pub any: Option<String>,

    /// Speaker name; space-separated names are OR-ed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言者名。半角スペース区切りでOR検索")]
    pub speaker: Option<String>,

    /// Earliest meeting date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "開会日付／始点（YYYY-MM-DD形式）")]
    pub from: Option<String>,

    /// Latest meeting date. Not checked against `from`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "開会日付／終点（YYYY-MM-DD形式）")]
    pub until: Option<String>,

    /// Restrict to supplements and appendices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "追録・附録に限定（デフォルト：false）")]
    pub supplement_and_appendix: Option<bool>,

    /// Restrict to tables of contents and indexes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "目次・索引に限定（デフォルト：false）")]
    pub contents_and_index: Option<bool>,

    /// Part of the record the keywords are matched against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "検索対象箇所（冒頭、本文、冒頭・本文）")]
    pub search_range: Option<SearchRange>,

    /// Restrict to meetings held while the Diet is in recess.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "閉会中の会議録に限定（デフォルト：false）")]
    pub closing: Option<bool>,

    /// Speech number within the meeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言番号（0以上の整数）")]
    pub speech_number: Option<i64>,

    /// Speaker position, partial match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言者肩書き（部分一致）")]
    pub speaker_position: Option<String>,

    /// Speaker's parliamentary group, partial match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言者所属会派（部分一致）")]
    pub speaker_group: Option<String>,

    /// Witness role of the speaker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言者役割（証人、参考人、公述人）")]
    pub speaker_role: Option<SpeakerRole>,

    /// Speech identifier, e.g. `100105254X00119470520_000`.
    #[serde(rename = "speechID", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "発言ID（例：100105254X00119470520_000）")]
    pub speech_id: Option<String>,

    /// Meeting record identifier.
    #[serde(rename = "issueID", default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "会議録ID（21桁の英数字）")]
    pub issue_id: Option<String>,

    /// First Diet session number. Not checked against `session_to`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "国会回次From（開始回）")]
    pub session_from: Option<i64>,

    /// Last Diet session number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "国会回次To（終了回）")]
    pub session_to: Option<i64>,

    /// First issue number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "号数From（開始号）")]
    pub issue_from: Option<i64>,

    /// Last issue number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "号数To（終了号）")]
    pub issue_to: Option<i64>,

    /// Response format. Always sent; defaults to `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "レスポンス形式（json、xml。デフォルト：json）")]
    pub record_packing: Option<RecordPacking>,
}

impl SearchParameters {
    /// Decodes tool arguments. A missing argument object is an empty
    /// parameter set.
    ///
    /// # Errors
    ///
    /// Returns the deserializer error when a field has the wrong type or
    /// an enum value outside its catalog.
    pub fn from_arguments(
        arguments: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Result<Self, serde_json::Error> {
        arguments.map_or_else(
            || Ok(Self::default()),
            |map| serde_json::from_value(serde_json::Value::Object(map)),
        )
    }

    /// Format to request, falling back to JSON.
    #[must_use]
    pub fn packing(&self) -> RecordPacking {
        self.record_packing.unwrap_or_default()
    }
}
