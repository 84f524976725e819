//! The fixed tool catalog.
//!
//! Each tool pins an upstream endpoint, a render mode, and the advisory
//! `maximumRecords` ceiling published in its parameter schema. The
//! ceiling is not enforced here; out-of-range values come back from the
//! upstream as a `message` envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::api::Endpoint;
use crate::core::SearchParameters;
use crate::render::RenderMode;

/// A tool exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// `search_meetings_simple`: meeting list with matching speakers.
    SearchMeetingsSimple,
    /// `search_meetings_full`: meetings with full speech bodies.
    SearchMeetingsFull,
    /// `search_speeches`: individual speeches.
    SearchSpeeches,
}

impl Tool {
    /// Every tool, in catalog order.
    pub const ALL: [Self; 3] = [
        Self::SearchMeetingsSimple,
        Self::SearchMeetingsFull,
        Self::SearchSpeeches,
    ];

    /// Tool name as exposed to the host.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SearchMeetingsSimple => "search_meetings_simple",
            Self::SearchMeetingsFull => "search_meetings_full",
            Self::SearchSpeeches => "search_speeches",
        }
    }

    /// Looks up a tool by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Upstream endpoint queried by this tool.
    #[must_use]
    pub const fn endpoint(self) -> Endpoint {
        match self {
            Self::SearchMeetingsSimple => Endpoint::MeetingList,
            Self::SearchMeetingsFull => Endpoint::Meeting,
            Self::SearchSpeeches => Endpoint::Speech,
        }
    }

    /// Render mode for this tool's results.
    #[must_use]
    pub const fn mode(self) -> RenderMode {
        match self {
            Self::SearchMeetingsSimple => RenderMode::MeetingSummary,
            Self::SearchMeetingsFull => RenderMode::MeetingFull,
            Self::SearchSpeeches => RenderMode::SpeechFlat,
        }
    }

    /// Largest page size the upstream accepts for this tool. Full meeting
    /// records embed every speech body, hence the lower ceiling.
    #[must_use]
    pub const fn max_records(self) -> u32 {
        match self {
            Self::SearchMeetingsFull => 10,
            Self::SearchMeetingsSimple | Self::SearchSpeeches => 100,
        }
    }

    /// Page size the upstream applies when `maximumRecords` is absent.
    #[must_use]
    pub const fn default_records(self) -> u32 {
        match self {
            Self::SearchMeetingsFull => 3,
            Self::SearchMeetingsSimple | Self::SearchSpeeches => 30,
        }
    }

    /// Human-readable description shown to the host.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SearchMeetingsSimple => {
                "国会の会議を検索します（会議単位簡易出力）。会議の基本情報と該当する発言のリストを取得します。最大100件まで取得可能。"
            }
            Self::SearchMeetingsFull => {
                "国会の会議を検索します（会議単位出力）。会議の全発言本文を含む詳細データを取得します。最大10件まで取得可能。"
            }
            Self::SearchSpeeches => {
                "国会の発言を検索します（発言単位出力）。個別の発言本文を取得します。最大100件まで取得可能。"
            }
        }
    }

    /// JSON Schema for this tool's arguments.
    ///
    /// Generated from [`SearchParameters`] and patched with this tool's
    /// `maximumRecords` bounds.
    #[must_use]
    pub fn input_schema(self) -> Map<String, Value> {
        let mut schema = match Value::from(schemars::schema_for!(SearchParameters)) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        schema.remove("$schema");
        schema.remove("title");
        schema.insert("type".to_string(), json!("object"));

        let properties = schema
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(properties) = properties {
            properties.insert(
                "maximumRecords".to_string(),
                json!({
                    "type": "integer",
                    "minimum": 1,
                    "maximum": self.max_records(),
                    "description": format!(
                        "最大取得件数（1-{}、デフォルト{}）",
                        self.max_records(),
                        self.default_records()
                    ),
                }),
            );
        }
        schema
    }

    /// Provider-agnostic definition of this tool.
    #[must_use]
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: Value::Object(self.input_schema()),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tool definition as listed to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match [`Tool::from_name`]).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema object describing the tool's parameters.
    pub parameters: Value,
}

/// Definitions for the whole catalog.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    Tool::ALL.into_iter().map(Tool::definition).collect()
}
