//! The three upstream search endpoints.

/// Upstream endpoint, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Meeting list: meetings with minimal nested speech entries.
    MeetingList,
    /// Meeting detail: meetings with full nested speech bodies.
    Meeting,
    /// Speech search: flat speech records.
    Speech,
}

impl Endpoint {
    /// Path segment under the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::MeetingList => "meeting_list",
            Self::Meeting => "meeting",
            Self::Speech => "speech",
        }
    }

    /// Full request URL for an encoded query string.
    #[must_use]
    pub fn url(self, base_url: &str, query: &str) -> String {
        format!("{base_url}/{}?{query}", self.path())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(
            Endpoint::MeetingList.url("https://kokkai.ndl.go.jp/api", "recordPacking=json"),
            "https://kokkai.ndl.go.jp/api/meeting_list?recordPacking=json"
        );
        assert_eq!(Endpoint::Speech.to_string(), "speech");
    }
}
