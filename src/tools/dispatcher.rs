//! Tool dispatch: name → decode → encode → fetch → render.
//!
//! Every failure inside a known tool becomes rendered text so the host
//! always receives an answer it can relay. Only an unknown tool name is
//! returned as an error, since it means the host and catalog disagree.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::catalog::Tool;
use crate::api::{SearchApi, query};
use crate::core::SearchParameters;
use crate::error::{ClientError, DispatchError, ToolError};
use crate::render::{UNKNOWN_ERROR, render, render_fault};

/// Routes tool calls to the search API and renders the result.
#[derive(Clone)]
pub struct ToolDispatcher {
    api: Arc<dyn SearchApi>,
}

impl ToolDispatcher {
    /// Creates a dispatcher over `api`.
    #[must_use]
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self { api }
    }

    /// Runs the named tool with raw JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownTool`] if `name` is not in the
    /// catalog. Every other failure is rendered into the returned text.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<String, DispatchError> {
        let tool = Tool::from_name(name).ok_or_else(|| DispatchError::UnknownTool {
            name: name.to_string(),
        })?;

        let outcome = match SearchParameters::from_arguments(arguments) {
            Ok(params) => self.run(tool, &params).await,
            Err(e) => Err(ToolError::InvalidArguments {
                message: e.to_string(),
            }),
        };

        Ok(outcome.unwrap_or_else(|err| {
            warn!(%tool, error = %err, "tool call failed");
            fault_text(&err)
        }))
    }

    /// Runs `tool` with decoded parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Client`] when the upstream call fails.
    pub async fn run(&self, tool: Tool, params: &SearchParameters) -> Result<String, ToolError> {
        let query = query::encode(params);
        debug!(%tool, endpoint = %tool.endpoint(), %query, "dispatching tool call");

        let envelope = self.api.fetch(tool.endpoint(), &query).await?;
        Ok(render(&envelope, tool.mode()))
    }
}

fn fault_text(err: &ToolError) -> String {
    match err {
        ToolError::Client(ClientError::MalformedBody { .. }) => render_fault(UNKNOWN_ERROR),
        other => render_fault(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;
    use crate::core::SearchEnvelope;
    use crate::render::NO_RESULTS;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Stub API that records each request and replays one canned outcome.
    struct StubApi {
        outcome: fn() -> Result<SearchEnvelope, ClientError>,
        calls: Mutex<Vec<(Endpoint, String)>>,
    }

    impl StubApi {
        fn new(outcome: fn() -> Result<SearchEnvelope, ClientError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(Endpoint, String)> {
            self.calls
                .lock()
                .map(|c| c.clone())
                .unwrap_or_else(|e| panic!("poisoned: {e}"))
        }
    }

    #[async_trait]
    impl SearchApi for StubApi {
        async fn fetch(
            &self,
            endpoint: Endpoint,
            query: &str,
        ) -> Result<SearchEnvelope, ClientError> {
            self.calls
                .lock()
                .unwrap_or_else(|e| panic!("poisoned: {e}"))
                .push((endpoint, query.to_string()));
            (self.outcome)()
        }
    }

    fn args(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => unreachable!(),
        }
    }

    fn empty() -> Result<SearchEnvelope, ClientError> {
        Ok(SearchEnvelope::default())
    }

    #[tokio::test]
    async fn test_routes_to_endpoint_once() {
        let api = StubApi::new(empty);
        let dispatcher = ToolDispatcher::new(api.clone());

        let text = dispatcher
            .dispatch("search_meetings_full", args(json!({ "issueID": "MEETING001" })))
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));

        assert_eq!(text, NO_RESULTS);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Endpoint::Meeting);
        assert_eq!(calls[0].1, "issueID=MEETING001&recordPacking=json");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error() {
        let api = StubApi::new(empty);
        let dispatcher = ToolDispatcher::new(api.clone());

        let result = dispatcher.dispatch("search_bills", None).await;
        assert!(matches!(result, Err(DispatchError::UnknownTool { ref name }) if name == "search_bills"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_http_status_rendered() {
        let api = StubApi::new(|| {
            Err(ClientError::HttpStatus {
                code: 503,
                status_text: "Service Unavailable".to_string(),
            })
        });
        let dispatcher = ToolDispatcher::new(api);

        let text = dispatcher
            .dispatch("search_speeches", None)
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
        assert_eq!(
            text,
            "エラーが発生しました: API request failed: 503 Service Unavailable"
        );
    }

    #[tokio::test]
    async fn test_transport_rendered() {
        let api = StubApi::new(|| {
            Err(ClientError::Transport {
                message: "dns error".to_string(),
            })
        });
        let text = ToolDispatcher::new(api)
            .dispatch("search_meetings_simple", None)
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
        assert!(text.starts_with("エラーが発生しました: "));
        assert!(text.contains("dns error"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_unknown_error() {
        let api = StubApi::new(|| {
            Err(ClientError::MalformedBody {
                message: "expected value at line 1 column 1".to_string(),
            })
        });
        let text = ToolDispatcher::new(api)
            .dispatch("search_speeches", None)
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
        assert_eq!(text, "エラーが発生しました: 不明なエラー");
    }

    #[tokio::test]
    async fn test_bad_arguments_rendered_without_fetch() {
        let api = StubApi::new(empty);
        let dispatcher = ToolDispatcher::new(api.clone());

        let text = dispatcher
            .dispatch("search_speeches", args(json!({ "maximumRecords": "many" })))
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
        assert!(text.starts_with("エラーが発生しました: invalid arguments:"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ceiling_not_enforced_locally() {
        let api = StubApi::new(empty);
        let dispatcher = ToolDispatcher::new(api.clone());

        dispatcher
            .dispatch("search_meetings_full", args(json!({ "maximumRecords": 50 })))
            .await
            .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
        assert!(api.calls()[0].1.contains("maximumRecords=50"));
    }

    #[tokio::test]
    async fn test_out_of_range_numbers_forwarded() {
        let api = StubApi::new(empty);
        let dispatcher = ToolDispatcher::new(api.clone());

        for arguments in [
            json!({ "maximumRecords": -1 }),
            json!({ "sessionFrom": -5 }),
            json!({ "maximumRecords": 5_000_000_000_i64 }),
        ] {
            let text = dispatcher
                .dispatch("search_speeches", args(arguments))
                .await
                .unwrap_or_else(|e| panic!("dispatch failed: {e}"));
            assert_eq!(text, NO_RESULTS);
        }

        let queries: Vec<String> = api.calls().into_iter().map(|(_, q)| q).collect();
        assert_eq!(
            queries,
            vec![
                "maximumRecords=-1&recordPacking=json",
                "sessionFrom=-5&recordPacking=json",
                "maximumRecords=5000000000&recordPacking=json",
            ]
        );
    }
}
