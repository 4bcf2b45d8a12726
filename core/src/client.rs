//! Request builder, response parser and one-call operations for the
//! monday.com boards API.
//!
//! # Design
//! `MondayClient` holds only its token, endpoint and transport, fixed at
//! construction. Each operation is split into a `build_*` method producing an
//! `HttpRequest` and a `parse_*` method consuming an `HttpResponse`; the
//! one-call methods (`get_boards`, ...) run both around a single
//! `Transport::execute`. Hosts that do their own I/O can construct the client
//! with `()` as the transport and call the pairs directly.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::ClientConfig;
use crate::error::MondayError;
use crate::graphql::{
    BoardsData, ColumnsBoard, GraphQlRequest, GraphQlResponse, ItemsPageBoard, BOARDS_QUERY,
    BOARD_COLUMNS_QUERY, BOARD_ITEMS_QUERY, BOARD_ITEMS_WITH_COLUMN_VALUES_QUERY,
};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use crate::types::{select_connected_items, Board, Column, ConnectedItem, Item, ItemWithColumnValues};

/// Synchronous client for the monday.com GraphQL API.
pub struct MondayClient<T> {
    api_token: String,
    base_url: String,
    transport: T,
}

impl<T> MondayClient<T> {
    /// Fails with `MondayError::Configuration` when the token is missing or
    /// blank. Performs no I/O.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, MondayError> {
        let api_token = config
            .api_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                MondayError::Configuration(
                    "API token is required. Please set the MONDAY_API_TOKEN environment variable."
                        .to_string(),
                )
            })?;

        Ok(Self {
            api_token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_get_boards(&self) -> Result<HttpRequest, MondayError> {
        self.graphql_request(BOARDS_QUERY, None)
    }

    pub fn build_get_items_from_board(&self, board_id: &str) -> Result<HttpRequest, MondayError> {
        self.graphql_request(BOARD_ITEMS_QUERY, Some(board_variables(board_id)))
    }

    pub fn build_fetch_board_columns(&self, board_id: &str) -> Result<HttpRequest, MondayError> {
        self.graphql_request(BOARD_COLUMNS_QUERY, Some(board_variables(board_id)))
    }

    pub fn build_fetch_connected_boards_column_data(
        &self,
        board_id: &str,
    ) -> Result<HttpRequest, MondayError> {
        self.graphql_request(
            BOARD_ITEMS_WITH_COLUMN_VALUES_QUERY,
            Some(board_variables(board_id)),
        )
    }

    pub fn parse_get_boards(&self, response: HttpResponse) -> Result<Vec<Board>, MondayError> {
        let data: BoardsData<Board> = parse_envelope(response)?;
        Ok(data.boards)
    }

    pub fn parse_get_items_from_board(
        &self,
        board_id: &str,
        response: HttpResponse,
    ) -> Result<Vec<Item>, MondayError> {
        let data: BoardsData<ItemsPageBoard<Item>> = parse_envelope(response)?;
        Ok(first_board(board_id, data)?.items_page.items)
    }

    pub fn parse_fetch_board_columns(
        &self,
        board_id: &str,
        response: HttpResponse,
    ) -> Result<Vec<Column>, MondayError> {
        let data: BoardsData<ColumnsBoard<Column>> = parse_envelope(response)?;
        Ok(first_board(board_id, data)?.columns)
    }

    pub fn parse_fetch_connected_boards_column_data(
        &self,
        board_id: &str,
        column_id: &str,
        response: HttpResponse,
    ) -> Result<Vec<ConnectedItem>, MondayError> {
        let data: BoardsData<ItemsPageBoard<ItemWithColumnValues>> = parse_envelope(response)?;
        let items = first_board(board_id, data)?.items_page.items;
        Ok(select_connected_items(items, column_id))
    }

    fn graphql_request(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<HttpRequest, MondayError> {
        let body = serde_json::to_string(&GraphQlRequest { query, variables })
            .map_err(|e| MondayError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("authorization".to_string(), self.api_token.clone()),
            ],
            body: Some(body),
        })
    }
}

impl<T: Transport> MondayClient<T> {
    /// All boards visible to the token, in remote order.
    pub fn get_boards(&self) -> Result<Vec<Board>, MondayError> {
        let request = self.build_get_boards()?;
        let response = self.send("get_boards", request)?;
        self.parse_get_boards(response)
    }

    /// First page of items on `board_id`.
    pub fn get_items_from_board(&self, board_id: &str) -> Result<Vec<Item>, MondayError> {
        let request = self.build_get_items_from_board(board_id)?;
        let response = self.send("get_items_from_board", request)?;
        self.parse_get_items_from_board(board_id, response)
    }

    pub fn fetch_board_columns(&self, board_id: &str) -> Result<Vec<Column>, MondayError> {
        let request = self.build_fetch_board_columns(board_id)?;
        let response = self.send("fetch_board_columns", request)?;
        self.parse_fetch_board_columns(board_id, response)
    }

    /// Items on the first page of `board_id` whose `column_id` cell is a
    /// board relation.
    pub fn fetch_connected_boards_column_data(
        &self,
        board_id: &str,
        column_id: &str,
    ) -> Result<Vec<ConnectedItem>, MondayError> {
        let request = self.build_fetch_connected_boards_column_data(board_id)?;
        let response = self.send("fetch_connected_boards_column_data", request)?;
        self.parse_fetch_connected_boards_column_data(board_id, column_id, response)
    }

    fn send(&self, operation: &str, request: HttpRequest) -> Result<HttpResponse, MondayError> {
        tracing::debug!(operation, url = %request.url, "sending GraphQL request");
        let response = self.transport.execute(request)?;
        tracing::debug!(operation, status = response.status, "received GraphQL response");
        Ok(response)
    }
}

fn board_variables(board_id: &str) -> Value {
    json!({ "boardId": [board_id] })
}

/// Map the HTTP status and GraphQL envelope to `data` or an error.
fn parse_envelope<D: DeserializeOwned>(response: HttpResponse) -> Result<D, MondayError> {
    if !response.is_success() {
        return Err(TransportError::new(format!(
            "Request failed with status code {}: {}",
            response.status, response.body
        ))
        .into());
    }

    let envelope: GraphQlResponse<Value> = serde_json::from_str(&response.body)
        .map_err(|e| MondayError::Api(format!("unreadable response body: {e}")))?;

    if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(count = errors.len(), %message, "GraphQL response carried errors");
        return Err(MondayError::Api(message));
    }

    let data = envelope.data.ok_or_else(|| {
        MondayError::Api(format!("response contained no data: {}", response.body))
    })?;
    serde_json::from_value(data)
        .map_err(|e| MondayError::Api(format!("unexpected response shape: {e}")))
}

fn first_board<B>(board_id: &str, data: BoardsData<B>) -> Result<B, MondayError> {
    data.boards
        .into_iter()
        .next()
        .ok_or_else(|| MondayError::NotFound(format!("board {board_id} was not returned")))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned results and records every request it is handed.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn replying(body: &str) -> Self {
            let transport = Self::default();
            transport.replies.borrow_mut().push_back(Ok(ok(body)));
            transport
        }

        fn failing(message: &str) -> Self {
            let transport = Self::default();
            transport
                .replies
                .borrow_mut()
                .push_back(Err(TransportError::new(message)));
            transport
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn client(transport: ScriptedTransport) -> MondayClient<ScriptedTransport> {
        MondayClient::new(
            ClientConfig::new("test-token").with_base_url("http://localhost:3000/v2"),
            transport,
        )
        .unwrap()
    }

    fn body_of(request: &HttpRequest) -> Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn new_rejects_missing_token_without_io() {
        let transport = ScriptedTransport::default();
        let err = MondayClient::new(ClientConfig::default(), &transport)
            .err()
            .unwrap();
        assert!(matches!(err, MondayError::Configuration(_)));
        assert!(transport.requests.borrow().is_empty());
    }

    #[test]
    fn new_rejects_blank_token() {
        let err = MondayClient::new(ClientConfig::new("   "), ()).err().unwrap();
        assert!(matches!(err, MondayError::Configuration(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client =
            MondayClient::new(ClientConfig::new("t").with_base_url("http://localhost:3000/v2/"), ())
                .unwrap();
        assert_eq!(client.build_get_boards().unwrap().url, "http://localhost:3000/v2");
    }

    #[test]
    fn build_get_boards_produces_correct_request() {
        let req = client(ScriptedTransport::default()).build_get_boards().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/v2");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.header("Authorization"), Some("test-token"));
        assert_eq!(body_of(&req), json!({ "query": BOARDS_QUERY }));
    }

    #[test]
    fn board_queries_send_id_as_variable() {
        let c = client(ScriptedTransport::default());
        for req in [
            c.build_get_items_from_board("123").unwrap(),
            c.build_fetch_board_columns("123").unwrap(),
            c.build_fetch_connected_boards_column_data("123").unwrap(),
        ] {
            let body = body_of(&req);
            assert_eq!(body["variables"], json!({ "boardId": ["123"] }));
            assert!(!body["query"].as_str().unwrap().contains("123"));
        }
    }

    #[test]
    fn authorization_is_not_bearer_prefixed() {
        let req = client(ScriptedTransport::default()).build_get_boards().unwrap();
        assert!(!req.header("authorization").unwrap().starts_with("Bearer"));
    }

    #[test]
    fn get_boards_returns_remote_order() {
        let c = client(ScriptedTransport::replying(
            r#"{"data":{"boards":[{"id":"2","name":"Second"},{"id":"1","name":"First"}]}}"#,
        ));
        let boards = c.get_boards().unwrap();
        assert_eq!(boards[0].id, "2");
        assert_eq!(boards[1].id, "1");
        assert_eq!(c.transport().requests.borrow().len(), 1);
    }

    #[test]
    fn get_boards_empty_is_not_an_error() {
        let c = client(ScriptedTransport::replying(r#"{"data":{"boards":[]}}"#));
        assert!(c.get_boards().unwrap().is_empty());
    }

    #[test]
    fn get_items_from_board_returns_items_in_order() {
        let c = client(ScriptedTransport::replying(
            r#"{"data":{"boards":[{"items_page":{"items":[{"id":"1","name":"A"},{"id":"2","name":"B"}]}}]}}"#,
        ));
        let items = c.get_items_from_board("123").unwrap();
        assert_eq!(
            items,
            vec![
                Item { id: "1".to_string(), name: "A".to_string() },
                Item { id: "2".to_string(), name: "B".to_string() },
            ]
        );
    }

    #[test]
    fn get_items_from_missing_board_is_not_found() {
        let c = client(ScriptedTransport::replying(r#"{"data":{"boards":[]}}"#));
        let err = c.get_items_from_board("404").unwrap_err();
        assert!(matches!(err, MondayError::NotFound(ref msg) if msg.contains("404")));
    }

    #[test]
    fn fetch_board_columns_reads_type() {
        let c = client(ScriptedTransport::replying(
            r#"{"data":{"boards":[{"columns":[{"id":"name","title":"Name","type":"name"},{"id":"link_col","title":"Link","type":"board_relation"}]}]}}"#,
        ));
        let columns = c.fetch_board_columns("123").unwrap();
        assert_eq!(columns.len(), 2);
        assert!(columns[1].is_board_relation());
    }

    #[test]
    fn fetch_board_columns_missing_board_is_not_found() {
        let c = client(ScriptedTransport::replying(r#"{"data":{"boards":[]}}"#));
        assert!(matches!(
            c.fetch_board_columns("404").unwrap_err(),
            MondayError::NotFound(_)
        ));
    }

    #[test]
    fn connected_data_keeps_only_relation_items() {
        let c = client(ScriptedTransport::replying(
            r#"{"data":{"boards":[{"items_page":{"items":[
                {"id":"1","name":"A","column_values":[{"id":"link_col","type":"board_relation","value":"{\"linkedPulseIds\":[]}","column":{"title":"Link"}}]},
                {"id":"2","name":"B","column_values":[{"id":"status","type":"status","value":null,"column":{"title":"Status"}}]}
            ]}}]}}"#,
        ));
        let connected = c.fetch_connected_boards_column_data("123", "link_col").unwrap();
        assert_eq!(
            connected,
            vec![ConnectedItem { id: "1".to_string(), name: "A".to_string() }]
        );
    }

    #[test]
    fn connected_data_missing_board_is_not_found() {
        let c = client(ScriptedTransport::replying(r#"{"data":{"boards":[]}}"#));
        assert!(matches!(
            c.fetch_connected_boards_column_data("404", "link_col").unwrap_err(),
            MondayError::NotFound(_)
        ));
    }

    #[test]
    fn transport_failure_keeps_description() {
        let c = client(ScriptedTransport::failing("connection refused"));
        let err = c.get_boards().unwrap_err();
        assert!(matches!(err, MondayError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn transport_failure_surfaces_on_every_operation() {
        let results = [
            client(ScriptedTransport::failing("refused")).get_items_from_board("1").err(),
            client(ScriptedTransport::failing("refused")).fetch_board_columns("1").err(),
            client(ScriptedTransport::failing("refused"))
                .fetch_connected_boards_column_data("1", "c")
                .err(),
        ];
        for err in results {
            let err = err.unwrap();
            assert!(matches!(err, MondayError::Transport(_)));
            assert!(err.to_string().contains("refused"), "{err}");
        }
    }

    #[test]
    fn non_success_status_is_transport_error() {
        let c = client(ScriptedTransport::default());
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: "Not Authenticated".to_string(),
        };
        let err = c.parse_get_boards(response).unwrap_err();
        assert!(matches!(err, MondayError::Transport(_)));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn graphql_errors_become_api_error() {
        let c = client(ScriptedTransport::default());
        let err = c
            .parse_get_boards(ok(
                r#"{"errors":[{"message":"first"},{"message":"second"}],"data":{"boards":null}}"#,
            ))
            .unwrap_err();
        match err {
            MondayError::Api(message) => assert_eq!(message, "first; second"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let c = client(ScriptedTransport::default());
        let boards = c
            .parse_get_boards(ok(r#"{"errors":[],"data":{"boards":[]}}"#))
            .unwrap();
        assert!(boards.is_empty());
    }

    #[test]
    fn missing_data_is_api_error() {
        let c = client(ScriptedTransport::default());
        assert!(matches!(
            c.parse_get_boards(ok("{}")).unwrap_err(),
            MondayError::Api(_)
        ));
    }

    #[test]
    fn missing_data_keeps_remote_error_detail() {
        let c = client(ScriptedTransport::default());
        let err = c
            .parse_get_boards(ok(
                r#"{"error_code":"ComplexityException","error_message":"Complexity budget exhausted","status_code":429}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, MondayError::Api(_)));
        assert!(err.to_string().contains("Complexity budget exhausted"), "{err}");
    }

    #[test]
    fn null_error_locations_keep_message() {
        let c = client(ScriptedTransport::default());
        let err = c
            .parse_get_boards(ok(r#"{"errors":[{"message":"Bad id","locations":null}],"data":null}"#))
            .unwrap_err();
        match err {
            MondayError::Api(message) => assert_eq!(message, "Bad id"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn bad_json_is_api_error() {
        let c = client(ScriptedTransport::default());
        assert!(matches!(
            c.parse_get_boards(ok("not json")).unwrap_err(),
            MondayError::Api(_)
        ));
    }
}
