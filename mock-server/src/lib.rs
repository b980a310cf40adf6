use std::{collections::VecDeque, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One response the server will give to an invite request, consumed FIFO.
#[derive(Clone, Debug)]
pub struct ScriptedResponse {
    pub status: u16,
    pub body: Value,
}

impl ScriptedResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// The answer given whenever the script queue is empty: the external
    /// service rejecting a payload shape it does not recognize.
    pub fn default_reject() -> Self {
        Self::new(400, json!({ "error": "unrecognized invite payload" }))
    }
}

/// Everything the server saw for one invite request.
#[derive(Clone, Debug, Serialize)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub authorization: Option<String>,
    pub api_key: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

/// Shared server state: the pending response script plus the request log.
#[derive(Debug, Default)]
pub struct InviteApi {
    script: Mutex<VecDeque<ScriptedResponse>>,
    received: Mutex<Vec<ReceivedRequest>>,
}

pub type SharedApi = Arc<InviteApi>;

impl InviteApi {
    pub fn shared() -> SharedApi {
        Arc::new(Self::default())
    }

    /// Queue responses for upcoming requests, in order.
    pub fn push_responses(&self, responses: impl IntoIterator<Item = ScriptedResponse>) {
        self.script.lock().extend(responses);
    }

    /// Snapshot of every request received so far.
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().clone()
    }

    fn record(&self, request: ReceivedRequest) {
        self.received.lock().push(request);
    }

    fn next_response(&self) -> ScriptedResponse {
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(ScriptedResponse::default_reject)
    }
}

pub fn app(api: SharedApi) -> Router {
    Router::new()
        .route("/api/invite", post(invite))
        .with_state(api)
}

pub async fn run(listener: TcpListener, api: SharedApi) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api)).await
}

async fn invite(
    State(api): State<SharedApi>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    api.record(ReceivedRequest {
        content_type: header(&headers, "content-type"),
        accept: header(&headers, "accept"),
        authorization: header(&headers, "authorization"),
        api_key: header(&headers, "x-api-key"),
        cookie: header(&headers, "cookie"),
        body,
    });

    let scripted = api.next_response();
    let status = StatusCode::from_u16(scripted.status).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(scripted.body))
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
