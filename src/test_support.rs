//! In-process stand-in for the Teams REST API.
//!
//! Binds to a random local port, keeps teams in memory, records every request
//! it sees and can be told to fail a given HTTP method.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use url::Url;

use crate::client::TeamsClient;
use crate::types::{Team, TeamFormData};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct MockState {
    teams: Vec<Team>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
    failures: HashMap<Method, (StatusCode, Value)>,
}

impl MockState {
    fn record(&mut self, method: Method, path: String, body: Option<Value>) -> Option<Response> {
        let failure = self
            .failures
            .get(&method)
            .map(|(status, body)| (*status, Json(body.clone())).into_response());
        self.requests.push(RecordedRequest { method, path, body });
        failure
    }
}

type Shared = Arc<Mutex<MockState>>;

pub struct MockApi {
    base_url: Url,
    state: Shared,
}

impl MockApi {
    pub async fn start(seed: Vec<Team>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let state: Shared = Arc::new(Mutex::new(MockState {
            teams: seed,
            next_id,
            ..MockState::default()
        }));

        let app = Router::new()
            .route("/api/Teams", get(list_teams).post(create_team))
            .route(
                "/api/Teams/{id}",
                get(get_team).put(update_team).delete(delete_team),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            state,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Answer every subsequent request with `method` using `status` and `body`.
    pub fn fail(&self, method: Method, status: StatusCode, body: Value) {
        self.state.lock().unwrap().failures.insert(method, (status, body));
    }

    pub fn recover(&self, method: &Method) {
        self.state.lock().unwrap().failures.remove(method);
    }

    pub fn teams(&self) -> Vec<Team> {
        self.state.lock().unwrap().teams.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn count(&self, method: &Method) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| &r.method == method)
            .count()
    }
}

/// Client for a local test server. Proxy settings from the environment are ignored.
pub fn client_for(base_url: &Url) -> TeamsClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    TeamsClient::with_http_client(base_url, http)
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

async fn list_teams(State(state): State<Shared>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record(Method::GET, "/api/Teams".to_string(), None) {
        return failure;
    }
    Json(state.teams.clone()).into_response()
}

async fn get_team(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record(Method::GET, format!("/api/Teams/{id}"), None) {
        return failure;
    }
    match state.teams.iter().find(|t| t.id == id) {
        Some(team) => Json(team.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_team(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) =
        state.record(Method::POST, "/api/Teams".to_string(), Some(body.clone()))
    {
        return failure;
    }
    let Ok(data) = serde_json::from_value::<TeamFormData>(body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let team = Team {
        id: state.next_id,
        name: data.name,
        city: data.city,
    };
    state.next_id += 1;
    state.teams.push(team.clone());
    (StatusCode::CREATED, Json(team)).into_response()
}

async fn update_team(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) =
        state.record(Method::PUT, format!("/api/Teams/{id}"), Some(body.clone()))
    {
        return failure;
    }
    let Ok(data) = serde_json::from_value::<TeamFormData>(body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    match state.teams.iter_mut().find(|t| t.id == id) {
        Some(team) => {
            team.name = data.name;
            team.city = data.city;
            Json(team.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_team(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = state.lock().unwrap();
    if let Some(failure) = state.record(Method::DELETE, format!("/api/Teams/{id}"), None) {
        return failure;
    }
    let before = state.teams.len();
    state.teams.retain(|t| t.id != id);
    if state.teams.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
