//! An in-process stand-in for the Monitor 360 REST API.
//!
//! Each test gets its own server on an ephemeral port. Every request is
//! recorded so tests can assert on exactly what the client sent.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use client::{ApiClient, MemoryStore};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

pub const JWT_SECRET: &str = "stub-secret";

/// Accounts the stub accepts at `POST /login`: username, password, role claim.
pub const USERS: &[(&str, &str, &str)] = &[
    ("admin", "admin-pass", "admin"),
    ("inst", "inst-pass", "Institution"),
    ("field", "field-pass", "investigator"),
];

/// Account whose login succeeds but whose token is not a JWT.
pub const OPAQUE_USER: (&str, &str) = ("opaque", "opaque-pass");

/// Sign a claim set the way the backend does.
pub fn mint_token(role: &str, sub: &str, username: &str, exp: i64) -> String {
    let claims = json!({ "role": role, "sub": sub, "username": username, "exp": exp });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("token encodes")
}

/// One hour from now.
pub fn fresh_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

#[derive(Debug, Clone, Default)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub bearer: Option<String>,
    pub body: Value,
    /// Text parts of a multipart body.
    pub fields: HashMap<String, String>,
    /// File parts of a multipart body: field name, file name, size.
    pub files: Vec<(String, String, usize)>,
}

#[derive(Default)]
pub struct StubState {
    requests: Mutex<Vec<Recorded>>,
    cases: Mutex<Vec<Value>>,
    reports: Mutex<Vec<Value>>,
    case_types: Mutex<Vec<Value>>,
    profile: Mutex<Value>,
    /// When set, every authenticated endpoint answers 401.
    reject_tokens: AtomicBool,
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl StubState {
    fn record(&self, entry: Recorded) {
        lock(&self.requests).push(entry);
    }
}

/// Handle to a running stub.
pub struct Stub {
    pub addr: SocketAddr,
    pub state: Arc<StubState>,
}

impl Stub {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client pointed at this stub, plus a handle on its session store.
    pub fn client(&self) -> (ApiClient, MemoryStore) {
        let store = MemoryStore::new();
        let api = ApiClient::new(&self.base_url(), Arc::new(store.clone()));
        (api, store)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        lock(&self.state.requests).clone()
    }

    /// The most recent request with this method and path.
    pub fn last(&self, method: &str, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }

    pub fn seed_cases(&self, cases: Vec<Value>) {
        *lock(&self.state.cases) = cases;
    }

    pub fn seed_reports(&self, reports: Vec<Value>) {
        *lock(&self.state.reports) = reports;
    }

    pub fn seed_case_types(&self, types: Vec<Value>) {
        *lock(&self.state.case_types) = types;
    }

    pub fn seed_profile(&self, profile: Value) {
        *lock(&self.state.profile) = profile;
    }

    pub fn reject_tokens(&self, on: bool) {
        self.state.reject_tokens.store(on, Ordering::SeqCst);
    }
}

/// A case shaped like the backend's `GET /cases/{id}` response.
pub fn sample_case(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "case_id": format!("HRM-{id}"),
        "title": { "en": "Detention of journalists", "ar": "احتجاز صحفيين" },
        "description": { "en": "Three journalists held without charge.", "ar": "احتجاز ثلاثة صحفيين دون تهمة." },
        "violation_types": [{ "name_en": "Arbitrary detention", "name_ar": "اعتقال تعسفي" }],
        "status": status,
        "priority": "high",
        "location": {
            "country": { "en": "Syria", "ar": "سوريا" },
            "region": { "en": "Aleppo", "ar": "حلب" },
            "coordinates": { "type": "Point", "coordinates": [37.16, 36.2] }
        },
        "date_occurred": "2024-02-01T00:00:00",
        "date_reported": "2024-02-03T10:30:00",
        "evidence": [{ "type": "photo", "url": "https://files.example.org/e1.jpg", "description": "Checkpoint" }],
        "created_by": "admin",
        "created_at": "2024-02-03T10:30:00",
        "updated_at": "2024-02-04T08:00:00",
        "perpetrators": [{ "name": "Unit 7", "type": "military" }],
        "victims": ["v-1", "v-2"]
    })
}

pub async fn spawn_stub() -> Stub {
    let state = Arc::new(StubState::default());
    let app = Router::new()
        .route("/login", post(login))
        .route("/cases/", get(list_cases).post(create_case))
        .route("/cases/{id}", get(get_case).patch(patch_case).delete(delete_case))
        .route("/reports/", get(list_reports).post(submit_report))
        .route("/reports/cases", get(list_report_cases))
        .route("/reports/cases/new-with-report/", post(submit_report))
        .route("/reports/cases/{id}/status", put(report_status))
        .route("/case-types", get(list_case_types).post(suggest_case_type))
        .route("/case-types/{id}/approval", put(case_type_approval))
        .route("/institution/profile/", get(get_profile))
        .route("/institution/profile/update/", put(update_profile))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    Stub { addr, state }
}

// ── Handlers ───────────────────────────────────────────────────────

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn entry(method: Method, path: &str, query: HashMap<String, String>, headers: &HeaderMap, body: Value) -> Recorded {
    Recorded {
        method: method.to_string(),
        path: path.to_string(),
        query,
        bearer: bearer(headers),
        body,
        ..Recorded::default()
    }
}

/// Reject requests without a valid token, like the backend's auth dependency.
fn authorize(state: &StubState, headers: &HeaderMap) -> Result<Value, Response> {
    if state.reject_tokens.load(Ordering::SeqCst) {
        return Err(detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"));
    }
    let token = bearer(headers).ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Not authenticated"))?;
    let key = jsonwebtoken::DecodingKey::from_secret(JWT_SECRET.as_bytes());
    jsonwebtoken::decode::<Value>(&token, &key, &jsonwebtoken::Validation::default())
        .map(|data| data.claims)
        .map_err(|_| detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"))
}

async fn login(State(state): State<Arc<StubState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record(entry(Method::POST, "/login", HashMap::new(), &headers, body.clone()));
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if (username, password) == OPAQUE_USER {
        return Json(json!({ "access_token": "opaque-session-token", "token_type": "bearer" })).into_response();
    }
    match USERS.iter().find(|(u, p, _)| *u == username && *p == password) {
        Some((user, _, role)) => {
            let token = mint_token(role, &format!("id-{user}"), user, fresh_exp());
            Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
        }
        None => detail(StatusCode::UNAUTHORIZED, "Incorrect username or password"),
    }
}

async fn list_cases(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.record(entry(Method::GET, "/cases/", query.clone(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let cases: Vec<Value> = lock(&state.cases)
        .iter()
        .filter(|c| query.get("status").is_none_or(|s| c["status"] == *s))
        .cloned()
        .collect();
    Json(Value::Array(cases)).into_response()
}

async fn get_case(State(state): State<Arc<StubState>>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    state.record(entry(Method::GET, &format!("/cases/{id}"), HashMap::new(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    match lock(&state.cases).iter().find(|c| c["_id"] == id) {
        Some(case) => Json(case.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Case not found"),
    }
}

async fn create_case(State(state): State<Arc<StubState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record(entry(Method::POST, "/cases/", HashMap::new(), &headers, body.clone()));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let mut cases = lock(&state.cases);
    let id = format!("c-{}", cases.len() + 1);
    let mut stored = body;
    stored["_id"] = json!(id);
    cases.push(stored);
    (StatusCode::CREATED, Json(json!({ "message": "Case created", "id": id }))).into_response()
}

async fn patch_case(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(entry(Method::PATCH, &format!("/cases/{id}"), HashMap::new(), &headers, body.clone()));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let mut cases = lock(&state.cases);
    let Some(case) = cases.iter_mut().find(|c| c["_id"] == id) else {
        return detail(StatusCode::NOT_FOUND, "Case not found");
    };
    if let (Some(target), Some(changes)) = (case.as_object_mut(), body.as_object()) {
        for (k, v) in changes {
            target.insert(k.clone(), v.clone());
        }
    }
    Json(json!({ "message": "Case updated" })).into_response()
}

async fn delete_case(State(state): State<Arc<StubState>>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    state.record(entry(Method::DELETE, &format!("/cases/{id}"), HashMap::new(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let mut cases = lock(&state.cases);
    match cases.iter_mut().find(|c| c["_id"] == id) {
        Some(case) => {
            case["status"] = json!("archived");
            StatusCode::NO_CONTENT.into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Case not found"),
    }
}

async fn list_reports(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.record(entry(Method::GET, "/reports/", query.clone(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let pending_only = query.get("pending_only").is_some_and(|v| v == "true");
    let reports: Vec<Value> = lock(&state.reports)
        .iter()
        .filter(|r| !pending_only || r["pending_approval"] == true)
        .cloned()
        .collect();
    Json(json!({ "reports": reports })).into_response()
}

async fn list_report_cases(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.record(entry(Method::GET, "/reports/cases", HashMap::new(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let reports = lock(&state.reports).clone();
    Json(json!({ "cases": reports })).into_response()
}

async fn submit_report(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: axum::http::Uri,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut recorded = entry(method, uri.path(), HashMap::new(), &headers, Value::Null);
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return detail(StatusCode::BAD_REQUEST, &e.to_string()),
        };
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
                recorded.files.push((name, file_name, size));
            }
            None => {
                let text = field.text().await.unwrap_or_default();
                recorded.fields.insert(name, text);
            }
        }
    }
    let new_case = recorded.path.contains("new-with-report");
    state.record(recorded);
    if new_case {
        Json(json!({ "message": "Case and report created", "case_id": "c-new" })).into_response()
    } else {
        Json(json!({ "message": "Report submitted successfully", "report_id": "r-new" })).into_response()
    }
}

async fn report_status(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(entry(
        Method::PUT,
        &format!("/reports/cases/{id}/status"),
        HashMap::new(),
        &headers,
        body.clone(),
    ));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let mut reports = lock(&state.reports);
    match reports.iter_mut().find(|r| r["_id"] == id) {
        Some(report) => {
            report["status"] = body["status"].clone();
            report["pending_approval"] = json!(false);
            Json(json!({ "message": "Report status updated" })).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Report not found"),
    }
}

async fn list_case_types(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.record(entry(Method::GET, "/case-types", query.clone(), &headers, Value::Null));
    let pending_only = query.get("pending_only").is_some_and(|v| v == "true");
    if pending_only {
        if let Err(resp) = authorize(&state, &headers) {
            return resp;
        }
    }
    let types: Vec<Value> = lock(&state.case_types)
        .iter()
        .filter(|t| (t["pending"] == true) == pending_only)
        .cloned()
        .collect();
    Json(Value::Array(types)).into_response()
}

async fn suggest_case_type(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.record(entry(Method::POST, "/case-types", query.clone(), &headers, Value::Null));
    let name = query.get("name").cloned().unwrap_or_default();
    let mut types = lock(&state.case_types);
    let id = format!("ct-{}", types.len() + 1);
    types.push(json!({ "_id": id, "name": name, "pending": true }));
    Json(json!({ "message": "Case type suggested", "case_type_id": id })).into_response()
}

async fn case_type_approval(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.record(entry(
        Method::PUT,
        &format!("/case-types/{id}/approval"),
        query.clone(),
        &headers,
        Value::Null,
    ));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let approved = query.get("approved").is_some_and(|v| v == "true");
    let mut types = lock(&state.case_types);
    match types.iter_mut().find(|t| t["_id"] == id) {
        Some(kind) => {
            kind["pending"] = json!(false);
            kind["rejected"] = json!(!approved);
            Json(json!({ "message": "Case type reviewed" })).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Case type not found"),
    }
}

async fn get_profile(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.record(entry(Method::GET, "/institution/profile/", HashMap::new(), &headers, Value::Null));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    Json(lock(&state.profile).clone()).into_response()
}

async fn update_profile(State(state): State<Arc<StubState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.record(entry(
        Method::PUT,
        "/institution/profile/update/",
        HashMap::new(),
        &headers,
        body.clone(),
    ));
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    *lock(&state.profile) = body.clone();
    Json(body).into_response()
}
