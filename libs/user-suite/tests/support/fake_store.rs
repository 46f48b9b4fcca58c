//! In-process stand-in for the pet-store `/user` endpoints.
//!
//! Answers the way the public service does: `ApiMessage` bodies for writes,
//! the stored record for reads, 404 for unknown users and 405 for methods a
//! path does not route.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const API_PREFIX: &str = "/v2";
const USER_PATH: &str = "/user";
const USER_BY_NAME_PATH: &str = "/user/{username}";

type Users = Arc<Mutex<HashMap<String, Value>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// `/user/{username}` routes GET, PUT and DELETE
    Conforming,
    /// `/user/{username}` routes only GET and DELETE
    Misrouted,
}

#[derive(Debug)]
pub struct FakePetstore {
    pub base_url: String,
    users: Users,
}

impl FakePetstore {
    pub async fn start(mode: StoreMode) -> Self {
        let users: Users = Arc::new(Mutex::new(HashMap::new()));

        let by_name = match mode {
            StoreMode::Conforming => get(get_user).put(update_user).delete(delete_user),
            StoreMode::Misrouted => get(get_user).delete(delete_user),
        };

        let app = Router::new()
            .nest(
                API_PREFIX,
                Router::new()
                    .route(USER_PATH, post(create_user))
                    .route(USER_BY_NAME_PATH, by_name),
            )
            .with_state(users.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fake pet-store");
        let addr = listener.local_addr().expect("fake pet-store has no address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("fake pet-store stopped");
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            users,
        }
    }

    pub fn stored(&self, username: &str) -> Option<Value> {
        self.users.lock().unwrap().get(username).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

fn api_message(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    let body = json!({
        "code": status.as_u16(),
        "type": kind,
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}

fn not_found() -> Response {
    let body = json!({ "code": 1, "type": "error", "message": "User not found" });
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn id_of(user: &Value) -> String {
    user.get("id").map(Value::to_string).unwrap_or_default()
}

async fn create_user(State(users): State<Users>, Json(user): Json<Value>) -> Response {
    let Some(username) = user.get("username").and_then(Value::as_str) else {
        return api_message(StatusCode::BAD_REQUEST, "error", "missing username");
    };
    let id = id_of(&user);
    users.lock().unwrap().insert(username.to_string(), user.clone());
    api_message(StatusCode::OK, "unknown", id)
}

async fn get_user(State(users): State<Users>, Path(username): Path<String>) -> Response {
    match users.lock().unwrap().get(&username) {
        Some(user) => {
            let mut user = user.clone();
            user["userStatus"] = json!(0);
            (StatusCode::OK, Json(user)).into_response()
        }
        None => not_found(),
    }
}

async fn update_user(
    State(users): State<Users>,
    Path(username): Path<String>,
    Json(user): Json<Value>,
) -> Response {
    let id = id_of(&user);
    users.lock().unwrap().insert(username, user);
    api_message(StatusCode::OK, "unknown", id)
}

async fn delete_user(State(users): State<Users>, Path(username): Path<String>) -> Response {
    match users.lock().unwrap().remove(&username) {
        Some(_) => api_message(StatusCode::OK, "unknown", username),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
