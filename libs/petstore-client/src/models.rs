use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::PetstoreError;

/// User record as exchanged with the pet-store `/user` endpoints.
///
/// The username is the lookup key for every later call, so it is fixed at
/// construction and has no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<i32>,
}

impl User {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            phone: phone.into(),
            user_status: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Replace the mutable profile fields in place
    pub fn apply(&mut self, edit: ProfileEdit) {
        self.first_name = edit.first_name;
        self.last_name = edit.last_name;
        self.email = edit.email;
    }
}

/// New first name, last name and email for the update step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Generic reply of the pet-store for create, update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: i32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

/// Raw outcome of one request: status code and body text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PetstoreError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
