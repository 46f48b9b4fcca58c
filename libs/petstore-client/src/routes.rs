//! Route registry for the user endpoints
//!
//! Templates come either from compiled constants derived from a base URL or
//! from the `routes.properties` resource. Both sources resolve to the same
//! URLs for the public pet-store.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DELETE_URL, GET_URL, POST_URL, UPDATE_URL, USERNAME_PARAM};
use crate::error::PetstoreError;

const BUNDLED_ROUTES: &str = include_str!("../resources/routes.properties");

/// Logical CRUD operation on the user resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::Read,
        Operation::Update,
        Operation::Delete,
    ];

    /// Key of this operation in the properties resource
    pub fn key(self) -> &'static str {
        match self {
            Operation::Create => POST_URL,
            Operation::Read => GET_URL,
            Operation::Update => UPDATE_URL,
            Operation::Delete => DELETE_URL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = PetstoreError;

    /// Accepts either the properties key (`get_url`) or the operation name (`read`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            POST_URL | "create" => Ok(Operation::Create),
            GET_URL | "read" => Ok(Operation::Read),
            UPDATE_URL | "update" => Ok(Operation::Update),
            DELETE_URL | "delete" => Ok(Operation::Delete),
            other => Err(PetstoreError::MissingRoute(other.to_string())),
        }
    }
}

/// URL templates for every user operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub post_url: String,
    pub get_url: String,
    pub update_url: String,
    pub delete_url: String,
}

impl Routes {
    /// Build the templates from a base URL such as `https://petstore.swagger.io/v2`
    pub fn from_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let user_url = format!("{base_url}/user");
        let by_name_url = format!("{user_url}/{USERNAME_PARAM}");

        Self {
            post_url: user_url,
            get_url: by_name_url.clone(),
            update_url: by_name_url.clone(),
            delete_url: by_name_url,
        }
    }

    /// Parse `key=value` lines. Every operation key must be present.
    ///
    /// Values are taken literally, so `$` is refused rather than expanded
    /// from the environment.
    pub fn from_properties(text: &str) -> Result<Self, PetstoreError> {
        reject_substitution(text)?;

        let mut entries = HashMap::new();
        for item in dotenvy::from_read_iter(text.as_bytes()) {
            let (key, value) = item?;
            entries.insert(key, value);
        }

        let mut take = |key: &str| {
            entries
                .remove(key)
                .ok_or_else(|| PetstoreError::MissingRoute(key.to_string()))
        };

        Ok(Self {
            post_url: take(POST_URL)?,
            get_url: take(GET_URL)?,
            update_url: take(UPDATE_URL)?,
            delete_url: take(DELETE_URL)?,
        })
    }

    /// Routes from the properties resource compiled into this crate
    pub fn bundled() -> Result<Self, PetstoreError> {
        Self::from_properties(BUNDLED_ROUTES)
    }

    pub fn url(&self, operation: Operation) -> &str {
        match operation {
            Operation::Create => &self.post_url,
            Operation::Read => &self.get_url,
            Operation::Update => &self.update_url,
            Operation::Delete => &self.delete_url,
        }
    }

    /// Look a template up by key or operation name
    pub fn lookup(&self, name: &str) -> Result<&str, PetstoreError> {
        let operation: Operation = name.parse()?;
        Ok(self.url(operation))
    }

    /// Template for `operation` with the username substituted in
    pub fn resolve(&self, operation: Operation, username: &str) -> String {
        expand(self.url(operation), username)
    }
}

fn reject_substitution(text: &str) -> Result<(), PetstoreError> {
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_start();
        if line.starts_with('#') {
            continue;
        }
        if line.contains('$') {
            return Err(PetstoreError::InvalidProperties(format!(
                "line {}: `$` is not allowed in a route template",
                index + 1
            )));
        }
    }
    Ok(())
}

/// Substitute the `{username}` path parameter, percent-encoding the value
pub fn expand(template: &str, username: &str) -> String {
    template.replace(USERNAME_PARAM, &urlencoding::encode(username))
}
