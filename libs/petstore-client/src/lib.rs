//! # Pet-store user client
//!
//! Route registry and endpoint client for the `/user` resource of the
//! public pet-store demo service.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use petstore_client::{PetstoreConfig, UserApi, UserEndpoints};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), petstore_client::PetstoreError> {
//!     let endpoints = UserEndpoints::new(&PetstoreConfig::from_env())?;
//!
//!     let response = endpoints.read_user("jdoe123").await?;
//!     println!("{} {}", response.status_code(), response.body());
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod config;
mod error;
mod models;

pub mod constants;
pub mod routes;

pub use api::UserApi;
pub use client::{ReadMethod, UserEndpoints};
pub use config::{PetstoreConfig, RouteSource};
pub use error::PetstoreError;
pub use models::{ApiMessage, ApiResponse, ProfileEdit, User};
pub use routes::{Operation, Routes};
pub use reqwest::StatusCode;
