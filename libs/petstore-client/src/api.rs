//! Trait definition for the user endpoints

use async_trait::async_trait;

use crate::error::PetstoreError;
use crate::models::{ApiResponse, User};

/// CRUD calls on the pet-store user resource.
///
/// Every HTTP status comes back as `Ok`; only transport failures are
/// errors. Callers assert on `ApiResponse::status`.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<ApiResponse, PetstoreError>;
    async fn read_user(&self, username: &str) -> Result<ApiResponse, PetstoreError>;
    async fn update_user(&self, username: &str, user: &User) -> Result<ApiResponse, PetstoreError>;
    async fn delete_user(&self, username: &str) -> Result<ApiResponse, PetstoreError>;
}
