//! Ordered create → read → update → delete run against one user record

use std::fmt;

use petstore_client::{ApiResponse, PetstoreError, ProfileEdit, StatusCode, User, UserApi};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    NotCreated,
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::NotCreated => "not created",
            LifecycleState::Created => "created",
            LifecycleState::Updated => "updated",
            LifecycleState::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// Exact status code each step must return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectations {
    pub create: u16,
    pub read: u16,
    pub update: u16,
    /// Read issued right after the update
    pub verify: u16,
    pub delete: u16,
}

impl Expectations {
    /// Every route behaves: 200 throughout
    pub fn conforming() -> Self {
        Self {
            create: 200,
            read: 200,
            update: 200,
            verify: 200,
            delete: 200,
        }
    }

    /// Read sent as POST and update refused with 405, while the read-back
    /// after the update still expects 200
    pub fn misrouted() -> Self {
        Self {
            create: 200,
            read: 405,
            update: 405,
            verify: 200,
            delete: 200,
        }
    }

    /// Like [`Expectations::misrouted`], but the read-back expects the same
    /// 405 as the plain read
    pub fn misrouted_refused_read_back() -> Self {
        Self {
            verify: 405,
            ..Self::misrouted()
        }
    }
}

impl Default for Expectations {
    fn default() -> Self {
        Self::conforming()
    }
}

fn check(
    operation: &'static str,
    expected: u16,
    response: ApiResponse,
) -> Result<ApiResponse, PetstoreError> {
    let actual = response.status_code();
    if actual != expected {
        return Err(PetstoreError::UnexpectedStatus {
            operation,
            expected,
            actual,
            body: response.body,
        });
    }
    Ok(response)
}

/// One user record driven through the CRUD sequence.
///
/// A failed assertion leaves the state where it was. The record only takes an
/// edit once the service accepted it; nothing already created on the remote
/// side is cleaned up.
#[derive(Debug)]
pub struct UserLifecycle<A: UserApi> {
    api: A,
    user: User,
    expectations: Expectations,
    state: LifecycleState,
}

impl<A: UserApi> UserLifecycle<A> {
    pub fn new(api: A, user: User, expectations: Expectations) -> Self {
        debug!(username = %user.username(), "user record prepared");
        Self {
            api,
            user,
            expectations,
            state: LifecycleState::NotCreated,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn expectations(&self) -> &Expectations {
        &self.expectations
    }

    fn require(&self, step: &'static str, allowed: &[LifecycleState]) -> Result<(), PetstoreError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(PetstoreError::OutOfOrder {
                step,
                state: self.state.to_string(),
            })
        }
    }

    pub async fn create(&mut self) -> Result<ApiResponse, PetstoreError> {
        self.require("create", &[LifecycleState::NotCreated])?;
        info!(username = %self.user.username(), "creating new user");

        let response = self.api.create_user(&self.user).await?;
        let response = check("create", self.expectations.create, response)?;

        self.state = LifecycleState::Created;
        info!(username = %self.user.username(), "created new user");
        Ok(response)
    }

    pub async fn read(&self) -> Result<ApiResponse, PetstoreError> {
        self.require("read", &[LifecycleState::Created, LifecycleState::Updated])?;
        info!(username = %self.user.username(), "fetching user data");

        let response = self.api.read_user(self.user.username()).await?;
        let response = check("read", self.expectations.read, response)?;

        info!(username = %self.user.username(), "user data received");
        Ok(response)
    }

    /// Send the record with `edit` applied, then read the user back.
    ///
    /// The edit is kept once the update status matches. Returns the read-back
    /// response.
    pub async fn update(&mut self, edit: ProfileEdit) -> Result<ApiResponse, PetstoreError> {
        self.require("update", &[LifecycleState::Created])?;
        info!(username = %self.user.username(), "updating user data");

        let mut edited = self.user.clone();
        edited.apply(edit);
        let response = self.api.update_user(edited.username(), &edited).await?;
        check("update", self.expectations.update, response)?;
        self.user = edited;
        info!(username = %self.user.username(), "user data updated");

        let read_back = self.api.read_user(self.user.username()).await?;
        let read_back = check("verify", self.expectations.verify, read_back)?;

        self.state = LifecycleState::Updated;
        info!(username = %self.user.username(), "user data updated and verified");
        Ok(read_back)
    }

    pub async fn delete(&mut self) -> Result<ApiResponse, PetstoreError> {
        self.require("delete", &[LifecycleState::Created, LifecycleState::Updated])?;
        info!(username = %self.user.username(), "deleting user data");

        let response = self.api.delete_user(self.user.username()).await?;
        let response = check("delete", self.expectations.delete, response)?;

        self.state = LifecycleState::Deleted;
        info!(username = %self.user.username(), "user data deleted");
        Ok(response)
    }

    /// Read once more after deletion; anything but 200 passes
    pub async fn read_after_delete(&self) -> Result<ApiResponse, PetstoreError> {
        self.require("read after delete", &[LifecycleState::Deleted])?;

        let response = self.api.read_user(self.user.username()).await?;
        if response.status == StatusCode::OK {
            return Err(PetstoreError::UnexpectedOk {
                operation: "read after delete",
                body: response.body,
            });
        }
        Ok(response)
    }

    /// Run create, read, update and delete in order
    pub async fn run(&mut self, edit: ProfileEdit) -> Result<(), PetstoreError> {
        self.create().await?;
        self.read().await?;
        self.update(edit).await?;
        self.delete().await?;
        Ok(())
    }
}
