//! Create/read/update/delete scenarios for the pet-store user API.
//!
//! [`UserLifecycle`] drives one generated [`petstore_client::User`] through
//! the ordered sequence, asserting the exact status code after every step.

pub mod fixtures;
pub mod lifecycle;

pub use fixtures::UserFactory;
pub use lifecycle::{Expectations, LifecycleState, UserLifecycle};
