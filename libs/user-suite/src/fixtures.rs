//! Randomized-but-valid user records

use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::CellNumber;
use fake::Fake;
use petstore_client::{ProfileEdit, User};

const PASSWORD_LENGTH: std::ops::Range<usize> = 5..11;

pub struct UserFactory;

impl UserFactory {
    pub fn user() -> User {
        let id: i64 = (1..i64::from(i32::MAX)).fake();
        let username: String = Username().fake();
        Self::user_named(id, &username)
    }

    /// Random profile under a fixed username
    pub fn user_named(id: i64, username: &str) -> User {
        User::new(
            id,
            username,
            FirstName().fake::<String>(),
            LastName().fake::<String>(),
            SafeEmail().fake::<String>(),
            Password(PASSWORD_LENGTH).fake::<String>(),
            CellNumber().fake::<String>(),
        )
    }

    pub fn profile_edit() -> ProfileEdit {
        ProfileEdit {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: SafeEmail().fake(),
        }
    }
}
