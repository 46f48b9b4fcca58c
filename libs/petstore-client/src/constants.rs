pub const PETSTORE_BASE_URL: &str = "PETSTORE_BASE_URL";
pub const PETSTORE_TIMEOUT_SECS: &str = "PETSTORE_TIMEOUT_SECS";
pub const PETSTORE_ROUTES: &str = "PETSTORE_ROUTES";

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder substituted with the username in read/update/delete templates
pub const USERNAME_PARAM: &str = "{username}";

pub const POST_URL: &str = "post_url";
pub const GET_URL: &str = "get_url";
pub const UPDATE_URL: &str = "update_url";
pub const DELETE_URL: &str = "delete_url";
