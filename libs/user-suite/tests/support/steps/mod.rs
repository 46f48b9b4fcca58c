pub mod then_user;
