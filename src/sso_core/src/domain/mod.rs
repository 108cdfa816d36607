pub mod app;
pub mod auth_error;
pub mod email;
pub mod hashed_password;
pub mod password;
pub mod session_token;
pub mod user;
pub mod user_id;
