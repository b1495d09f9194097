/// Module containing the authentication handler
pub mod auth;
/// Module containing the session type and authenticator trait
pub mod interface;
/// Module containing response cookie handling
pub mod response;
