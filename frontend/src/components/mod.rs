pub mod auth;
pub mod functions;
