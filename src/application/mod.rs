/// Login and session handling
pub mod auth;
/// Authenticated API client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Pagination helpers driven by the total-count header
pub mod pagination;
