/// Session handshake and token storage
pub mod auth;
/// Client implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per REST resource
pub mod interfaces;
