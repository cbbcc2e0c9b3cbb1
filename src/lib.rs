// Shared components
pub mod config;
pub mod error;

// Domain layer
pub mod domain;

// Application layer
pub mod api;
pub mod server;
