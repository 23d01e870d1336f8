//! stripeql server
//!
//! Wires configuration, the payment client and the generated GraphQL schema
//! into an axum application.

pub mod cli;
pub mod logging;
pub mod startup;

// Re-export main components
pub use cli::Cli;
pub use logging::init_logging;
pub use startup::{cors_layer, shutdown_signal, Server};
