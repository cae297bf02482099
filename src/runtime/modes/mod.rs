//! Mode routing
//!
//! - Server mode (HTTP server, `serve` or no subcommand)
//! - CLI mode (code management subcommands)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
