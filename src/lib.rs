//! dynqr - Dynamic QR code redirect service
//!
//! A dynamic QR code encodes a short URL carrying a short code. Scanning it
//! hits the redirect handler, which resolves the code to its current target,
//! records the scan (best effort) and answers with a 302.
//!
//! # Architecture
//! - `api`: HTTP services (redirect, health) and middleware
//! - `analytics`: scan records and the scan sink seam
//! - `storage`: SeaORM storage backend and the `QrStore` seam
//! - `services`: dynamic code management (create, retarget, pause, ...)
//! - `interfaces`: command-line interface
//! - `config`: static configuration (TOML + env)
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging setup

pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
