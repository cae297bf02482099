pub mod code_service;

pub use code_service::{CodeService, CreateCodeRequest, ScanSummary};
