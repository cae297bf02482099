//! CLI command implementations

mod code_management;
mod config_gen;
mod scans;

pub use code_management::{
    create_code, delete_code, list_codes, rename_code, retarget_code, set_code_active, show_code,
};
pub use config_gen::generate_config;
pub use scans::show_scans;
