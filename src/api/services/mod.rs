pub mod health;
pub mod redirect;

pub use health::{AppStartTime, HealthService, health_routes};
pub use redirect::{RedirectService, Resolution, redirect_default_service};
