pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::showcase::Showcase;
pub use config::toml_config::ShowcaseConfig;
pub use domain::{Event, Speaker, Venue};
pub use utils::error::{AppError, GuardError, GuardErrorKind, GuardResult, Result};
