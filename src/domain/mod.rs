pub mod command_line;
mod environment;
mod error;
mod model_variant;
mod options;
mod platform;
pub mod run_config;

pub use environment::Environment;
pub use error::AppError;
pub use model_variant::ModelVariant;
pub use options::CliOptions;
pub use platform::Platform;
pub use run_config::RunConfig;
