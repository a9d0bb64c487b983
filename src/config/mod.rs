//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::CentavoPaths;
pub use settings::Settings;
