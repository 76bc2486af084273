//! Where data lives, and how it is shown

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
