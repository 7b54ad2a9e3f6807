pub mod config;
pub mod error;
pub mod feature_flags;

// Dashboard domain modules
pub mod dashboard;
pub mod pricing;
pub mod template;

pub use config::*;
pub use error::*;
pub use feature_flags::*;

pub use dashboard::*;
pub use pricing::*;
pub use template::*;
