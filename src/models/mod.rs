// Data models for profiles, analytics, plans and research results

pub mod analytics;
pub mod research;
pub mod training_plan;
pub mod user_profile;
pub mod validation;

pub use analytics::*;
pub use research::*;
pub use training_plan::*;
pub use user_profile::*;
pub use validation::*;
