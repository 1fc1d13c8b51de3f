pub mod app_config;
pub mod article;
pub mod enums;
pub mod plan;
pub mod report;

pub use app_config::AppConfig;
pub use article::Article;
pub use enums::{Preset, Source};
pub use plan::FetchPlan;
pub use report::{FetchStatus, SourceReport};
