mod app;
mod config;
mod http;
mod sitemap;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use sitemap::SitemapError;
pub use validation::ValidationError;
