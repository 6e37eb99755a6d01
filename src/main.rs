mod app;
mod args;
mod config;
mod domain;
mod engine;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;
mod sitemap;
#[cfg(test)]
mod test_support;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
