//! Run orchestration: sitemap discovery followed by the warm-up campaign.
mod warmup;

pub use warmup::run_warmup;
