//! Sitemap discovery: fetch the document, pull out `url/loc` entries and
//! collapse "test once" URL families.
mod extract;
mod filter;
mod loader;


pub use extract::{SITEMAP_NAMESPACE, extract_urls};
pub use filter::filter_once;
pub use loader::load_sitemap;
