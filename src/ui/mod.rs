//! Console output: header box, phase banners and per-URL summaries.
mod banner;
mod console;
mod format;

pub use banner::print_header;
pub use console::ConsoleReporter;
