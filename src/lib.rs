//! urlsift: URL extraction from free text
//!
//! Commands:
//! - scan: extract URLs from files, stdin, or a literal argument
//! - strip: drop query strings from URLs

pub mod extract;
pub mod scan;
pub mod strip;

pub use extract::{extract_urls, strip_arguments};
pub use scan::ScanReport;
