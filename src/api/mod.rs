pub mod hckrnews;

pub use hckrnews::{HckrnewsClient, archive_fallback, parse_archive, parse_page};
