pub mod crawl;

pub use crawl::{run, CrawlSummary};
