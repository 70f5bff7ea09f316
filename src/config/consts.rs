// src/config/consts.rs

// Source
pub const DEFAULT_URL: &str = "https://flatironschool.com/";

// Selector: `.inlineMobileLeft-2Yo002.imageTextBlockGrid2-3jXtmC`
pub const DEFAULT_CLASSES: [&str; 2] = ["inlineMobileLeft-2Yo002", "imageTextBlockGrid2-3jXtmC"];

// Net config
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECTS: usize = 10;
pub const USER_AGENT: &str = concat!("course_scrape/", env!("CARGO_PKG_VERSION"));

// Input path meaning "read the document from stdin"
pub const STDIN_PATH: &str = "-";

// Parse limits
pub const MAX_TREE_DEPTH: usize = 400;
pub const BINARY_SNIFF_LEN: usize = 4096;
