pub mod ebay {
    pub const SANDBOX_API_BASE_URL: &str = "https://api.sandbox.ebay.com";
    pub const PRODUCTION_API_BASE_URL: &str = "https://api.ebay.com";
    pub const TOKEN_PATH: &str = "/identity/v1/oauth2/token";
    pub const DEFAULT_SCOPE: &str = "https://api.ebay.com/oauth/api_scope";
    pub const API_STATUS_FEED_URL: &str = "https://developer.ebay.com/rss/api-status";
    pub const MARKETPLACE_HEADER: &str = "X-EBAY-C-MARKETPLACE-ID";
}

pub mod network {
    pub const TIMEOUT_API_REQUEST_MS: u64 = 30_000;
    pub const TIMEOUT_STATUS_FEED_MS: u64 = 15_000;
    pub const USER_AGENT: &str = concat!("ebay-mcp/", env!("CARGO_PKG_VERSION"));
}

pub mod auth {
    pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;
}

pub mod limits {
    pub const STATUS_FEED_DEFAULT_ITEMS: usize = 20;
    pub const STATUS_FEED_MAX_ITEMS: usize = 50;
    pub const STATUS_SUMMARY_CHARS: usize = 300;
    pub const LOG_BODY_BYTES: usize = 2_048;
}
