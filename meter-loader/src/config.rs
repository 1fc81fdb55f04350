pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Reads WATER_METER_URL, falling back to the local meter server.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("WATER_METER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}
