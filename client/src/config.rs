pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FALLBACK_URL: &str = "/koi_min.json";

/// Connection settings handed to [`crate::PredictionClient`] at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root of the prediction service; `/predict` and `/koi/list` hang off it.
    pub base_url: String,
    /// Extra headers sent with every request to the service.
    pub headers: Vec<(String, String)>,
    /// Bundled catalog snapshot, fetched when the listing endpoint fails.
    pub fallback_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: vec![("ngrok-skip-browser-warning".to_string(), "true".to_string())],
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default config pointed at `base_url`, or the default endpoint when `None` or blank.
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.to_string();
        }
        config
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = url.into();
        self
    }
}
