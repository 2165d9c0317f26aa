//! Runtime configuration

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Select an Employee to display their posts.";

/// Environment variable overriding the API host on native builds.
pub const API_BASE_ENV: &str = "EMPLOYEE_POSTS_API_BASE";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL every API path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// User shown when the dropdown value is missing or not a number.
    pub fallback_user_id: u64,
    pub placeholder_text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fallback_user_id: 1,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the API host taken from the environment where one exists.
    pub fn load() -> Self {
        let config = Self::default();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(base_url) = std::env::var(API_BASE_ENV) {
                if !base_url.trim().is_empty() {
                    tracing::info!("Using API host from {}: {}", API_BASE_ENV, base_url);
                    return config.with_base_url(base_url.trim());
                }
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
