//! Static navbar configuration: brand, logo asset and the API origin used for uploads.

/// Build-time override for the API origin, e.g. `LOSTCLOUD_API_URL=https://api.lostcloud.io`.
const API_URL_ENV: Option<&str> = option_env!("LOSTCLOUD_API_URL");
const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub brand_name: String,
    /// Served by the host page, not bundled.
    pub logo_src: String,
    pub api_base_url: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::with_api_base(API_URL_ENV.unwrap_or(DEFAULT_API_URL))
    }
}

impl NavConfig {
    pub fn with_api_base(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            brand_name: "LostCloud".to_string(),
            logo_src: "/logo.png".to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn profile_picture_url(&self, file_name: &str) -> String {
        format!("{}/uploads/profiles/{file_name}", self.api_base_url)
    }
}
