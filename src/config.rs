use log::warn;

/// Runtime configuration, read once at boot from `holofolio.toml` with
/// per-key defaults, then overridden by environment variables. Lives in
/// Rocket managed state.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Remote copy of the content document (raw file on the code host).
    pub content_url: String,
    /// Bundled local copy used when the remote fetch fails at boot.
    pub fallback_path: String,
    /// Fixed-interval revalidation in minutes. 0 disables the loop; the
    /// single best-effort refresh at liftoff always runs.
    pub refresh_interval_mins: u64,
    /// Public base URL, used for canonical links.
    pub site_url: String,
    pub site_name: String,
}

const DEFAULT_CONTENT_URL: &str =
    "https://raw.githubusercontent.com/PeterPorzuczek/porzuczek.pl/refs/heads/main/public/portfolio-data.json";
const DEFAULT_FALLBACK_PATH: &str = "website/portfolio-data.json";

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_url: DEFAULT_CONTENT_URL.to_string(),
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
            refresh_interval_mins: 0,
            site_url: "http://localhost:8000".to_string(),
            site_name: "holofolio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read `holofolio.toml` from the working directory, then apply
    /// environment overrides. Missing file or keys fall back to defaults.
    pub fn load() -> Self {
        let value = std::fs::read_to_string("holofolio.toml")
            .ok()
            .and_then(|s| match s.parse::<toml::Value>() {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("holofolio.toml is not valid TOML ({}), using defaults", e);
                    None
                }
            });
        let mut config = Self::from_value(value.as_ref());
        config.apply_env();
        config
    }

    pub fn from_value(value: Option<&toml::Value>) -> Self {
        let defaults = SiteConfig::default();
        let get_str = |table: &str, key: &str| -> Option<String> {
            value?
                .get(table)?
                .get(key)?
                .as_str()
                .map(|s| s.to_string())
        };
        let refresh_interval_mins = value
            .and_then(|v| v.get("content")?.get("refresh_interval_mins")?.as_integer())
            .map(|n| n.max(0) as u64)
            .unwrap_or(defaults.refresh_interval_mins);

        SiteConfig {
            content_url: get_str("content", "url").unwrap_or(defaults.content_url),
            fallback_path: get_str("content", "fallback_path").unwrap_or(defaults.fallback_path),
            refresh_interval_mins,
            site_url: get_str("site", "url").unwrap_or(defaults.site_url),
            site_name: get_str("site", "name").unwrap_or(defaults.site_name),
        }
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("HOLOFOLIO_CONTENT_URL") {
            if !url.is_empty() {
                self.content_url = url;
            }
        }
        if let Ok(url) = std::env::var("HOLOFOLIO_SITE_URL") {
            if !url.is_empty() {
                self.site_url = url.trim_end_matches('/').to_string();
            }
        }
    }
}
