// frontend_marasty/src/config_file.rs

/// Frontend configuration, resolved once at startup and handed down as props.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub base_path: String,
}

impl AppConfig {
    /// Reads `BASE_PATH` as baked in at build time (`BASE_PATH=/x trunk build`).
    pub fn from_env() -> Self {
        Self::with_base_path(option_env!("BASE_PATH").unwrap_or_default())
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let base_path: String = base_path.into();
        Self {
            base_path: normalize_base_path(&base_path),
        }
    }

    /// Basename for the router; `None` when the app lives at the site root.
    pub fn router_basename(&self) -> Option<String> {
        if self.base_path.is_empty() {
            None
        } else {
            Some(self.base_path.clone())
        }
    }
}

/// Strips surrounding whitespace and trailing slashes and makes the prefix absolute,
/// so `"/x/"`, `"/x"` and `"x"` agree and a bare `"/"` collapses to the root.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Joins the base path and an asset path that starts with `/`.
pub fn asset_url(base_path: &str, asset: &str) -> String {
    format!("{}{asset}", normalize_base_path(base_path))
}
