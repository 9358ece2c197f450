//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host binary reads the process environment, renders the public values
//! into `<meta>` tags of the SSR shell, and the hydrated client reads them
//! back from the document. Both sides parse through [`AppConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_VAR: &str = "POLLGEN_API_BASE_URL";
pub const FIREBASE_API_KEY_VAR: &str = "POLLGEN_FIREBASE_API_KEY";
pub const IDENTITY_BASE_URL_VAR: &str = "POLLGEN_IDENTITY_BASE_URL";

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Variable name and the `<meta name>` it is published under.
const META_NAMES: [(&str, &str); 3] = [
    (API_BASE_URL_VAR, "pollgen-api-base-url"),
    (FIREBASE_API_KEY_VAR, "pollgen-firebase-api-key"),
    (IDENTITY_BASE_URL_VAR, "pollgen-identity-base-url"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an absolute path or an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub identity_base_url: String,
    pub firebase_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            identity_base_url: DEFAULT_IDENTITY_BASE_URL.to_owned(),
            firebase_api_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Build config from a key lookup.
    ///
    /// - `POLLGEN_FIREBASE_API_KEY`: left empty when unset; identity calls
    ///   then fail until it is configured (see [`AppConfig::has_identity_key`])
    /// - `POLLGEN_API_BASE_URL`: default `/api`
    /// - `POLLGEN_IDENTITY_BASE_URL`: default Identity Toolkit host
    ///
    /// Blank values count as unset; trailing slashes are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a URL is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let firebase_api_key = get(FIREBASE_API_KEY_VAR).unwrap_or_default();
        let api_base_url = parse_url(API_BASE_URL_VAR, get(API_BASE_URL_VAR), DEFAULT_API_BASE_URL)?;
        let identity_base_url = parse_url(IDENTITY_BASE_URL_VAR, get(IDENTITY_BASE_URL_VAR), DEFAULT_IDENTITY_BASE_URL)?;

        Ok(Self { api_base_url, identity_base_url, firebase_api_key })
    }

    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the `<meta>` tags written by the SSR shell. Falls back to the
    /// defaults outside the browser or when the tags are unusable.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let document = web_sys::window().and_then(|w| w.document());
            let lookup = |var: &str| {
                let name = meta_name(var)?;
                document
                    .as_ref()?
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()
                    .flatten()?
                    .get_attribute("content")
            };
            match Self::from_lookup(lookup) {
                Ok(config) => {
                    if !config.has_identity_key() {
                        leptos::logging::warn!("{FIREBASE_API_KEY_VAR} not published, sign-in is disabled");
                    }
                    config
                }
                Err(e) => {
                    leptos::logging::warn!("config meta tags unusable, using defaults: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Whether an identity provider API key is configured.
    #[must_use]
    pub fn has_identity_key(&self) -> bool {
        !self.firebase_api_key.is_empty()
    }

    /// `(meta name, content)` pairs for the SSR shell.
    #[must_use]
    pub fn meta_entries(&self) -> [(&'static str, String); 3] {
        META_NAMES.map(|(var, name)| (name, self.value(var).to_owned()))
    }

    fn value(&self, var: &str) -> &str {
        match var {
            API_BASE_URL_VAR => &self.api_base_url,
            FIREBASE_API_KEY_VAR => &self.firebase_api_key,
            _ => &self.identity_base_url,
        }
    }
}

/// `<meta name>` under which `var` is published.
#[must_use]
pub fn meta_name(var: &str) -> Option<&'static str> {
    META_NAMES.iter().find(|(v, _)| *v == var).map(|(_, name)| *name)
}

fn parse_url(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default.to_owned());
    };
    let valid = value.starts_with('/') || value.starts_with("http://") || value.starts_with("https://");
    if !valid {
        return Err(ConfigError::InvalidUrl { var, value });
    }
    // A bare "/" becomes the empty site-root prefix.
    Ok(value.trim_end_matches('/').to_owned())
}
