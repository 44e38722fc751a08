//! Client configuration.
//!
//! The base URL is the one piece of required configuration; without it
//! there is nothing to connect to, so its absence is a hard error at
//! construction time. The admin key is optional and privileged: it is
//! read from a file path (never inlined in the environment), and a
//! missing or unreadable file only degrades the client to
//! unauthenticated access.

use std::path::Path;

/// Environment variable holding the store's base URL.
pub const URL_ENV: &str = "ZENGRID_URL";

/// Environment variable holding the path to the admin key file.
pub const ADMIN_KEY_FILE_ENV: &str = "ZENGRID_ADMIN_KEY_FILE";

/// Errors raised while loading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{URL_ENV} is required")]
    MissingUrl,

    #[error("{URL_ENV} must not be empty")]
    EmptyUrl,
}

/// Configuration for a [`GridClient`](crate::GridClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the ZenGrid API, without a trailing slash.
    pub base_url: String,
    /// Privileged credential for server-side calls. `None` means the
    /// client operates unauthenticated.
    pub admin_key: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The admin key is a credential; never echo it.
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("admin_key", &self.admin_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ClientConfig {
    /// Build a config from an explicit base URL, with no admin key.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_url(base_url.into()),
            admin_key: None,
        }
    }

    /// Load configuration from the environment.
    ///
    /// `ZENGRID_URL` is required; a missing or empty value is a hard
    /// error. `ZENGRID_ADMIN_KEY_FILE`, when set, names a file whose
    /// trimmed contents become the admin key; failure to read it is
    /// logged as a warning and the key is left unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var(URL_ENV).map_err(|_| ConfigError::MissingUrl)?;
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl);
        }

        let admin_key = std::env::var(ADMIN_KEY_FILE_ENV)
            .ok()
            .and_then(|path| load_admin_key(Path::new(&path)));

        Ok(Self {
            base_url: normalize_url(base_url),
            admin_key,
        })
    }

    /// Attach an admin key read from the given file, if readable.
    pub fn with_admin_key_file(mut self, path: &Path) -> Self {
        self.admin_key = load_admin_key(path);
        self
    }
}

/// Read and trim the admin key file. Unreadable or empty files degrade
/// to `None` with a warning; the client then runs unauthenticated.
fn load_admin_key(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let key = contents.trim();
            if key.is_empty() {
                tracing::warn!(path = %path.display(), "Admin key file is empty, continuing unauthenticated");
                None
            } else {
                Some(key.to_string())
            }
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to read admin key file, continuing unauthenticated"
            );
            None
        }
    }
}

fn normalize_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
