mod errors;
mod storage;

use std::path::PathBuf;

pub(crate) use errors::ConfigError;
use secrecy::SecretString;

use self::storage::ConfigFile;

/// Environment variable overriding the configured site URL.
const WEB_URL_ENV: &str = "SPLIST_WEB_URL";
/// Environment variable overriding the configured access token.
const ACCESS_TOKEN_ENV: &str = "SPLIST_ACCESS_TOKEN";

/// Resolved application configuration.
///
/// The file supplies defaults; environment variables win over it. Only the
/// selected list is ever written back.
#[derive(Debug)]
pub(crate) struct AppConfig {
    path: PathBuf,
    web_url: String,
    selected_list_id: Option<String>,
    access_token: Option<SecretString>,
}

impl AppConfig {
    /// Load the config file and apply environment overrides.
    ///
    /// A broken file is logged and replaced by defaults.
    pub(crate) fn load() -> Self {
        let path = storage::config_path();
        let file = match storage::load_config_file(&path) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Failed to load config, using defaults: {err}");
                ConfigFile::default()
            },
        };
        let config = Self::resolve(path, file, |key| std::env::var(key).ok());
        log::info!(
            "site: {}",
            if config.web_url.is_empty() {
                "<unset>"
            } else {
                config.web_url.as_str()
            }
        );
        config
    }

    fn resolve(
        path: PathBuf,
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let web_url = env(WEB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(file.web_url);
        let access_token = env(ACCESS_TOKEN_ENV)
            .filter(|value| !value.trim().is_empty())
            .or(file.access_token.filter(|value| !value.trim().is_empty()))
            .map(SecretString::from);

        Self {
            path,
            web_url: web_url.trim().to_string(),
            selected_list_id: file.selected_list_id.filter(|id| !id.is_empty()),
            access_token,
        }
    }

    pub(crate) fn web_url(&self) -> &str {
        &self.web_url
    }

    pub(crate) fn selected_list_id(&self) -> Option<&str> {
        self.selected_list_id.as_deref()
    }

    /// Hand the access token over to the HTTP client.
    pub(crate) fn take_access_token(&mut self) -> Option<SecretString> {
        self.access_token.take()
    }

    /// Record the selected list and return a job that persists it.
    pub(crate) fn select_list(
        &mut self,
        list_id: String,
    ) -> impl FnOnce() -> Result<(), ConfigError> + Send + 'static {
        self.selected_list_id = Some(list_id.clone()).filter(|id| !id.is_empty());
        let path = self.path.clone();
        move || storage::save_selected_list_id(&path, list_id)
    }
}
