use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// On-disk shape of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigFile {
    pub(crate) web_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) selected_list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) access_token: Option<String>,
}

/// Return the path to the config JSON file.
pub(crate) fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("splist")
            .join("config.json");
    }
    std::env::temp_dir().join("splist").join("config.json")
}

/// Load the config file; a missing file yields defaults.
pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        },
        Err(err) => return Err(err.into()),
    };
    let file: ConfigFile = serde_json::from_str(&content)?;
    Ok(file)
}

/// Save the config file atomically.
pub(crate) fn save_config_file(
    path: &Path,
    file: &ConfigFile,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(file)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Persist `list_id` as the selected list, keeping every other field.
pub(crate) fn save_selected_list_id(
    path: &Path,
    list_id: String,
) -> Result<(), ConfigError> {
    let mut file = load_config_file(path)?;
    file.selected_list_id = Some(list_id).filter(|id| !id.is_empty());
    save_config_file(path, &file)
}
