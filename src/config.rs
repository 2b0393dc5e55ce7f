use crate::error::{QuizError, Result};
use crate::types::config::QuizConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "energy-quiz.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/energy-quiz/config.toml";

/// Global file, then `energy-quiz.toml` in `root`, then `explicit`; later
/// files override earlier ones key by key. Missing optional files are
/// skipped; a missing explicit file is an error.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<QuizConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<QuizConfig> {
    let local = root.join(DEFAULT_CONFIG_FILE);
    let layers = [
        (global_path, false),
        (Some(local.as_path()), false),
        (explicit, true),
    ];

    let mut merged = Table::new();
    for (path, required) in layers {
        if let Some(path) = path {
            if let Some(layer) = read_layer(path, required)? {
                overlay(&mut merged, layer);
            }
        }
    }

    Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| QuizError::ConfigParse(e.to_string()))
}

/// Parses one config file. An absent file is skipped unless `required`.
fn read_layer(path: &Path, required: bool) -> Result<Option<Table>> {
    if !path.exists() {
        if required {
            return Err(QuizError::ConfigNotFound(path.display().to_string()));
        }
        return Ok(None);
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| QuizError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge key by key; any other value replaces what was there.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
