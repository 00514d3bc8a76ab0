use crate::error::{ConnscopeError, Result};
use crate::types::config::ConnscopeConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "connscope.toml";

/// Loads the analyzer config. An explicit path must exist; the default
/// file is optional and its absence is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<ConnscopeConfig>> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConnscopeError::ConfigNotFound(path.display().to_string()));
            }
            read_config(path).map(Some)
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            read_config(default).map(Some)
        }
    }
}

fn read_config(path: &Path) -> Result<ConnscopeConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ConnscopeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_errors_when_explicit_path_is_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing)).expect_err("missing explicit path should fail");
        assert!(matches!(err, ConnscopeError::ConfigNotFound(_)));
    }

    #[test]
    fn load_config_parses_labels_and_patterns() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("connscope.toml");
        fs::write(
            &path,
            r#"
[labels]
persona = ["Clio"]

[patterns]
curiosity = ["would you rather"]
"#,
        )
        .expect("config should write");

        let cfg = load_config(Some(&path))
            .expect("load should succeed")
            .expect("config should be present");
        assert_eq!(
            cfg.labels.as_ref().map(|labels| labels.persona.as_slice()),
            Some(["Clio".to_string()].as_slice())
        );
        assert_eq!(
            cfg.patterns
                .as_ref()
                .map(|patterns| patterns.curiosity.as_slice()),
            Some(["would you rather".to_string()].as_slice())
        );
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("connscope.toml");
        fs::write(&path, "[labels\npersona = 3").expect("config should write");

        let err = load_config(Some(&path)).expect_err("malformed toml should fail");
        assert!(matches!(err, ConnscopeError::ConfigParse(_)));
    }
}
