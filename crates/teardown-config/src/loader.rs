//! Parameter file loading with format detection by extension

use crate::error::{ConfigError, Result};
use crate::types::OptimizeParams;
use crate::validation::Validate;
use std::fs;
use std::path::Path;

/// Format for parameter files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Load and validate optimization parameters from a file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<OptimizeParams> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = detect_format(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let location = path
        .to_str()
        .map(|p| format!(" in {}", p))
        .unwrap_or_default();

    let params: OptimizeParams = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                format: "YAML",
                location,
                message: e.to_string(),
            })?
        }
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            format: "TOML",
            location,
            message: e.to_string(),
        })?,
        ConfigFormat::Json => {
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                format: "JSON",
                location,
                message: e.to_string(),
            })?
        }
    };

    params.validate()?;

    Ok(params)
}

/// Detect parameter format from file extension
fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_detect_yaml() {
        assert_eq!(
            detect_format(&PathBuf::from("params.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(&PathBuf::from("params.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_detect_toml() {
        assert_eq!(
            detect_format(&PathBuf::from("params.toml")).unwrap(),
            ConfigFormat::Toml
        );
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format(&PathBuf::from("params.json")).unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn test_unknown_format() {
        assert!(detect_format(&PathBuf::from("params.txt")).is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "generations: 10\nmutation_rate: 0.5").unwrap();

        let params = load_from_file(&path).unwrap();
        assert_eq!(params.generations, 10);
        assert_eq!(params.mutation_rate, 0.5);
        assert_eq!(params.retain_fraction, 0.5);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "retain_fraction = 0.25").unwrap();

        let params = load_from_file(&path).unwrap();
        assert_eq!(params.retain_fraction, 0.25);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{{\"mutation_rate\": 2.0}}").unwrap();

        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_from_file("does-not-exist.yaml"),
            Err(ConfigError::FileNotFound { .. })
        ));
    }
}
