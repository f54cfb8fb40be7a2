//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = toml::from_str(&expanded)?;
        Self::expand_paths(&mut config);
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::InvalidValue {
            field: "${VAR}".to_string(),
            message: e.to_string(),
        })?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    fn expand_paths(config: &mut Config) {
        if let Some(path) = config.source.path.take() {
            config.source.path = Some(Self::expand_pathbuf(&path));
        }
        config.output.path = Self::expand_pathbuf(&config.output.path);
        if let Some(dir) = config.logging.directory.take() {
            config.logging.directory = Some(Self::expand_path(&dir));
        }
    }

    fn expand_pathbuf(path: &Path) -> PathBuf {
        PathBuf::from(Self::expand_path(&path.to_string_lossy()))
    }

    /// Expand shell-style paths (e.g., `~/.wcagfix`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.output.path, PathBuf::from("fixed_output.html"));
        assert!(config.source.url.is_none());
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.wcagfix");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [source]
            url = "https://test.example.com/"

            [output]
            path = "out/fixed.html"

            [fetch]
            timeout_seconds = 10
            user_agent = "probe/1.0"

            [logging]
            level = "debug"
            file = true
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.source.url.as_deref(), Some("https://test.example.com/"));
        assert_eq!(config.output.path, PathBuf::from("out/fixed.html"));
        assert_eq!(config.fetch.timeout_seconds, 10);
        assert_eq!(config.fetch.user_agent, "probe/1.0");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file);
    }

    #[test]
    fn test_load_expands_tilde_in_paths() {
        let content = r#"
            [source]
            path = "~/pages/index.html"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        let path = config.source.path.unwrap();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("pages/index.html"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]").unwrap();
        writeln!(file, "path = \"report.html\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.output.path, PathBuf::from("report.html"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/wcagfix.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/path/wcagfix.toml")).unwrap();
        assert_eq!(config.fetch.timeout_seconds, 30);
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("WCAGFIX_TEST_URL", "https://env.example.com/");
        }
        let content = "[source]\nurl = \"${WCAGFIX_TEST_URL}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.source.url.as_deref(), Some("https://env.example.com/"));
        unsafe {
            std::env::remove_var("WCAGFIX_TEST_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_WCAGFIX_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }
}
