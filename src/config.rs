use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub code: CodeConfig,
    pub images: ImageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    /// Language class placed in the fence header
    pub language: String,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            language: "python".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Directory prefix for emitted image links
    pub dir: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            dir: "figs".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.code.language, "python");
        assert_eq!(config.images.dir, "figs");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[code]\nlanguage = \"js\"\n").unwrap();
        assert_eq!(config.code.language, "js");
        assert_eq!(config.images.dir, "figs");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("does-not-exist.toml"));
        assert_eq!(config.code.language, "python");
    }
}
