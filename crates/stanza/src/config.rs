//! Site and evaluation configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Evaluation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Maximum nesting of `template()` / `paginate()` inclusions
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl EvalOptions {
    /// Options with a custom inclusion depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// Layout of a site on disk, loaded from JSON.
///
/// ```json
/// { "root_path": "site", "output_path": "public" }
/// ```
///
/// Relative directories resolve against `root_path`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base directory of the site
    pub root_path: PathBuf,
    /// Files whose exports are iterated and paginated
    pub content_dir: PathBuf,
    /// Top-level pages
    pub pages_dir: PathBuf,
    /// Reusable templates
    pub template_dir: PathBuf,
    /// Where rendered files are written
    pub output_path: PathBuf,
    /// Capacity of each inter-stage channel
    pub channel_capacity: usize,
    /// Evaluation settings
    pub eval: EvalOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            pages_dir: PathBuf::from("pages"),
            template_dir: PathBuf::from("templates"),
            output_path: PathBuf::from("output"),
            channel_capacity: 10,
            eval: EvalOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Create a config rooted at `root` with default directory names.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON text; `origin` names it in errors.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(text).map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        if config.channel_capacity == 0 {
            return Err(Error::Config {
                path: origin.to_path_buf(),
                message: "channel_capacity must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text, path)
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root_path.join(dir)
        }
    }

    /// Absolute or root-relative content directory.
    pub fn content_root(&self) -> PathBuf {
        self.resolve(&self.content_dir)
    }

    /// Absolute or root-relative pages directory.
    pub fn pages_root(&self) -> PathBuf {
        self.resolve(&self.pages_dir)
    }

    /// Absolute or root-relative template directory.
    pub fn template_root(&self) -> PathBuf {
        self.resolve(&self.template_dir)
    }

    /// Absolute or root-relative output directory.
    pub fn output_root(&self) -> PathBuf {
        self.resolve(&self.output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config =
            SiteConfig::from_json(r#"{ "root_path": "site" }"#, Path::new("stanza.json")).unwrap();
        assert_eq!(config.content_root(), PathBuf::from("site/content"));
        assert_eq!(config.pages_root(), PathBuf::from("site/pages"));
        assert_eq!(config.template_root(), PathBuf::from("site/templates"));
        assert_eq!(config.output_root(), PathBuf::from("site/output"));
        assert_eq!(config.channel_capacity, 10);
        assert_eq!(config.eval.max_depth, 64);
    }

    #[test]
    fn test_absolute_dirs_are_kept() {
        let config = SiteConfig::from_json(
            r#"{ "root_path": "site", "output_path": "/tmp/out", "eval": { "max_depth": 4 } }"#,
            Path::new("stanza.json"),
        )
        .unwrap();
        assert_eq!(config.output_root(), PathBuf::from("/tmp/out"));
        assert_eq!(config.eval, EvalOptions::with_max_depth(4));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ nope", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err =
            SiteConfig::from_json(r#"{ "channel_capacity": 0 }"#, Path::new("c.json")).unwrap_err();
        assert!(err.to_string().contains("channel_capacity"));
    }
}
