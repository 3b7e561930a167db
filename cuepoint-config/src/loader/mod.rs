//! Resolution of the overlay config from env vars and files.

pub mod error;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{ConfigSource, SkipOverlayConfig};
use crate::util::{non_empty, parse_bool};
use error::ConfigLoadError;

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "SKIP_OVERLAY_CONFIG_PATH";
/// Inline JSON config document.
pub const CONFIG_JSON_VAR: &str = "SKIP_OVERLAY_CONFIG_JSON";
/// Overrides [`SkipOverlayConfig::enabled`].
pub const ENABLED_VAR: &str = "SKIP_OVERLAY_ENABLED";
/// Overrides [`SkipOverlayConfig::auto_hide_ms`].
pub const AUTO_HIDE_MS_VAR: &str = "SKIP_OVERLAY_AUTO_HIDE_MS";
/// Overrides [`SkipOverlayConfig::min_remaining_ms`].
pub const MIN_REMAINING_MS_VAR: &str = "SKIP_OVERLAY_MIN_REMAINING_MS";

const DEFAULT_CANDIDATES: &[&str] = &[
    "skip_overlay.toml",
    "skip_overlay.json",
    "config/skip_overlay.toml",
    "config/skip_overlay.json",
];

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// Effective settings after overrides.
    pub config: SkipOverlayConfig,
    /// Where the base document came from.
    pub source: ConfigSource,
}

/// Resolves [`SkipOverlayConfig`] from the environment and well-known files.
///
/// Evaluation order:
/// 1) `$SKIP_OVERLAY_CONFIG_PATH` (TOML or JSON file),
/// 2) `$SKIP_OVERLAY_CONFIG_JSON` (inline JSON),
/// 3) the first existing default file under the search root,
/// 4) defaults.
///
/// Scalar overrides (`$SKIP_OVERLAY_ENABLED`, `$SKIP_OVERLAY_AUTO_HIDE_MS`,
/// `$SKIP_OVERLAY_MIN_REMAINING_MS`) apply on top of whichever source won.
pub struct ConfigLoader {
    lookup: Lookup,
    search_root: PathBuf,
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("search_root", &self.search_root)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Loader over the process environment, searching the working directory.
    pub fn from_env() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Loader over a custom variable lookup, used by tests.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
            search_root: PathBuf::from("."),
        }
    }

    /// Directory the default file names are resolved against.
    pub fn search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Resolve, override and validate the config.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (mut config, source) = self.load_base()?;
        self.apply_overrides(&mut config)?;
        config.validate()?;

        log::debug!("skip overlay config loaded from {source:?}");
        Ok(ConfigLoad { config, source })
    }

    fn var(&self, name: &str) -> Option<String> {
        non_empty((self.lookup)(name))
    }

    fn load_base(
        &self,
    ) -> Result<(SkipOverlayConfig, ConfigSource), ConfigLoadError> {
        if let Some(path_str) = self.var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str.trim());
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = self.var(CONFIG_JSON_VAR) {
            let config = parse_json(&raw, CONFIG_JSON_VAR)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((SkipOverlayConfig::default(), ConfigSource::Default))
    }

    fn apply_overrides(
        &self,
        config: &mut SkipOverlayConfig,
    ) -> Result<(), ConfigLoadError> {
        if let Some(raw) = self.var(ENABLED_VAR) {
            config.enabled =
                parse_bool(&raw).ok_or_else(|| ConfigLoadError::InvalidValue {
                    field: "enabled",
                    reason: format!("{raw:?} is not a boolean"),
                })?;
        }
        if let Some(raw) = self.var(AUTO_HIDE_MS_VAR) {
            config.auto_hide_ms = parse_millis(&raw, "auto_hide_ms")?;
        }
        if let Some(raw) = self.var(MIN_REMAINING_MS_VAR) {
            config.min_remaining_ms = parse_millis(&raw, "min_remaining_ms")?;
        }
        Ok(())
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

/// Read a config file, picking the format from its extension.
pub fn load_from_file(
    path: &Path,
) -> Result<SkipOverlayConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<SkipOverlayConfig, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

/// Parse a JSON document; `origin` names it in errors.
pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<SkipOverlayConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        message: err.to_string(),
    })
}

fn parse_millis(
    raw: &str,
    field: &'static str,
) -> Result<u64, ConfigLoadError> {
    raw.trim()
        .parse()
        .map_err(|err| ConfigLoadError::InvalidValue {
            field,
            reason: format!("{raw:?}: {err}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn loader(vars: &[(&str, &str)]) -> ConfigLoader {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigLoader::with_lookup(move |name| vars.get(name).cloned())
            .search_root("/nonexistent/cuepoint")
    }

    #[test]
    fn falls_back_to_defaults() {
        let load = loader(&[]).load().unwrap();
        assert_eq!(load.source, ConfigSource::Default);
        assert_eq!(load.config, SkipOverlayConfig::default());
    }

    #[test]
    fn inline_json_is_partial() {
        let load = loader(&[(CONFIG_JSON_VAR, r#"{"auto_hide_ms": 3000}"#)])
            .load()
            .unwrap();
        assert_eq!(load.source, ConfigSource::EnvInline);
        assert_eq!(load.config.auto_hide_ms, 3_000);
        assert_eq!(load.config.min_remaining_ms, 1_000);
    }

    #[test]
    fn scalar_overrides_win() {
        let load = loader(&[
            (CONFIG_JSON_VAR, r#"{"enabled": true}"#),
            (ENABLED_VAR, "off"),
            (AUTO_HIDE_MS_VAR, "12000"),
            (MIN_REMAINING_MS_VAR, " 3000 "),
        ])
        .load()
        .unwrap();
        assert!(!load.config.enabled);
        assert_eq!(load.config.auto_hide_ms, 12_000);
        assert_eq!(load.config.min_remaining_ms, 3_000);
    }

    #[test]
    fn blank_vars_are_ignored() {
        let load = loader(&[(CONFIG_JSON_VAR, "   "), (ENABLED_VAR, "")])
            .load()
            .unwrap();
        assert_eq!(load.source, ConfigSource::Default);
    }

    #[test]
    fn bad_override_is_reported() {
        let err = loader(&[(AUTO_HIDE_MS_VAR, "soon")]).load().unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidValue {
                field: "auto_hide_ms",
                ..
            }
        ));
    }

    #[test]
    fn invalid_inline_json_names_its_origin() {
        let err = loader(&[(CONFIG_JSON_VAR, "{not json")]).load().unwrap_err();
        match err {
            ConfigLoadError::Parse { origin, .. } => {
                assert_eq!(origin, CONFIG_JSON_VAR)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_from_str_accepts_toml_or_json() {
        let toml = parse_from_str("fade_ms = 0\nlocale = \"de\"", "t").unwrap();
        assert_eq!(toml.fade_ms, 0);
        assert_eq!(toml.locale, "de");

        let json = parse_from_str(r#"{"label": "Skip"}"#, "j").unwrap();
        assert_eq!(json.label.as_deref(), Some("Skip"));

        assert!(parse_from_str("= nope", "x").is_err());
    }
}
