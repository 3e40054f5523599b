//! Tool configuration management for `coverkit.toml`.
//!
//! All sections are optional; a missing config file yields pure defaults.
//! The Gemini API key is never stored in the file - it is read from the
//! environment at load time and injected into the struct, so commands
//! receive a single configuration value rather than probing globals.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[paths]`    | Post catalog location, output directory        |
//! | `[cutout]`   | Background cutout threshold default            |
//! | `[cover]`    | Cover size, font file, show name               |
//! | `[generate]` | Gemini model, retry attempts, retry delay      |

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::gemini::Model;

/// Config file looked up in the working directory when `-C` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "coverkit.toml";

/// Environment variables consulted for the Gemini API key, in order.
const API_KEY_VARS: [&str; 2] = ["GOOGLE_GEMINI_API_KEY", "GOOGLE_API_KEY"];

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing coverkit.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project root directory - parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Gemini API key from the environment (internal use only)
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Catalog and output locations
    pub paths: PathsConfig,

    /// Background cutout settings
    pub cutout: CutoutConfig,

    /// Procedural cover settings
    pub cover: CoverConfig,

    /// Gemini generation settings
    pub generate: GenerateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            api_key: None,
            paths: PathsConfig::default(),
            cutout: CutoutConfig::default(),
            cover: CoverConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly passed path must exist; the implicit default file may
    /// be absent, in which case defaults apply. Validation runs before any
    /// command work starts.
    pub fn load(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match cli_path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
            toml::from_str::<Self>(&raw)?
        } else if required {
            return Err(ConfigError::Io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "config file not found"),
            ));
        } else {
            Self::default()
        };

        config.root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.api_key = read_api_key();
        config.validate()?;
        Ok(config)
    }

    /// Validate settings that can't be expressed in the type system.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.generate.attempts == 0 {
            return Err(ConfigError::Validation(format!(
                "generate.attempts must be at least 1, got {}",
                self.generate.attempts
            )));
        }
        if let Err(e) = self.generate.model.parse::<Model>() {
            return Err(ConfigError::Validation(format!("generate.model: {e}")));
        }
        if self.cover.size < 256 {
            return Err(ConfigError::Validation(format!(
                "cover.size must be at least 256, got {}",
                self.cover.size
            )));
        }
        Ok(())
    }

    /// Absolute path to the post catalog.
    pub fn posts_path(&self) -> PathBuf {
        self.resolve(&self.paths.posts)
    }

    /// Absolute path to the output directory for generated images.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.paths.output)
    }

    /// Configured cover font, resolved against the project root.
    pub fn font_path(&self) -> Option<PathBuf> {
        self.cover.font.as_deref().map(|f| self.resolve(f))
    }

    /// API key, or a validation error with a setup hint.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or_else(|| {
            ConfigError::Validation(
                "no API key found: set GOOGLE_GEMINI_API_KEY or GOOGLE_API_KEY".into(),
            )
        })
    }

    /// Expand `~` and anchor relative paths at the project root.
    fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = shellexpand::tilde(raw);
        let path = Path::new(expanded.as_ref());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn read_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}

// ============================================================================
// sections
// ============================================================================

/// `[paths]` - where content lives and where output goes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Post catalog file (JSON array of posts).
    pub posts: String,

    /// Directory generated and rendered images are written to.
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts: "data/posts.json".into(),
            output: "public/covers".into(),
        }
    }
}

/// `[cutout]` - background transparency filter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CutoutConfig {
    /// Per-channel cutoff above which a pixel counts as background.
    pub threshold: u8,
}

impl Default for CutoutConfig {
    fn default() -> Self {
        Self { threshold: 240 }
    }
}

/// `[cover]` - procedural podcast cover settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Cover edge length in pixels (covers are square).
    pub size: u32,

    /// TTF/OTF font file used for cover text.
    pub font: Option<String>,

    /// Show name rendered in the cover footer.
    pub show_name: String,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            size: 1400,
            font: None,
            show_name: "Saraiva Vision".into(),
        }
    }
}

/// `[generate]` - Gemini API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Model alias: "gemini-flash" or "gemini-pro".
    pub model: String,

    /// Total request attempts per cover (first try included).
    pub attempts: u32,

    /// Constant sleep between attempts, in seconds.
    pub retry_delay_secs: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            model: "gemini-flash".into(),
            attempts: 3,
            retry_delay_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.cutout.threshold, 240);
        assert_eq!(config.cover.size, 1400);
        assert_eq!(config.generate.model, "gemini-flash");
        assert_eq!(config.generate.attempts, 3);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[cutout]\nthreshold = 235\n").unwrap();
        assert_eq!(config.cutout.threshold, 235);
        assert_eq!(config.paths.posts, "data/posts.json");
    }

    #[test]
    fn out_of_range_threshold_is_rejected_at_parse() {
        let parsed = toml::from_str::<Config>("[cutout]\nthreshold = 300\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn zero_attempts_fails_validation() {
        let config: Config = toml::from_str("[generate]\nattempts = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn unknown_model_fails_validation() {
        let config: Config = toml::from_str("[generate]\nmodel = \"dall-e\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_paths_anchor_at_root() {
        let mut config = Config::default();
        config.root = PathBuf::from("/srv/site");
        assert_eq!(config.posts_path(), PathBuf::from("/srv/site/data/posts.json"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/site/public/covers"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let missing = Path::new("/nonexistent/coverkit.toml");
        assert!(matches!(
            Config::load(Some(missing)),
            Err(ConfigError::Io(_, _))
        ));
    }

    #[test]
    fn load_reads_file_and_sets_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverkit.toml");
        fs::write(&path, "[cover]\nsize = 3000\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.cover.size, 3000);
        assert_eq!(config.root, dir.path());
    }
}
