//! Configuration file support for polycanvas.
//!
//! Settings are stored as versioned JSON. Every field has a serde default so
//! older or hand-trimmed files still load.

use polycanvas_raster::Color;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLOR, DEFAULT_OPACITY, interaction, style, zoom};
use crate::keybindings::KeyBindings;
use crate::transform::ZoomBounds;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    #[serde(default)]
    pub preferences: Preferences,

    #[serde(default)]
    pub interaction: InteractionConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Paint defaults and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Tool color when no tag is active
    #[serde(default = "default_color")]
    pub default_color: Color,

    #[serde(default = "default_opacity")]
    pub default_opacity: f32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_color() -> Color {
    DEFAULT_COLOR
}

fn default_opacity() -> f32 {
    DEFAULT_OPACITY
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_opacity: default_opacity(),
            log_level: LogLevel::default(),
        }
    }
}

/// Pointer thresholds and decoration sizes, in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Radius for closing a polygon and for grabbing a vertex
    #[serde(default = "default_vertex_hit_radius")]
    pub vertex_hit_radius: f64,

    /// Marquee must exceed this on one axis to select
    #[serde(default = "default_marquee_min_size")]
    pub marquee_min_size: f64,

    #[serde(default = "default_handle_radius")]
    pub handle_radius: f32,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

fn default_vertex_hit_radius() -> f64 {
    interaction::VERTEX_HIT_RADIUS
}

fn default_marquee_min_size() -> f64 {
    interaction::MARQUEE_MIN_SIZE
}

fn default_handle_radius() -> f32 {
    style::HANDLE_RADIUS
}

fn default_stroke_width() -> f32 {
    style::STROKE_WIDTH
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            vertex_hit_radius: default_vertex_hit_radius(),
            marquee_min_size: default_marquee_min_size(),
            handle_radius: default_handle_radius(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Zoom limits and wheel sensitivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,

    #[serde(default = "default_max_scale")]
    pub max_scale: f64,

    /// Fractional scale change per wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,
}

fn default_min_scale() -> f64 {
    zoom::MIN_SCALE
}

fn default_max_scale() -> f64 {
    zoom::MAX_SCALE
}

fn default_wheel_step() -> f64 {
    zoom::WHEEL_STEP
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl ZoomConfig {
    pub fn bounds(&self) -> ZoomBounds {
        ZoomBounds::new(self.min_scale, self.max_scale)
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: Preferences::default(),
            interaction: InteractionConfig::default(),
            zoom: ZoomConfig::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        if !(zoom.min_scale > 0.0 && zoom.min_scale <= zoom.max_scale) {
            return Err(ConfigError::InvalidValue(format!(
                "zoom range {}..{} is invalid",
                zoom.min_scale, zoom.max_scale
            )));
        }
        if !(zoom.wheel_step > 0.0 && zoom.wheel_step < 1.0) {
            return Err(ConfigError::InvalidValue(format!(
                "wheel_step {} must be between 0 and 1",
                zoom.wheel_step
            )));
        }
        if self.interaction.vertex_hit_radius <= 0.0 {
            return Err(ConfigError::InvalidValue(
                "vertex_hit_radius must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.preferences.default_opacity) {
            return Err(ConfigError::InvalidValue(format!(
                "default_opacity {} is outside 0..=1",
                self.preferences.default_opacity
            )));
        }
        Ok(())
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "polycanvas-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("polycanvas").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("polycanvas")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load from a file. Missing or unreadable files are errors here; use
    /// [`EditorConfig::load_or_default`] for the forgiving variant.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or broken.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from the default path, or defaults when there is none.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Save configuration to `path`, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A value parsed but is out of range
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
