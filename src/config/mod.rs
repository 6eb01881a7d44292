//! Configuration management for ImageAI.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::image::{DEFAULT_IMAGE_SERVICE, ImageSize};
use crate::core::share::{CommandShareTarget, ShareTarget};

/// Environment variable overriding `generation.delay_ms`.
pub const DELAY_ENV_VAR: &str = "IMAGEAI_GENERATION_DELAY_MS";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation configuration.
    pub generation: GenerationConfig,

    /// Profile shown on the profile view.
    pub profile: ProfileConfig,

    /// Privacy toggles.
    pub privacy: PrivacyConfig,

    /// Sharing configuration.
    pub share: ShareConfig,

    /// TUI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// Loads global config first, then merges project-local config if present,
    /// then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        let global_path = Self::config_path()?;
        let mut config = if global_path.exists() {
            Self::load_from(&global_path)?
        } else {
            Self::default()
        };

        if let Ok(project_path) = Self::project_config_path() {
            if project_path.exists() {
                let project_config = Self::load_from(&project_path)?;
                config.merge(project_config);
            }
        }

        config.apply_env_overrides(std::env::var(DELAY_ENV_VAR).ok());
        Ok(config)
    }

    /// Parse a single configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Get the project-local configuration file path.
    ///
    /// Looks for `.imageai/config.toml` in the current directory.
    pub fn project_config_path() -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(cwd.join(".imageai").join("config.toml"))
    }

    /// Merge another config into this one (project overrides global).
    fn merge(&mut self, other: Self) {
        let defaults = Self::default();

        if other.generation.delay_ms != defaults.generation.delay_ms {
            self.generation.delay_ms = other.generation.delay_ms;
        }
        if other.generation.width != defaults.generation.width {
            self.generation.width = other.generation.width;
        }
        if other.generation.height != defaults.generation.height {
            self.generation.height = other.generation.height;
        }
        if other.generation.image_service != defaults.generation.image_service {
            self.generation.image_service = other.generation.image_service;
        }
        if other.generation.quality != defaults.generation.quality {
            self.generation.quality = other.generation.quality;
        }
        if other.generation.style != defaults.generation.style {
            self.generation.style = other.generation.style;
        }

        if !other.share.command.is_empty() {
            self.share.command = other.share.command;
        }

        if other.profile.username != defaults.profile.username {
            self.profile.username = other.profile.username;
        }
        if other.profile.email != defaults.profile.email {
            self.profile.email = other.profile.email;
        }
        if other.profile.bio != defaults.profile.bio {
            self.profile.bio = other.profile.bio;
        }

        if other.privacy.public_profile != defaults.privacy.public_profile {
            self.privacy.public_profile = other.privacy.public_profile;
        }
        if other.privacy.keep_history != defaults.privacy.keep_history {
            self.privacy.keep_history = other.privacy.keep_history;
        }

        if other.tui.toast_ms != defaults.tui.toast_ms {
            self.tui.toast_ms = other.tui.toast_ms;
        }
        if other.tui.theme != defaults.tui.theme {
            self.tui.theme = other.tui.theme;
        }
        if other.tui.language != defaults.tui.language {
            self.tui.language = other.tui.language;
        }
    }

    /// Apply an override for the generation delay, ignoring unparsable values.
    fn apply_env_overrides(&mut self, delay: Option<String>) {
        let Some(raw) = delay else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.generation.delay_ms = ms,
            Err(e) => tracing::warn!(var = DELAY_ENV_VAR, value = %raw, "ignoring override: {e}"),
        }
    }

    /// Get the configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Log file used while the TUI owns the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn log_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("imageai.log"))
    }

    /// Get the config directory path (`~/.config/imageai/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config_home).join("imageai"));
        }

        if cfg!(target_os = "macos") {
            if let Ok(home) = std::env::var("HOME") {
                return Ok(PathBuf::from(home).join(".config").join("imageai"));
            }
        }

        let base = directories::BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(base.config_dir().join("imageai"))
    }
}

/// Default quality preset offered in settings.
///
/// Display-only: generation always uses `generation.width`/`height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    #[default]
    High,
    Medium,
    Low,
}

impl QualityPreset {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Cycle to next preset: High → Medium → Low → High
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    #[must_use]
    pub const fn size(self) -> ImageSize {
        match self {
            Self::High => ImageSize::square(1024),
            Self::Medium => ImageSize::square(512),
            Self::Low => ImageSize::square(256),
        }
    }
}

impl fmt::Display for QualityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        write!(f, "{label} ({})", self.size())
    }
}

/// Default style preset offered in settings. Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    #[default]
    Realistic,
    Artistic,
    Anime,
    #[serde(rename = "3d")]
    ThreeD,
}

impl StylePreset {
    pub const ALL: [Self; 4] = [Self::Realistic, Self::Artistic, Self::Anime, Self::ThreeD];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Realistic => Self::Artistic,
            Self::Artistic => Self::Anime,
            Self::Anime => Self::ThreeD,
            Self::ThreeD => Self::Realistic,
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Realistic => write!(f, "Realistic"),
            Self::Artistic => write!(f, "Artistic"),
            Self::Anime => write!(f, "Anime"),
            Self::ThreeD => write!(f, "3D"),
        }
    }
}

/// Generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Simulated latency before a result is produced, in milliseconds.
    #[serde(alias = "generationDelayMs", alias = "generation_delay_ms")]
    pub delay_ms: u64,

    /// Result width in pixels.
    pub width: u32,

    /// Result height in pixels.
    pub height: u32,

    /// Seed-parameterized image service base URL.
    pub image_service: String,

    /// Quality preset shown in settings.
    pub quality: QualityPreset,

    /// Style preset shown in settings.
    pub style: StylePreset,
}

impl GenerationConfig {
    pub const DEFAULT_DELAY_MS: u64 = 2000;

    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    #[must_use]
    pub const fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: Self::DEFAULT_DELAY_MS,
            width: ImageSize::RESULT.width,
            height: ImageSize::RESULT.height,
            image_service: DEFAULT_IMAGE_SERVICE.to_string(),
            quality: QualityPreset::default(),
            style: StylePreset::default(),
        }
    }
}

/// Profile details shown on the profile view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub username: String,
    pub email: String,
    pub bio: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            username: "Creative Artist".to_string(),
            email: "artist@example.com".to_string(),
            bio: String::new(),
        }
    }
}

/// Privacy toggles. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Other users can see your work.
    pub public_profile: bool,

    /// Keep every generation in the history view.
    pub keep_history: bool,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            public_profile: true,
            keep_history: true,
        }
    }
}

/// Sharing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Program and leading arguments used as the platform share.
    ///
    /// The share title, prompt, and URL are appended. When empty, sharing
    /// copies the link to the clipboard.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
}

impl ShareConfig {
    /// Build the configured platform share, if any.
    #[must_use]
    pub fn target(&self) -> Option<Box<dyn ShareTarget>> {
        CommandShareTarget::from_argv(&self.command)
            .map(|target| Box::new(target) as Box<dyn ShareTarget>)
    }
}

/// TUI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// How long a notification stays on screen, in milliseconds.
    pub toast_ms: u64,

    /// Theme name shown in settings.
    pub theme: String,

    /// Interface language shown in settings.
    pub language: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            toast_ms: 3000,
            theme: "Dark".to_string(),
            language: "English".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.generation.delay_ms, 2000);
        assert_eq!(config.generation.size(), ImageSize::RESULT);
        assert_eq!(config.generation.image_service, "https://picsum.photos");
        assert!(config.share.target().is_none());
    }

    #[test]
    fn parses_generation_section() {
        let config: Config = toml::from_str(
            r#"
            [generation]
            delay_ms = 150
            quality = "low"
            style = "3d"
            "#,
        )
        .unwrap();

        assert_eq!(config.generation.delay(), Duration::from_millis(150));
        assert_eq!(config.generation.quality, QualityPreset::Low);
        assert_eq!(config.generation.style, StylePreset::ThreeD);
        assert_eq!(config.generation.width, 800);
    }

    #[test]
    fn accepts_camel_case_delay_key() {
        let config: Config = toml::from_str("[generation]\ngenerationDelayMs = 10\n").unwrap();
        assert_eq!(config.generation.delay_ms, 10);
    }

    #[test]
    fn project_config_overrides_global() {
        let mut global = Config::default();
        global.generation.delay_ms = 500;
        global.share.command = vec!["global-share".to_string()];

        let mut project = Config::default();
        project.generation.image_service = "http://localhost:9000".to_string();
        project.share.command = vec!["project-share".to_string()];

        global.merge(project);

        assert_eq!(global.generation.delay_ms, 500);
        assert_eq!(global.generation.image_service, "http://localhost:9000");
        assert_eq!(global.share.command, ["project-share"]);
    }

    #[test]
    fn project_profile_privacy_and_tui_override_global() {
        let mut global = Config::default();
        global.profile.email = "global@example.com".to_string();
        global.tui.language = "Deutsch".to_string();

        let project: Config = toml::from_str(
            "[profile]\nusername = \"Ada\"\n\n[privacy]\npublic_profile = false\n\n[tui]\ntheme = \"Light\"\n",
        )
        .unwrap();
        global.merge(project);

        assert_eq!(global.profile.username, "Ada");
        assert_eq!(global.profile.email, "global@example.com");
        assert!(!global.privacy.public_profile);
        assert!(global.privacy.keep_history);
        assert_eq!(global.tui.theme, "Light");
        assert_eq!(global.tui.language, "Deutsch");
    }

    #[test]
    fn env_override_replaces_delay() {
        let mut config = Config::default();
        config.apply_env_overrides(Some("0".to_string()));
        assert_eq!(config.generation.delay_ms, 0);
    }

    #[test]
    fn invalid_env_override_is_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(Some("soon".to_string()));
        assert_eq!(config.generation.delay_ms, 2000);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[profile]\nusername = \"Ada\"\n\n[share]\ncommand = [\"notify-send\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.profile.username, "Ada");
        assert_eq!(config.profile.email, "artist@example.com");
        assert!(config.share.target().is_some());
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generation\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn presets_cycle_back_to_start() {
        let mut quality = QualityPreset::default();
        for _ in QualityPreset::ALL {
            quality = quality.next();
        }
        assert_eq!(quality, QualityPreset::High);

        let mut style = StylePreset::default();
        for _ in StylePreset::ALL {
            style = style.next();
        }
        assert_eq!(style, StylePreset::Realistic);
    }

    #[test]
    fn quality_label_includes_dimensions() {
        assert_eq!(QualityPreset::Medium.to_string(), "Medium (512x512)");
    }
}
