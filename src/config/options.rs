//! every single available configuration option and its type is listed in this file
use {
    crate::config::validate::{Validate, format_validation_errors},
    color_eyre::{
        Section, SectionExt,
        eyre::{Context, OptionExt, Result, eyre},
    },
    config::{Config, ConfigBuilder},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::path::{Path, PathBuf},
    tracing::{debug, info},
};

/// the name of the config file looked up on disk
pub const CONFIG_FILE_NAME: &str = "postrs.toml";

/// the prefix for environment variable overrides
pub const ENV_PREFIX: &str = "POSTRS";

/// Configuration options for making HTTP requests
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[default(Some(30))]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    #[default(Some(10))]
    pub connect_timeout_secs: Option<u64>,

    /// Connection pool size per host
    #[default(Some(8))]
    pub pool_max_idle_per_host: Option<usize>,

    /// Connection pool idle timeout in seconds
    #[default(Some(90))]
    pub pool_idle_timeout_secs: Option<u64>,

    /// User agent sent with every request
    #[default(Some(format!(
        "{}/v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )))]
    pub user_agent: Option<String>,
}

/// The language used for every user-facing string
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
pub enum Language {
    /// English
    #[default]
    English,

    /// Spanish
    Spanish,
}

/// Settings for the terminal screens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct UiConfig {
    /// The language to display text in
    #[default(Some(Language::English))]
    pub language: Option<Language>,

    /// Color the output (uses the rose pine palette)
    #[default(Some(true))]
    pub colors: Option<bool>,

    /// Show icons next to user ids and reaction counts
    #[default(Some(true))]
    pub icons: Option<bool>,

    /// The max width of a post card, in characters
    #[default(Some(72))]
    pub card_width: Option<usize>,

    /// How many lines of the body to show on a post card
    #[default(Some(2))]
    pub body_lines: Option<usize>,

    /// Show a spinner while a request is pending
    #[default(Some(true))]
    pub spinner: Option<bool>,

    /// Clear the screen before drawing a new screen
    #[default(Some(true))]
    pub clear_screen: Option<bool>,

    /// Catch Ctrl+C instead of exiting immediately
    #[default(Some(true))]
    pub ctrlc_handler: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
/// The format to log in
pub enum LoggingFormat {
    /// Use the compact output format
    #[default]
    Compact,

    /// Use an excessively pretty output format
    Pretty,
}

/// Settings for logging
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct LoggingConfig {
    /// Enable logging
    #[default(Some(true))]
    pub enable: Option<bool>,

    /// The max level to log at
    #[default(Some("warn".to_string()))]
    pub level: Option<String>,

    /// The output format
    #[default(Some(LoggingFormat::Compact))]
    pub format: Option<LoggingFormat>,

    /// Enable ANSI escape codes for colors and stuff
    #[default(Some(true))]
    pub ansi: Option<bool>,

    /// Display event targets in log messages
    #[default(Some(true))]
    pub event_targets: Option<bool>,

    /// Display line numbers in log messages
    #[default(Some(false))]
    pub line_numbers: Option<bool>,
}

/// postrs configuration options
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema, SmartDefault)]
#[schemars(default)]
pub struct PostsRs {
    /// Configuration file version (do not modify manually)
    #[default(Some(1))]
    pub version: Option<u32>,

    /// The base URL of the API (defaults to <https://dummyjson.com>)
    #[default(Some("https://dummyjson.com".to_string()))]
    pub base_url: Option<String>,

    /// HTTP client configuration
    #[default(Some(HttpConfig::default()))]
    pub http: Option<HttpConfig>,

    /// UI settings
    #[default(Some(UiConfig::default()))]
    pub ui: Option<UiConfig>,

    /// Logging settings
    #[default(Some(LoggingConfig::default()))]
    pub logging: Option<LoggingConfig>,
}

impl PostsRs {
    /// load config from default locations
    ///
    /// load prio: env > local > global > defaults
    pub fn load() -> Result<Self> {
        let mut files = vec![Self::global_config_path()?];

        if let Some(local_config) = Self::find_local_config()? {
            files.push(local_config);
        }

        Self::load_from(&files)
    }

    /// load config from the given files, later files taking priority
    ///
    /// missing files are skipped, env overrides are applied last
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::create_builder(Self::default())?;

        for file in files {
            debug!(path = %file.display(), "adding config source");
            builder = builder.add_source(config::File::from(file.as_path()).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().wrap_err("Failed to build configuration")?;
        let cfg: PostsRs = settings
            .try_deserialize::<PostsRs>()
            .wrap_err("Failed to deserialize configuration")?;

        cfg.run_validation()?;
        info!("Configuration validation successful");

        Ok(cfg)
    }

    /// get the global config file path
    pub fn global_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_eyre("Unable to determine system config directory")
            .suggestion("Ensure XDG_CONFIG_HOME or HOME environment variables are set")
            .suggestion("On Windows, APPDATA should be set")?;

        Ok(config_dir.join(CONFIG_FILE_NAME))
    }

    /// create a config builder with defaults
    fn create_builder(defaults: PostsRs) -> Result<ConfigBuilder<config::builder::DefaultState>> {
        let config_source = Config::try_from(&defaults)
            .wrap_err("Failed to convert default config struct to config source")?;

        Ok(Config::builder().add_source(config_source))
    }

    /// run validation and return a pretty error if it fails
    pub fn run_validation(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| eyre!(format_validation_errors(&errors)))
            .wrap_err("config validation failed")
            .suggestion("Check your postrs.toml for invalid values")
            .suggestion("Run with --gen-default to see valid options")
    }

    /// find the nearest local config file
    fn find_local_config() -> Result<Option<PathBuf>> {
        let curr_dir = std::env::current_dir()
            .wrap_err("Failed to get current working directory")
            .suggestion("Ensure the current directory exists and is accessible")?;

        Ok(Self::find_config_in_ancestors(&curr_dir))
    }

    /// walk up from `start` looking for a config file
    pub fn find_config_in_ancestors(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
            .find(|path| path.exists())
    }

    /// write the default config to the global location if nothing is there yet
    pub fn ensure_global_config() -> Result<()> {
        let path = Self::global_config_path()?;

        if path.exists() {
            return Ok(());
        }

        let config_dir = path
            .parent()
            .ok_or_eyre("Unable to determine parent directory of config path")?;

        std::fs::create_dir_all(config_dir)
            .wrap_err("Failed to create config directory")
            .with_section(|| format!("{}", config_dir.display()).header("Directory:"))?;

        Self::default()
            .save_to_file(&path)
            .wrap_err("Failed to write default configuration file")
    }

    /// save config to a file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let toml_str =
            toml::to_string_pretty(self).wrap_err("Failed to serialize config to TOML")?;

        std::fs::write(path, &toml_str)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
            .with_section(|| path.display().to_string().header("File path"))
            .with_section(|| format!("{} bytes", toml_str.len()).header("Content size:"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PostsRs::default().is_valid());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "base_url = \"http://localhost:9999\"\n\n[ui]\nlanguage = \"Spanish\"\nbody_lines = 3\n",
        )
        .unwrap();

        let cfg = PostsRs::load_from(&[path]).unwrap();
        let ui = cfg.ui.unwrap();

        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(ui.language, Some(Language::Spanish));
        assert_eq!(ui.body_lines, Some(3));
        assert_eq!(ui.card_width, Some(72));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PostsRs::load_from(&[dir.path().join("nope.toml")]).unwrap();

        assert_eq!(cfg.http, Some(HttpConfig::default()));
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "base_url = \"ftp://example.com\"\n").unwrap();

        let err = PostsRs::load_from(&[path]).unwrap_err();
        assert!(format!("{:?}", err).contains("base_url"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        PostsRs::default().save_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: PostsRs = toml::from_str(&text).unwrap();
        assert_eq!(back, PostsRs::default());
    }

    #[test]
    fn test_find_config_in_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            PostsRs::find_config_in_ancestors(&nested),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }
}
