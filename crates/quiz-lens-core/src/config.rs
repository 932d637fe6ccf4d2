//! Layered settings for question analysis.
//!
//! A [`Config`] is built from, lowest precedence first:
//!
//! 1. built-in defaults (threshold 0.5, `compact` preset, two-letter words)
//! 2. `config.<ext>` in the user config directory
//! 3. `.quiz-lens.<ext>` then `quiz-lens.<ext>` in the nearest directory,
//!    walking up from the search root and stopping at a `.git` boundary
//! 4. files passed with `--config`
//! 5. `QUIZ_LENS_*` environment variables (e.g. `QUIZ_LENS_PRESET=detailed`)
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Several files in one directory
//! are all merged, later extensions winning.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use quiz_lens_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("threshold: {}", config.threshold);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOptions, DEFAULT_THRESHOLD};
use crate::error::{ConfigError, ConfigResult};
use crate::ranking::Preset;
use crate::tokenizer::{DEFAULT_MIN_WORD_LENGTH, Tokenizer};

/// The configuration for quiz-lens.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and `QUIZ_LENS_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default log verbosity when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for `quiz-lens.log`; unset keeps logging on stderr only.
    pub log_dir: Option<Utf8PathBuf>,
    /// Correctness rate at or above which a question is well answered.
    pub threshold: f64,
    /// Named top-word selection settings.
    pub preset: Preset,
    /// Overrides the preset's minimum word frequency.
    pub min_frequency: Option<usize>,
    /// Overrides the preset's word limit.
    pub limit: Option<usize>,
    /// Shortest token kept by the tokenizer.
    pub min_word_length: usize,
    /// Stop words added to the built-in list.
    pub extra_stop_words: Vec<String>,
    /// Largest question file or text accepted, in bytes (default 5 MiB).
    pub max_input_bytes: Option<usize>,
    /// Accept input of any size; `max_input_bytes` is ignored.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            threshold: DEFAULT_THRESHOLD,
            preset: Preset::default(),
            min_frequency: None,
            limit: None,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            extra_stop_words: Vec::new(),
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Build the tokenizer described by this config.
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::builder()
            .min_word_length(self.min_word_length)
            .extra_stop_words(&self.extra_stop_words)
            .build()
    }

    /// Analysis settings: the preset with any explicit overrides applied.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            threshold: self.threshold,
            selection: self
                .preset
                .options()
                .overridden(self.min_frequency, self.limit),
        }
    }

    /// Effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Default verbosity of the stderr and file log layers.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-group word counts and partition sizes.
    Debug,
    /// One line per loaded config and finished analysis (default).
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`], for `info` to report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Files from the nearest config directory, dotfiles first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// `config.<ext>` from [`user_config_dir`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed with `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values won: last explicit, else nearest project, else user.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Merge order within one directory; later wins.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

const APP_NAME: &str = "quiz-lens";

const ENV_PREFIX: &str = "QUIZ_LENS_";

/// Finds and merges config sources into a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Loader that reads the user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for `.quiz-lens.<ext>` / `quiz-lens.<ext>`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Toggle the user config layer.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search up to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Merge `path` above every discovered file; later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge defaults, user, project and explicit files, then `QUIZ_LENS_*`.
    ///
    /// A value of the wrong type (say `preset = "huge"`) fails the whole load.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            threshold = config.threshold,
            preset = config.preset.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files of the nearest directory that has any, dotfiles first.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;

        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Directory searched for the user's `config.<ext>`.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
