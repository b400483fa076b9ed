//! Settings resolution with layered overrides
//!
//! Settings say where the tree definition, the persisted values and the
//! define-symbol file live, and which build target group to reconcile.
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. Global config (`~/.config/symbol-prefs/config.toml` on Linux)
//! 3. Project config (`<root>/.prefs/config.toml`)
//!
//! Relative paths resolve against `<root>/.prefs/`.

use std::fs;
use std::path::{Path, PathBuf};

use pref_store::{DefineSymbolsFile, TomlPreferenceStore, io};
use pref_tree::{PreferenceTree, TreeDefinition};
use serde::{Deserialize, Serialize};

use crate::session::PreferenceSession;
use crate::{Error, Result};

/// Project directory holding settings and state
pub const PREFS_DIR: &str = ".prefs";

/// Settings file name, both globally and per project
pub const CONFIG_FILE: &str = "config.toml";

/// Directory name under the platform config dir
const APP_DIR: &str = "symbol-prefs";

pub const DEFAULT_DEFINITION: &str = "tree.toml";
pub const DEFAULT_VALUES: &str = "values.toml";
pub const DEFAULT_SYMBOLS: &str = "symbols.toml";
pub const DEFAULT_TARGET_GROUP: &str = "standalone";

/// Session over the file-backed collaborators
pub type FileSession = PreferenceSession<TomlPreferenceStore, DefineSymbolsFile>;

/// One settings file; every key is optional so layers can be merged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_group: Option<String>,
}

impl SettingsFile {
    /// Parse settings from TOML content
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overlay `other` onto this layer; keys set in `other` win.
    pub fn merge(&mut self, other: SettingsFile) {
        if other.definition.is_some() {
            self.definition = other.definition;
        }
        if other.values.is_some() {
            self.values = other.values;
        }
        if other.symbols.is_some() {
            self.symbols = other.symbols;
        }
        if other.target_group.is_some() {
            self.target_group = other.target_group;
        }
    }
}

/// Fully resolved settings with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Tree definition file
    pub definition: PathBuf,
    /// Persisted raw values
    pub values: PathBuf,
    /// Define-symbol groups
    pub symbols: PathBuf,
    /// Build target group reconciled on save
    pub target_group: String,
}

impl Settings {
    /// Read and build the preference tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefinitionNotFound`] if the definition file is missing.
    pub fn load_tree(&self) -> Result<PreferenceTree> {
        let content = io::read_optional(&self.definition)?.ok_or_else(|| {
            Error::DefinitionNotFound {
                path: self.definition.clone(),
            }
        })?;
        Ok(TreeDefinition::parse(&content)?.build()?)
    }

    /// Open a session over the configured files.
    pub fn open_session(&self) -> Result<FileSession> {
        let tree = self.load_tree()?;
        let store = TomlPreferenceStore::open(&self.values)?;
        let symbols = DefineSymbolsFile::new(&self.symbols, &self.target_group);
        Ok(PreferenceSession::new(tree, store, symbols))
    }
}

/// Resolves [`Settings`] for a project root
pub struct SettingsResolver {
    root: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform directory from `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl SettingsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: impl Into<PathBuf>, global_config_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            global_config_dir_override: Some(global_config_dir.into()),
        }
    }

    /// `<root>/.prefs`
    pub fn prefs_dir(&self) -> PathBuf {
        self.root.join(PREFS_DIR)
    }

    /// `<root>/.prefs/config.toml`
    pub fn project_config_path(&self) -> PathBuf {
        self.prefs_dir().join(CONFIG_FILE)
    }

    /// Global settings file, if the platform has a config directory
    pub fn global_config_path(&self) -> Option<PathBuf> {
        let dir = match &self.global_config_dir_override {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()?.join(APP_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Merge all layers into resolved settings.
    ///
    /// An unreadable global file is skipped with a warning; a malformed
    /// project file is an error.
    pub fn resolve(&self) -> Result<Settings> {
        let mut merged = SettingsFile::default();

        if let Some(global_path) = self.global_config_path() {
            match read_layer(&global_path) {
                Ok(Some(layer)) => {
                    tracing::debug!(?global_path, "Loading global settings");
                    merged.merge(layer);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Ignoring unreadable global settings: {}", e);
                }
            }
        }

        let project_path = self.project_config_path();
        if let Some(layer) = read_layer(&project_path)? {
            tracing::debug!(?project_path, "Loading project settings");
            merged.merge(layer);
        }

        let base = self.prefs_dir();
        Ok(Settings {
            definition: resolve_path(&base, merged.definition, DEFAULT_DEFINITION),
            values: resolve_path(&base, merged.values, DEFAULT_VALUES),
            symbols: resolve_path(&base, merged.symbols, DEFAULT_SYMBOLS),
            target_group: merged
                .target_group
                .unwrap_or_else(|| DEFAULT_TARGET_GROUP.to_string()),
        })
    }

    /// Write a project settings file and a tree definition.
    ///
    /// Existing files are kept unless `force` is set. Returns the paths written.
    pub fn init(&self, definition: &TreeDefinition, force: bool) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        fs::create_dir_all(self.prefs_dir())?;

        let config_path = self.project_config_path();
        if force || !config_path.exists() {
            let layer = SettingsFile {
                definition: Some(PathBuf::from(DEFAULT_DEFINITION)),
                values: Some(PathBuf::from(DEFAULT_VALUES)),
                symbols: Some(PathBuf::from(DEFAULT_SYMBOLS)),
                target_group: Some(DEFAULT_TARGET_GROUP.to_string()),
            };
            io::save_toml(&config_path, &layer)?;
            written.push(config_path);
        }

        let definition_path = self.resolve()?.definition;
        if force || !definition_path.exists() {
            io::write_atomic(&definition_path, definition.to_toml()?.as_bytes())?;
            written.push(definition_path);
        }

        Ok(written)
    }
}

fn read_layer(path: &Path) -> Result<Option<SettingsFile>> {
    let Some(content) = io::read_optional(path)? else {
        return Ok(None);
    };
    SettingsFile::parse(&content)
        .map(Some)
        .map_err(|e| Error::SettingsParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn resolve_path(base: &Path, configured: Option<PathBuf>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| PathBuf::from(default));
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
