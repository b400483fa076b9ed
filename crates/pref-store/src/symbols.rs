//! Active build-symbol lists
//!
//! Build tooling reads the enabled symbols as one `;`-joined string, e.g.
//! `ROLE;ROLE_ARTIST;ROLE_ARTIST_TOOL1`. Symbols are never escaped, which is
//! why preference segments may not contain the delimiter.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use pref_tree::DELIMITER;

use crate::{Result, io};

/// Ordered list of active symbols parsed from a delimiter-joined string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSymbols {
    symbols: Vec<String>,
}

impl ActiveSymbols {
    /// Split on `;`, dropping empty tokens and keeping order.
    pub fn parse(joined: &str) -> Self {
        Self {
            symbols: joined
                .split(DELIMITER)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// Append `symbol` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, symbol: &str) -> bool {
        if self.contains(symbol) {
            return false;
        }
        self.symbols.push(symbol.to_string());
        true
    }

    /// Remove every occurrence of `symbol`. Returns whether anything was removed.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        self.symbols.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for ActiveSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Destination for the active symbol string that build tooling consumes
pub trait SymbolTarget {
    /// Current delimiter-joined symbol string, empty if none is set.
    fn read(&self) -> Result<String>;

    /// Replace the delimiter-joined symbol string.
    fn write(&mut self, symbols: &str) -> Result<()>;
}

/// In-memory symbol string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySymbols {
    value: String,
}

impl MemorySymbols {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl SymbolTarget for MemorySymbols {
    fn read(&self) -> Result<String> {
        Ok(self.value.clone())
    }

    fn write(&mut self, symbols: &str) -> Result<()> {
        self.value = symbols.to_string();
        Ok(())
    }
}

/// Define-symbol strings per build target group, kept in a TOML table
///
/// ```toml
/// standalone = "ROLE;ROLE_ARTIST"
/// android = ""
/// ```
///
/// Each instance reads and writes one group and leaves the others intact.
#[derive(Debug, Clone)]
pub struct DefineSymbolsFile {
    path: PathBuf,
    group: String,
}

impl DefineSymbolsFile {
    pub fn new(path: impl Into<PathBuf>, group: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            group: group.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        io::load_toml_or_default(&self.path)
    }
}

impl SymbolTarget for DefineSymbolsFile {
    fn read(&self) -> Result<String> {
        Ok(self.load()?.remove(&self.group).unwrap_or_default())
    }

    fn write(&mut self, symbols: &str) -> Result<()> {
        let mut groups = self.load()?;
        groups.insert(self.group.clone(), symbols.to_string());
        io::save_toml(&self.path, &groups)?;
        tracing::debug!(path = ?self.path, group = %self.group, "Wrote define symbols");
        Ok(())
    }
}
