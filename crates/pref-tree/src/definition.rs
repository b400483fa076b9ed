//! Declarative preference tree definitions
//!
//! A tree's shape is static configuration. It is written down once, usually
//! in a `tree.toml` file, and turned into a live [`PreferenceTree`] with
//! [`TreeDefinition::build`]:
//!
//! ```toml
//! [[preference]]
//! name = "Roles"
//! segment = "ROLE"
//!
//! [[preference.children]]
//! name = "Manager"
//! segment = "MANAGER"
//! description = "Tools for managers."
//! ```

use serde::{Deserialize, Serialize};

use crate::node::{NodeBuilder, PreferenceNode};
use crate::tree::PreferenceTree;
use crate::{Error, Result};

fn is_false(value: &bool) -> bool {
    !*value
}

/// One preference and its children, as written in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceDefinition {
    /// Display label
    pub name: String,

    /// Segment contributed to the symbol path
    pub segment: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PreferenceDefinition>,
}

impl PreferenceDefinition {
    pub fn new(name: impl Into<String>, segment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            segment: segment.into(),
            default: false,
            description: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_children(mut self, children: Vec<PreferenceDefinition>) -> Self {
        self.children = children;
        self
    }

    fn to_builder(&self) -> Result<NodeBuilder> {
        Ok(PreferenceNode::builder(&self.name, &self.segment)
            .default_value(self.default)
            .description(&self.description)
            .children(build_tree(&self.children)?))
    }
}

/// A whole preference forest, as written in a definition file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDefinition {
    /// Top-level preferences
    #[serde(default, rename = "preference")]
    pub preferences: Vec<PreferenceDefinition>,
}

impl TreeDefinition {
    pub fn new(preferences: Vec<PreferenceDefinition>) -> Self {
        Self { preferences }
    }

    /// Parse a definition from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use pref_tree::TreeDefinition;
    ///
    /// let definition = TreeDefinition::parse(r#"
    /// [[preference]]
    /// name = "Debug"
    /// segment = "DEBUG"
    /// default = true
    /// "#).unwrap();
    ///
    /// let tree = definition.build().unwrap();
    /// assert!(tree.by_segment("DEBUG").unwrap().value());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::DefinitionParse {
            message: e.to_string(),
        })
    }

    /// Serialize the definition back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::DefinitionSerialize {
            message: e.to_string(),
        })
    }

    /// Build a live tree.
    ///
    /// Duplicate sibling segments keep the first declaration, matching
    /// [`PreferenceTree::add`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] for the first invalid segment found.
    pub fn build(&self) -> Result<PreferenceTree> {
        build_tree(&self.preferences)
    }

    /// The built-in role/tool sample tree
    ///
    /// One `ROLE` root with a child per team role, each role exposing its own
    /// numbered tools: `ROLE_ARTIST_TOOL3` and so on.
    pub fn roles() -> Self {
        const ROLES: &[(&str, &str, usize)] = &[
            ("Manager", "MANAGER", 1),
            ("Designer", "DESIGNER", 2),
            ("Artist", "ARTIST", 3),
            ("Programmer", "PROGRAMMER", 4),
            ("Tester", "TESTER", 5),
            ("Jibber", "JIBBER", 6),
        ];

        let roles = ROLES
            .iter()
            .map(|&(name, segment, tools)| {
                let tools = (1..=tools)
                    .map(|i| {
                        PreferenceDefinition::new(format!("{name} Tool {i}"), format!("TOOL{i}"))
                            .with_description(format!(
                                "Tool {i} for {}.",
                                name.to_lowercase()
                            ))
                    })
                    .collect();
                PreferenceDefinition::new(name, segment).with_children(tools)
            })
            .collect();

        Self::new(vec![PreferenceDefinition::new("Roles", "ROLE").with_children(roles)])
    }
}

fn build_tree(definitions: &[PreferenceDefinition]) -> Result<PreferenceTree> {
    let mut tree = PreferenceTree::new();
    for definition in definitions {
        tree.add(definition.to_builder()?)?;
    }
    Ok(tree)
}
