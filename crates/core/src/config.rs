//! Class markers, tags and glyphs used while assembling the sidebar.
//!
//! The defaults reproduce the markup expected from generated documentation
//! pages. Every field is optional when deserializing, so a partial JSON
//! object (or JS object, in the wasm bindings) overrides only what it names.

use serde::{Deserialize, Serialize};

use crate::error::SidebarError;
use crate::role::NavRole;

/// Arrow glyphs replacing the textual cross-link labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub prev: String,
    pub up: String,
    pub next: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            prev: "\u{21E6}".to_string(),
            up: "\u{21E7}".to_string(),
            next: "\u{21E8}".to_string(),
        }
    }
}

impl Glyphs {
    pub fn for_role(&self, role: NavRole) -> &str {
        match role {
            NavRole::Prev => &self.prev,
            NavRole::Up => &self.up,
            NavRole::Next => &self.next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Class marking the page-local table of contents.
    pub menu_class: String,
    /// Class marking the generated cross-links container.
    pub crosslinks_class: String,
    pub sidebar_class: String,
    pub toolbar_class: String,
    /// Class given to placeholders synthesized for missing cross-links.
    pub blank_class: String,
    /// Tag of the sidebar and toolbar containers.
    pub container_tag: String,
    /// Tag of placeholders synthesized for missing cross-links.
    pub fallback_tag: String,
    /// Tag of the empty anchor added to the toolbar when a menu exists.
    pub placeholder_tag: String,
    /// Initial text of synthesized placeholders, replaced by the glyph.
    pub fallback_text: String,
    pub glyphs: Glyphs,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            menu_class: "sectionTOCS".to_string(),
            crosslinks_class: "crosslinks".to_string(),
            sidebar_class: "sidebar".to_string(),
            toolbar_class: "toolbar".to_string(),
            blank_class: "blanklink".to_string(),
            container_tag: "div".to_string(),
            fallback_tag: "span".to_string(),
            placeholder_tag: "a".to_string(),
            fallback_text: ">".to_string(),
            glyphs: Glyphs::default(),
        }
    }
}

impl SidebarConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, SidebarError> {
        let config: SidebarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that class markers can be used as selectors and tags are set.
    pub fn validate(&self) -> Result<(), SidebarError> {
        let classes = [
            ("menuClass", &self.menu_class),
            ("crosslinksClass", &self.crosslinks_class),
            ("sidebarClass", &self.sidebar_class),
            ("toolbarClass", &self.toolbar_class),
            ("blankClass", &self.blank_class),
        ];
        for (field, value) in classes {
            if value.is_empty() {
                return Err(SidebarError::Config(format!("{} must not be empty", field)));
            }
            if !is_plain_class_name(value) {
                return Err(SidebarError::Config(format!(
                    "{} must be a single class name of letters, digits, '-' or '_', got '{}'",
                    field, value
                )));
            }
        }

        let tags = [
            ("containerTag", &self.container_tag),
            ("fallbackTag", &self.fallback_tag),
            ("placeholderTag", &self.placeholder_tag),
        ];
        for (field, value) in tags {
            if value.trim().is_empty() {
                return Err(SidebarError::Config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

/// Class names that stay a single class when pasted into a `.class` selector.
fn is_plain_class_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
