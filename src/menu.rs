use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color;
use crate::config;
use crate::wheel::Channel;

/// The two brand colors of a menu, shaped like the menu API's `color` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuColors {
    pub primary: String,
    pub secondary: String,
}

impl MenuColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn get(&self, channel: Channel) -> &str {
        match channel {
            Channel::Primary => &self.primary,
            Channel::Secondary => &self.secondary,
        }
    }

    pub fn set(&mut self, channel: Channel, hex: String) {
        match channel {
            Channel::Primary => self.primary = hex,
            Channel::Secondary => self.secondary = hex,
        }
    }

    /// Normalize both colors to `#RRGGBB`, replacing any that does not parse
    /// with the matching default.
    pub fn with_fallback(&self, defaults: &MenuColors) -> MenuColors {
        let pick = |value: &str, fallback: &str| {
            color::normalize(value)
                .or_else(|| color::normalize(fallback))
                .unwrap_or_else(|| fallback.to_string())
        };
        MenuColors {
            primary: pick(&self.primary, &defaults.primary),
            secondary: pick(&self.secondary, &defaults.secondary),
        }
    }
}

/// The menu being edited: what the form holds between picker sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDraft {
    pub title: String,
    /// Unset until the owner picks colors for the first time.
    #[serde(default)]
    pub color: Option<MenuColors>,
}

impl Default for MenuDraft {
    fn default() -> Self {
        Self {
            title: "Untitled Menu".to_string(),
            color: None,
        }
    }
}

impl MenuDraft {
    /// Colors to display: the stored ones, or `defaults` if none are set.
    pub fn display_colors(&self, defaults: &MenuColors) -> MenuColors {
        self.color
            .as_ref()
            .map(|c| c.with_fallback(defaults))
            .unwrap_or_else(|| defaults.clone())
    }
}

pub fn load_draft() -> MenuDraft {
    load_draft_from(&config::draft_path())
}

pub fn load_draft_from(path: &Path) -> MenuDraft {
    path.exists()
        .then(|| {
            fs::read_to_string(path)
                .ok()
                .and_then(|s| serde_json::from_str(&s).ok())
        })
        .flatten()
        .unwrap_or_default()
}

pub fn save_draft(draft: &MenuDraft) -> Result<()> {
    save_draft_to(draft, &config::draft_path())
}

pub fn save_draft_to(draft: &MenuDraft, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(draft)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "saved menu draft");
    Ok(())
}
