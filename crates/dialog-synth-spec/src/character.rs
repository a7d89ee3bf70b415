//! Character identity and preset files.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::params::VoiceOverrides;

/// A speaking character.
///
/// The name namespaces the output directory and labels the demo; the
/// overrides are the second-priority parameter layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display and directory name.
    pub name: String,
    /// Voice parameters carried by the preset.
    #[serde(flatten)]
    pub overrides: VoiceOverrides,
}

/// On-disk preset shape. `name` is optional here so that a nameless preset can
/// be reported as "no character" rather than a parse failure.
#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(flatten)]
    overrides: VoiceOverrides,
}

impl Character {
    /// Creates a character with no parameter overrides.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: VoiceOverrides::default(),
        }
    }

    /// Parses a preset file.
    ///
    /// Returns `Ok(None)` when the preset has no usable `name`; callers treat
    /// that the same as no character at all.
    pub fn from_preset_json(json: &str) -> SpecResult<Option<Self>> {
        let preset: PresetFile = serde_json::from_str(json)?;
        Ok(preset
            .name
            .filter(|name| !name.is_empty())
            .map(|name| Self {
                name,
                overrides: preset.overrides,
            }))
    }

    /// Checks that the name can be used as a single directory component.
    pub fn validate_name(&self) -> SpecResult<()> {
        let unsafe_name = |message: &str| SpecError::UnsafeCharacterName {
            name: self.name.clone(),
            message: message.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(unsafe_name("name cannot be empty"));
        }
        if self.name == "." || self.name == ".." {
            return Err(unsafe_name("name cannot be a relative path segment"));
        }
        if self.name.contains('/') || self.name.contains('\\') {
            return Err(unsafe_name("name cannot contain path separators"));
        }
        if self.name.len() >= 2 && self.name.chars().nth(1) == Some(':') {
            return Err(unsafe_name("name cannot contain a drive letter"));
        }
        Ok(())
    }
}
