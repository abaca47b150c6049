//! The host configuration tree.
//!
//! Hosts supply this as JSON once per rendering session; everything here is
//! read-only afterwards. Every field is optional on the wire so that partial
//! configurations still load; resolution falls back through the cascade in
//! [`crate::resolve`] instead of failing.

use crate::enums::{ContainerStyle, ForegroundColor};
use cardstock_types::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostConfigError {
    #[error("host config parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level host configuration.
///
/// The flat `font_family`/`font_sizes`/`font_weights` fields are the
/// deprecated pre-`fontTypes` configuration; they are still consulted late
/// in the font cascade for hosts that never migrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub container_styles: ContainerStylesDefinition,
    pub font_types: FontTypesDefinition,
    pub spacing: SpacingConfig,
    pub font_family: Option<String>,
    pub font_sizes: FontSizesConfig,
    pub font_weights: FontWeightsConfig,
    pub image_base_url: Option<String>,
}

impl HostConfig {
    /// Parses a host configuration from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, HostConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One style definition per container style bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStylesDefinition {
    pub default: ContainerStyleDefinition,
    pub emphasis: ContainerStyleDefinition,
    pub good: ContainerStyleDefinition,
    pub attention: ContainerStyleDefinition,
    pub warning: ContainerStyleDefinition,
    pub accent: ContainerStyleDefinition,
}

impl ContainerStylesDefinition {
    pub fn get(&self, style: ContainerStyle) -> &ContainerStyleDefinition {
        match style {
            ContainerStyle::Default => &self.default,
            ContainerStyle::Emphasis => &self.emphasis,
            ContainerStyle::Good => &self.good,
            ContainerStyle::Attention => &self.attention,
            ContainerStyle::Warning => &self.warning,
            ContainerStyle::Accent => &self.accent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStyleDefinition {
    pub background_color: Color,
    pub border_color: Color,
    pub foreground_colors: ColorsConfig,
}

/// Per-semantic-color foreground configuration for one container style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorsConfig {
    pub default: ColorConfig,
    pub dark: ColorConfig,
    pub light: ColorConfig,
    pub accent: ColorConfig,
    pub good: ColorConfig,
    pub warning: ColorConfig,
    pub attention: ColorConfig,
}

impl ColorsConfig {
    pub fn get(&self, color: ForegroundColor) -> &ColorConfig {
        match color {
            ForegroundColor::Default => &self.default,
            ForegroundColor::Dark => &self.dark,
            ForegroundColor::Light => &self.light,
            ForegroundColor::Accent => &self.accent,
            ForegroundColor::Good => &self.good,
            ForegroundColor::Warning => &self.warning,
            ForegroundColor::Attention => &self.attention,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    pub default: Color,
    pub subtle: Color,
    pub highlight_colors: HighlightColorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightColorConfig {
    pub default: Color,
    pub subtle: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontTypesDefinition {
    pub default: FontTypeDefinition,
    pub monospace: FontTypeDefinition,
}

/// Font configuration for one font type.
///
/// An absent or empty `font_family` means the host left it unset; the
/// resolver then walks the rest of the cascade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontTypeDefinition {
    pub font_family: Option<String>,
    pub font_sizes: FontSizesConfig,
    pub font_weights: FontWeightsConfig,
}

impl FontTypeDefinition {
    /// Returns the configured family, treating an empty string as unset.
    pub fn defined_family(&self) -> Option<&str> {
        self.font_family.as_deref().filter(|f| !f.is_empty())
    }
}

/// Pixel sizes per text-size bucket. `None` means the host did not define
/// the bucket at this level of the cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizesConfig {
    pub small: Option<u32>,
    pub default: Option<u32>,
    pub medium: Option<u32>,
    pub large: Option<u32>,
    pub extra_large: Option<u32>,
}

/// Numeric weights per text-weight bucket, `None` when undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontWeightsConfig {
    pub lighter: Option<u16>,
    pub default: Option<u16>,
    pub bolder: Option<u16>,
}

/// Flat spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    pub small: u32,
    pub default: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
    pub padding: u32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            small: 3,
            default: 8,
            medium: 20,
            large: 30,
            extra_large: 40,
            padding: 20,
        }
    }
}
