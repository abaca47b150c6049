//! Minimal object-model accessor surface for the helpers in this crate.
//!
//! The full card object model lives in the parsing layer; renderers only
//! need the text attributes and the background image URL.

use crate::context::{RenderArgs, RenderContext};
use cardstock_hostconfig::{FontType, ForegroundColor, TextSize, TextWeight};
use cardstock_types::Color;
use serde::{Deserialize, Serialize};

/// The shared text attributes of `TextBlock` and `TextRun` elements.
/// Unset attributes inherit from the surrounding context at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextElement {
    pub text: String,
    pub color: Option<ForegroundColor>,
    pub font_type: Option<FontType>,
    pub size: Option<TextSize>,
    pub weight: Option<TextWeight>,
    pub is_subtle: Option<bool>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundImage {
    pub url: String,
}

impl BackgroundImage {
    pub fn is_valid(&self) -> bool {
        !self.url.is_empty()
    }
}

/// A background image is renderable only when present with a non-empty URL.
pub fn is_background_image_valid(image: Option<&BackgroundImage>) -> bool {
    image.is_some_and(BackgroundImage::is_valid)
}

/// Highlight colors for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextHighlight {
    pub background: Color,
    pub foreground: Color,
}

/// Resolves the highlight background and regular foreground for a text
/// element against the current container style.
pub fn text_highlight(
    element: &TextElement,
    context: &RenderContext,
    args: &RenderArgs,
) -> TextHighlight {
    let color = element.color.unwrap_or_default();
    let is_subtle = element.is_subtle.unwrap_or(false);

    TextHighlight {
        background: context
            .host_config
            .foreground_color(args.container_style, color, is_subtle, true),
        foreground: context
            .host_config
            .foreground_color(args.container_style, color, is_subtle, false),
    }
}
