//! Cascading attribute resolution against a [`HostConfig`].
//!
//! Hosts may omit any level of detail, so every lookup walks an ordered
//! fallback chain and always produces a usable value. Font attributes cascade
//! through four stages: the requested font type, the `Default` font type, the
//! deprecated flat config, and finally a hardcoded system default. Each stage
//! is tried only when the previous one left the attribute undefined.

use crate::config::{ContainerStyleDefinition, FontSizesConfig, FontWeightsConfig, HostConfig};
use crate::enums::{ContainerStyle, FontType, ForegroundColor, Spacing, TextSize, TextWeight};
use cardstock_types::Color;

/// The concrete font attributes for a text element after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFont {
    pub family: String,
    pub size: u32,
    pub weight: u16,
}

/// Evaluates lookup stages in order and returns the first defined result.
fn first_defined<T>(stages: &[&dyn Fn() -> Option<T>]) -> Option<T> {
    stages.iter().find_map(|stage| stage())
}

impl HostConfig {
    /// Looks up the style definition for a container style. Unknown styles
    /// resolve to the `Default` definition; this never fails.
    pub fn container_style(&self, style: ContainerStyle) -> &ContainerStyleDefinition {
        self.container_styles.get(style)
    }

    /// Resolves a semantic foreground color to a concrete color.
    ///
    /// `highlight` selects the highlight-specific sub-variant; `is_subtle`
    /// then picks between the subtle and default color in either case.
    pub fn foreground_color(
        &self,
        style: ContainerStyle,
        color: ForegroundColor,
        is_subtle: bool,
        highlight: bool,
    ) -> Color {
        let config = self.container_style(style).foreground_colors.get(color);
        if highlight {
            if is_subtle {
                config.highlight_colors.subtle
            } else {
                config.highlight_colors.default
            }
        } else if is_subtle {
            config.subtle
        } else {
            config.default
        }
    }

    pub fn background_color(&self, style: ContainerStyle) -> Color {
        self.container_style(style).background_color
    }

    pub fn border_color(&self, style: ContainerStyle) -> Color {
        self.container_style(style).border_color
    }

    /// Resolves a spacing bucket to pixels. `Spacing::None` is always zero
    /// and never consults the scale.
    pub fn spacing(&self, spacing: Spacing) -> u32 {
        match spacing {
            Spacing::None => 0,
            Spacing::Small => self.spacing.small,
            Spacing::Default => self.spacing.default,
            Spacing::Medium => self.spacing.medium,
            Spacing::Large => self.spacing.large,
            Spacing::ExtraLarge => self.spacing.extra_large,
            Spacing::Padding => self.spacing.padding,
        }
    }

    /// Resolves the font family for a font type.
    pub fn font_family<'a>(&'a self, font_type: FontType) -> &'a str {
        let stages: [&dyn Fn() -> Option<&'a str>; 3] = [
            &|| self.font_types.get(font_type).defined_family(),
            &|| self.font_types.default.defined_family(),
            &|| self.font_family.as_deref().filter(|f| !f.is_empty()),
        ];
        first_defined(&stages).unwrap_or(system_default_family(font_type))
    }

    /// Resolves the pixel size for a text-size bucket.
    pub fn font_size(&self, font_type: FontType, size: TextSize) -> u32 {
        let stages: [&dyn Fn() -> Option<u32>; 3] = [
            &|| self.font_types.get(font_type).font_sizes.get(size),
            &|| self.font_types.default.font_sizes.get(size),
            &|| self.font_sizes.get(size),
        ];
        first_defined(&stages).unwrap_or_else(|| {
            log::debug!("font size {size:?} undefined at every level, using system default");
            system_default_size(size)
        })
    }

    /// Resolves the numeric weight for a text-weight bucket.
    pub fn font_weight(&self, font_type: FontType, weight: TextWeight) -> u16 {
        let stages: [&dyn Fn() -> Option<u16>; 3] = [
            &|| self.font_types.get(font_type).font_weights.get(weight),
            &|| self.font_types.default.font_weights.get(weight),
            &|| self.font_weights.get(weight),
        ];
        first_defined(&stages).unwrap_or_else(|| {
            log::debug!("font weight {weight:?} undefined at every level, using system default");
            system_default_weight(weight)
        })
    }

    /// Resolves family, size, and weight together for a text element.
    pub fn font(&self, font_type: FontType, size: TextSize, weight: TextWeight) -> ResolvedFont {
        let resolved = ResolvedFont {
            family: self.font_family(font_type).to_string(),
            size: self.font_size(font_type, size),
            weight: self.font_weight(font_type, weight),
        };
        log::debug!(
            "resolved font for {font_type:?}/{size:?}/{weight:?}: '{}' {}px w{}",
            resolved.family,
            resolved.size,
            resolved.weight
        );
        resolved
    }
}

impl crate::config::FontTypesDefinition {
    pub fn get(&self, font_type: FontType) -> &crate::config::FontTypeDefinition {
        match font_type {
            FontType::Default => &self.default,
            FontType::Monospace => &self.monospace,
        }
    }
}

impl FontSizesConfig {
    pub fn get(&self, size: TextSize) -> Option<u32> {
        match size {
            TextSize::Small => self.small,
            TextSize::Default => self.default,
            TextSize::Medium => self.medium,
            TextSize::Large => self.large,
            TextSize::ExtraLarge => self.extra_large,
        }
    }
}

impl FontWeightsConfig {
    pub fn get(&self, weight: TextWeight) -> Option<u16> {
        match weight {
            TextWeight::Lighter => self.lighter,
            TextWeight::Default => self.default,
            TextWeight::Bolder => self.bolder,
        }
    }
}

fn system_default_family(font_type: FontType) -> &'static str {
    match font_type {
        FontType::Monospace => "Courier New",
        FontType::Default => "Segoe UI",
    }
}

fn system_default_size(size: TextSize) -> u32 {
    match size {
        TextSize::Small => 10,
        TextSize::Default => 12,
        TextSize::Medium => 14,
        TextSize::Large => 17,
        TextSize::ExtraLarge => 20,
    }
}

fn system_default_weight(weight: TextWeight) -> u16 {
    match weight {
        TextWeight::Lighter => 200,
        TextWeight::Default => 400,
        TextWeight::Bolder => 800,
    }
}
