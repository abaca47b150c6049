pub mod config;
pub mod enums;
pub mod resolve;

pub use config::{
    ColorConfig, ColorsConfig, ContainerStyleDefinition, ContainerStylesDefinition,
    FontSizesConfig, FontTypeDefinition, FontTypesDefinition, FontWeightsConfig, HostConfig,
    HostConfigError, HighlightColorConfig, SpacingConfig,
};
pub use enums::{ContainerStyle, FontType, ForegroundColor, Spacing, TextSize, TextWeight};
pub use resolve::ResolvedFont;
