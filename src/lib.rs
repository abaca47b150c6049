//! Support library for a card-rendering engine that turns declarative JSON
//! card documents into native UI elements.
//!
//! The heavy machinery (schema parsing, layout, renderer dispatch) lives in
//! the host integration layers. This workspace carries the pieces they share:
//!
//! - string/encoding bridge between UTF-8 and the platform's wide strings
//! - hex color parsing and cascading host-configuration resolution
//! - the JSON bridge between the object model's values and the platform's
//!   JSON object handles
//! - the feature-requirement gate
//! - renderer registries with their built-in bootstrap tables

pub mod json;
pub mod text;
pub mod urls;

pub use cardstock_hostconfig::{
    ContainerStyle, FontType, ForegroundColor, HostConfig, HostConfigError, ResolvedFont, Spacing,
    TextSize, TextWeight,
};
pub use cardstock_render_core::{
    ActionRenderer, ActionRendererRegistration, BackgroundImage, ElementRenderer,
    ElementRendererRegistration, FeatureRegistration, RenderArgs, RenderContext, RenderError,
    SharedActionRenderer, SharedElementRenderer, TextElement, TextHighlight, UiNode,
    WILDCARD_VERSION, is_background_image_valid, meets_requirements,
    register_default_action_renderers, register_default_element_renderers, text_highlight,
};
pub use cardstock_types::{Color, Requirement, SemanticVersion, VersionParseError};

pub use json::JsonObject;
pub use text::{EncodingError, decode_wide, encode_wide};
pub use urls::resolve_image_url;
