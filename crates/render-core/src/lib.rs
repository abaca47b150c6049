//! Core rendering abstractions for card rendering.
//!
//! This crate provides the pieces the renderer dispatch layer is built on:
//! - `ElementRenderer`/`ActionRenderer` traits for type-keyed rendering
//! - name-to-renderer registries with declarative built-in bootstrap tables
//! - feature registration and the requirement gate
//! - the shared, read-mostly render context

mod context;
mod element;
mod error;
mod features;
mod registry;
mod traits;

pub mod defaults;

pub use context::{RenderArgs, RenderContext};
pub use element::{
    BackgroundImage, TextElement, TextHighlight, is_background_image_valid, text_highlight,
};
pub use error::RenderError;
pub use features::{FeatureRegistration, WILDCARD_VERSION, meets_requirements};
pub use registry::{
    ActionRendererRegistration, ElementRendererRegistration, SharedActionRenderer,
    SharedElementRenderer, register_default_action_renderers, register_default_element_renderers,
};
pub use traits::{ActionRenderer, ElementRenderer, UiNode};
