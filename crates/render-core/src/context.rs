use crate::features::FeatureRegistration;
use cardstock_hostconfig::{ContainerStyle, HostConfig};
use std::sync::Arc;

/// Shared state handed to every renderer.
///
/// Both members are written once during host setup and only read afterwards,
/// so the context is freely cloneable across the rendering session.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub host_config: Arc<HostConfig>,
    pub features: Arc<FeatureRegistration>,
}

impl RenderContext {
    pub fn new(host_config: Arc<HostConfig>, features: Arc<FeatureRegistration>) -> Self {
        Self {
            host_config,
            features,
        }
    }
}

/// Per-element rendering arguments carried down the element tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderArgs {
    pub container_style: ContainerStyle,
}

impl RenderArgs {
    pub fn with_container_style(container_style: ContainerStyle) -> Self {
        Self { container_style }
    }
}
