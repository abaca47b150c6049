use crate::context::{RenderArgs, RenderContext};
use crate::error::RenderError;
use serde_json::Value;

/// A native UI node produced by a renderer.
///
/// Layout and dispatch live outside this crate, so a node carries the element
/// kind it was rendered from, the source card fragment, and any child nodes
/// the dispatch layer attaches while walking the object model.
#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    pub kind: String,
    pub fragment: Value,
    pub children: Vec<UiNode>,
}

impl UiNode {
    pub fn new(kind: impl Into<String>, fragment: Value) -> Self {
        Self {
            kind: kind.into(),
            fragment,
            children: Vec::new(),
        }
    }
}

/// A renderer for one card element type, dispatched by type name.
pub trait ElementRenderer: Send + Sync {
    fn render(
        &self,
        element: &Value,
        context: &RenderContext,
        args: &RenderArgs,
    ) -> Result<UiNode, RenderError>;
}

/// A renderer for one action type, dispatched by type name.
pub trait ActionRenderer: Send + Sync {
    fn render(
        &self,
        action: &Value,
        context: &RenderContext,
        args: &RenderArgs,
    ) -> Result<UiNode, RenderError>;
}
