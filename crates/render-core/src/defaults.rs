//! Built-in renderers for the standard card element and action types.
//!
//! The real visual tree construction happens in the host-framework dispatch
//! layer; each built-in here produces the [`UiNode`] for its type that the
//! dispatch layer decorates and attaches. They exist so the bootstrap tables
//! in [`crate::registry`] can bind every standard type name at startup.

use crate::context::{RenderArgs, RenderContext};
use crate::error::RenderError;
use crate::traits::{ActionRenderer, ElementRenderer, UiNode};
use serde_json::Value;

macro_rules! element_renderer {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl ElementRenderer for $name {
            fn render(
                &self,
                element: &Value,
                _context: &RenderContext,
                _args: &RenderArgs,
            ) -> Result<UiNode, RenderError> {
                Ok(UiNode::new($kind, element.clone()))
            }
        }
    };
}

macro_rules! action_renderer {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl ActionRenderer for $name {
            fn render(
                &self,
                action: &Value,
                _context: &RenderContext,
                _args: &RenderArgs,
            ) -> Result<UiNode, RenderError> {
                Ok(UiNode::new($kind, action.clone()))
            }
        }
    };
}

element_renderer!(ActionSetRenderer, "ActionSet");
element_renderer!(ColumnRenderer, "Column");
element_renderer!(ColumnSetRenderer, "ColumnSet");
element_renderer!(ContainerRenderer, "Container");
element_renderer!(FactSetRenderer, "FactSet");
element_renderer!(ImageRenderer, "Image");
element_renderer!(ImageSetRenderer, "ImageSet");
element_renderer!(ChoiceSetInputRenderer, "Input.ChoiceSet");
element_renderer!(DateInputRenderer, "Input.Date");
element_renderer!(NumberInputRenderer, "Input.Number");
element_renderer!(TextInputRenderer, "Input.Text");
element_renderer!(TimeInputRenderer, "Input.Time");
element_renderer!(ToggleInputRenderer, "Input.Toggle");
element_renderer!(MediaRenderer, "Media");
element_renderer!(RichTextBlockRenderer, "RichTextBlock");
element_renderer!(TableRenderer, "Table");
element_renderer!(TextBlockRenderer, "TextBlock");

action_renderer!(ExecuteActionRenderer, "Action.Execute");
action_renderer!(OpenUrlActionRenderer, "Action.OpenUrl");
action_renderer!(ShowCardActionRenderer, "Action.ShowCard");
action_renderer!(SubmitActionRenderer, "Action.Submit");
action_renderer!(ToggleVisibilityActionRenderer, "Action.ToggleVisibility");
