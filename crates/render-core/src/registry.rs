//! Name-keyed renderer registries and their built-in bootstrap tables.
//!
//! The built-in set is a declarative table of name/factory pairs iterated
//! once at host setup, so the set itself is testable without going through
//! the registration calls.

use crate::defaults;
use crate::traits::{ActionRenderer, ElementRenderer};
use std::collections::HashMap;
use std::sync::Arc;

pub type SharedElementRenderer = Arc<dyn ElementRenderer>;
pub type SharedActionRenderer = Arc<dyn ActionRenderer>;

/// Registry of element renderers, keyed by exact element type name.
#[derive(Clone, Default)]
pub struct ElementRendererRegistration {
    renderers: HashMap<String, SharedElementRenderer>,
}

impl ElementRendererRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderer under a type name. Last write wins.
    pub fn set(&mut self, name: impl Into<String>, renderer: SharedElementRenderer) {
        self.renderers.insert(name.into(), renderer);
    }

    pub fn get(&self, name: &str) -> Option<&SharedElementRenderer> {
        self.renderers.get(name)
    }

    pub fn remove(&mut self, name: &str) {
        self.renderers.remove(name);
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

/// Registry of action renderers, keyed by exact action type name.
#[derive(Clone, Default)]
pub struct ActionRendererRegistration {
    renderers: HashMap<String, SharedActionRenderer>,
}

impl ActionRendererRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a renderer under an action type name. Last write wins.
    pub fn set(&mut self, name: impl Into<String>, renderer: SharedActionRenderer) {
        self.renderers.insert(name.into(), renderer);
    }

    pub fn get(&self, name: &str) -> Option<&SharedActionRenderer> {
        self.renderers.get(name)
    }

    pub fn remove(&mut self, name: &str) {
        self.renderers.remove(name);
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

type ElementFactory = fn() -> SharedElementRenderer;
type ActionFactory = fn() -> SharedActionRenderer;

const DEFAULT_ELEMENT_RENDERERS: &[(&str, ElementFactory)] = &[
    ("ActionSet", || Arc::new(defaults::ActionSetRenderer)),
    ("Column", || Arc::new(defaults::ColumnRenderer)),
    ("ColumnSet", || Arc::new(defaults::ColumnSetRenderer)),
    ("Container", || Arc::new(defaults::ContainerRenderer)),
    ("FactSet", || Arc::new(defaults::FactSetRenderer)),
    ("Image", || Arc::new(defaults::ImageRenderer)),
    ("ImageSet", || Arc::new(defaults::ImageSetRenderer)),
    ("Input.ChoiceSet", || Arc::new(defaults::ChoiceSetInputRenderer)),
    ("Input.Date", || Arc::new(defaults::DateInputRenderer)),
    ("Input.Number", || Arc::new(defaults::NumberInputRenderer)),
    ("Input.Text", || Arc::new(defaults::TextInputRenderer)),
    ("Input.Time", || Arc::new(defaults::TimeInputRenderer)),
    ("Input.Toggle", || Arc::new(defaults::ToggleInputRenderer)),
    ("Media", || Arc::new(defaults::MediaRenderer)),
    ("RichTextBlock", || Arc::new(defaults::RichTextBlockRenderer)),
    ("Table", || Arc::new(defaults::TableRenderer)),
    ("TextBlock", || Arc::new(defaults::TextBlockRenderer)),
];

const DEFAULT_ACTION_RENDERERS: &[(&str, ActionFactory)] = &[
    ("Action.Execute", || Arc::new(defaults::ExecuteActionRenderer)),
    ("Action.OpenUrl", || Arc::new(defaults::OpenUrlActionRenderer)),
    ("Action.ShowCard", || Arc::new(defaults::ShowCardActionRenderer)),
    ("Action.Submit", || Arc::new(defaults::SubmitActionRenderer)),
    ("Action.ToggleVisibility", || {
        Arc::new(defaults::ToggleVisibilityActionRenderer)
    }),
];

/// Seeds the registry with the built-in element renderers.
pub fn register_default_element_renderers(registration: &mut ElementRendererRegistration) {
    for (name, factory) in DEFAULT_ELEMENT_RENDERERS {
        registration.set(*name, factory());
    }
    log::debug!(
        "registered {} built-in element renderers",
        DEFAULT_ELEMENT_RENDERERS.len()
    );
}

/// Seeds the registry with the built-in action renderers.
pub fn register_default_action_renderers(registration: &mut ActionRendererRegistration) {
    for (name, factory) in DEFAULT_ACTION_RENDERERS {
        registration.set(*name, factory());
    }
    log::debug!(
        "registered {} built-in action renderers",
        DEFAULT_ACTION_RENDERERS.len()
    );
}
