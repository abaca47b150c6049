//! Integration tests for renderer bootstrap and the feature-requirement gate.

use cardstock::{
    ActionRendererRegistration, ElementRendererRegistration, FeatureRegistration, HostConfig,
    RenderArgs, RenderContext, RenderError, Requirement, UiNode, meets_requirements,
    register_default_action_renderers, register_default_element_renderers,
};
use serde_json::{Value, json};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn context() -> RenderContext {
    RenderContext::new(
        Arc::new(HostConfig::default()),
        Arc::new(FeatureRegistration::new()),
    )
}

#[test]
fn test_bootstrap_then_render_a_card_body() {
    init_logging();
    let mut elements = ElementRendererRegistration::new();
    let mut actions = ActionRendererRegistration::new();
    register_default_element_renderers(&mut elements);
    register_default_action_renderers(&mut actions);

    let card = json!({
        "body": [
            {"type": "TextBlock", "text": "hello"},
            {"type": "Image", "url": "https://example.com/a.png"},
            {"type": "Input.Text", "id": "name"}
        ],
        "actions": [
            {"type": "Action.Submit", "title": "OK"}
        ]
    });

    let context = context();
    let args = RenderArgs::default();

    let body: Vec<UiNode> = card["body"]
        .as_array()
        .unwrap()
        .iter()
        .map(|element| {
            let name = element["type"].as_str().unwrap();
            let renderer = elements
                .get(name)
                .ok_or_else(|| RenderError::UnknownType(name.to_string()))?;
            renderer.render(element, &context, &args)
        })
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(body.len(), 3);
    assert_eq!(body[0].kind, "TextBlock");
    assert_eq!(body[0].fragment["text"], json!("hello"));
    assert_eq!(body[2].kind, "Input.Text");

    let submit = actions.get("Action.Submit").unwrap();
    let node = submit.render(&card["actions"][0], &context, &args).unwrap();
    assert_eq!(node.kind, "Action.Submit");
}

#[test]
fn test_unknown_type_surfaces_an_error() {
    init_logging();
    let mut elements = ElementRendererRegistration::new();
    register_default_element_renderers(&mut elements);

    let fragment: Value = json!({"type": "Graph"});
    let name = fragment["type"].as_str().unwrap();
    let result = elements
        .get(name)
        .ok_or_else(|| RenderError::UnknownType(name.to_string()));
    assert!(matches!(result, Err(RenderError::UnknownType(ref t)) if t == "Graph"));
}

#[test]
fn test_host_overrides_and_removals_shape_the_registry() {
    init_logging();
    let mut elements = ElementRendererRegistration::new();
    register_default_element_renderers(&mut elements);

    // A host that cannot play media unregisters the renderer; unsupported
    // elements then fail lookup like any unknown type.
    elements.remove("Media");
    assert!(elements.get("Media").is_none());

    // Re-registering under the same name replaces the built-in.
    elements.set(
        "TextBlock",
        Arc::new(cardstock_render_core::defaults::TextBlockRenderer),
    );
    assert!(elements.get("TextBlock").is_some());
}

#[test]
fn test_requirement_gate_against_registered_features() {
    init_logging();
    let mut features = FeatureRegistration::new();
    features.set("adaptiveCards", "1.5");
    features.set("acTest", "1.0");

    let met = |requirements: &[Requirement]| meets_requirements(requirements, &features).unwrap();

    assert!(met(&[Requirement::new("adaptiveCards", "1.5")]));
    assert!(met(&[Requirement::new("adaptiveCards", "1.2.3")]));
    assert!(!met(&[Requirement::new("adaptiveCards", "1.6")]));
    assert!(met(&[Requirement::new("acTest", "*")]));
    assert!(!met(&[Requirement::new("notRegistered", "*")]));

    // All requirements must hold together.
    assert!(met(&[
        Requirement::new("adaptiveCards", "1.0"),
        Requirement::new("acTest", "1.0"),
    ]));
    assert!(!met(&[
        Requirement::new("adaptiveCards", "1.0"),
        Requirement::new("acTest", "2.0"),
    ]));
}

#[test]
fn test_requirement_gate_propagates_malformed_versions() {
    init_logging();
    let mut features = FeatureRegistration::new();
    features.set("adaptiveCards", "1.5");
    assert!(meets_requirements(&[Requirement::new("adaptiveCards", "not.a.version")], &features).is_err());
}
