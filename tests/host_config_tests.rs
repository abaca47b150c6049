//! End-to-end host configuration tests: parse a realistic host config from
//! JSON and resolve styles, fonts, and spacing through the full cascade.

use cardstock::{
    Color, ContainerStyle, FontType, ForegroundColor, HostConfig, Spacing, TextSize, TextWeight,
    resolve_image_url,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const HOST_CONFIG_JSON: &str = r##"{
    "fontFamily": "Calibri",
    "fontSizes": { "small": 11, "large": 18 },
    "fontTypes": {
        "monospace": {
            "fontFamily": "Cascadia Code",
            "fontSizes": { "default": 13 }
        }
    },
    "spacing": { "medium": 24, "padding": 16 },
    "imageBaseUrl": "https://cdn.contoso.com/cards/",
    "containerStyles": {
        "emphasis": {
            "backgroundColor": "#F2F2F2",
            "foregroundColors": {
                "default": { "default": "#FF202020", "subtle": "#B2202020" },
                "attention": { "default": "#CC3300" }
            }
        }
    }
}"##;

#[test]
fn test_parses_and_resolves_a_realistic_config() {
    init_logging();
    let config = HostConfig::from_json_str(HOST_CONFIG_JSON).unwrap();

    // Emphasis style colors come straight from the config; six-digit hex
    // gets an opaque alpha.
    assert_eq!(
        config.background_color(ContainerStyle::Emphasis),
        Color::new(0xFF, 0xF2, 0xF2, 0xF2)
    );
    assert_eq!(
        config.foreground_color(ContainerStyle::Emphasis, ForegroundColor::Default, true, false),
        Color::new(0xB2, 0x20, 0x20, 0x20)
    );
    assert_eq!(
        config.foreground_color(
            ContainerStyle::Emphasis,
            ForegroundColor::Attention,
            false,
            false
        ),
        Color::new(0xFF, 0xCC, 0x33, 0x00)
    );

    // Spacing mixes configured and default scale entries.
    assert_eq!(config.spacing(Spacing::Medium), 24);
    assert_eq!(config.spacing(Spacing::Padding), 16);
    assert_eq!(config.spacing(Spacing::Small), 3);
    assert_eq!(config.spacing(Spacing::None), 0);
}

#[test]
fn test_font_cascade_across_config_levels() {
    init_logging();
    let config = HostConfig::from_json_str(HOST_CONFIG_JSON).unwrap();

    // Monospace has its own family and default size.
    let mono = config.font(FontType::Monospace, TextSize::Default, TextWeight::Default);
    assert_eq!(mono.family, "Cascadia Code");
    assert_eq!(mono.size, 13);
    assert_eq!(mono.weight, 400);

    // Default text falls through to the deprecated flat config, then to the
    // system scale for sizes the config never mentions.
    let body = config.font(FontType::Default, TextSize::Small, TextWeight::Bolder);
    assert_eq!(body.family, "Calibri");
    assert_eq!(body.size, 11);
    assert_eq!(body.weight, 800);
    assert_eq!(config.font_size(FontType::Default, TextSize::Medium), 14);

    // Monospace sizes it does not define fall back through the Default font
    // type and the flat config before the system scale.
    assert_eq!(config.font_size(FontType::Monospace, TextSize::Large), 18);
    assert_eq!(config.font_size(FontType::Monospace, TextSize::ExtraLarge), 20);
}

#[test]
fn test_unconfigured_styles_resolve_to_transparent() {
    init_logging();
    let config = HostConfig::from_json_str(HOST_CONFIG_JSON).unwrap();
    assert_eq!(config.background_color(ContainerStyle::Accent), Color::TRANSPARENT);
    assert_eq!(
        config.foreground_color(ContainerStyle::Good, ForegroundColor::Dark, false, true),
        Color::TRANSPARENT
    );
}

#[test]
fn test_image_resolution_uses_configured_base() {
    init_logging();
    let config = HostConfig::from_json_str(HOST_CONFIG_JSON).unwrap();

    let relative = resolve_image_url(&config, "weather/sunny.png").unwrap();
    assert_eq!(relative.as_str(), "https://cdn.contoso.com/cards/weather/sunny.png");

    let absolute = resolve_image_url(&config, "https://example.com/a.png").unwrap();
    assert_eq!(absolute.as_str(), "https://example.com/a.png");
}

#[test]
fn test_empty_config_is_fully_usable() {
    init_logging();
    let config = HostConfig::from_json_str("{}").unwrap();
    assert_eq!(config.font_family(FontType::Default), "Segoe UI");
    assert_eq!(config.font_family(FontType::Monospace), "Courier New");
    assert_eq!(config.font_size(FontType::Default, TextSize::Large), 17);
    assert_eq!(config.font_weight(FontType::Default, TextWeight::Lighter), 200);
    assert_eq!(config.spacing(Spacing::Default), 8);
    assert!(resolve_image_url(&config, "relative/path.png").is_none());
}
