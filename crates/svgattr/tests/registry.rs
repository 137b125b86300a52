use svgattr::kinds::{CapSide, LineCap};
use svgattr::{Property, PropertyKind, PropertyRegistry, Resolution, standard_registry};

#[test]
fn test_standard_names() {
    let registry = standard_registry();
    insta::assert_debug_snapshot!(registry.names(), @r###"
    [
        "clip-path",
        "extendMode",
        "fill",
        "fill-opacity",
        "fill-rule",
        "font-family",
        "font-size",
        "font-stretch",
        "font-style",
        "font-weight",
        "marker",
        "marker-end",
        "marker-mid",
        "marker-start",
        "opacity",
        "orient",
        "paint-order",
        "stroke",
        "stroke-linecap",
        "stroke-linecap-end",
        "stroke-linecap-start",
        "stroke-linejoin",
        "stroke-miterlimit",
        "stroke-opacity",
        "stroke-width",
        "systemLanguage",
        "text-align",
        "text-anchor",
        "transform",
        "vector-effect",
        "viewBox",
    ]
    "###);
}

#[test]
fn test_unknown_name() {
    assert!(standard_registry().create("data-id", "7").is_none());
    assert!(!standard_registry().contains("data-id"));
}

#[test]
fn test_names_are_case_sensitive() {
    assert!(standard_registry().contains("viewBox"));
    assert!(!standard_registry().contains("viewbox"));
}

#[test]
fn test_cap_side_follows_name() {
    let start = standard_registry().create("stroke-linecap-start", "round").unwrap();
    assert_eq!(
        start.kind(),
        &PropertyKind::LineCap {
            side: CapSide::Start,
            cap: LineCap::Round
        }
    );
    let end = standard_registry().create("stroke-linecap-end", "butt").unwrap();
    assert_eq!(
        end.kind(),
        &PropertyKind::LineCap {
            side: CapSide::End,
            cap: LineCap::Butt
        }
    );
}

#[test]
fn test_empty_text_still_creates() {
    let fill = standard_registry().create("fill", "").unwrap();
    assert_eq!(fill.name(), "fill");
    assert_eq!(fill.resolution(), Resolution::Unset);
}

#[test]
fn test_each_create_is_fresh() {
    let registry = standard_registry();
    let red = registry.create("fill", "red").unwrap();
    let blank = registry.create("fill", "bogus").unwrap();
    assert!(red.is_set());
    assert!(!blank.is_set());
}

#[test]
fn test_custom_registration() {
    let mut registry = PropertyRegistry::new();
    assert!(registry.is_empty());

    registry.register("data-note", || Property::new("data-note", PropertyKind::Raw));
    let note = registry.create("data-note", "hello").unwrap();
    assert!(note.is_set());
    assert!(!note.auto_draw());
    assert_eq!(note.raw_value(), "hello");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_registration_replaces() {
    let mut registry = PropertyRegistry::standard();
    let count = registry.len();
    registry.register("fill", || Property::new("fill", PropertyKind::Raw));
    assert_eq!(registry.len(), count);

    let fill = registry.create("fill", "url(#x)").unwrap();
    assert_eq!(fill.kind(), &PropertyKind::Raw);
    assert!(fill.is_set());
}
