use svgcss::parser::{InlineStyle, SelectorIter};
use svgcss::{CssError, Selector, SelectorKind, parse_style_attribute};

#[test]
fn test_from_str_single_unit() {
    let sel: Selector = ".warn { fill: red; stroke: black }".parse().unwrap();
    assert_eq!(sel.kind(), SelectorKind::Class);
    assert_eq!(sel.name(), "warn");
    assert_eq!(sel.attributes().len(), 2);
}

#[test]
fn test_from_str_rejects_text_without_block() {
    let result: Result<Selector, CssError> = "rect fill: red".parse();
    assert!(matches!(result, Err(CssError::InvalidSelector(_))));
}

#[test]
fn test_from_str_rejects_bare_marker() {
    let result: Result<Selector, CssError> = "# { fill: red }".parse();
    assert!(result.is_err());
}

#[test]
fn test_element_keeps_full_token() {
    let sel: Selector = "linearGradient { x: 1 }".parse().unwrap();
    assert_eq!(sel.kind(), SelectorKind::Element);
    assert_eq!(sel.name(), "linearGradient");
}

#[test]
fn test_merge_properties_overrides_and_extends() {
    let mut first = Selector::new(SelectorKind::Id, "a", "x: 1; y: 1");
    let second = Selector::new(SelectorKind::Id, "a", "y: 2; z: 3");
    first.merge_properties(&second);

    let attrs: Vec<_> = first.attributes().iter().collect();
    assert_eq!(attrs, [("x", "1"), ("y", "2"), ("z", "3")]);
}

#[test]
fn test_display_single_line() {
    let sel = Selector::new(SelectorKind::Class, "warn", "fill : red ;stroke-width:2");
    insta::assert_snapshot!(sel.to_string(), @"CLASS warn { fill: red; stroke-width: 2; }");
}

#[test]
fn test_iterator_reports_early_stop() {
    let mut iter = SelectorIter::new(".a { x: 1 } .b { y: 2");
    assert_eq!(iter.next().map(|s| s.name().to_string()), Some("a".to_string()));
    assert!(iter.next().is_none());
    assert!(iter.stopped_early());
}

#[test]
fn test_iterator_clean_end() {
    let mut iter = SelectorIter::new(".a { x: 1 }\n");
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(!iter.stopped_early());
}

#[test]
fn test_inline_style_pairs() {
    let pairs: Vec<_> = InlineStyle::new("fill:red;stroke : blue ;;").collect();
    assert_eq!(pairs, [("fill", "red"), ("stroke", "blue")]);
}

#[test]
fn test_style_attribute_with_comment() {
    let attrs = parse_style_attribute("fill: red; /* hidden: yes */ opacity: .5");
    assert_eq!(attrs.get("opacity"), Some(".5"));
    assert!(!attrs.contains("hidden"));
}
