use svgcss::{SelectorKind, StyleSheet, parse_stylesheet};

// ============================================================================
// Indexing by kind
// ============================================================================

#[test]
fn test_four_kinds_are_indexed() {
    let sheet = parse_stylesheet(
        r#"
        rect { fill: red }
        .warn { stroke: orange }
        #logo { opacity: 0.5 }
        @font-face { font-family: Inter }
    "#,
    );

    assert_eq!(sheet.len(), 4);
    assert!(sheet.element_selector("rect").is_some());
    assert!(sheet.class_selector("warn").is_some());
    assert!(sheet.id_selector("logo").is_some());
    assert_eq!(
        sheet
            .at_rule_selector("font-face")
            .and_then(|s| s.get_attribute("font-family")),
        Some("Inter")
    );
}

#[test]
fn test_get_selector_by_kind() {
    let sheet = parse_stylesheet(".a { x: 1 } a { y: 2 }");

    let class = sheet.get_selector("a", SelectorKind::Class).unwrap();
    let element = sheet.get_selector("a", SelectorKind::Element).unwrap();
    assert_eq!(class.get_attribute("x"), Some("1"));
    assert_eq!(element.get_attribute("y"), Some("2"));
    assert!(sheet.get_selector("a", SelectorKind::Id).is_none());
}

#[test]
fn test_unindexed_kinds_are_dropped() {
    let sheet = parse_stylesheet("[href] { x: 1 } :hover { x: 2 } ::before { x: 3 } * { x: 4 } .kept { x: 5 }");
    assert_eq!(sheet.len(), 1);
    assert!(sheet.class_selector("kept").is_some());
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_same_name_merges_declarations() {
    let sheet = parse_stylesheet(".a{x:1} .a{y:2}");
    let a = sheet.class_selector("a").unwrap();
    assert_eq!(sheet.len(), 1);
    assert_eq!(a.get_attribute("x"), Some("1"));
    assert_eq!(a.get_attribute("y"), Some("2"));
}

#[test]
fn test_later_declaration_wins() {
    let sheet = parse_stylesheet(".a{x:1} .a{x:2}");
    assert_eq!(sheet.class_selector("a").unwrap().get_attribute("x"), Some("2"));
}

#[test]
fn test_selector_list_shares_block() {
    let sheet = parse_stylesheet("rect, circle , .shape { fill: teal }");
    assert_eq!(sheet.len(), 3);
    for selector in sheet.selectors() {
        assert_eq!(selector.get_attribute("fill"), Some("teal"));
    }
}

#[test]
fn test_sheet_merge_follows_source_order() {
    let mut document = parse_stylesheet(".a { fill: red; stroke: blue }");
    let second = parse_stylesheet(".a { fill: green } #b { x: 1 }");
    document.merge(&second);

    let a = document.class_selector("a").unwrap();
    assert_eq!(a.get_attribute("fill"), Some("green"));
    assert_eq!(a.get_attribute("stroke"), Some("blue"));
    assert!(document.id_selector("b").is_some());
}

// ============================================================================
// Comments and partial parses
// ============================================================================

#[test]
fn test_comments_between_rules() {
    let sheet = parse_stylesheet("/* c */ .a{x:1} // trailing\n.b{y:2}");
    assert_eq!(sheet.len(), 2);
    assert!(sheet.class_selector("a").is_some());
    assert!(sheet.class_selector("b").is_some());
}

#[test]
fn test_unterminated_rule_keeps_earlier_selectors() {
    let sheet = parse_stylesheet(".a { x: 1 } .b { y: 2");
    assert_eq!(sheet.len(), 1);
    assert!(sheet.class_selector("a").is_some());
}

#[test]
fn test_invalid_head_stops_scan() {
    let sheet = parse_stylesheet(".a { x: 1 } 9bad { y: 2 } .c { z: 3 }");
    assert_eq!(sheet.len(), 1);
    assert!(sheet.class_selector("c").is_none());
}

#[test]
fn test_missing_open_brace_stops_scan() {
    let sheet = parse_stylesheet("#a { x: 1 } #b x: 2;");
    assert_eq!(sheet.len(), 1);
}

#[test]
fn test_combinator_head_is_skipped() {
    let sheet = parse_stylesheet(", rect { x: 1 } .b { y: 2 }");
    assert_eq!(sheet.len(), 1);
    assert!(sheet.class_selector("b").is_some());
}

#[test]
fn test_empty_and_whitespace_sources() {
    assert!(parse_stylesheet("").is_empty());
    assert!(parse_stylesheet(" \n\t/* only a comment */ ").is_empty());
}

#[test]
fn test_display_is_sorted() {
    let sheet = StyleSheet::parse("#z { a: 1 } rect { fill: red } .b { c: d; e: f }");
    insta::assert_snapshot!(sheet.to_string().trim_end(), @r"
    ELEMENT rect { fill: red; }
    ID z { a: 1; }
    CLASS b { c: d; e: f; }
    ");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = StyleSheet::load("/definitely/not/here.css");
    assert!(matches!(result, Err(svgcss::CssError::Io(_))));
}
