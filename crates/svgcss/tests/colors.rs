use svgcss::RgbaColor;

#[test]
fn test_hex_forms() {
    assert_eq!(RgbaColor::parse("#f00").unwrap(), RgbaColor::rgb(255, 0, 0));
    assert_eq!(RgbaColor::parse("#ff000080").unwrap(), RgbaColor::rgba(255, 0, 0, 128));
    assert_eq!(RgbaColor::parse("#0F0f").unwrap(), RgbaColor::rgb(0, 255, 0));
    assert_eq!(RgbaColor::parse("#336699").unwrap(), RgbaColor::rgb(0x33, 0x66, 0x99));
}

#[test]
fn test_bad_hex() {
    assert!(RgbaColor::parse("#12345").is_err());
    assert!(RgbaColor::parse("#ggg").is_err());
}

#[test]
fn test_rgb_functions_any_case() {
    let expected = RgbaColor::rgb(10, 20, 30);
    assert_eq!(RgbaColor::parse("rgb(10, 20, 30)").unwrap(), expected);
    assert_eq!(RgbaColor::parse("RGB(10,20,30)").unwrap(), expected);
    assert_eq!(RgbaColor::parse("RGBA(10,20,30,1)").unwrap(), expected);
}

#[test]
fn test_rgb_percentages_and_alpha() {
    let color = RgbaColor::parse("rgba(100%, 0%, 50%, 50%)").unwrap();
    assert_eq!(color, RgbaColor::rgba(255, 0, 128, 128));
}

#[test]
fn test_rgb_channels_clamp() {
    assert_eq!(RgbaColor::parse("rgb(300, -5, 0)").unwrap(), RgbaColor::rgb(255, 0, 0));
}

#[test]
fn test_hsl() {
    assert_eq!(RgbaColor::parse("hsl(120, 100%, 50%)").unwrap(), RgbaColor::rgb(0, 255, 0));
    assert_eq!(
        RgbaColor::parse("hsla(240deg, 100%, 50%, 0)").unwrap(),
        RgbaColor::rgba(0, 0, 255, 0)
    );
}

#[test]
fn test_named_colors_case_insensitive() {
    assert_eq!(RgbaColor::parse("CornflowerBlue").unwrap(), RgbaColor::rgb(100, 149, 237));
    assert_eq!(RgbaColor::parse("grey").unwrap(), RgbaColor::parse("gray").unwrap());
    assert_eq!(RgbaColor::parse("transparent").unwrap().a, 0);
}

#[test]
fn test_unknown_name() {
    let err = RgbaColor::parse("blurple").unwrap_err();
    assert!(err.message.contains("blurple"));
}

#[test]
fn test_display_hex() {
    assert_eq!(RgbaColor::rgb(255, 128, 0).to_string(), "#ff8000");
    assert_eq!(RgbaColor::rgba(0, 0, 0, 0).to_string(), "#00000000");
}
