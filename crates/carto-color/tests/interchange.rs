use std::collections::BTreeMap;

use carto_color::{Color, ColorComponents, Dimension, Op, Value};

#[test]
fn test_serialize_to_json() {
    let color = Color::hsl(210.0, 0.5, 0.25).with_alpha(0.5);
    let json = serde_json::to_value(color).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"h": 210.0, "s": 0.5, "l": 0.25, "a": 0.5, "perceptual": false})
    );
}

#[test]
fn test_colorless_serializes_as_null() {
    assert_eq!(serde_json::to_string(&Color::colorless()).unwrap(), "null");
    let back: Color = serde_json::from_str("null").unwrap();
    assert!(back.is_colorless());
}

#[test]
fn test_json_round_trip() {
    let color = Color::husl(140.0, 0.25, 0.75).with_alpha(0.8);
    let text = serde_json::to_string(&color).unwrap();
    let back: Color = serde_json::from_str(&text).unwrap();
    assert_eq!(back, color);
}

#[test]
fn test_load_yaml_palette() {
    let yaml = r#"
accent:
  h: 210
  s: 0.6
  l: 0.4
overlay:
  h: 0
  s: 0
  l: 0
  a: 0.5
soft:
  h: 400
  s: 2
  l: 0.5
  perceptual: true
unset: ~
"#;
    let palette: BTreeMap<String, Color> = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(palette["accent"].alpha(), 1.0);
    assert!(!palette["accent"].is_perceptual());
    assert_eq!(palette["overlay"].to_string(), "rgba(0, 0, 0, 0.5)");
    assert!(palette["unset"].is_colorless());

    let soft = palette["soft"].get_components().unwrap();
    assert_eq!(
        soft,
        ColorComponents {
            h: 360.0,
            s: 1.0,
            l: 0.5,
            a: 1.0,
            perceptual: true,
        }
    );
}

#[test]
fn test_expression_values_combine_with_colors() {
    let background = Color::hsl(0.0, 0.0, 0.2);
    let values = [
        Value::from(Dimension::new(51.0)),
        Value::from(Color::hsl(0.0, 0.0, 0.2)),
    ];
    for value in &values {
        let result = background.operate_value(Op::Add, value.evaluate()).unwrap();
        assert_eq!(result.to_string(), "#666666");
    }

    assert!(background
        .operate_value(Op::Add, &Value::Quoted("red".to_string()))
        .is_err());
}
