#![cfg(feature = "serde")]

use stylevalue::assets::{parse_assets, Asset};
use stylevalue::controls::unit_select::UnitOption;
use stylevalue::error::ValueError;
use stylevalue::to_value;
use stylevalue::values::image::ImageValue;
use stylevalue::values::unit::Unit;
use stylevalue::values::StyleValue;

fn parse(json: &str) -> StyleValue {
  StyleValue::from_json(json).unwrap()
}

#[test]
fn test_parse() {
  assert_eq!(parse(r#"{"type": "keyword", "value": "red"}"#), StyleValue::keyword("red"));
  assert_eq!(
    parse(r#"{"type": "unit", "value": 10, "unit": "px"}"#),
    StyleValue::unit(10.0, Unit::Px)
  );
  assert_eq!(
    parse(r#"{"type": "unit", "value": 1.5, "unit": "number"}"#),
    StyleValue::number(1.5)
  );
  assert_eq!(parse(r#"{"type": "invalid", "value": "bad"}"#), StyleValue::invalid("bad"));
  assert_eq!(parse(r#"{"type": "guaranteedInvalid"}"#), StyleValue::GuaranteedInvalid);
  assert_eq!(parse(r#"{"type": "unset"}"#), StyleValue::unset());
  assert_eq!(parse(r#"{"type": "unset", "value": ""}"#), StyleValue::unset());
  assert_eq!(
    parse(r#"{"type": "fontFamily", "value": ["Humanist"]}"#),
    StyleValue::font_family(["Humanist"])
  );
  assert_eq!(
    parse(
      r#"{
        "type": "var",
        "value": "namespace",
        "fallback": {"type": "unparsed", "value": "normal, 10px"}
      }"#
    ),
    StyleValue::var("namespace", Some(StyleValue::unparsed("normal, 10px")))
  );
  assert_eq!(
    parse(
      r#"{
        "type": "function",
        "name": "drop-shadow",
        "args": {
          "type": "tuple",
          "value": [
            {"type": "unit", "value": 10, "unit": "px"},
            {"type": "keyword", "value": "red"}
          ]
        }
      }"#
    ),
    StyleValue::function(
      "drop-shadow",
      StyleValue::tuple(vec![StyleValue::unit(10.0, Unit::Px), StyleValue::keyword("red")])
    )
  );
  assert_eq!(
    parse(
      r#"{
        "type": "layers",
        "value": [
          {"type": "image", "value": {"type": "asset", "value": "1234567890"}},
          {"type": "image", "value": {"type": "url", "url": "foo.png"}}
        ]
      }"#
    ),
    StyleValue::layers(vec![
      StyleValue::Image {
        value: ImageValue::Asset {
          value: "1234567890".into()
        }
      },
      StyleValue::image_url("foo.png"),
    ])
  );
}

#[test]
fn test_unknown_unit() {
  let value = parse(r#"{"type": "unit", "value": 3, "unit": "foo"}"#);
  assert_eq!(value, StyleValue::unit(3.0, Unit::Custom("foo".into())));
  assert_eq!(to_value(&value, None), "3foo");
  assert_eq!(value.to_json(), r#"{"type":"unit","value":3.0,"unit":"foo"}"#);

  // Unit names are case-sensitive, so differently cased units round trip unchanged.
  let value = parse(r#"{"type": "unit", "value": 10, "unit": "PX"}"#);
  assert_eq!(value, StyleValue::unit(10.0, Unit::Custom("PX".into())));
  assert_eq!(value.to_json(), r#"{"type":"unit","value":10.0,"unit":"PX"}"#);

  let value = parse(r#"{"type": "unit", "value": 10, "unit": "Number"}"#);
  assert_eq!(to_value(&value, None), "10Number");
}

#[test]
fn test_to_json() {
  assert_eq!(
    StyleValue::var("namespace", None).to_json(),
    r#"{"type":"var","value":"namespace"}"#
  );
  assert_eq!(
    StyleValue::unit(10.0, Unit::Percent).to_json(),
    r#"{"type":"unit","value":10.0,"unit":"%"}"#
  );
  assert_eq!(StyleValue::GuaranteedInvalid.to_json(), r#"{"type":"guaranteedInvalid"}"#);
  assert_eq!(
    StyleValue::image_url("foo.png").to_json(),
    r#"{"type":"image","value":{"type":"url","url":"foo.png"}}"#
  );
}

#[test]
fn test_roundtrip() {
  let value = StyleValue::layers(vec![
    StyleValue::function(
      "translate3d",
      StyleValue::keyword("42px, -62px, -135px"),
    ),
    StyleValue::var("x", Some(StyleValue::font_family(["Courier New"]))),
    StyleValue::tuple(vec![StyleValue::unit(1.0, Unit::Svh), StyleValue::unset()]),
    StyleValue::image_asset("abc"),
  ]);
  let json = value.to_json();
  let deserialized = StyleValue::from_json(&json).unwrap();
  assert_eq!(deserialized, value);
  assert_eq!(to_value(&deserialized, None), to_value(&value, None));
}

#[test]
fn test_invalid_json() {
  let err = StyleValue::from_json("not json").unwrap_err();
  assert!(matches!(err.kind, ValueError::InvalidJson(_)));
  assert_eq!(err.loc.as_ref().map(|loc| loc.line), Some(1));
  assert!(err.to_string().starts_with("Invalid style value: "));

  let err = StyleValue::from_json(r#"{"type": "nope"}"#).unwrap_err();
  assert!(matches!(err.kind, ValueError::InvalidJson(_)));

  let err = StyleValue::from_json(r#"{"type": "keyword"}"#).unwrap_err();
  assert!(matches!(err.kind, ValueError::InvalidJson(ref reason) if reason.contains("value")));
}

#[test]
fn test_parse_assets() {
  let assets = parse_assets(r#"{"1234567890": {"path": "foo.png"}}"#).unwrap();
  assert_eq!(
    assets.get("1234567890"),
    Some(&Asset {
      path: "foo.png".into()
    })
  );

  let err = parse_assets("[]").unwrap_err();
  assert!(matches!(err.kind, ValueError::InvalidAssets(_)));
}

#[test]
fn test_unit_option() {
  let option = UnitOption {
    id: "px".into(),
    label: "PX".into(),
  };
  assert_eq!(
    serde_json::to_string(&option).unwrap(),
    r#"{"type":"unit","id":"px","label":"PX"}"#
  );
}
