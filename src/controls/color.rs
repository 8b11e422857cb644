//! Color detection, used to decide whether a color picker applies to a value.

use crate::values::StyleValue;
use crate::to_value;
use csscolorparser::Color;

/// Parses the serialized form of a value as a CSS color.
///
/// Values that depend on a transform hook, such as asset images, are never colors.
pub fn parse_color(value: &StyleValue) -> Option<Color> {
  match value {
    StyleValue::Keyword { .. } | StyleValue::Unparsed { .. } | StyleValue::Function { .. } => {}
    _ => return None,
  }

  let css = to_value(value, None);
  if css.is_empty() {
    return None;
  }

  csscolorparser::parse(&css).ok()
}

/// Returns whether a value is a CSS color.
pub fn is_color(value: &StyleValue) -> bool {
  parse_color(value).is_some()
}
