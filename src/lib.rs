//! Serializes structured CSS style values to CSS text.
//!
//! A [StyleValue](values::StyleValue) is the typed form of a single CSS
//! property value: keywords, numbers with units, `var()` references, font
//! family lists, layered and space separated lists, functions, images, and the
//! `unset`/`guaranteedInvalid` sentinels. [to_value] turns one into text that
//! can be written after `property: ` in a stylesheet.
//!
//! ```
//! use stylevalue::values::{unit::Unit, StyleValue};
//!
//! let value = StyleValue::tuple(vec![
//!   StyleValue::unit(10.0, Unit::Px),
//!   StyleValue::keyword("auto"),
//! ]);
//! assert_eq!(stylevalue::to_value(&value, None), "10px auto");
//! ```
//!
//! A transform hook can substitute nodes during serialization. This is how
//! asset-backed images are resolved without the serializer knowing about
//! asset storage; see [assets].
//!
//! The [controls] module decides which controls apply to a value: the unit
//! options of a numeric input and whether a color picker applies.

#![deny(missing_docs)]

pub mod assets;
pub mod controls;
pub mod error;
pub mod font_stacks;
mod macros;
pub mod printer;
pub mod properties;
pub mod traits;
pub mod values;

use printer::{PrinterOptions, TransformValue};
use traits::ToCss;
use values::StyleValue;

/// Serializes a style value to CSS text.
///
/// `transform` is called on every node, the root included, before the node
/// is serialized, and may return a replacement. Never fails: values with no
/// textual form serialize to an empty string.
pub fn to_value(value: &StyleValue, transform: Option<&TransformValue<'_>>) -> String {
  to_value_with_options(
    value,
    PrinterOptions {
      minify: false,
      transform,
    },
  )
}

/// Serializes a style value to CSS text with the given printer options.
pub fn to_value_with_options(value: &StyleValue, options: PrinterOptions) -> String {
  // Writing into a String cannot fail.
  value.to_css_string(options).unwrap_or_default()
}
