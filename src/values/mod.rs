//! The style value model.
//!
//! A [StyleValue] is the structured form of a single CSS property value, as
//! produced by the editor and persisted as part of a document. It is a closed
//! sum type: every consumer matches every variant. The JSON form uses a `type`
//! tag with the variant name in camelCase, e.g.
//!
//! ```json
//! { "type": "unit", "value": 10, "unit": "px" }
//! ```
//!
//! The tag and field names are a stable persistence contract.

pub mod font;
pub mod image;
pub mod number;
pub mod unit;

use self::font::FontFamilyList;
use self::image::ImageValue;
use self::number::CSSNumber;
use self::unit::Unit;
use crate::error::PrinterError;
use crate::printer::Printer;
use crate::traits::ToCss;

/// A CSS property value in structured form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", rename_all = "camelCase")
)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum StyleValue {
  /// A CSS keyword, written verbatim.
  Keyword {
    /// The keyword text.
    value: String,
  },
  /// A number with a unit, e.g. `10px`.
  Unit {
    /// The numeric value.
    value: CSSNumber,
    /// The unit. [Unit::Number] is written without a unit.
    unit: Unit,
  },
  /// Text the value model cannot represent yet, written verbatim.
  Unparsed {
    /// The raw CSS text.
    value: String,
  },
  /// A value that failed validation upstream, written verbatim.
  Invalid {
    /// The raw CSS text.
    value: String,
  },
  /// The absence of a value, e.g. for a newly added property. Written as
  /// an empty string.
  GuaranteedInvalid,
  /// An explicitly removed value. Written as an empty string.
  Unset {
    /// Ignored.
    #[cfg_attr(feature = "serde", serde(default))]
    value: String,
  },
  /// A `var()` reference to a custom property.
  Var {
    /// The custom property name, without the leading `--`.
    value: String,
    /// The value used when the custom property is not defined.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    fallback: Option<Box<StyleValue>>,
  },
  /// A font family list, or a single named font stack.
  FontFamily {
    /// The family names in order of preference.
    value: Vec<String>,
  },
  /// A comma separated list, e.g. the layers of a background.
  Layers {
    /// The layers, in order.
    value: Vec<StyleValue>,
  },
  /// A space separated list, e.g. the components of a shorthand.
  Tuple {
    /// The components, in order.
    value: Vec<StyleValue>,
  },
  /// A CSS function, e.g. `translate3d(...)`.
  Function {
    /// The function name.
    name: String,
    /// The function arguments, usually a tuple or a keyword.
    args: Box<StyleValue>,
  },
  /// An image.
  Image {
    /// Where the image comes from.
    value: ImageValue,
  },
}

impl StyleValue {
  /// Creates a keyword value.
  pub fn keyword<S: Into<String>>(value: S) -> Self {
    StyleValue::Keyword { value: value.into() }
  }

  /// Creates a unit value.
  pub fn unit(value: CSSNumber, unit: Unit) -> Self {
    StyleValue::Unit { value, unit }
  }

  /// Creates a unitless number value.
  pub fn number(value: CSSNumber) -> Self {
    StyleValue::Unit {
      value,
      unit: Unit::Number,
    }
  }

  /// Creates an unparsed value.
  pub fn unparsed<S: Into<String>>(value: S) -> Self {
    StyleValue::Unparsed { value: value.into() }
  }

  /// Creates an invalid value.
  pub fn invalid<S: Into<String>>(value: S) -> Self {
    StyleValue::Invalid { value: value.into() }
  }

  /// Creates an unset value.
  pub fn unset() -> Self {
    StyleValue::Unset { value: String::new() }
  }

  /// Creates a `var()` reference, optionally with a fallback.
  pub fn var<S: Into<String>>(name: S, fallback: Option<StyleValue>) -> Self {
    StyleValue::Var {
      value: name.into(),
      fallback: fallback.map(Box::new),
    }
  }

  /// Creates a font family value.
  pub fn font_family<I, S>(families: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    StyleValue::FontFamily {
      value: families.into_iter().map(Into::into).collect(),
    }
  }

  /// Creates a comma separated list.
  pub fn layers(value: Vec<StyleValue>) -> Self {
    StyleValue::Layers { value }
  }

  /// Creates a space separated list.
  pub fn tuple(value: Vec<StyleValue>) -> Self {
    StyleValue::Tuple { value }
  }

  /// Creates a function value.
  pub fn function<S: Into<String>>(name: S, args: StyleValue) -> Self {
    StyleValue::Function {
      name: name.into(),
      args: Box::new(args),
    }
  }

  /// Creates an image referencing a url.
  pub fn image_url<S: Into<String>>(url: S) -> Self {
    StyleValue::Image {
      value: ImageValue::Url { url: url.into() },
    }
  }

  /// Creates an image referencing an asset by id.
  pub fn image_asset<S: Into<String>>(id: S) -> Self {
    StyleValue::Image {
      value: ImageValue::Asset { value: id.into() },
    }
  }

  /// Parses a value from its persisted JSON form.
  #[cfg(feature = "serde")]
  pub fn from_json(json: &str) -> Result<Self, crate::error::Error<crate::error::ValueError>> {
    serde_json::from_str(json)
      .map_err(|err| crate::error::Error::from_json(err, crate::error::ValueError::InvalidJson))
  }

  /// Returns the persisted JSON form of this value.
  #[cfg(feature = "serde")]
  pub fn to_json(&self) -> String {
    // Serializing a plain data enum into a string cannot fail.
    serde_json::to_string(self).unwrap_or_default()
  }

  /// Serializes this node by its own rule, without consulting the transform
  /// hook for the node itself. Children still go through the hook.
  fn write_node<W>(&self, dest: &mut Printer<W>, replaced: bool) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    match self {
      StyleValue::Keyword { value } | StyleValue::Unparsed { value } | StyleValue::Invalid { value } => {
        dest.write_str(value)
      }
      StyleValue::Unit { value, unit } => {
        value.to_css(dest)?;
        unit.to_css(dest)
      }
      StyleValue::GuaranteedInvalid | StyleValue::Unset { .. } => Ok(()),
      StyleValue::Var { value, fallback } => {
        dest.write_str("var(")?;
        dest.write_dashed_ident(value)?;
        if let Some(fallback) = fallback {
          let fallback = dest.nested_string(fallback)?;
          if !fallback.is_empty() {
            dest.delim(',', false)?;
            dest.write_str(&fallback)?;
          }
        }
        dest.write_char(')')
      }
      StyleValue::FontFamily { value } => FontFamilyList {
        families: value,
        with_fallbacks: !replaced,
      }
      .to_css(dest),
      StyleValue::Layers { value } => {
        let mut first = true;
        for layer in value {
          if first {
            first = false;
          } else {
            dest.delim(',', false)?;
          }
          layer.to_css(dest)?;
        }
        Ok(())
      }
      StyleValue::Tuple { value } => {
        let mut first = true;
        for item in value {
          if first {
            first = false;
          } else {
            dest.write_char(' ')?;
          }
          item.to_css(dest)?;
        }
        Ok(())
      }
      StyleValue::Function { name, args } => {
        dest.write_str(name)?;
        dest.write_char('(')?;
        args.to_css(dest)?;
        dest.write_char(')')
      }
      StyleValue::Image { value } => value.to_css(dest),
    }
  }
}

impl ToCss for StyleValue {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let replacement = dest.transform.and_then(|transform| transform(self));
    match replacement {
      Some(replacement) => replacement.write_node(dest, true),
      None => self.write_node(dest, false),
    }
  }
}
