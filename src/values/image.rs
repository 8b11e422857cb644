//! CSS image values.

use crate::error::PrinterError;
use crate::printer::Printer;
use crate::traits::ToCss;

/// The source of an [image value](super::StyleValue::Image).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(tag = "type", rename_all = "camelCase")
)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ImageValue {
  /// An image kept in an external asset store, referenced by id. It has no
  /// CSS form of its own and must be resolved by a transform hook.
  Asset {
    /// The asset id.
    value: String,
  },
  /// An image at a url.
  Url {
    /// The url string, unescaped.
    url: String,
  },
}

impl ToCss for ImageValue {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    match self {
      ImageValue::Url { url } => {
        // Always quoted, so the url never needs unquoted-url escaping.
        dest.write_str("url(")?;
        dest.write_string(url)?;
        dest.write_char(')')
      }
      ImageValue::Asset { value } => {
        log::debug!("image asset {:?} was not resolved, writing an empty value", value);
        Ok(())
      }
    }
  }
}
