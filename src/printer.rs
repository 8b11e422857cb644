//! CSS serialization.

use crate::error::PrinterError;
use crate::traits::ToCss;
use crate::values::StyleValue;
use cssparser::serialize_string;

/// A hook called on every node of a style value before it is serialized.
///
/// Returning `Some` replaces the node for serialization; returning `None`
/// serializes the node by its own rule. The hook always receives the
/// original node, before any of its children were replaced.
pub type TransformValue<'a> = dyn Fn(&StyleValue) -> Option<StyleValue> + 'a;

/// Options that control how style values are serialized to a string.
#[derive(Default, Clone, Copy)]
pub struct PrinterOptions<'a> {
  /// Whether to minify the CSS, i.e. remove optional white space.
  pub minify: bool,
  /// An optional hook to substitute nodes during serialization, e.g. to
  /// resolve asset-backed images to urls.
  pub transform: Option<&'a TransformValue<'a>>,
}

/// A `Printer` represents a destination to output serialized CSS, as used in
/// the [ToCss](super::traits::ToCss) trait. It can wrap any destination that
/// implements [std::fmt::Write](std::fmt::Write), such as a [String](String).
///
/// `Printer` also includes helper functions that assist with writing output
/// that respects options such as `minify`.
pub struct Printer<'a, 'b, W> {
  dest: &'a mut W,
  pub(crate) minify: bool,
  pub(crate) transform: Option<&'b TransformValue<'b>>,
}

impl<'a, 'b, W: std::fmt::Write + Sized> Printer<'a, 'b, W> {
  /// Create a new Printer wrapping the given destination.
  pub fn new(dest: &'a mut W, options: PrinterOptions<'b>) -> Self {
    Printer {
      dest,
      minify: options.minify,
      transform: options.transform,
    }
  }

  /// Writes a raw string to the underlying destination.
  pub fn write_str(&mut self, s: &str) -> Result<(), PrinterError> {
    self.dest.write_str(s)?;
    Ok(())
  }

  /// Write a single character to the underlying destination.
  pub fn write_char(&mut self, c: char) -> Result<(), PrinterError> {
    self.dest.write_char(c)?;
    Ok(())
  }

  /// Writes a single whitespace character, unless the `minify` option is enabled.
  ///
  /// Use `write_char` instead if you wish to force a space character to be written,
  /// regardless of the `minify` option.
  pub fn whitespace(&mut self) -> Result<(), PrinterError> {
    if self.minify {
      return Ok(());
    }

    self.write_char(' ')
  }

  /// Writes a delimeter character, followed by whitespace (depending on the `minify` option).
  /// If `ws_before` is true, then whitespace is also written before the delimeter.
  pub fn delim(&mut self, delim: char, ws_before: bool) -> Result<(), PrinterError> {
    if ws_before {
      self.whitespace()?;
    }
    self.write_char(delim)?;
    self.whitespace()
  }

  /// Writes a dashed identifier (e.g. a custom property name) given the name
  /// without its leading `--`. Names are stored already valid and are written
  /// unchanged.
  pub fn write_dashed_ident(&mut self, name: &str) -> Result<(), PrinterError> {
    self.write_str("--")?;
    self.write_str(name)
  }

  /// Writes a double quoted CSS string, escaping quotes, backslashes and
  /// control characters.
  pub fn write_string(&mut self, s: &str) -> Result<(), PrinterError> {
    serialize_string(s, self)?;
    Ok(())
  }

  /// Serializes a value into a separate string using the same options as
  /// this printer. Used where the output depends on whether a nested value
  /// is empty.
  pub(crate) fn nested_string<T: ToCss>(&self, value: &T) -> Result<String, PrinterError> {
    let mut s = String::new();
    let mut printer = Printer::new(
      &mut s,
      PrinterOptions {
        minify: self.minify,
        transform: self.transform,
      },
    );
    value.to_css(&mut printer)?;
    Ok(s)
  }
}

impl<'a, 'b, W: std::fmt::Write + Sized> std::fmt::Write for Printer<'a, 'b, W> {
  fn write_str(&mut self, s: &str) -> std::fmt::Result {
    self.dest.write_str(s)
  }
}
