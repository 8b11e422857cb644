//! CSS number values.

use crate::error::PrinterError;
use crate::printer::Printer;
use crate::traits::ToCss;
use std::fmt::Write;

/// A CSS [`<number>`](https://www.w3.org/TR/css-values-4/#numbers) value, as
/// stored in a persisted style value.
pub type CSSNumber = f64;

impl ToCss for CSSNumber {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let number = *self;
    if !number.is_finite() {
      log::warn!("cannot serialize non-finite number {}, writing 0", number);
      return dest.write_char('0');
    }

    // Also catches negative zero, which would otherwise print as `-0`.
    if number == 0.0 {
      return dest.write_char('0');
    }

    if dest.minify && number.abs() < 1.0 {
      let mut s = String::new();
      write!(s, "{}", number)?;
      if number < 0.0 {
        dest.write_char('-')?;
        dest.write_str(s.trim_start_matches('-').trim_start_matches('0'))
      } else {
        dest.write_str(s.trim_start_matches('0'))
      }
    } else {
      write!(dest, "{}", number)?;
      Ok(())
    }
  }
}
