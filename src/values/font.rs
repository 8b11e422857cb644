//! CSS font family lists.

use crate::error::PrinterError;
use crate::font_stacks::{find_font_stack, DEFAULT_FONT_FALLBACK};
use crate::macros::enum_property;
use crate::printer::Printer;
use crate::traits::ToCss;
use itertools::Itertools;
use smallvec::SmallVec;

enum_property! {
  /// A [generic font family](https://www.w3.org/TR/css-fonts-4/#generic-font-families) name,
  /// as used in the `font-family` property.
  #[allow(missing_docs)]
  pub enum GenericFontFamily {
    "serif": Serif,
    "sans-serif": SansSerif,
    "cursive": Cursive,
    "fantasy": Fantasy,
    "monospace": Monospace,
    "system-ui": SystemUI,
    "emoji": Emoji,
    "math": Math,
    "fangsong": FangSong,
    "ui-serif": UISerif,
    "ui-sans-serif": UISansSerif,
    "ui-monospace": UIMonospace,
    "ui-rounded": UIRounded,

    // CSS wide keywords. These must be written as identifiers so they
    // don't get serialized as strings.
    // https://www.w3.org/TR/css-values-4/#common-keywords
    "initial": Initial,
    "inherit": Inherit,
    "unset": Unset,
    // Default is also reserved by the <custom-ident> type.
    // https://www.w3.org/TR/css-values-4/#custom-idents
    "default": Default,

    // CSS defaulting keywords
    // https://drafts.csswg.org/css-cascade-5/#defaulting-keywords
    "revert": Revert,
    "revert-layer": RevertLayer,
  }
}

/// A single font [family name](https://drafts.csswg.org/css-fonts/#family-name-syntax).
///
/// Generic families are written bare. Names containing white space are always
/// quoted; other names are written as an identifier when that needs no escaping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyName<'a>(pub &'a str);

impl<'a> ToCss for FamilyName<'a> {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let val = self.0;
    if GenericFontFamily::from_str(val).is_some() {
      return dest.write_str(val);
    }

    if !val.is_empty() && !val.contains(char::is_whitespace) {
      let mut id = String::new();
      cssparser::serialize_identifier(val, &mut id)?;
      if id == val {
        return dest.write_str(&id);
      }
    }

    dest.write_string(val)
  }
}

/// A font family list as stored in a [font family value](super::StyleValue::FontFamily).
pub(crate) struct FontFamilyList<'a> {
  pub families: &'a [String],
  /// Whether to expand stack names and add a generic fallback. Disabled when
  /// the list came from a transform hook, which is taken as authoritative.
  pub with_fallbacks: bool,
}

impl<'a> FontFamilyList<'a> {
  fn resolve(&self) -> SmallVec<[&'a str; 8]> {
    let mut families: SmallVec<[&'a str; 8]> = self.families.iter().map(String::as_str).unique().collect();

    if self.with_fallbacks && families.len() == 1 {
      if let Some(stack) = find_font_stack(families[0]) {
        log::trace!("expanding font stack {:?}", stack.name);
        families = stack.families.iter().copied().unique().collect();
      }

      if families.len() == 1 && GenericFontFamily::from_str(families[0]).is_none() {
        families.push(DEFAULT_FONT_FALLBACK);
      }
    }

    if families.is_empty() {
      families.push(DEFAULT_FONT_FALLBACK);
    }

    families
  }
}

impl<'a> ToCss for FontFamilyList<'a> {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    let mut first = true;
    for family in self.resolve() {
      if first {
        first = false;
      } else {
        dest.delim(',', false)?;
      }
      FamilyName(family).to_css(dest)?;
    }
    Ok(())
  }
}
