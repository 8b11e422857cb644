//! Property metadata.
//!
//! Maps CSS properties to the [unit groups](UnitGroup) their values accept.
//! Property names may be given in kebab-case (`min-width`), as in CSS, or in
//! camelCase (`minWidth`), as stored in documents.

use crate::values::unit::UnitGroup;
use std::borrow::Cow;

/// Returns the unit groups accepted by a property. Unknown properties accept none.
pub fn unit_groups(property: &str) -> &'static [UnitGroup] {
  use UnitGroup::*;

  const LENGTH: &[UnitGroup] = &[Length];
  const LENGTH_PERCENTAGE: &[UnitGroup] = &[Length, Percentage];
  const NUMBER: &[UnitGroup] = &[Number];
  const NUMBER_PERCENTAGE: &[UnitGroup] = &[Number, Percentage];
  const NUMBER_LENGTH: &[UnitGroup] = &[Number, Length];
  const NUMBER_LENGTH_PERCENTAGE: &[UnitGroup] = &[Number, Length, Percentage];
  const ANGLE: &[UnitGroup] = &[Angle];
  const TIME: &[UnitGroup] = &[Time];
  const TRACK: &[UnitGroup] = &[Length, Percentage, Flex];

  match &*to_kebab_case(property) {
    "width" | "height" | "min-width" | "min-height" | "max-width" | "max-height" | "block-size"
    | "inline-size" | "min-block-size" | "min-inline-size" | "max-block-size" | "max-inline-size"
    | "margin" | "margin-top" | "margin-right" | "margin-bottom" | "margin-left" | "margin-block"
    | "margin-block-start" | "margin-block-end" | "margin-inline" | "margin-inline-start"
    | "margin-inline-end" | "padding" | "padding-top" | "padding-right" | "padding-bottom"
    | "padding-left" | "padding-block" | "padding-block-start" | "padding-block-end" | "padding-inline"
    | "padding-inline-start" | "padding-inline-end" | "top" | "right" | "bottom" | "left" | "inset"
    | "inset-block" | "inset-block-start" | "inset-block-end" | "inset-inline" | "inset-inline-start"
    | "inset-inline-end" | "flex-basis" | "gap" | "row-gap" | "column-gap" | "border-radius"
    | "border-top-left-radius" | "border-top-right-radius" | "border-bottom-right-radius"
    | "border-bottom-left-radius" | "text-indent" | "background-position-x" | "background-position-y"
    | "font-size" | "vertical-align" | "scroll-margin" | "scroll-padding" => LENGTH_PERCENTAGE,
    "letter-spacing" | "word-spacing" | "border-width" | "border-top-width" | "border-right-width"
    | "border-bottom-width" | "border-left-width" | "outline-width" | "outline-offset" | "column-width"
    | "column-rule-width" | "text-decoration-thickness" | "text-underline-offset" | "perspective" => {
      LENGTH
    }
    "line-height" => NUMBER_LENGTH_PERCENTAGE,
    "tab-size" => NUMBER_LENGTH,
    "opacity" | "fill-opacity" | "stroke-opacity" | "flood-opacity" | "stop-opacity" => NUMBER_PERCENTAGE,
    "z-index" | "order" | "flex-grow" | "flex-shrink" | "font-weight" | "orphans" | "widows"
    | "column-count" | "aspect-ratio" => NUMBER,
    "rotate" => ANGLE,
    "transition-duration" | "transition-delay" | "animation-duration" | "animation-delay" => TIME,
    "grid-template-columns" | "grid-template-rows" | "grid-auto-columns" | "grid-auto-rows" => TRACK,
    _ => &[],
  }
}

fn to_kebab_case(property: &str) -> Cow<'_, str> {
  if !property.contains(|c: char| c.is_ascii_uppercase()) {
    return Cow::Borrowed(property);
  }

  let mut kebab = String::with_capacity(property.len() + 4);
  for c in property.chars() {
    if c.is_ascii_uppercase() {
      kebab.push('-');
      kebab.push(c.to_ascii_lowercase());
    } else {
      kebab.push(c);
    }
  }
  Cow::Owned(kebab)
}
