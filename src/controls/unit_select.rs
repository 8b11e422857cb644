//! Unit options offered by a numeric value control.

use crate::properties::unit_groups;
use crate::values::unit::{Unit, UnitGroup};
use crate::values::StyleValue;

/// The id of the unitless option.
pub const UNITLESS_OPTION_ID: &str = "number";

/// Length units offered for length properties. Other length units are only
/// offered when the current value already uses them.
pub const VISIBLE_LENGTH_UNITS: &[Unit] = &[
  Unit::Px,
  Unit::Em,
  Unit::Rem,
  Unit::Svw,
  Unit::Svh,
  Unit::Lvw,
  Unit::Lvh,
  Unit::Ch,
];

/// The order in which the most common units are listed. Units not in this
/// list follow in unit table order.
const CANONICAL_ORDER: &[Unit] = &[
  Unit::Px,
  Unit::Percent,
  Unit::Em,
  Unit::Rem,
  Unit::Svw,
  Unit::Svh,
  Unit::Lvw,
  Unit::Lvh,
  Unit::Ch,
];

/// An entry of a unit select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "type", rename = "unit"))]
pub struct UnitOption {
  /// The unit, or [UNITLESS_OPTION_ID] for the unitless option.
  pub id: String,
  /// The text shown for the option.
  pub label: String,
}

impl UnitOption {
  fn unit(unit: &Unit) -> Self {
    UnitOption {
      id: unit.as_str().to_owned(),
      label: unit.as_str().to_owned(),
    }
  }
}

/// Builds the unit options a control offers for `property` when its current
/// value is `value`.
///
/// The property's units are listed in a fixed order. A current unit outside
/// that list is appended so the control never hides it, and the unitless
/// option, labelled `unitless_label`, comes last when the current value is
/// zero or already unitless.
pub fn build_options(property: &str, value: &StyleValue, unitless_label: &str) -> Vec<UnitOption> {
  let mut units: Vec<&Unit> = Vec::new();
  for group in unit_groups(property) {
    match group {
      UnitGroup::Number => continue,
      UnitGroup::Length => units.extend(VISIBLE_LENGTH_UNITS.iter()),
      group => units.extend(Unit::in_group(*group)),
    }
  }

  // Stable sort: units outside the canonical order keep their table order.
  units.sort_by_key(|unit| {
    CANONICAL_ORDER
      .iter()
      .position(|canonical| canonical == *unit)
      .unwrap_or(CANONICAL_ORDER.len())
  });
  units.dedup();

  let mut options: Vec<UnitOption> = units.into_iter().map(UnitOption::unit).collect();

  if let StyleValue::Unit { value, unit } = value {
    if !unit.is_unitless() && !options.iter().any(|option| option.id == unit.as_str()) {
      options.push(UnitOption::unit(unit));
    }

    if *value == 0.0 || unit.is_unitless() {
      options.push(UnitOption {
        id: UNITLESS_OPTION_ID.to_owned(),
        label: unitless_label.to_owned(),
      });
    }
  }

  options
}
