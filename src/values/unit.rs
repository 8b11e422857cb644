//! CSS units.

use crate::error::PrinterError;
use crate::macros::enum_property;
use crate::printer::Printer;
use crate::traits::ToCss;

enum_property! {
  /// A category of CSS units. Properties declare which groups they accept.
  pub enum UnitGroup {
    /// A [`<length>`](https://www.w3.org/TR/css-values-4/#lengths).
    "length": Length,
    /// A [`<percentage>`](https://www.w3.org/TR/css-values-4/#percentages).
    "percentage": Percentage,
    /// An [`<angle>`](https://www.w3.org/TR/css-values-4/#angles).
    "angle": Angle,
    /// A [`<time>`](https://www.w3.org/TR/css-values-4/#time).
    "time": Time,
    /// A [`<frequency>`](https://www.w3.org/TR/css-values-4/#frequency).
    "frequency": Frequency,
    /// A [`<resolution>`](https://www.w3.org/TR/css-values-4/#resolution).
    "resolution": Resolution,
    /// A [`<flex>`](https://www.w3.org/TR/css-grid-2/#typedef-flex) value.
    "flex": Flex,
    /// A unitless [`<number>`](https://www.w3.org/TR/css-values-4/#numbers).
    "number": Number,
  }
}

macro_rules! define_units {
  (
    $(
      $(#[$meta: meta])*
      $str: literal: $name: ident => $group: ident,
    )+
  ) => {
    /// The unit of a [unit value](super::StyleValue::Unit).
    ///
    /// Units not in this table are kept as [Unit::Custom] and serialized
    /// verbatim; the serializer does not validate unit legality.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum Unit {
      $(
        $(#[$meta])*
        $name,
      )+
      /// A unit this crate does not know about.
      Custom(String),
    }

    impl Unit {
      /// Every known unit, in table order.
      pub const ALL: &'static [Unit] = &[
        $(
          Unit::$name,
        )+
      ];

      /// Returns the unit as written in CSS. The unitless pseudo-unit is `number`.
      pub fn as_str(&self) -> &str {
        match self {
          $(
            Unit::$name => $str,
          )+
          Unit::Custom(unit) => unit,
        }
      }

      /// Returns the group this unit belongs to, if it is a known unit.
      pub fn group(&self) -> Option<UnitGroup> {
        match self {
          $(
            Unit::$name => Some(UnitGroup::$group),
          )+
          Unit::Custom(..) => None,
        }
      }

      /// Parses a unit string. Matching is case-sensitive so persisted units
      /// are written back unchanged; other strings become [Unit::Custom].
      pub fn parse_string(s: &str) -> Unit {
        match s {
          $(
            $str => Unit::$name,
          )+
          _ => Unit::Custom(s.to_owned()),
        }
      }
    }
  };
}

define_units! {
  // https://www.w3.org/TR/css-values-4/#absolute-lengths
  /// A length in pixels.
  "px": Px => Length,
  /// A length in inches. 1in = 96px.
  "in": In => Length,
  /// A length in centimeters. 1cm = 96px / 2.54.
  "cm": Cm => Length,
  /// A length in millimeters. 1mm = 1/10th of 1cm.
  "mm": Mm => Length,
  /// A length in quarter-millimeters. 1Q = 1/40th of 1cm.
  "Q": Q => Length,
  /// A length in points. 1pt = 1/72nd of 1in.
  "pt": Pt => Length,
  /// A length in picas. 1pc = 1/6th of 1in.
  "pc": Pc => Length,

  // https://www.w3.org/TR/css-values-4/#font-relative-lengths
  /// A length in the `em` unit. An `em` is equal to the computed value of the
  /// font-size property of the element on which it is used.
  "em": Em => Length,
  /// A length in the `rem` unit. A `rem` is equal to the computed value of the
  /// `em` unit on the root element.
  "rem": Rem => Length,
  /// A length in `ex` unit. An `ex` is equal to the x-height of the font.
  "ex": Ex => Length,
  /// A length in the `rex` unit. A `rex` is equal to the value of the `ex` unit on the root element.
  "rex": Rex => Length,
  /// A length in the `ch` unit. A `ch` is equal to the width of the zero ("0") character in the current font.
  "ch": Ch => Length,
  /// A length in the `rch` unit. An `rch` is equal to the value of the `ch` unit on the root element.
  "rch": Rch => Length,
  /// A length in the `cap` unit. A `cap` is equal to the cap-height of the font.
  "cap": Cap => Length,
  /// A length in the `rcap` unit. An `rcap` is equal to the value of the `cap` unit on the root element.
  "rcap": Rcap => Length,
  /// A length in the `ic` unit. An `ic` is equal to the width of the “水” (CJK water ideograph) character in the current font.
  "ic": Ic => Length,
  /// A length in the `ric` unit. An `ric` is equal to the value of the `ic` unit on the root element.
  "ric": Ric => Length,
  /// A length in the `lh` unit. An `lh` is equal to the computed value of the `line-height` property.
  "lh": Lh => Length,
  /// A length in the `rlh` unit. An `rlh` is equal to the value of the `lh` unit on the root element.
  "rlh": Rlh => Length,

  // https://www.w3.org/TR/css-values-4/#viewport-relative-units
  /// A length in the `vw` unit. A `vw` is equal to 1% of the viewport width.
  "vw": Vw => Length,
  /// A length in the `lvw` unit. An `lvw` is equal to 1% of the large viewport width.
  "lvw": Lvw => Length,
  /// A length in the `svw` unit. An `svw` is equal to 1% of the small viewport width.
  "svw": Svw => Length,
  /// A length in the `dvw` unit. A `dvw` is equal to 1% of the dynamic viewport width.
  "dvw": Dvw => Length,
  /// A length in the `vh` unit. A `vh` is equal to 1% of the viewport height.
  "vh": Vh => Length,
  /// A length in the `lvh` unit. An `lvh` is equal to 1% of the large viewport height.
  "lvh": Lvh => Length,
  /// A length in the `svh` unit. An `svh` is equal to 1% of the small viewport height.
  "svh": Svh => Length,
  /// A length in the `dvh` unit. A `dvh` is equal to 1% of the dynamic viewport height.
  "dvh": Dvh => Length,
  /// A length in the `vi` unit, 1% of the viewport size in the inline axis.
  "vi": Vi => Length,
  /// A length in the `svi` unit, 1% of the small viewport size in the inline axis.
  "svi": Svi => Length,
  /// A length in the `lvi` unit, 1% of the large viewport size in the inline axis.
  "lvi": Lvi => Length,
  /// A length in the `dvi` unit, 1% of the dynamic viewport size in the inline axis.
  "dvi": Dvi => Length,
  /// A length in the `vb` unit, 1% of the viewport size in the block axis.
  "vb": Vb => Length,
  /// A length in the `svb` unit, 1% of the small viewport size in the block axis.
  "svb": Svb => Length,
  /// A length in the `lvb` unit, 1% of the large viewport size in the block axis.
  "lvb": Lvb => Length,
  /// A length in the `dvb` unit, 1% of the dynamic viewport size in the block axis.
  "dvb": Dvb => Length,
  /// A length in the `vmin` unit. A `vmin` is equal to the smaller of `vw` and `vh`.
  "vmin": Vmin => Length,
  /// A length in the `svmin` unit. An `svmin` is equal to the smaller of `svw` and `svh`.
  "svmin": Svmin => Length,
  /// A length in the `lvmin` unit. An `lvmin` is equal to the smaller of `lvw` and `lvh`.
  "lvmin": Lvmin => Length,
  /// A length in the `dvmin` unit. A `dvmin` is equal to the smaller of `dvw` and `dvh`.
  "dvmin": Dvmin => Length,
  /// A length in the `vmax` unit. A `vmax` is equal to the larger of `vw` and `vh`.
  "vmax": Vmax => Length,
  /// A length in the `svmax` unit. An `svmax` is equal to the larger of `svw` and `svh`.
  "svmax": Svmax => Length,
  /// A length in the `lvmax` unit. An `lvmax` is equal to the larger of `lvw` and `lvh`.
  "lvmax": Lvmax => Length,
  /// A length in the `dvmax` unit. A `dvmax` is equal to the larger of `dvw` and `dvh`.
  "dvmax": Dvmax => Length,

  // https://www.w3.org/TR/css-contain-3/#container-lengths
  /// A length in the `cqw` unit, 1% of the query container's width.
  "cqw": Cqw => Length,
  /// A length in the `cqh` unit, 1% of the query container's height.
  "cqh": Cqh => Length,
  /// A length in the `cqi` unit, 1% of the query container's inline size.
  "cqi": Cqi => Length,
  /// A length in the `cqb` unit, 1% of the query container's block size.
  "cqb": Cqb => Length,
  /// A length in the `cqmin` unit. The smaller of `cqi` and `cqb`.
  "cqmin": Cqmin => Length,
  /// A length in the `cqmax` unit. The larger of `cqi` and `cqb`.
  "cqmax": Cqmax => Length,

  /// A percentage.
  "%": Percent => Percentage,

  /// An angle in degrees. There are 360 degrees in a full circle.
  "deg": Deg => Angle,
  /// An angle in gradians. There are 400 gradians in a full circle.
  "grad": Grad => Angle,
  /// An angle in radians. There are 2π radians in a full circle.
  "rad": Rad => Angle,
  /// An angle in turns. There is 1 turn in a full circle.
  "turn": Turn => Angle,

  /// A time in seconds.
  "s": S => Time,
  /// A time in milliseconds.
  "ms": Ms => Time,

  /// A frequency in hertz.
  "Hz": Hz => Frequency,
  /// A frequency in kilohertz.
  "kHz": KHz => Frequency,

  /// A resolution in dots per inch.
  "dpi": Dpi => Resolution,
  /// A resolution in dots per centimeter.
  "dpcm": Dpcm => Resolution,
  /// A resolution in dots per px.
  "dppx": Dppx => Resolution,
  /// An alias for `dppx`.
  "x": X => Resolution,

  /// A fraction of the leftover space in a grid container.
  "fr": Fr => Flex,

  /// No unit. The number is written bare.
  "number": Number => Number,
}

impl Unit {
  /// Returns whether this is the unitless pseudo-unit.
  pub fn is_unitless(&self) -> bool {
    matches!(self, Unit::Number)
  }

  /// Returns the known units of a group, in table order.
  pub fn in_group(group: UnitGroup) -> impl Iterator<Item = &'static Unit> {
    Unit::ALL.iter().filter(move |unit| unit.group() == Some(group))
  }
}

impl ToCss for Unit {
  fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError>
  where
    W: std::fmt::Write,
  {
    if self.is_unitless() {
      return Ok(());
    }

    dest.write_str(self.as_str())
  }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let unit = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
    Ok(Unit::parse_string(&unit))
  }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Unit {
  fn is_referenceable() -> bool {
    true
  }

  fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    String::json_schema(gen)
  }

  fn schema_name() -> String {
    "Unit".into()
  }
}
