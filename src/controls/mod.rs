//! Control affordances for style values.
//!
//! These decide which inputs an editor shows for a value: the units a numeric
//! input offers ([unit_select]) and whether a color picker applies ([color]).

pub mod color;
pub mod unit_select;
