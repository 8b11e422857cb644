//! Named font stacks.
//!
//! A font family value consisting of a single stack name is expanded to the
//! stack's families when serialized. Documents persist the stack names, so
//! this table must not change.

/// The generic family appended to a lone, unknown font family.
pub const DEFAULT_FONT_FALLBACK: &str = "sans-serif";

/// A named list of concrete font families ending in a generic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStack {
  /// The name of the stack as stored in a font family value.
  pub name: &'static str,
  /// The families the stack expands to.
  pub families: &'static [&'static str],
}

/// Every known font stack.
pub static FONT_STACKS: &[FontStack] = &[
  FontStack {
    name: "Transitional",
    families: &["Charter", "Bitstream Charter", "Sitka Text", "Cambria", "serif"],
  },
  FontStack {
    name: "Old Style",
    families: &["Iowan Old Style", "Palatino Linotype", "URW Palladio L", "P052", "serif"],
  },
  FontStack {
    name: "Humanist",
    families: &[
      "Seravek",
      "Gill Sans Nova",
      "Ubuntu",
      "Calibri",
      "DejaVu Sans",
      "source-sans-pro",
      "sans-serif",
    ],
  },
  FontStack {
    name: "Geometric Humanist",
    families: &["Avenir", "Montserrat", "Corbel", "URW Gothic", "source-sans-pro", "sans-serif"],
  },
  FontStack {
    name: "Classical Humanist",
    families: &["Optima", "Candara", "Noto Sans", "source-sans-pro", "sans-serif"],
  },
  FontStack {
    name: "Neo-Grotesque",
    families: &[
      "Inter",
      "Roboto",
      "Helvetica Neue",
      "Arial Nova",
      "Nimbus Sans",
      "Arial",
      "sans-serif",
    ],
  },
  FontStack {
    name: "Monospace Slab Serif",
    families: &["Nimbus Mono PS", "Courier New", "monospace"],
  },
  FontStack {
    name: "Monospace Code",
    families: &[
      "ui-monospace",
      "Cascadia Code",
      "Source Code Pro",
      "Menlo",
      "Consolas",
      "DejaVu Sans Mono",
      "monospace",
    ],
  },
  FontStack {
    name: "Industrial",
    families: &[
      "Bahnschrift",
      "DIN Alternate",
      "Franklin Gothic Medium",
      "Nimbus Sans Narrow",
      "sans-serif-condensed",
      "sans-serif",
    ],
  },
  FontStack {
    name: "Rounded Sans",
    families: &[
      "ui-rounded",
      "Hiragino Maru Gothic ProN",
      "Quicksand",
      "Comfortaa",
      "Manjari",
      "Arial Rounded MT",
      "Arial Rounded MT Bold",
      "Calibri",
      "source-sans-pro",
      "sans-serif",
    ],
  },
  FontStack {
    name: "Slab Serif",
    families: &["Rockwell", "Rockwell Nova", "Roboto Slab", "DejaVu Serif", "Sitka Small", "serif"],
  },
  FontStack {
    name: "Antique",
    families: &[
      "Superclarendon",
      "Bookman Old Style",
      "URW Bookman",
      "URW Bookman L",
      "Georgia Pro",
      "Georgia",
      "serif",
    ],
  },
  FontStack {
    name: "Didone",
    families: &[
      "Didot",
      "Bodoni MT",
      "Noto Serif Display",
      "URW Palladio L",
      "P052",
      "Sylfaen",
      "serif",
    ],
  },
  FontStack {
    name: "Handwritten",
    families: &["Segoe Print", "Bradley Hand", "Chilanka", "TSCu_Comic", "casual", "cursive"],
  },
  FontStack {
    name: "Arial",
    families: &["Arial", "Roboto", "sans-serif"],
  },
  FontStack {
    name: "Times New Roman",
    families: &["Times New Roman", "serif"],
  },
  FontStack {
    name: "Courier New",
    families: &["Courier New", "monospace"],
  },
];

/// Looks up a font stack by its exact name.
pub fn find_font_stack(name: &str) -> Option<&'static FontStack> {
  FONT_STACKS.iter().find(|stack| stack.name == name)
}
