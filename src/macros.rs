macro_rules! enum_property {
  (
    $(#[$outer:meta])*
    $vis:vis enum $name:ident {
      $(
        $(#[$meta: meta])*
        $str: literal: $id: ident,
      )+
    }
  ) => {
    $(#[$outer])*
    #[derive(Debug, Clone, Copy, PartialEq)]
    $vis enum $name {
      $(
        $(#[$meta])*
        $id,
      )+
    }

    impl $name {
      /// Returns the CSS keyword for this value.
      pub fn as_str(&self) -> &'static str {
        use $name::*;
        match self {
          $(
            $id => $str,
          )+
        }
      }

      /// Parses a keyword, ignoring ASCII case.
      pub fn from_str(s: &str) -> Option<Self> {
        match s {
          $(
            s if s.eq_ignore_ascii_case($str) => Some($name::$id),
          )+
          _ => None
        }
      }
    }

    impl ToCss for $name {
      fn to_css<W>(&self, dest: &mut Printer<W>) -> Result<(), PrinterError> where W: std::fmt::Write {
        dest.write_str(self.as_str())
      }
    }
  };
}

pub(crate) use enum_property;
