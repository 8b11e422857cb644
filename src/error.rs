//! Error types.

use std::fmt;

/// An error with an optional source location.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Error<T> {
  /// The type of error that occurred.
  pub kind: T,
  /// The location where the error occurred.
  pub loc: Option<ErrorLocation>,
}

impl<T: fmt::Display> fmt::Display for Error<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.kind.fmt(f)?;
    if let Some(loc) = &self.loc {
      write!(f, " at {}", loc)?;
    }
    Ok(())
  }
}

impl<T: fmt::Display + fmt::Debug> std::error::Error for Error<T> {}

/// A line and column location within a JSON document.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorLocation {
  /// The line number, starting from 1.
  pub line: u32,
  /// The column number, starting from 1.
  pub column: u32,
}

impl fmt::Display for ErrorLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.line, self.column)
  }
}

/// An error that occurred while reading a persisted style value.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum ValueError {
  /// The document is not a well-formed style value.
  InvalidJson(String),
  /// The asset lookup document is not a map of asset ids to assets.
  InvalidAssets(String),
}

impl fmt::Display for ValueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use ValueError::*;
    match self {
      InvalidJson(reason) => write!(f, "Invalid style value: {}", reason),
      InvalidAssets(reason) => write!(f, "Invalid asset map: {}", reason),
    }
  }
}

#[cfg(feature = "serde")]
impl Error<ValueError> {
  pub(crate) fn from_json(err: serde_json::Error, kind: fn(String) -> ValueError) -> Self {
    let loc = if err.line() > 0 {
      Some(ErrorLocation {
        line: err.line() as u32,
        column: err.column() as u32,
      })
    } else {
      None
    };

    // serde_json appends the position to its message; it is kept in `loc` instead.
    let mut reason = err.to_string();
    if loc.is_some() {
      if let Some(index) = reason.rfind(" at line ") {
        reason.truncate(index);
      }
    }

    Error {
      kind: kind(reason),
      loc,
    }
  }
}

/// A printer error type.
pub type PrinterError = Error<PrinterErrorKind>;

impl From<fmt::Error> for PrinterError {
  fn from(_: fmt::Error) -> PrinterError {
    PrinterError {
      kind: PrinterErrorKind::FmtError,
      loc: None,
    }
  }
}

/// A printer error.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum PrinterErrorKind {
  /// A fmt::Error was encountered in the underlying destination.
  FmtError,
}

impl fmt::Display for PrinterErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use PrinterErrorKind::*;
    match self {
      FmtError => write!(f, "Printer error"),
    }
  }
}
