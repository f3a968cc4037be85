use crate::types::Type;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  /// Input or output is not a record, or is a nil pointer to one.
  #[error("input or output argument not pointer to struct")]
  ArgumentsInvalid,
  /// An input field has no counterpart in the output record. Carries the
  /// normalized field name.
  #[error("destination struct is missing field {0:?}")]
  MissingField(String),
  #[error("can't map {from} to {to}")]
  InvalidConversion { from: Type, to: Type },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
