use crate::types::Type;
use crate::value::{Reflect, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Normalizes a field name before matching, e.g. to match case-insensitively.
pub type NameMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Transforms an input field value before it is stored. Receives the
/// declared type of the output field and may return either a value of that
/// type or a pointer (`Option`) to one.
pub type ValueMapper = Arc<dyn Fn(&dyn Reflect, Type) -> Value + Send + Sync>;

#[derive(Clone)]
pub struct MapperConfig {
  /// Applied to every input and output field name before matching.
  pub name_mapper: Option<NameMapper>,

  /// Applied to every matched input value. A returned nil pointer is mapped
  /// to the zero value of a non-pointer field if `map_nil_to_zero_implicit`
  /// is set.
  pub value_mapper: Option<ValueMapper>,

  /// Ignore input fields without a matching output field instead of failing
  /// with [`Error::MissingField`](crate::Error::MissingField).
  pub skip_missing_field: bool,

  /// Leave output fields untouched when the value can't be converted instead
  /// of failing with [`Error::InvalidConversion`](crate::Error::InvalidConversion).
  pub skip_failed_conversion: bool,

  /// Store the zero value when a nil pointer meets a non-pointer field.
  pub map_nil_to_zero_implicit: bool,
}

/// No mappers, skip missing fields and failed conversions, map nil to zero.
pub static DEFAULT_CONFIG: MapperConfig = MapperConfig {
  name_mapper: None,
  value_mapper: None,
  skip_missing_field: true,
  skip_failed_conversion: true,
  map_nil_to_zero_implicit: true,
};

impl MapperConfig {
  pub fn with_name_mapper<F>(mut self, mapper: F) -> Self
  where
    F: Fn(&str) -> String + Send + Sync + 'static,
  {
    self.name_mapper = Some(Arc::new(mapper));
    self
  }

  pub fn with_value_mapper<F>(mut self, mapper: F) -> Self
  where
    F: Fn(&dyn Reflect, Type) -> Value + Send + Sync + 'static,
  {
    self.value_mapper = Some(Arc::new(mapper));
    self
  }

  /// Installs an already shared name mapper.
  pub fn with_shared_name_mapper(mut self, mapper: NameMapper) -> Self {
    self.name_mapper = Some(mapper);
    self
  }

  /// Installs an already shared value mapper, such as the ones built by
  /// [`mappers::composite`](crate::mappers::composite) and
  /// [`mappers::convert`](crate::mappers::convert).
  pub fn with_shared_value_mapper(mut self, mapper: ValueMapper) -> Self {
    self.value_mapper = Some(mapper);
    self
  }

  pub fn with_skip_missing_field(mut self, skip: bool) -> Self {
    self.skip_missing_field = skip;
    self
  }

  pub fn with_skip_failed_conversion(mut self, skip: bool) -> Self {
    self.skip_failed_conversion = skip;
    self
  }

  pub fn with_map_nil_to_zero_implicit(mut self, map: bool) -> Self {
    self.map_nil_to_zero_implicit = map;
    self
  }

  pub(crate) fn map_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
    match self.name_mapper {
      Some(ref mapper) => Cow::Owned(mapper(name)),
      None => Cow::Borrowed(name),
    }
  }

  pub(crate) fn map_value(&self, value: &dyn Reflect, target: Type) -> Value {
    match self.value_mapper {
      Some(ref mapper) => mapper(value, target),
      None => value.clone_value(),
    }
  }
}

impl Default for MapperConfig {
  fn default() -> Self {
    DEFAULT_CONFIG.clone()
  }
}

impl fmt::Debug for MapperConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MapperConfig")
      .field("name_mapper", &self.name_mapper.as_ref().map(|_| ".."))
      .field("value_mapper", &self.value_mapper.as_ref().map(|_| ".."))
      .field("skip_missing_field", &self.skip_missing_field)
      .field("skip_failed_conversion", &self.skip_failed_conversion)
      .field("map_nil_to_zero_implicit", &self.map_nil_to_zero_implicit)
      .finish()
  }
}
