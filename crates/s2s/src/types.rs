use crate::value::{Reflect, Value};
use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime handle of a reflected type.
///
/// Two handles are equal when they describe the same Rust type. Pointer
/// types (`Option<T>`) additionally know their pointee and how to put a
/// pointee value behind a fresh pointer.
#[derive(Clone, Copy)]
pub struct Type {
  id: TypeId,
  name: &'static str,
  zero: fn() -> Value,
  pointer: Option<PointerOps>,
}

#[derive(Clone, Copy)]
struct PointerOps {
  elem: fn() -> Type,
  wrap: fn(Value) -> Result<Value, Value>,
}

impl Type {
  /// Handle of a plain (non-pointer) type. `T::default()` is its zero value.
  pub fn new<T>() -> Self
  where
    T: Reflect + Default,
  {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
      zero: zero_value::<T>,
      pointer: None,
    }
  }

  /// Handle of `Option<T>`, the pointer to `T`.
  pub fn pointer<T>() -> Self
  where
    T: Reflect + Clone,
  {
    Self {
      id: TypeId::of::<Option<T>>(),
      name: type_name::<Option<T>>(),
      zero: zero_value::<Option<T>>,
      pointer: Some(PointerOps {
        elem: <T as Reflect>::reflect_type,
        wrap: wrap_value::<T>,
      }),
    }
  }

  pub fn of<T: Reflect>() -> Self {
    T::reflect_type()
  }

  pub fn id(&self) -> TypeId {
    self.id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  /// A freshly constructed zero value of this type.
  pub fn zero(&self) -> Value {
    (self.zero)()
  }

  pub fn is_pointer(&self) -> bool {
    self.pointer.is_some()
  }

  /// The pointee type if this is a pointer type.
  pub fn elem(&self) -> Option<Type> {
    self.pointer.map(|ops| (ops.elem)())
  }

  pub fn assignable_to(&self, other: Type) -> bool {
    self.id == other.id
  }

  /// Moves `value` into a newly allocated pointer of this type.
  ///
  /// Hands the value back if this is not a pointer type or the value is not
  /// of the pointee type.
  pub fn wrap(&self, value: Value) -> Result<Value, Value> {
    match self.pointer {
      Some(ops) => (ops.wrap)(value),
      None => Err(value),
    }
  }
}

fn zero_value<T>() -> Value
where
  T: Reflect + Default,
{
  Value::new(T::default())
}

fn wrap_value<T>(value: Value) -> Result<Value, Value>
where
  T: Reflect + Clone,
{
  value.downcast::<T>().map(|v| Value::new(Some(v)))
}

impl PartialEq for Type {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for Type {}

impl Hash for Type {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state)
  }
}

impl fmt::Debug for Type {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Type").field(&self.name).finish()
  }
}

impl fmt::Display for Type {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}
