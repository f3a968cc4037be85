use crate::record::Record;
use crate::types::Type;
use std::any::Any;
use std::fmt;

/// A type whose values can be read, copied and assigned without knowing the
/// concrete type statically.
///
/// Implemented for the primitive types, `String`, `()` and `Vec<T>`.
/// `Option<T>` is the pointer type: `None` is a nil pointer. Records get an
/// implementation from `#[derive(Record)]`, other user types from
/// `#[derive(Reflect)]` or [`reflect_value!`](crate::reflect_value).
pub trait Reflect: Any {
  fn reflect_type() -> Type
  where
    Self: Sized;

  fn type_info(&self) -> Type;

  /// Deep copy of `self`.
  fn clone_value(&self) -> Value;

  /// Overwrites `self` if `value` has exactly the type of `self`, otherwise
  /// hands it back untouched.
  fn assign(&mut self, value: Value) -> Result<(), Value>;

  fn as_any(&self) -> &dyn Any;

  fn into_any(self: Box<Self>) -> Box<dyn Any>;

  fn as_record(&self) -> Option<&dyn Record> {
    None
  }

  fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
    None
  }

  /// `None` for non-pointer types, `Some(None)` for a nil pointer.
  fn pointee_ref(&self) -> Option<Option<&dyn Reflect>> {
    None
  }

  fn pointee_mut(&mut self) -> Option<Option<&mut dyn Reflect>> {
    None
  }
}

/// Owned, type-erased value.
pub struct Value(Box<dyn Reflect>);

impl Value {
  pub fn new<T: Reflect>(value: T) -> Self {
    Self(Box::new(value))
  }

  /// A pointer value; `None` makes it a typed nil.
  pub fn pointer<T>(value: Option<T>) -> Self
  where
    T: Reflect + Clone,
  {
    Self::new(value)
  }

  /// Typed nil pointer to `T`.
  pub fn nil<T>() -> Self
  where
    T: Reflect + Clone,
  {
    Self::new(None::<T>)
  }

  pub fn ty(&self) -> Type {
    self.0.type_info()
  }

  pub fn as_reflect(&self) -> &dyn Reflect {
    &*self.0
  }

  pub fn is_nil(&self) -> bool {
    matches!(self.0.pointee_ref(), Some(None))
  }

  /// Copy of the pointee: `None` for non-pointers, `Some(None)` for nil.
  pub fn pointee(&self) -> Option<Option<Value>> {
    self
      .0
      .pointee_ref()
      .map(|pointee| pointee.map(Reflect::clone_value))
  }

  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.0.as_any().downcast_ref()
  }

  pub fn downcast<T: Any>(self) -> Result<T, Self> {
    if !self.0.as_any().is::<T>() {
      return Err(self);
    }
    match self.0.into_any().downcast::<T>() {
      Ok(v) => Ok(*v),
      Err(_) => unreachable!("type checked above"),
    }
  }
}

impl Clone for Value {
  fn clone(&self) -> Self {
    self.0.clone_value()
  }
}

impl fmt::Debug for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Value").field(&self.ty()).finish()
  }
}

/// Implements [`Reflect`] for leaf types: types copied as a whole and never
/// looked into. The types must implement `Clone` and `Default`.
///
/// ```
/// #[derive(Clone, Default, PartialEq, Debug)]
/// struct Celsius(f64);
///
/// s2s::reflect_value!(Celsius);
///
/// let value = s2s::Value::new(Celsius(21.5));
/// assert_eq!(value.downcast_ref::<Celsius>(), Some(&Celsius(21.5)));
/// ```
#[macro_export]
macro_rules! reflect_value {
  ($($ty:ty),* $(,)?) => {
    $(
      impl $crate::Reflect for $ty {
        fn reflect_type() -> $crate::Type {
          $crate::Type::new::<Self>()
        }

        fn type_info(&self) -> $crate::Type {
          $crate::Type::new::<Self>()
        }

        fn clone_value(&self) -> $crate::Value {
          $crate::Value::new(::core::clone::Clone::clone(self))
        }

        fn assign(&mut self, value: $crate::Value) -> ::core::result::Result<(), $crate::Value> {
          *self = value.downcast::<Self>()?;
          ::core::result::Result::Ok(())
        }

        fn as_any(&self) -> &dyn ::core::any::Any {
          self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::core::any::Any> {
          self
        }
      }
    )*
  };
}

reflect_value!(
  bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
  String, ()
);

impl<T> Reflect for Vec<T>
where
  T: Clone + 'static,
{
  fn reflect_type() -> Type {
    Type::new::<Self>()
  }

  fn type_info(&self) -> Type {
    Type::new::<Self>()
  }

  fn clone_value(&self) -> Value {
    Value::new(self.clone())
  }

  fn assign(&mut self, value: Value) -> Result<(), Value> {
    *self = value.downcast::<Self>()?;
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn into_any(self: Box<Self>) -> Box<dyn Any> {
    self
  }
}

impl<T> Reflect for Option<T>
where
  T: Reflect + Clone,
{
  fn reflect_type() -> Type {
    Type::pointer::<T>()
  }

  fn type_info(&self) -> Type {
    Type::pointer::<T>()
  }

  fn clone_value(&self) -> Value {
    Value::new(self.clone())
  }

  fn assign(&mut self, value: Value) -> Result<(), Value> {
    *self = value.downcast::<Self>()?;
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn into_any(self: Box<Self>) -> Box<dyn Any> {
    self
  }

  fn pointee_ref(&self) -> Option<Option<&dyn Reflect>> {
    Some(self.as_ref().map(|v| v as &dyn Reflect))
  }

  fn pointee_mut(&mut self) -> Option<Option<&mut dyn Reflect>> {
    Some(self.as_mut().map(|v| v as &mut dyn Reflect))
  }
}
