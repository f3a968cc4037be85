//! Ready-made name and value mappers.

use crate::config::ValueMapper;
use crate::types::Type;
use crate::value::{Reflect, Value};
use std::sync::Arc;

/// Name mapper ignoring capitalization.
pub fn case_insensitive(name: &str) -> String {
  name.to_lowercase()
}

/// Name mapper converting `CamelCase`, `camelCase` and `HTTPServer` style
/// names to `snake_case`.
pub fn snake_case(name: &str) -> String {
  let chars: Vec<char> = name.chars().collect();
  let mut out = String::with_capacity(name.len() + 4);
  for (i, c) in chars.iter().enumerate() {
    if c.is_uppercase() && i > 0 {
      let prev = chars[i - 1];
      let next_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
      if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
        out.push('_');
      }
    }
    out.extend(c.to_lowercase());
  }
  out
}

/// Value mapper collapsing `Option<T>` to `T` when the target is `T`. `None`
/// becomes the zero value of `T`. Other values pass through unchanged.
pub fn unwrap_pointer(value: &dyn Reflect, target: Type) -> Value {
  match value.pointee_ref() {
    Some(pointee) if value.type_info().elem() == Some(target) => {
      pointee.map_or_else(|| target.zero(), |pointee| pointee.clone_value())
    }
    _ => value.clone_value(),
  }
}

/// Chains value mappers in the given order, each one receiving the output of
/// the previous one.
pub fn composite<I>(mappers: I) -> ValueMapper
where
  I: IntoIterator<Item = ValueMapper>,
{
  let mappers: Vec<_> = mappers.into_iter().collect();
  Arc::new(move |value: &dyn Reflect, target: Type| {
    let mut res = value.clone_value();
    for mapper in &mappers {
      res = mapper(res.as_reflect(), target);
    }
    res
  })
}

/// Value mapper applying `f` to values of type `S` headed for a field of type
/// `T`. Everything else passes through unchanged.
///
/// ```
/// use s2s::{mappers, Type};
///
/// let to_len = mappers::convert(|s: &String| s.len());
/// let value = to_len(&String::from("four"), Type::of::<usize>());
/// assert_eq!(value.downcast::<usize>().ok(), Some(4));
///
/// let value = to_len(&String::from("four"), Type::of::<String>());
/// assert_eq!(value.downcast::<String>().ok(), Some(String::from("four")));
/// ```
pub fn convert<S, T, F>(f: F) -> ValueMapper
where
  S: Reflect,
  T: Reflect,
  F: Fn(&S) -> T + Send + Sync + 'static,
{
  Arc::new(move |value: &dyn Reflect, target: Type| {
    match value.as_any().downcast_ref::<S>() {
      Some(source) if target == T::reflect_type() => Value::new(f(source)),
      _ => value.clone_value(),
    }
  })
}
