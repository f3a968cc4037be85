use crate::types::Type;
use crate::value::{Reflect, Value};

/// A struct whose fields can be enumerated, read and written by position.
///
/// Use `#[derive(Record)]` rather than implementing this by hand.
pub trait Record: Reflect {
  /// Field descriptors in declaration order. `field(i)` and `field_mut(i)`
  /// address the `i`th entry.
  fn fields(&self) -> Vec<Field>;

  fn field(&self, index: usize) -> Option<&dyn Reflect>;

  fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Descriptor of a single record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
  pub name: &'static str,
  pub ty: Type,
  /// The field is a record whose own fields are flattened into the parent.
  pub embedded: bool,
}

impl Field {
  pub fn new<T: Reflect>(name: &'static str) -> Self {
    Self {
      name,
      ty: T::reflect_type(),
      embedded: false,
    }
  }

  pub fn embedded<T: Record>(name: &'static str) -> Self {
    Self {
      name,
      ty: T::reflect_type(),
      embedded: true,
    }
  }
}

/// A field of a record with embedded records flattened, addressed by the
/// index path leading to it.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
  pub path: Vec<usize>,
  pub name: &'static str,
  pub ty: Type,
}

pub(crate) fn slots(record: &dyn Record) -> Vec<Slot> {
  let mut slots = vec![];
  collect_slots(record, &mut vec![], &mut slots);
  slots
}

fn collect_slots(record: &dyn Record, prefix: &mut Vec<usize>, slots: &mut Vec<Slot>) {
  for (index, field) in record.fields().into_iter().enumerate() {
    prefix.push(index);
    let embedded = if field.embedded {
      record.field(index).and_then(|field| field.as_record())
    } else {
      None
    };
    match embedded {
      Some(inner) => collect_slots(inner, prefix, slots),
      None => slots.push(Slot {
        path: prefix.clone(),
        name: field.name,
        ty: field.ty,
      }),
    }
    prefix.pop();
  }
}

pub(crate) fn get<'a>(record: &'a dyn Record, path: &[usize]) -> Option<&'a dyn Reflect> {
  let (last, parents) = path.split_last()?;
  let mut record = record;
  for index in parents {
    record = record.field(*index)?.as_record()?;
  }
  record.field(*last)
}

pub(crate) fn set(record: &mut dyn Record, path: &[usize], value: Value) -> Result<(), Value> {
  let (last, parents) = match path.split_last() {
    Some(v) => v,
    None => return Err(value),
  };
  let mut record = record;
  for index in parents {
    record = match record.field_mut(*index).and_then(|field| field.as_record_mut()) {
      Some(inner) => inner,
      None => return Err(value),
    };
  }
  match record.field_mut(*last) {
    Some(slot) => slot.assign(value),
    None => Err(value),
  }
}
