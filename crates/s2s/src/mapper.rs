use crate::config::{MapperConfig, DEFAULT_CONFIG};
use crate::error::{Error, Result};
use crate::record::{self, Record, Slot};
use crate::types::Type;
use crate::value::{Reflect, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Copies every field of `input` into the output field with the same name,
/// using [`DEFAULT_CONFIG`].
///
/// Does nothing if either argument is `None`.
pub fn map_struct(input: Option<&dyn Reflect>, output: Option<&mut dyn Reflect>) -> Result<()> {
  map_struct_ex(&DEFAULT_CONFIG, input, output)
}

/// Same as [`map_struct`] with an explicit configuration.
///
/// On error, output fields processed before the failing field keep their
/// new values.
pub fn map_struct_ex(
  config: &MapperConfig,
  input: Option<&dyn Reflect>,
  output: Option<&mut dyn Reflect>,
) -> Result<()> {
  let (input, output) = match (input, output) {
    (Some(input), Some(output)) => (input, output),
    _ => return Ok(()),
  };
  let input = record_ref(input)?;
  let output = record_mut(output)?;

  let targets = record::slots(output);
  let mut index = HashMap::with_capacity(targets.len());
  for (pos, target) in targets.iter().enumerate() {
    let name = config.map_name(target.name).into_owned();
    if let Some(prev) = index.insert(name, pos) {
      debug!(
        shadowed = targets[prev].name,
        field = target.name,
        "output fields share a name, the later one wins"
      );
    }
  }

  for source in record::slots(input) {
    let name = config.map_name(source.name);
    let target = match index.get(&*name) {
      Some(pos) => &targets[*pos],
      None if config.skip_missing_field => {
        trace!(field = %name, "no matching output field, skipped");
        continue;
      }
      None => return Err(Error::MissingField(name.into_owned())),
    };

    let value = match record::get(input, &source.path) {
      Some(value) => value,
      None if config.skip_missing_field => {
        trace!(field = %name, "input field not readable, skipped");
        continue;
      }
      None => return Err(Error::MissingField(name.into_owned())),
    };
    let candidate = config.map_value(value, target.ty);

    if let Some(value) = reconcile(config, candidate, target)? {
      if let Err(value) = record::set(output, &target.path, value) {
        if !config.skip_failed_conversion {
          return Err(invalid_conversion(value.ty(), target.ty));
        }
        trace!(field = target.name, "output field rejected the value, skipped");
      }
    }
  }

  Ok(())
}

fn record_ref(arg: &dyn Reflect) -> Result<&dyn Record> {
  if let Some(record) = arg.as_record() {
    return Ok(record);
  }
  match arg.pointee_ref() {
    Some(Some(pointee)) => pointee.as_record().ok_or(Error::ArgumentsInvalid),
    _ => Err(Error::ArgumentsInvalid),
  }
}

fn record_mut(arg: &mut dyn Reflect) -> Result<&mut dyn Record> {
  if arg.as_record().is_some() {
    return arg.as_record_mut().ok_or(Error::ArgumentsInvalid);
  }
  match arg.pointee_mut() {
    Some(Some(pointee)) => pointee.as_record_mut().ok_or(Error::ArgumentsInvalid),
    _ => Err(Error::ArgumentsInvalid),
  }
}

/// Fits `candidate` into the slot of `target`.
///
/// The checks run in a fixed order: a value of the declared type is stored
/// as is, a pointer to it is dereferenced, a value of the pointee type of a
/// pointer slot is put behind a new pointer. `Ok(None)` leaves the slot
/// untouched.
fn reconcile(config: &MapperConfig, candidate: Value, target: &Slot) -> Result<Option<Value>> {
  let from = candidate.ty();
  if from.assignable_to(target.ty) {
    return Ok(Some(candidate));
  }

  if from.elem().map_or(false, |elem| elem.assignable_to(target.ty)) {
    return match candidate.pointee() {
      Some(Some(value)) => Ok(Some(value)),
      _ if config.map_nil_to_zero_implicit => {
        trace!(field = target.name, "nil mapped to zero value");
        Ok(Some(target.ty.zero()))
      }
      _ => Err(invalid_conversion(from, target.ty)),
    };
  }

  if target.ty.elem().map_or(false, |elem| from.assignable_to(elem)) {
    return target
      .ty
      .wrap(candidate)
      .map(Some)
      .map_err(|value| invalid_conversion(value.ty(), target.ty));
  }

  if config.skip_failed_conversion {
    trace!(field = target.name, from = %from, to = %target.ty, "conversion failed, skipped");
    return Ok(None);
  }
  Err(invalid_conversion(from, target.ty))
}

fn invalid_conversion(from: Type, to: Type) -> Error {
  Error::InvalidConversion { from, to }
}
