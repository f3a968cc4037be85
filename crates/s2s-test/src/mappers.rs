use crate::fixtures::*;
use s2s::{map_struct_ex, mappers, Error, MapperConfig, Record, Reflect, Type, Value, ValueMapper};
use std::sync::{Arc, Mutex};

fn spy(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> ValueMapper {
  let log = log.clone();
  Arc::new(move |v: &dyn Reflect, _: Type| {
    log.lock().unwrap().push(tag);
    v.clone_value()
  })
}

#[test]
fn test_composite_mapper() {
  let log = Arc::new(Mutex::new(vec![]));

  let config = MapperConfig::default()
    .with_shared_value_mapper(mappers::composite(vec![spy(&log, "a"), spy(&log, "b")]));
  let mut to = SimpleTo::default();
  map_struct_ex(&config, Some(&example_from()), Some(&mut to)).unwrap();
  assert_eq!(to, expected_to());
  assert_eq!(*log.lock().unwrap(), ["a", "b"].repeat(6));

  log.lock().unwrap().clear();
  let config = config
    .with_shared_value_mapper(mappers::composite(vec![spy(&log, "b"), spy(&log, "a")]));
  map_struct_ex(&config, Some(&example_from()), Some(&mut SimpleTo::default())).unwrap();
  assert_eq!(*log.lock().unwrap(), ["b", "a"].repeat(6));
}

#[test]
fn test_unwrap_pointer() {
  let from = SimpleToIndirectFields {
    boolean: Some(true),
    int: Some(5),
    ..Default::default()
  };

  let strict = MapperConfig::default().with_map_nil_to_zero_implicit(false);
  let err = map_struct_ex(&strict, Some(&from), Some(&mut SimpleTo::default())).unwrap_err();
  assert!(matches!(err, Error::InvalidConversion { .. }));

  let config = strict.with_value_mapper(mappers::unwrap_pointer);
  let mut to = SimpleTo::default();
  map_struct_ex(&config, Some(&from), Some(&mut to)).unwrap();
  assert_eq!(
    to,
    SimpleTo {
      boolean: true,
      int: 5,
      ..Default::default()
    }
  );
}

#[test]
fn test_snake_case_names() {
  #[derive(Record, Clone, Default)]
  struct Api {
    #[s2s(rename = "UserID")]
    user_id: u64,
    #[s2s(rename = "displayName")]
    display_name: String,
  }

  #[derive(Record, Clone, Default, Debug, PartialEq)]
  struct Row {
    user_id: u64,
    display_name: Option<String>,
  }

  let config = MapperConfig::default()
    .with_name_mapper(mappers::snake_case)
    .with_skip_missing_field(false);
  let mut to = Row::default();
  let from = Api {
    user_id: 3,
    display_name: "Flux".to_string(),
  };
  map_struct_ex(&config, Some(&from), Some(&mut to)).unwrap();
  assert_eq!(
    to,
    Row {
      user_id: 3,
      display_name: Some("Flux".to_string()),
    }
  );
}

#[test]
fn test_convert() {
  #[derive(Record, Clone, Default, Debug, PartialEq)]
  struct Labels {
    int: String,
    uint: Option<String>,
    string: String,
  }

  let config = MapperConfig::default().with_shared_value_mapper(mappers::composite(vec![
    mappers::convert(|v: &i64| v.to_string()),
    mappers::convert(|v: &u64| format!("#{}", v)),
  ]));
  let mut to = Labels::default();
  map_struct_ex(&config, Some(&example_from()), Some(&mut to)).unwrap();
  // `convert` only fires for the exact target type, so `uint` headed for an
  // `Option<String>` is left alone and fails conversion quietly.
  assert_eq!(
    to,
    Labels {
      int: "-10".to_string(),
      uint: None,
      string: "test".to_string(),
    }
  );
}

#[test]
fn test_reflect_enum_field() {
  #[derive(Record, Clone, Default, Debug, PartialEq)]
  struct Account {
    status: Status,
  }

  #[derive(Record, Clone, Default, Debug, PartialEq)]
  struct AccountView {
    status: Option<Status>,
  }

  let mut to = AccountView::default();
  let config = MapperConfig::default().with_value_mapper(|v: &dyn Reflect, target: Type| {
    if target == Type::of::<Option<Status>>() {
      Value::nil::<Status>()
    } else {
      v.clone_value()
    }
  });
  map_struct_ex(&config, Some(&Account { status: Status::Disabled }), Some(&mut to)).unwrap();
  assert_eq!(to.status, None);

  map_struct_ex(&MapperConfig::default(), Some(&Account { status: Status::Disabled }), Some(&mut to)).unwrap();
  assert_eq!(to.status, Some(Status::Disabled));
}
