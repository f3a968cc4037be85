use crate::fixtures::*;
use proptest::prelude::*;
use s2s::{map_struct, Record};

#[derive(Record, Clone, Default, Debug, PartialEq)]
struct Wrapped {
  #[s2s(embed)]
  inner: SimpleFrom,
}

fn simple_from() -> impl Strategy<Value = SimpleFrom> {
  (
    any::<bool>(),
    ".{0,16}",
    any::<i64>(),
    any::<u64>(),
    -1.0e6f32..1.0e6f32,
    any::<char>(),
  )
    .prop_map(|(boolean, string, int, uint, float, character)| SimpleFrom {
      boolean,
      string,
      int,
      uint,
      float,
      character,
    })
}

fn same_shape(from: &SimpleFrom) -> SimpleTo {
  SimpleTo {
    boolean: from.boolean,
    string: from.string.clone(),
    int: from.int,
    uint: from.uint,
    float: from.float,
    character: from.character,
  }
}

proptest! {
  #[test]
  fn test_round_trip(from in simple_from()) {
    let mut to = SimpleTo::default();
    map_struct(Some(&from), Some(&mut to)).unwrap();
    prop_assert_eq!(&to, &same_shape(&from));

    let mut back = SimpleFrom::default();
    map_struct(Some(&to), Some(&mut back)).unwrap();
    prop_assert_eq!(back, from);
  }

  #[test]
  fn test_idempotent(from in simple_from()) {
    let mut once = SimpleToIndirectFields::default();
    map_struct(Some(&from), Some(&mut once)).unwrap();

    let mut twice = SimpleToIndirectFields::default();
    map_struct(Some(&from), Some(&mut twice)).unwrap();
    map_struct(Some(&from), Some(&mut twice)).unwrap();
    prop_assert_eq!(once, twice);
  }

  #[test]
  fn test_embedding_is_transparent(from in simple_from()) {
    let mut direct = SimpleTo::default();
    map_struct(Some(&from), Some(&mut direct)).unwrap();

    let mut embedded = SimpleTo::default();
    map_struct(Some(&Wrapped { inner: from }), Some(&mut embedded)).unwrap();
    prop_assert_eq!(direct, embedded);
  }
}
