//! # s2s
//!
//! Copies the fields of one struct into the fields with the same name of
//! another struct, converting between `T` and `Option<T>` on the way.
//!
//! Structs opt in with `#[derive(Record)]`, which describes their fields at
//! runtime. Names can be normalized and values transformed through
//! [`MapperConfig`].
//!
//! # Example
//! ```
//!   use s2s::{map_struct, map_struct_ex, mappers, MapperConfig, Record};
//!
//!   #[derive(Record, Clone, Default)]
//!   struct Audit {
//!     created_by: String,
//!   }
//!
//!   #[derive(Record, Clone, Default)]
//!   struct UserRow {
//!     id: i64,
//!     name: String,
//!     email: Option<String>,
//!     #[s2s(embed)]
//!     audit: Audit,
//!   }
//!
//!   #[derive(Record, Clone, Default, Debug, PartialEq)]
//!   struct User {
//!     id: i64,
//!     name: Option<String>,
//!     email: String,
//!     created_by: String,
//!   }
//!
//!   let row = UserRow {
//!     id: 1,
//!     name: "flux".to_string(),
//!     email: None,
//!     audit: Audit { created_by: "admin".to_string() },
//!   };
//!
//!   let mut user = User::default();
//!   map_struct(Some(&row), Some(&mut user)).unwrap();
//!   assert_eq!(user, User {
//!     id: 1,
//!     name: Some("flux".to_string()),
//!     email: String::new(),
//!     created_by: "admin".to_string(),
//!   });
//!
//!   #[derive(Record, Clone, Default, Debug, PartialEq)]
//!   struct Shouting {
//!     #[s2s(rename = "ID")]
//!     id: i64,
//!   }
//!
//!   let config = MapperConfig::default().with_name_mapper(mappers::case_insensitive);
//!   let mut shouting = Shouting::default();
//!   map_struct_ex(&config, Some(&row), Some(&mut shouting)).unwrap();
//!   assert_eq!(shouting.id, 1);
//! ```

#[cfg(test)]
extern crate self as s2s;

mod config;
mod error;
mod mapper;
pub mod mappers;
mod record;
mod types;
mod value;

pub use config::{MapperConfig, NameMapper, ValueMapper, DEFAULT_CONFIG};
pub use error::{Error, Result};
pub use mapper::{map_struct, map_struct_ex};
pub use record::{Field, Record};
pub use s2s_codegen::{Record, Reflect};
pub use types::Type;
pub use value::{Reflect, Value};
