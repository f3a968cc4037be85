use proc_macro_error::abort;
use syn::{Attribute, Lit, LitStr, Meta, NestedMeta};
use thiserror::Error;

pub const ATTR_NAME: &str = "s2s";

#[derive(Debug, Clone, Error)]
pub enum Error {
  #[error("Field name must not be empty.")]
  EmptyName,
  #[error("Duplicate option `{0}`.")]
  Duplicate(&'static str),
  #[error("`skip` cannot be combined with other options.")]
  SkipConflict,
}

/// Options of `#[s2s(...)]` on a record field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
  pub rename: Option<LitStr>,
  pub embed: bool,
  pub skip: bool,
}

impl FieldAttrs {
  pub fn from_attrs(attrs: &[Attribute]) -> Self {
    let mut opts = Self::default();
    let attrs: Vec<_> = attrs
      .iter()
      .filter(|attr| attr.path.get_ident().map(|v| v == ATTR_NAME).unwrap_or_default())
      .collect();
    for attr in &attrs {
      match attr.parse_meta() {
        // #[s2s(...)]
        Ok(Meta::List(ref list)) => {
          for nested in &list.nested {
            opts.apply(nested);
          }
        }
        Ok(ref meta) => abort!(meta, "Expected `#[s2s(...)]`."),
        Err(err) => abort!(attr, "{}", err),
      }
    }

    if opts.skip && (opts.embed || opts.rename.is_some()) {
      abort!(attrs[attrs.len() - 1], "{}", Error::SkipConflict)
    }
    opts
  }

  fn apply(&mut self, meta: &NestedMeta) {
    match meta {
      // embed / skip
      NestedMeta::Meta(Meta::Path(ref path)) => {
        let flag = match path.get_ident().map(ToString::to_string).as_deref() {
          Some("embed") => ("embed", &mut self.embed),
          Some("skip") => ("skip", &mut self.skip),
          _ => abort!(path, "Unknown option."),
        };
        if *flag.1 {
          abort!(path, "{}", Error::Duplicate(flag.0))
        }
        *flag.1 = true;
      }
      // rename = ".."
      NestedMeta::Meta(Meta::NameValue(ref v)) => {
        if !v.path.get_ident().map(|i| i == "rename").unwrap_or_default() {
          abort!(v.path, "Unknown option.")
        }
        let lit = match v.lit {
          Lit::Str(ref lit) => lit,
          _ => abort!(v.lit, r#"Expected: rename = "<name>""#),
        };
        if lit.value().is_empty() {
          abort!(lit, "{}", Error::EmptyName)
        }
        if self.rename.is_some() {
          abort!(v, "{}", Error::Duplicate("rename"))
        }
        self.rename = Some(lit.clone());
      }
      _ => abort!(meta, "Invalid syntax."),
    }
  }
}
