use crate::attr::FieldAttrs;
use proc_macro2::{Literal, TokenStream};
use proc_macro_error::{abort, abort_call_site};
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

#[derive(Debug)]
pub struct Derive {
  ident: syn::Ident,
  generics: syn::Generics,
  data: TypeData,
}

#[derive(Debug)]
enum TypeData {
  Record(Vec<RecordField>),
  Opaque,
}

#[derive(Debug)]
struct RecordField {
  ident: Ident,
  ty: Type,
  name: LitStr,
  embed: bool,
}

impl Derive {
  /// `#[derive(Record)]`: structs with named fields, or without fields.
  pub fn record(input: &DeriveInput) -> Self {
    let fields = match input.data {
      Data::Struct(ref data) => match data.fields {
        Fields::Named(ref fields) => fields
          .named
          .iter()
          .filter_map(|field| {
            let attrs = FieldAttrs::from_attrs(&field.attrs);
            if attrs.skip {
              return None;
            }
            let ident = field.ident.clone()?;
            let name = attrs.rename.unwrap_or_else(|| {
              let name = ident.to_string();
              LitStr::new(name.trim_start_matches("r#"), ident.span())
            });
            Some(RecordField {
              ident,
              ty: field.ty.clone(),
              name,
              embed: attrs.embed,
            })
          })
          .collect(),
        Fields::Unit => vec![],
        Fields::Unnamed(_) => abort!(data.fields, "Only support named fields."),
      },
      Data::Enum(_) => abort_call_site!("Only support struct. Use `#[derive(Reflect)]` for enums."),
      Data::Union(_) => abort_call_site!("Only support struct."),
    };

    Self {
      ident: input.ident.clone(),
      generics: input.generics.clone(),
      data: TypeData::Record(fields),
    }
  }

  /// `#[derive(Reflect)]`: any struct or enum, copied as a whole.
  pub fn opaque(input: &DeriveInput) -> Self {
    if let Data::Union(_) = input.data {
      abort_call_site!("Only support struct and enum.");
    }

    Self {
      ident: input.ident.clone(),
      generics: input.generics.clone(),
      data: TypeData::Opaque,
    }
  }

  /// Generics of the generated impls. Every type parameter must itself be a
  /// copyable `'static` value with a zero value, and a reflected one for
  /// records. Generic embedded fields must be records.
  fn bounded_generics(&self) -> syn::Generics {
    let mut generics = self.generics.clone();
    let params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    if params.is_empty() {
      return generics;
    }

    let where_clause = generics.make_where_clause();
    for param in &params {
      let predicate: syn::WherePredicate = match self.data {
        TypeData::Record(_) => syn::parse_quote! {
          #param: ::s2s::Reflect + ::core::clone::Clone + ::core::default::Default
        },
        TypeData::Opaque => syn::parse_quote! {
          #param: 'static + ::core::clone::Clone + ::core::default::Default
        },
      };
      where_clause.predicates.push(predicate);
    }
    if let TypeData::Record(ref fields) = self.data {
      for field in fields.iter().filter(|field| field.embed) {
        let ty = &field.ty;
        where_clause.predicates.push(syn::parse_quote!(#ty: ::s2s::Record));
      }
    }
    generics
  }

  fn get_reflect_tokens(&self) -> TokenStream {
    let self_ident = &self.ident;
    let generics = self.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let record_items = match self.data {
      TypeData::Record(_) => quote! {
        fn as_record(&self) -> ::core::option::Option<&dyn ::s2s::Record> {
          ::core::option::Option::Some(self)
        }

        fn as_record_mut(&mut self) -> ::core::option::Option<&mut dyn ::s2s::Record> {
          ::core::option::Option::Some(self)
        }
      },
      TypeData::Opaque => quote! {},
    };

    quote! {
      impl #impl_generics ::s2s::Reflect for #self_ident #ty_generics #where_clause {
        fn reflect_type() -> ::s2s::Type {
          ::s2s::Type::new::<Self>()
        }

        fn type_info(&self) -> ::s2s::Type {
          ::s2s::Type::new::<Self>()
        }

        fn clone_value(&self) -> ::s2s::Value {
          ::s2s::Value::new(::core::clone::Clone::clone(self))
        }

        fn assign(&mut self, value: ::s2s::Value) -> ::core::result::Result<(), ::s2s::Value> {
          *self = value.downcast::<Self>()?;
          ::core::result::Result::Ok(())
        }

        fn as_any(&self) -> &dyn ::core::any::Any {
          self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::core::any::Any> {
          self
        }

        #record_items
      }
    }
  }

  fn get_record_tokens(&self, fields: &[RecordField]) -> TokenStream {
    let self_ident = &self.ident;
    let generics = self.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors: Vec<_> = fields
      .iter()
      .map(|field| {
        let ty = &field.ty;
        let name = &field.name;
        if field.embed {
          quote! { ::s2s::Field::embedded::<#ty>(#name) }
        } else {
          quote! { ::s2s::Field::new::<#ty>(#name) }
        }
      })
      .collect();

    let indexes: Vec<_> = (0..fields.len()).map(Literal::usize_unsuffixed).collect();
    let idents: Vec<_> = fields.iter().map(|field| &field.ident).collect();

    quote! {
      impl #impl_generics ::s2s::Record for #self_ident #ty_generics #where_clause {
        fn fields(&self) -> ::std::vec::Vec<::s2s::Field> {
          ::std::vec![#(#descriptors),*]
        }

        fn field(&self, index: usize) -> ::core::option::Option<&dyn ::s2s::Reflect> {
          match index {
            #(#indexes => ::core::option::Option::Some(&self.#idents as &dyn ::s2s::Reflect),)*
            _ => ::core::option::Option::None,
          }
        }

        fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn ::s2s::Reflect> {
          match index {
            #(#indexes => ::core::option::Option::Some(&mut self.#idents as &mut dyn ::s2s::Reflect),)*
            _ => ::core::option::Option::None,
          }
        }
      }
    }
  }
}

impl ToTokens for Derive {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    tokens.extend(self.get_reflect_tokens());
    if let TypeData::Record(ref fields) = self.data {
      tokens.extend(self.get_record_tokens(fields));
    }
  }
}
