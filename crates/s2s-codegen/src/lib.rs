extern crate proc_macro;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod attr;
mod derive;

use derive::Derive;

#[proc_macro_derive(Record, attributes(s2s))]
#[proc_macro_error::proc_macro_error]
pub fn derive_record(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
  let input = parse_macro_input!(tokens as DeriveInput);
  let derive = Derive::record(&input);
  let tokens = quote!(#derive);
  tokens.into()
}

#[proc_macro_derive(Reflect)]
#[proc_macro_error::proc_macro_error]
pub fn derive_reflect(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
  let input = parse_macro_input!(tokens as DeriveInput);
  let derive = Derive::opaque(&input);
  let tokens = quote!(#derive);
  tokens.into()
}
