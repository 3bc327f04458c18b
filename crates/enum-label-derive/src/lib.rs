use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta};

/// Derives `label()`, `from_label()` and `LABELS` for a fieldless enum.
///
/// Every variant must carry `#[label = "..."]`. Labels are the strings written to
/// storage, so they are part of the output format and must stay stable.
#[proc_macro_derive(EnumLabel, attributes(label))]
pub fn derive_enum_label(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
	let name = &input.ident;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(name, "EnumLabel can only be derived for enums"));
	};

	let mut variants = Vec::with_capacity(data.variants.len());
	let mut labels = Vec::with_capacity(data.variants.len());
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(&variant.ident, "EnumLabel variants cannot carry fields"));
		}
		let label = find_label(&variant.attrs)?
			.ok_or_else(|| syn::Error::new_spanned(&variant.ident, format!("Missing label attribute for variant {}", variant.ident)))?;
		if labels.contains(&label) {
			return Err(syn::Error::new_spanned(&variant.ident, format!("Duplicate label \"{label}\"")));
		}
		variants.push(&variant.ident);
		labels.push(label);
	}

	Ok(quote! {
		impl #name {
			pub const LABELS: &'static [&'static str] = &[#(#labels),*];

			#[must_use]
			pub const fn label(&self) -> &'static str {
				match self {
					#(Self::#variants => #labels,)*
				}
			}

			#[must_use]
			pub fn from_label(label: &str) -> Option<Self> {
				match label {
					#(#labels => Some(Self::#variants),)*
					_ => None,
				}
			}
		}

		impl std::fmt::Display for #name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.label())
			}
		}
	})
}

fn find_label(attrs: &[Attribute]) -> syn::Result<Option<String>> {
	for attr in attrs.iter().filter(|attr| attr.path.is_ident("label")) {
		match attr.parse_meta()? {
			Meta::NameValue(meta) => {
				if let Lit::Str(lit) = meta.lit {
					return Ok(Some(lit.value()));
				}
				return Err(syn::Error::new_spanned(meta.lit, "label must be a string literal"));
			}
			other => return Err(syn::Error::new_spanned(other, "expected #[label = \"...\"]")),
		}
	}
	Ok(None)
}
