use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

/// Generate a three component color model from a plain struct definition.
///
/// The struct must have exactly three named fields of the same type. The
/// fields are made public and the model gets `new`, `to_array` and
/// conversions from and into `[T; 3]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    expand_model(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_model(mut input: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    if input.fields.len() != 3 {
        return Err(syn::Error::new(
            Span::call_site(),
            "Models must have exactly 3 fields, one for each component of the color.",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Models can not be generic.",
        ));
    }

    let fields = input.fields.iter().cloned().collect::<Vec<_>>();

    let names = fields
        .iter()
        .map(|f| {
            f.ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(f, "Model fields must be named."))
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let ty = &fields[0].ty;
    let ty_str = quote!(#ty).to_string();
    if let Some(other) = fields.iter().map(|f| &f.ty).find(|other| {
        quote!(#other).to_string() != ty_str
    }) {
        return Err(syn::Error::new_spanned(
            other,
            "All components of a model must have the same type.",
        ));
    }

    let field1 = &names[0];
    let field2 = &names[1];
    let field3 = &names[2];

    // Components are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derive: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    };
    let serde: syn::Attribute = syn::parse_quote! {
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    };
    input.attrs.push(derive);
    input.attrs.push(serde);

    let struct_name = input.ident.clone();

    Ok(quote! {
        #input

        impl #struct_name {
            /// Create a new color from its three components.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the components of this color in declaration order.
            pub const fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }
        }

        impl From<[#ty; 3]> for #struct_name {
            fn from(value: [#ty; 3]) -> Self {
                let [#field1, #field2, #field3] = value;
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for [#ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    })
}
