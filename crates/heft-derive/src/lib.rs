use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{
    parse, Attribute, Data, DataStruct, DeriveInput, Error, Field, Fields, Ident, Index, Lit, Meta,
    NestedMeta, Result,
};

#[proc_macro_derive(ToValue, attributes(heft))]
pub fn derive_to_value(input: TokenStream) -> TokenStream {
    let derive_input: DeriveInput = match parse(input) {
        Ok(derive_input) => derive_input,
        Err(error) => return error.to_compile_error().into(),
    };

    let expanded = match derive_input.data {
        Data::Struct(ref struct_data) => derive_to_value_for_struct(&derive_input, struct_data),

        // There is no single record shape for an enum or a union.
        Data::Enum(ref enum_data) => Err(Error::new(
            enum_data.enum_token.span(),
            "ToValue can only be derived for structs",
        )),
        Data::Union(ref union_data) => Err(Error::new(
            union_data.union_token.span(),
            "ToValue can only be derived for structs",
        )),
    };

    expanded
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

/// What `#[heft(...)]` says about one field.
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    rename: Option<String>,
}

fn field_options(attributes: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attribute in attributes.iter().filter(|attr| attr.path.is_ident("heft")) {
        let list = match attribute.parse_meta()? {
            Meta::List(list) => list,
            other => return Err(Error::new_spanned(other, "expected `#[heft(...)]`")),
        };

        for nested in list.nested {
            match nested {
                NestedMeta::Meta(Meta::Path(ref path)) if path.is_ident("skip") => {
                    options.skip = true;
                }
                NestedMeta::Meta(Meta::NameValue(ref name_value))
                    if name_value.path.is_ident("rename") =>
                {
                    match name_value.lit {
                        Lit::Str(ref name) => options.rename = Some(name.value()),
                        ref other => {
                            return Err(Error::new_spanned(other, "`rename` expects a string"))
                        }
                    }
                }
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "unknown heft attribute, expected `skip` or `rename = \"...\"`",
                    ))
                }
            }
        }
    }

    Ok(options)
}

fn named_field_entry(field: &Field) -> Result<Option<TokenStream2>> {
    let options = field_options(&field.attrs)?;
    if options.skip {
        return Ok(None);
    }

    // Named fields always carry an ident.
    let ident = match field.ident {
        Some(ref ident) => ident,
        None => return Ok(None),
    };
    let key = options
        .rename
        .unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_owned());
    let span = ident.span();

    let value = quote_spanned!(span => ::heft::ToValue::to_value(&self.#ident));

    Ok(Some(quote! { record.set(#key, #value); }))
}

fn unnamed_field_element(index: usize, field: &Field) -> Result<Option<TokenStream2>> {
    let options = field_options(&field.attrs)?;
    if options.rename.is_some() {
        return Err(Error::new_spanned(
            field,
            "`rename` has no effect on tuple struct fields",
        ));
    }
    if options.skip {
        return Ok(None);
    }

    let index = Index::from(index);
    Ok(Some(quote! { ::heft::ToValue::to_value(&self.#index) }))
}

fn derive_to_value_for_struct(input: &DeriveInput, data: &DataStruct) -> Result<TokenStream2> {
    let struct_name: &Ident = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let body = match data.fields {
        Fields::Named(ref fields) => {
            let entries = fields
                .named
                .iter()
                .map(named_field_entry)
                .collect::<Result<Vec<_>>>()?;
            let entries = entries.into_iter().flatten();

            quote! {
                let record = ::heft::Record::new();
                #( #entries )*
                ::heft::Value::Record(record)
            }
        }

        Fields::Unnamed(ref fields) => {
            let elements = fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(index, field)| unnamed_field_element(index, field))
                .collect::<Result<Vec<_>>>()?;
            let elements = elements.into_iter().flatten();

            quote! {
                let elements: ::std::vec::Vec<::heft::Value> = ::std::vec![ #( #elements ),* ];
                ::heft::Value::from(elements)
            }
        }

        Fields::Unit => quote! { ::heft::Value::Record(::heft::Record::new()) },
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::heft::ToValue for #struct_name #type_generics #where_clause {
            fn to_value(&self) -> ::heft::Value {
                #body
            }
        }
    })
}
