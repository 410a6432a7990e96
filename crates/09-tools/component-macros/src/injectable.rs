//! `#[derive(Injectable)]` 实现

use crate::utils::{extract_inject_key, field_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Result};

/// 单个注入字段的展开信息
struct InjectedField {
    ident: syn::Ident,
    ty: syn::Type,
    name: String,
    key: String,
}

/// 展开派生宏
pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let fields = collect_fields(&input)?;

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let descriptors = fields.iter().map(|field| {
        let ty = &field.ty;
        let name = &field.name;
        let key = &field.key;
        quote! {
            ::di_abstractions::InjectionField::of::<#ty>(#name, #key)
        }
    });

    let is_unit = matches!(&input.data, Data::Struct(data) if matches!(data.fields, Fields::Unit));
    let body = if is_unit {
        quote! { Self }
    } else {
        let assignments = fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            let key = &field.key;
            quote! {
                #ident: <#ty as ::di_abstractions::InjectField>::resolve_field(resolver, #key)?
            }
        });
        quote! { Self { #(#assignments),* } }
    };

    Ok(quote! {
        impl #impl_generics ::di_abstractions::Injectable
            for #struct_name #ty_generics #where_clause
        {
            fn fields() -> ::std::vec::Vec<::di_abstractions::InjectionField> {
                ::std::vec![#(#descriptors),*]
            }

            #[allow(unused_variables)]
            fn inject<__R: ::di_abstractions::ComponentResolver>(
                resolver: &__R,
            ) -> ::di_abstractions::DependencyResult<Self> {
                ::std::result::Result::Ok(#body)
            }
        }
    })
}

fn collect_fields(input: &DeriveInput) -> Result<Vec<InjectedField>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Injectable 只能用于具名字段结构体，不支持枚举",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Injectable 只能用于具名字段结构体，不支持联合体",
            ))
        }
    };

    let named = match &data.fields {
        Fields::Named(named) => named,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(unnamed) => {
            return Err(syn::Error::new_spanned(
                unnamed,
                "Injectable 只能用于具名字段结构体，元组结构体没有字段标识符",
            ))
        }
    };

    named
        .named
        .iter()
        .map(|field| {
            // 具名字段一定有标识符
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "缺少字段标识符"))?;
            let name = field_name(&ident);
            let key = extract_inject_key(field)?
                .as_ref()
                .map(LitStr::value)
                .unwrap_or_else(|| name.clone());

            Ok(InjectedField {
                ident,
                ty: field.ty.clone(),
                name,
                key,
            })
        })
        .collect()
}
