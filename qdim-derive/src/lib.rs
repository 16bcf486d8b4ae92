//! Derive macro implementation used by `qdim-core`.
//!
//! `qdim-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of `crate::Unit`
//! and `crate::Ratio`, so it is intended to be used by `qdim-core` (or by crates that expose an identical crate-root
//! API).
//!
//! Most users should depend on `qdim` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit` and a compile-time assertion that
//! the ratio is non-zero.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension marker type
//! - `ratio = ...`: exact ratio to the coherent unit of the dimension, written as
//!   - an integer literal (`ratio = 1000`),
//!   - a tuple `(num, den)` or `(num, den, exp)` meaning `num / den · 10^exp`,
//!   - or any other constant expression of type `crate::Ratio`.
//! - `name = "metre"` (optional): human-readable name; defaults to the snake-cased type name

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprLit, Ident, Lit, LitStr, Token, Type,
};

/// Derive `crate::Unit` for a zero-sized marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `qdim-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Unit` cannot be derived for generic types",
        ));
    }

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;
    let name = match &unit_attr.name {
        Some(name) => name.value(),
        None => snake_case(&ident.to_string()),
    };

    let expanded = quote! {
        impl crate::Unit for #ident {
            const RATIO: crate::Ratio = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #name;
        }

        const _: () = ::core::assert!(
            !<#ident as crate::Unit>::RATIO.same(&crate::Ratio::ZERO),
            "unit ratio must not be zero"
        );
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    ratio: TokenStream2,
    name: Option<LitStr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<TokenStream2> = None;
        let mut name: Option<LitStr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "ratio" => {
                    let expr: Expr = input.parse()?;
                    ratio = Some(ratio_tokens(&expr)?);
                }
                "name" => {
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
            name,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

/// Turns the `ratio` value into a `crate::Ratio` constant expression.
fn ratio_tokens(expr: &Expr) -> syn::Result<TokenStream2> {
    match expr {
        Expr::Tuple(tuple) => {
            let parts: Vec<&Expr> = tuple.elems.iter().collect();
            match parts.as_slice() {
                [num, den] => {
                    reject_zero(den)?;
                    Ok(quote!(crate::Ratio::with_exp(#num, #den, 0)))
                }
                [num, den, exp] => {
                    reject_zero(den)?;
                    Ok(quote!(crate::Ratio::with_exp(#num, #den, #exp)))
                }
                _ => Err(syn::Error::new_spanned(
                    tuple,
                    "ratio tuple must be `(num, den)` or `(num, den, exp)`",
                )),
            }
        }
        Expr::Lit(ExprLit {
            lit: Lit::Int(_), ..
        }) => Ok(quote!(crate::Ratio::integer(#expr))),
        Expr::Lit(ExprLit {
            lit: Lit::Float(lit),
            ..
        }) => Err(syn::Error::new_spanned(
            lit,
            "floating-point ratios are inexact; write `(num, den, exp)` instead",
        )),
        other => Ok(quote!(#other)),
    }
}

fn reject_zero(den: &Expr) -> syn::Result<()> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Int(lit), ..
    }) = den
    {
        if lit.base10_parse::<i64>()? == 0 {
            return Err(syn::Error::new_spanned(
                lit,
                "ratio denominator must not be zero",
            ));
        }
    }
    Ok(())
}

fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1, name = "metre")]
            pub struct Metre;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert_eq!(attr.name.unwrap().value(), "metre");
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(dimension = Length, ratio = 1)]
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", ratio = 1)]
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length)]
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1, unknown = "value")]
            pub struct Metre;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute"));
    }

    #[test]
    fn test_float_ratio_rejected() {
        let tokens = quote! { symbol = "km", dimension = Length, ratio = 1000.0 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("floating-point ratios are inexact"));
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let tokens = quote! { symbol = "x", dimension = Length, ratio = (1, 0) };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("denominator must not be zero"));
    }

    #[test]
    fn test_bad_tuple_arity_rejected() {
        let tokens = quote! { symbol = "x", dimension = Length, ratio = (1, 2, 3, 4) };
        assert!(syn::parse2::<UnitAttribute>(tokens).is_err());
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1)]
            pub struct Metre;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Metre"));
        assert!(code.contains("const RATIO : crate :: Ratio = crate :: Ratio :: integer (1)"));
        assert!(code.contains("const SYMBOL : & 'static str = \"m\""));
        assert!(code.contains("type Dim = Length"));
        assert!(code.contains("const NAME : & 'static str = \"metre\""));
    }

    #[test]
    fn test_derive_unit_impl_with_tuple_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km/h", dimension = Speed, ratio = (5, 18))]
            pub struct KilometrePerHour;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("crate :: Ratio :: with_exp (5 , 18 , 0)"));
        assert!(code.contains("\"kilometre_per_hour\""));
    }

    #[test]
    fn test_derive_unit_impl_with_exponent_and_path_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "in", dimension = super::Length, ratio = (254, 1, -4), name = "inch")]
            pub struct Inch;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("with_exp (254 , 1 , - 4)"));
        assert!(code.contains("type Dim = super :: Length"));
    }

    #[test]
    fn test_derive_unit_impl_with_expression_ratio() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "h", dimension = Time, ratio = Minute::RATIO.mul(Ratio::integer(60)))]
            pub struct Hour;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const RATIO : crate :: Ratio = Minute :: RATIO . mul"));
    }

    #[test]
    fn test_generic_type_rejected() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = Length, ratio = 1)]
            pub struct Metre<T>(T);
        };

        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("cannot be derived for generic types"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "m", dimension = Length, ratio = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
    }

    #[test]
    fn test_unit_attribute_parse_duplicate_symbol() {
        // Parser accepts duplicates - last one wins
        let tokens = quote! {
            symbol = "m", symbol = "km", dimension = Length, ratio = 1
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "km");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Metre"), "metre");
        assert_eq!(snake_case("KilowattHour"), "kilowatt_hour");
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Metre;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
