//! Generation of the enum and its `EnumTraits` impl

use crate::framework::*;

use proc_macro2::Literal;

/// Expand a checked declaration
///
/// `krate` is the path to the `declenum` facade crate.
pub fn expand_decl(decl: &EnumDecl, krate: &TokenStream) -> TokenStream {
    let mut output = TokenStream::new();

    if decl.kind == DeclKind::Declaration {
        output.extend(expand_definition(decl));
    }
    output.extend(expand_traits_impl(decl, krate));

    if decl.options.dbg {
        crate::dbg_dump::dump(decl, &output);
    }
    output
}

/// The enum itself
fn expand_definition(decl: &EnumDecl) -> TokenStream {
    let EnumDecl {
        attrs,
        vis,
        ident,
        repr,
        values,
        ..
    } = decl;

    quote! {
        #( #attrs )*
        #[repr(#repr)]
        #[derive(
            ::core::fmt::Debug,
            ::core::clone::Clone,
            ::core::marker::Copy,
            ::core::cmp::PartialEq,
            ::core::cmp::Eq,
            ::core::hash::Hash,
        )]
        #vis enum #ident {
            #( #values, )*
        }
    }
}

/// The descriptor: `impl EnumTraits`
fn expand_traits_impl(decl: &EnumDecl, krate: &TokenStream) -> TokenStream {
    let ident = &decl.ident;
    let repr = &decl.repr;
    let name = Literal::string(&decl.name());
    let count = Literal::usize_unsuffixed(decl.count());
    let names = decl
        .values
        .iter()
        .map(|v| Literal::string(&decl.options.value_name(&v.ident)));
    let value_idents = decl.values.iter().map(|v| &v.ident);

    quote! {
        impl #krate::EnumTraits for #ident {
            type Repr = #repr;
            const NAME: &'static str = #name;
            const COUNT: usize = #count;
            const NAMES: &'static [&'static str] = &[ #( #names, )* ];
            const VALUES: &'static [#repr] = &[
                #( Self::#value_idents as #repr, )*
            ];
        }
    }
}
