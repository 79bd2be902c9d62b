//! Macro impl for declaring an enum `declenum!`

use crate::framework::*;

/// The input to `declenum!`
///
/// ```rust,ignore
///    #[ATTRS] VIS NAME, REPR, VALUE, VALUE = EXPR, ...
/// ```
#[derive(Debug, Clone)]
struct Declaration {
    attrs: Vec<syn::Attribute>,
    vis: syn::Visibility,
    ident: syn::Ident,
    repr: syn::Type,
    values: Punctuated<syn::Variant, Token![,]>,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(syn::Attribute::parse_outer)?;
        let vis = input.parse()?;
        let ident = input.parse()?;
        let _: Token![,] = input.parse()?;
        let repr = input.parse()?;
        // `declenum!(Name, i32)` is rejected later, with a better message
        let values = if input.is_empty() {
            Punctuated::new()
        } else {
            let _: Token![,] = input.parse()?;
            Punctuated::parse_terminated(input)?
        };
        Ok(Declaration {
            attrs,
            vis,
            ident,
            repr,
            values,
        })
    }
}

impl Declaration {
    fn into_decl(self) -> syn::Result<EnumDecl> {
        let Declaration {
            attrs,
            vis,
            ident,
            repr,
            values,
        } = self;

        let mut errors = ErrorAccumulator::default();
        let options = errors.handle(DeOptions::from_attrs(attrs));
        let repr_ = errors.handle(IntRepr::from_type(&repr));
        let ((options, attrs), repr_) = errors
            .finish_with(options.zip(repr_))?
            .ok_or_else(|| ident.error("invalid declenum declaration"))?;

        let values_span = if values.is_empty() {
            repr.span()
        } else {
            values.span()
        };

        Ok(EnumDecl {
            attrs,
            vis,
            ident,
            repr: repr_,
            values: values.into_iter().collect(),
            options,
            kind: DeclKind::Declaration,
            values_span,
        })
    }
}

/// Parse and check `declenum!` input, without expanding it
pub fn parse_declaration(input: TokenStream) -> syn::Result<EnumDecl> {
    let decl = syn::parse2::<Declaration>(input)?.into_decl()?;
    decl.check()?;
    Ok(decl)
}

/// This is `declenum!`
pub fn declenum_func_macro(input: TokenStream) -> syn::Result<TokenStream> {
    let decl = parse_declaration(input)?;
    let krate = decl.options.crate_path()?;
    Ok(expand_decl(&decl, &krate))
}
