use crate::framework::*;

// This is #[derive(Declenum)]
//
// The enum already exists, so all we generate is the `EnumTraits` impl.
pub fn declenum_derive_macro(
    input: TokenStream,
) -> Result<TokenStream, syn::Error> {
    let decl = capture_enum(input)?;
    let krate = decl.options.crate_path()?;
    Ok(expand_decl(&decl, &krate))
}

/// Digest a `#[derive(Declenum)]` input into an `EnumDecl`
pub fn capture_enum(input: TokenStream) -> syn::Result<EnumDecl> {
    let syn::DeriveInput {
        attrs,
        vis,
        ident,
        generics,
        data,
    } = syn::parse2(input)?;

    let data = match data {
        syn::Data::Enum(data) => data,
        syn::Data::Struct(syn::DataStruct { struct_token, .. }) => {
            return Err(struct_token
                .error("#[derive(Declenum)] can only be applied to enums"))
        }
        syn::Data::Union(syn::DataUnion { union_token, .. }) => {
            return Err(union_token
                .error("#[derive(Declenum)] can only be applied to enums"))
        }
    };

    if !generics.params.is_empty() {
        return Err(
            generics.error("#[derive(Declenum)] does not support generic enums")
        );
    }

    let mut errors = ErrorAccumulator::default();
    let repr = errors.handle(crate::repr::repr_from_attrs(&attrs));
    let options = errors.handle(DeOptions::from_attrs(attrs));
    let ((options, _), repr) = errors
        .finish_with(options.zip(repr))?
        .ok_or_else(|| ident.error("invalid #[derive(Declenum)]"))?;

    let repr = repr.unwrap_or_else(|| SpannedRepr {
        repr: IntRepr::rust_default(),
        span: ident.span(),
    });

    let values_span = if data.variants.is_empty() {
        data.brace_token.span
    } else {
        data.variants.span()
    };

    let decl = EnumDecl {
        attrs: vec![],
        vis,
        ident,
        repr,
        values: data.variants.into_iter().collect(),
        options,
        kind: DeclKind::Derive,
        values_span,
    };
    decl.check()?;
    Ok(decl)
}
