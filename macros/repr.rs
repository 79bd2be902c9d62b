//! The underlying integer representation of a declared enum

use crate::prelude::*;

/// Primitive integer type usable as `#[repr(...)]` of a fieldless enum
#[derive(Debug, Clone, Copy, Eq, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum IntRepr {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

const EXPECTED: &str =
    "i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128 or usize";

/// A representation, with the span where the user wrote it
#[derive(Debug, Clone)]
pub struct SpannedRepr {
    pub repr: IntRepr,
    pub span: Span,
}

impl IntRepr {
    /// Interpret an identifier (eg from `#[repr(u8)]`)
    ///
    /// Returns `None` for things that aren't integer types,
    /// such as `C` or `transparent`.
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        ident.to_string().parse().ok()
    }

    /// Interpret the type given as the second argument to `declenum!`
    pub fn from_type(ty: &syn::Type) -> syn::Result<SpannedRepr> {
        let bad = || {
            ty.error(format!(
                "underlying representation must be a primitive integer type: {}",
                EXPECTED,
            ))
        };
        let path = match ty {
            syn::Type::Path(syn::TypePath { qself: None, path }) => path,
            syn::Type::Group(g) => return Self::from_type(&g.elem),
            syn::Type::Paren(p) => return Self::from_type(&p.elem),
            _ => return Err(bad()),
        };
        let ident = path.get_ident().ok_or_else(bad)?;
        let repr = Self::from_ident(ident).ok_or_else(bad)?;
        Ok(SpannedRepr {
            repr,
            span: ident.span(),
        })
    }

    /// Rust's own default for an enum with no `#[repr]`
    pub fn rust_default() -> Self {
        IntRepr::Isize
    }
}

impl SpannedRepr {
    pub fn ident(&self) -> Ident {
        Ident::new(&self.repr.to_string(), self.span)
    }
}

impl ToTokens for SpannedRepr {
    fn to_tokens(&self, out: &mut TokenStream) {
        self.ident().to_tokens(out)
    }
}

/// Find the integer type in the `#[repr(...)]` attributes of a derive input
///
/// `Ok(None)` means there was no `#[repr]` at all.
pub fn repr_from_attrs(
    attrs: &[syn::Attribute],
) -> syn::Result<Option<SpannedRepr>> {
    let mut found: Option<SpannedRepr> = None;
    let mut any_repr = None;
    for attr in attrs {
        if !attr.path.is_ident("repr") {
            continue;
        }
        any_repr.get_or_insert(attr.path.span());
        let list = match attr.parse_meta()? {
            syn::Meta::List(list) => list,
            other => return Err(other.error("malformed #[repr]")),
        };
        for nested in &list.nested {
            let ident = match nested {
                syn::NestedMeta::Meta(syn::Meta::Path(path)) => {
                    path.get_ident()
                }
                _ => None,
            };
            if let Some(repr) = ident.and_then(IntRepr::from_ident) {
                found = Some(SpannedRepr {
                    repr,
                    span: nested.span(),
                });
            }
        }
    }
    match (found, any_repr) {
        (Some(found), _) => Ok(Some(found)),
        (None, None) => Ok(None),
        (None, Some(span)) => Err(syn::Error::new(
            span,
            format!(
                "#[derive(Declenum)] needs an integer type in #[repr(...)]: {}",
                EXPECTED,
            ),
        )),
    }
}
