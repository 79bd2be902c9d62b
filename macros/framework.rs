//! Core types for a declared enum, and the checks on it
//!
//! Both front ends (`declenum!` and `#[derive(Declenum)]`)
//! produce an [`EnumDecl`]; the expander only ever sees one of those.
//!
//! Also re-exports the names that the implementation wants.

pub use crate::prelude::*;

pub use crate::repr::SpannedRepr;

/// An enumerated type declaration, as digested from either front end
#[derive(Debug, Clone)]
pub struct EnumDecl {
    /// Attributes to emit on the enum (never our own `#[declenum]`)
    pub attrs: Vec<syn::Attribute>,
    pub vis: syn::Visibility,
    pub ident: syn::Ident,
    pub repr: SpannedRepr,
    pub values: Vec<syn::Variant>,
    pub options: DeOptions,
    pub kind: DeclKind,
    /// Where to complain if there are no values at all
    pub values_span: Span,
}

/// Which front end produced an `EnumDecl`
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeclKind {
    /// `declenum!`: we must emit the enum itself, as well as the impl
    Declaration,
    /// `#[derive(Declenum)]`: the enum already exists
    Derive,
}

impl EnumDecl {
    /// Check the invariants that the expansion relies on
    ///
    /// All the problems are reported, not just the first.
    pub fn check(&self) -> syn::Result<()> {
        let mut errors = ErrorAccumulator::default();

        if self.values.is_empty() {
            errors.push(syn::Error::new(
                self.values_span,
                "declenum requires at least one value",
            ));
        }

        let mut seen: HashMap<String, &Ident> = HashMap::new();
        for value in &self.values {
            let ident = &value.ident;
            if let Some(first) = seen.get(&ident.unraw().to_string()) {
                errors.push(ident.error(format!(
                    "duplicate value `{}` in declaration of `{}`",
                    ident, self.ident,
                )));
                errors.push(first.error(format!(
                    "`{}` first declared here",
                    first,
                )));
            } else {
                seen.insert(ident.unraw().to_string(), ident);
            }

            errors.handle_in(|| check_value(value));
        }

        errors.finish()
    }

    /// Number of declared values; the `COUNT` of the descriptor
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The type's own name, as a string
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Check a single value (variant)
fn check_value(value: &syn::Variant) -> syn::Result<()> {
    match &value.fields {
        syn::Fields::Unit => {}
        fields => {
            return Err(fields.error(format!(
                "declenum values cannot have fields; `{}` must be a plain identifier",
                value.ident,
            )))
        }
    }
    for attr in &value.attrs {
        if attr.path.is_ident("cfg") {
            return Err(attr.error(
                "#[cfg] is not supported on declenum values: the count would not match the enum",
            ));
        }
        if attr.path.is_ident("declenum") {
            return Err(attr.error(
                "#[declenum] options apply to the whole enum, not to individual values",
            ));
        }
    }
    Ok(())
}
