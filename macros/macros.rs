//! Macros for `declenum`
//
// This is the actual proc-macro crate.
//
// All it exports (or can export) are the proc macros themselves.
// Everything else that is `pub` could be written `pub(crate)`.

mod prelude;

use prelude::*;

// modules containing the actual implementations of our proc-macros
mod capture;
mod declaration;

// Implementation - common parts
mod framework;
mod options;
mod repr;
mod utils;

// Implementation - specific areas
mod dbg_dump;
mod expand;

/// Declare an enum, together with its compile-time descriptor
///
/// ```
/// # use declenum::{declenum, EnumTraits};
/// declenum!(Test0, i32, E0, E1, E2);
///
/// const _: () = assert!(<Test0 as EnumTraits>::COUNT == 3);
/// # fn main() {}
/// ```
///
/// The input is
///
/// ```text
/// ATTRIBUTES* VISIBILITY? NAME, REPR, VALUE [= DISCRIMINANT], ...
/// ```
///
/// This expands to a fieldless `enum NAME` with `#[repr(REPR)]`,
/// whose variants are the `VALUE`s, in order,
/// plus an `impl EnumTraits for NAME`.
///
/// `REPR` must be a primitive integer type.
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`;
/// other attributes (including further derives, and docs)
/// are passed through, on the enum and on the individual values.
///
/// There must be at least one value, and no value may be repeated.
///
/// ## `#[declenum(...)]` options
///
///  * `dbg`: print the expansion to stderr, during compilation.
///  * `rename_all = CASE`: case-convert the strings in `NAMES`
///    (requires the `case` cargo feature).
///    `CASE` is for example `snake_case` or `"kebab-case"`.
///  * `crate = PATH`: where to find the `declenum` crate,
///    if it can't be found in the invoking crate's `Cargo.toml`.
#[proc_macro]
pub fn declenum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = TokenStream::from(input);
    let output = declaration::declenum_func_macro(input)
        .unwrap_or_else(|e| e.into_compile_error());
    output.into()
}

/// Generate the compile-time descriptor for an existing enum
///
/// The enum must be fieldless, non-generic, and have at least one variant.
/// Its `Repr` is the integer type in its `#[repr(...)]`,
/// or `isize` if it doesn't have one.
///
/// The same `#[declenum(...)]` options as for
/// [`declenum!`](macro@crate::declenum) are available,
/// as an attribute on the enum.
//
// This is the implementation of #[derive(Declenum)]
#[proc_macro_derive(Declenum, attributes(declenum))]
pub fn declenum_derive_macro(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = TokenStream::from(input);
    let output = capture::declenum_derive_macro(input)
        .unwrap_or_else(|e| e.into_compile_error());
    output.into()
}
