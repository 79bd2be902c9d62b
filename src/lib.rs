//! Enums declared together with compile-time reflection metadata
//!
//! [`declenum!`] declares a fieldless enum from a name,
//! an underlying integer type, and a list of values;
//! and, at the same time, a compile-time descriptor for it:
//! an implementation of [`EnumTraits`].
//!
//! ```
//! use declenum::{declenum, enum_traits, EnumTraits};
//!
//! declenum!(Test0, i32, E0);
//! declenum!(pub Colour, u8, Red, Green = 4, Blue);
//!
//! const _: () = assert!(enum_traits::<Test0>().count == 1);
//! const _: () = assert!(<Colour as EnumTraits>::COUNT == 3);
//!
//! assert_eq!(Colour::NAMES, ["Red", "Green", "Blue"]);
//! assert_eq!(Colour::VALUES, [0, 4, 5]);
//! assert_eq!(Colour::Green as u8, 4);
//! ```
//!
//! Everything in the descriptor is a `const`:
//! nothing is computed, or stored, at runtime.
//!
//! An enum written out by hand can get the same descriptor
//! with [`#[derive(Declenum)]`](derive@Declenum):
//!
//! ```
//! use declenum::{Declenum, EnumTraits};
//!
//! #[derive(Declenum)]
//! #[repr(u16)]
//! enum Light {
//!     Red,
//!     Amber,
//!     Green,
//! }
//!
//! const _: () = assert!(Light::COUNT == 3);
//! # fn main() {}
//! ```
//!
//! Mistakes in a declaration are compile errors:
//!
//! ```compile_fail
//! declenum::declenum!(Twice, u8, A, A);
//! ```
//!
//! ```compile_fail
//! declenum::declenum!(Nothing, u8);
//! ```
//!
//! ## Cargo features
//!
//!  * `case`: support for `#[declenum(rename_all = ...)]`,
//!    using [`heck`](https://docs.rs/heck).
//!  * `full`: all features; enabled by default.

// This is the "library" crate.
//
// It is conventional for proc macro crates to be wrapped up
// in a library crate, which reexport the proc macros, mostly because
// a proc macro crate cannot contain anything else.
//
// Here, the library crate is also where the `EnumTraits` trait lives,
// which the macros generate implementations of.

// The macros refer to us as `::declenum`, even from within this crate.
extern crate self as declenum;

use std::fmt::Debug;
use std::hash::Hash;

pub use declenum_macros::{declenum, Declenum};

/// Compile-time descriptor of an enum declared with [`declenum!`]
///
/// Implemented by [`declenum!`] and by
/// [`#[derive(Declenum)]`](derive@Declenum);
/// there is no need to implement it by hand.
///
/// Invariant: `COUNT == NAMES.len() == VALUES.len()`,
/// and all three follow the declaration order.
pub trait EnumTraits: Sized + 'static {
    /// The underlying integer representation
    type Repr: Copy + Eq + Ord + Hash + Debug + 'static;

    /// The name of the enum type
    const NAME: &'static str;

    /// The number of declared values
    const COUNT: usize;

    /// The names of the values
    ///
    /// These are the identifiers as written,
    /// unless the declaration used `rename_all`.
    const NAMES: &'static [&'static str];

    /// The underlying value of each of the values
    const VALUES: &'static [Self::Repr];

    /// All of the above, as a single value
    const DESCRIPTOR: EnumDescriptor<Self::Repr> = EnumDescriptor {
        name: Self::NAME,
        count: Self::COUNT,
        names: Self::NAMES,
        values: Self::VALUES,
    };
}

/// Descriptor of one declared enum, as a plain value
///
/// Obtained from [`enum_traits`] (or [`EnumTraits::DESCRIPTOR`]).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct EnumDescriptor<R: 'static> {
    pub name: &'static str,
    pub count: usize,
    pub names: &'static [&'static str],
    pub values: &'static [R],
}

/// Look up the descriptor for the enum `T`
///
/// Usable in `const` context:
///
/// ```
/// # use declenum::{declenum, enum_traits};
/// declenum!(Test1, i32, E0);
/// const _: () = assert!(enum_traits::<Test1>().count == 1);
/// # fn main() {}
/// ```
pub const fn enum_traits<T: EnumTraits>() -> EnumDescriptor<T::Repr> {
    T::DESCRIPTOR
}

/// The number of values declared for the enum `T`
pub const fn count<T: EnumTraits>() -> usize {
    T::COUNT
}
