//! private prelude for proc macro stuff

pub use std::collections::HashMap;
pub use std::fmt::Display;
pub use std::str::FromStr;

pub use itertools::Itertools;
pub use proc_macro2::{Ident, Span, TokenStream};
pub use quote::{quote, ToTokens};
pub use strum::{Display, EnumString};
pub use syn::ext::IdentExt;
pub use syn::parse::{Parse, ParseStream};
pub use syn::punctuated::Punctuated;
pub use syn::spanned::Spanned;
pub use syn::Token;

pub use crate::utils::ErrorAccumulator;
pub use crate::utils::SpannedExt;
pub use crate::utils::facade_crate_path;

pub use crate::options::DeOptions;
pub use crate::repr::IntRepr;
pub use crate::expand::expand_decl;
