//! `#[declenum(...)]` options, and attribute passthrough
#![allow(dead_code)]

use declenum::{declenum, Declenum, EnumTraits};

declenum! {
    /// Colours, with some docs
    #[derive(PartialOrd, Ord)]
    #[declenum(rename_all = snake_case)]
    pub Colour, u8,
    /// The first colour
    LightBlue,
    DarkRed,
    Green,
}

#[test]
fn renamed() {
    assert_eq!(Colour::NAMES, ["light_blue", "dark_red", "green"]);
    // The type's own name is never renamed
    assert_eq!(Colour::NAME, "Colour");
}

#[test]
fn passthrough_derive() {
    assert!(Colour::LightBlue < Colour::Green);
    assert_eq!(Colour::DarkRed.max(Colour::LightBlue), Colour::DarkRed);
}

#[derive(Declenum)]
#[declenum(rename_all = "kebab-case", rename_all = kebab_case)]
enum Http {
    NotFound,
    Ok,
}

#[test]
fn derive_renamed() {
    assert_eq!(Http::NAMES, ["not-found", "ok"]);
}

mod reexport {
    // As if from some other crate, which re-exports declenum
    pub use declenum as facade;
}

declenum! {
    #[declenum(crate = crate::options::reexport::facade)]
    ViaPath, u32, P, Q
}

#[test]
fn crate_option() {
    assert_eq!(<ViaPath as reexport::facade::EnumTraits>::COUNT, 2);
}

#[test]
#[allow(non_camel_case_types)]
fn raw_identifiers() {
    declenum!(r#Keywords, u8, r#type, r#match, Plain);
    assert_eq!(Keywords::NAME, "Keywords");
    assert_eq!(Keywords::NAMES, ["type", "match", "Plain"]);
    assert_eq!(Keywords::r#match as u8, 1);
}
