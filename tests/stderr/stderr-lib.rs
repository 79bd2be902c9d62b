// See tests/stderr/Cargo.toml, under `[features]`
#![cfg(all(feature = "enable", not(feature = "disable")))]
//! See `tests/stderr.rs`

use declenum::{declenum, Declenum};

declenum! {
    #[declenum(dbg)]
    pub Dumped, u8,
    A, B = 3,
}

#[derive(Declenum)]
#[declenum(dbg, rename_all = "snake_case")]
#[repr(i64)]
pub enum DerivedDump {
    FirstOne,
    SecondOne,
}

// Makes the build fail, so that it is never up to date.
declenum!(Broken, u8, X, X);
