//! Test / demo of using declenum across crates
//!
//! Our test has two crates.  This is the higher-layer one.
//! It depends on `declenum` under the name `reflect`,
//! and also sees it via pub-a's reexport.

/// The macros find the facade crate under our name for it, `reflect`
pub mod renamed {
    reflect::declenum!(pub Local, i16, Minus = -1, Zero, One);
}

/// Here we name the facade explicitly, via the other crate's reexport
pub mod via_pub_a {
    use reflect::Declenum;

    #[derive(Declenum, Debug, Clone, Copy)]
    #[declenum(crate = ::pub_a::declenum)]
    #[repr(u32)]
    pub enum Remote {
        Near = 1,
        Far = 1000,
    }
}

pub const SHARED_COUNT: usize = <pub_a::Shared as reflect::EnumTraits>::COUNT;

#[test]
fn invoke() {
    use reflect::{enum_traits, EnumTraits};

    assert_eq!(SHARED_COUNT, 4);
    assert_eq!(
        pub_a::Shared::NAMES,
        ["North", "East", "South", "West"],
    );

    let d = enum_traits::<renamed::Local>();
    assert_eq!(d.name, "Local");
    assert_eq!(d.values, [-1, 0, 1]);

    // Both routes lead to the same trait
    assert_eq!(
        <via_pub_a::Remote as pub_a::declenum::EnumTraits>::VALUES,
        [1, 1000],
    );
    assert_eq!(via_pub_a::Remote::COUNT, 2);
}
