//! Test / demo of using declenum across crates
//!
//! Our test has two crates.  This is the lower-layer one,
//! which declares an enum, and reexports the facade.

/// Reexported so that pub-b can name it via `crate = ...`
pub use ::declenum;

use ::declenum::declenum;

declenum! {
    /// An enum declared here, but inspected in pub-b
    pub Shared, u8,
    North, East, South, West,
}

impl Shared {
    pub fn opposite(self) -> Self {
        use Shared::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

#[test]
fn declared() {
    use ::declenum::EnumTraits;
    assert_eq!(Shared::COUNT, 4);
    assert_eq!(Shared::North.opposite(), Shared::South);
}
