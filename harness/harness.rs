//! Compile-time test of `declenum!`, parameterised at build time
//!
//! Declares ten enums `Test0` .. `Test9`, all with the same values,
//! and asserts (at compile time) that each one's descriptor
//! reports the expected count.
//! So if this crate builds, the test has passed.
//!
//! See `build.rs` for the parameters.

use declenum::{declenum, enum_traits, EnumDescriptor};

include!(concat!(env!("OUT_DIR"), "/harness.rs"));

#[cfg(test)]
mod test {
    use super::*;
    use declenum::EnumTraits;

    #[test]
    fn descriptors() {
        for (i, d) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(d.name, format!("Test{}", i));
            assert_eq!(d.count, NUM_VALUES);
            assert_eq!(d.names.len(), NUM_VALUES);
            assert_eq!(d.values.len(), NUM_VALUES);
            // Same values, declared separately
            assert_eq!(d.names, DESCRIPTORS[0].names);
        }
    }

    #[test]
    fn first_value() {
        // Whatever the values are, the first is implicitly zero
        // unless it says otherwise.
        if !TEST_VALUES.split(',').next().unwrap_or("").contains('=') {
            assert_eq!(Test0::VALUES[0], 0);
        }
        assert_eq!(Test9::DESCRIPTOR, enum_traits::<Test9>());
    }
}
