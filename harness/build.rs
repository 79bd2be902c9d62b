//! Generate the compile-time test for `harness.rs`
//!
//! The test is parameterised by two environment variables:
//!
//!  * `DECLENUM_NUM_VALUES`: the expected number of values
//!  * `DECLENUM_TEST_VALUES`: the values, as `declenum!` would take them
//!
//! Either both must be set, or neither,
//! in which case the test is the single value `E0`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const NUM_VALUES: &str = "DECLENUM_NUM_VALUES";
const TEST_VALUES: &str = "DECLENUM_TEST_VALUES";

/// How many enums we declare, each with the same values
const N_TYPES: usize = 10;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", NUM_VALUES);
    println!("cargo:rerun-if-env-changed={}", TEST_VALUES);

    let (num_values, test_values) =
        match (env::var(NUM_VALUES).ok(), env::var(TEST_VALUES).ok()) {
            (None, None) => (1, "E0".to_owned()),
            (Some(num), Some(values)) => {
                let num: usize = num.trim().parse().unwrap_or_else(|e| {
                    panic!("bad {} {:?}: {}", NUM_VALUES, num, e)
                });
                (num, values)
            }
            _ => panic!(
                "{} and {} must be set together, or not at all",
                NUM_VALUES, TEST_VALUES
            ),
        };

    let out_dir: PathBuf = env::var_os("OUT_DIR")
        .unwrap_or_else(|| panic!("OUT_DIR not set"))
        .into();
    let out_file = out_dir.join("harness.rs");

    fs::write(&out_file, generate(num_values, &test_values))
        .unwrap_or_else(|e| panic!("write {:?}: {}", out_file, e));
}

fn generate(num_values: usize, test_values: &str) -> String {
    let mut out = String::new();
    let mut w = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    w("// @generated by declenum-harness build.rs".into());
    w(format!("pub const NUM_VALUES: usize = {};", num_values));
    w(format!("pub const TEST_VALUES: &str = {:?};", test_values));
    w("".into());
    for i in 0..N_TYPES {
        w(format!("declenum!(pub Test{}, i32, {});", i, test_values));
    }
    w("".into());
    for i in 0..N_TYPES {
        w(format!(
            "const _: () = assert!(NUM_VALUES == enum_traits::<Test{}>().count);",
            i
        ));
    }
    w("".into());
    let mut list = String::new();
    for i in 0..N_TYPES {
        let _ = write!(list, "enum_traits::<Test{}>(), ", i);
    }
    w(format!(
        "pub const DESCRIPTORS: [EnumDescriptor<i32>; {}] = [{}];",
        N_TYPES, list
    ));
    out
}
