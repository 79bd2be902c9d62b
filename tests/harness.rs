//! Builds `declenum-harness` with various values
//!
//! The harness is configured at build time, by environment variables
//! (see `harness/build.rs`), so it can only be exercised by running cargo.
//! We do that here, much as `stderr.rs` does for `tests/stderr/`.
//!
//! We use a separate target directory, so as not to contend with
//! the outer build for its lock.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::process::{Command, Output, Stdio};

/// Get `name` from the environment, sensibly
fn env(name: &str) -> Option<String> {
    env::var_os(name)
        .map(OsString::into_string)
        .transpose()
        .unwrap()
}

/// Run `cargo SUBCOMMAND -p declenum-harness` with the given values
fn cargo_harness(
    subcommand: &str,
    num_values: &str,
    test_values: &str,
) -> Output {
    let outer_manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let src_root = outer_manifest_dir.rsplit_once('/').unwrap().0;
    let inner_cwd = format!("{}/target/tests/declenum-harness", src_root);
    fs::create_dir_all(&inner_cwd).unwrap();

    let command = env("CARGO").unwrap_or_else(|| "cargo".into());

    let mut args = vec![
        subcommand.into(),
        format!("--manifest-path={}/Cargo.toml", src_root),
        "--target-dir=target".into(),
        "--quiet".into(),
        "-p".into(),
        "declenum-harness".into(),
    ];
    // Allows CI to pass --locked
    if let Some(xoptions) = env("STDERRTEST_CARGO_OPTIONS") {
        args.extend(xoptions.split_ascii_whitespace().map(Into::into))
    }

    eprintln!(
        "running DECLENUM_NUM_VALUES={:?} DECLENUM_TEST_VALUES={:?} {} {}",
        num_values,
        test_values,
        &command,
        args.join(" "),
    );
    let output = Command::new(command)
        .current_dir(&inner_cwd)
        .stdin(Stdio::null())
        .env("DECLENUM_NUM_VALUES", num_values)
        .env("DECLENUM_TEST_VALUES", test_values)
        .args(args)
        .output()
        .unwrap();
    eprintln!("exit status: {}", output.status);
    output
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// All in one test, since each step rebuilds the same crate.
#[test]
fn harness() {
    // The count tracks the declaration
    let output = cargo_harness("test", "5", "A, B, C, D, E");
    assert!(output.status.success(), "{}", stderr_of(&output));

    let output = cargo_harness("test", "3", "E0, E1 = 10, E2");
    assert!(output.status.success(), "{}", stderr_of(&output));

    // A count that disagrees with the declaration fails the build
    let output = cargo_harness("build", "4", "A, B, C, D, E");
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(
            "assertion failed: NUM_VALUES == enum_traits::<Test0>().count"
        ),
        "{}",
        stderr,
    );

    // So does a bad declaration
    let output = cargo_harness("build", "2", "A, A");
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("duplicate value `A` in declaration of `Test0`"),
        "{}",
        stderr,
    );
}
