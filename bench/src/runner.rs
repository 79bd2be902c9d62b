//! Running, and timing, builds of the harness

use std::ffi::OsString;
use std::iter::repeat_with;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use filetime::FileTime;
use tracing::{debug, warn};

/// Package name of the crate whose build we time
pub const HARNESS_PACKAGE: &str = "declenum-harness";

/// How to build the harness
#[derive(Debug, Clone)]
pub struct Harness {
    pub cargo: OsString,
    pub manifest_path: PathBuf,
    /// Touched before each build, so that cargo recompiles the harness
    pub touch: PathBuf,
}

impl Harness {
    /// Find the harness within the workspace at `manifest_path`
    pub fn new(cargo: OsString, manifest_path: PathBuf) -> Result<Self> {
        let workspace = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let touch = workspace.join("harness").join("harness.rs");
        if !touch.exists() {
            bail!(
                "{} not found; --manifest-path should name the declenum workspace",
                touch.display()
            );
        }
        Ok(Harness {
            cargo,
            manifest_path,
            touch,
        })
    }

    /// The `cargo build` command for `num_values` values `test_values`
    pub fn command(&self, num_values: usize, test_values: &str) -> Command {
        let mut cmd = Command::new(&self.cargo);
        cmd.arg("build")
            .arg("--quiet")
            .arg("--manifest-path")
            .arg(&self.manifest_path)
            .args(["-p", HARNESS_PACKAGE])
            .env("DECLENUM_NUM_VALUES", num_values.to_string())
            .env("DECLENUM_TEST_VALUES", test_values)
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        cmd
    }

    /// Build the harness once
    ///
    /// Fails if cargo can't be run, or if the build fails:
    /// the latter means the compile-time assertions failed,
    /// or the declaration was rejected.
    pub fn build_once(&self, num_values: usize, test_values: &str) -> Result<()> {
        filetime::set_file_mtime(&self.touch, FileTime::now())
            .with_context(|| format!("touch {}", self.touch.display()))?;

        let mut cmd = self.command(num_values, test_values);
        debug!(?cmd, "running");
        let output = cmd
            .output()
            .with_context(|| format!("run {:?}", self.cargo))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(num_values, status = %output.status, "harness build failed");
            bail!(
                "harness build with {} values failed ({}):\n{}",
                num_values,
                output.status,
                stderr.trim_end()
            );
        }
        Ok(())
    }
}

/// Call `func` over and over, timing each call
pub fn repeat_timed<T>(
    mut func: impl FnMut() -> T,
) -> impl Iterator<Item = (Duration, T)> {
    repeat_with(move || {
        let t0 = Instant::now();
        let result = func();
        (t0.elapsed(), result)
    })
}

/// Yield from `values` until `time` has passed
///
/// The clock starts at the first call to `next`,
/// and at least one item is always yielded.
pub fn take_for<I: Iterator>(
    time: Duration,
    values: I,
) -> impl Iterator<Item = I::Item> {
    let mut t0: Option<Instant> = None;
    values.take_while(move |_| match t0 {
        None => {
            t0 = Some(Instant::now());
            true
        }
        Some(t0) => t0.elapsed() < time,
    })
}
