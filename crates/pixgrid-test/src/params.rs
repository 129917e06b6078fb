//! Check bookkeeping for regression tests

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use pixgrid_core::{ImageGrid, ImageKind};
use std::fs;
use std::path::PathBuf;

/// What happens to images handed to [`RegParams::write_grid_and_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Overwrite the golden files with the new outputs
    Generate,
    /// Fail on any output that differs from its golden file
    #[default]
    Compare,
    /// Write outputs only
    Display,
}

impl RegTestMode {
    /// Mode named by `REGTEST_MODE`, [`RegTestMode::Compare`] when unset.
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE").map_or(Self::Compare, |v| Self::parse(&v))
    }

    /// Case-insensitive; unknown names fall back to `Compare`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("generate") {
            Self::Generate
        } else if s.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// Netpbm extension for `kind`.
fn extension(kind: ImageKind) -> &'static str {
    match kind {
        ImageKind::Bitmap => "pbm",
        ImageKind::Grayscale => "pgm",
        ImageKind::Rgb => "ppm",
    }
}

/// State of one regression test.
///
/// Every `compare_*` and `write_*` call is one numbered check. Numbers
/// start at 1 and name the golden files (`{test}_golden.{NN}.{ext}`), so
/// inserting a check shifts every golden file after it.
pub struct RegParams {
    /// Test name, without the `_reg` suffix
    pub test_name: String,
    /// Active mode
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a test in the mode from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Start a test in an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        // a missing directory surfaces later as a write failure
        let _ = fs::create_dir_all(regout_dir());
        if mode == RegTestMode::Generate {
            let _ = fs::create_dir_all(golden_dir());
        }
        eprintln!("--- {test_name}_reg ({mode:?}) ---");

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of the most recent check.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn record(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        if !ok {
            let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail());
            eprintln!("{msg}");
            self.failures.push(msg);
        }
        ok
    }

    /// Check `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next();
        let diff = (expected - actual).abs();
        self.record(diff <= delta, || {
            format!("expected {expected}, got {actual} (diff {diff} > {delta})")
        })
    }

    /// Check two byte strings (or level sequences) for equality.
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.next();
        self.record(expected == actual, || {
            format!("expected {expected:?}, got {actual:?}")
        })
    }

    /// Check two grids for equal kind, maximum level, shape and pixels.
    ///
    /// The failure message names the first differing pixel.
    pub fn compare_grids(&mut self, expected: &ImageGrid, actual: &ImageGrid) -> bool {
        self.next();
        let detail = grid_difference(expected, actual);
        self.record(detail.is_none(), || detail.unwrap_or_default())
    }

    /// Write `grid` to `tests/regout/{test}.{NN}.{ext}` and check it
    /// against `tests/golden/{test}_golden.{NN}.{ext}` according to the
    /// mode.
    ///
    /// A golden file matches when it decodes to the same grid, so its
    /// line wrapping and comments are free.
    ///
    /// # Errors
    ///
    /// Encoding the output or copying it in generate mode. A missing or
    /// different golden file is a recorded failure, not an error.
    pub fn write_grid_and_check(&mut self, grid: &ImageGrid) -> TestResult<()> {
        let idx = self.next();
        let ext = extension(grid.kind());
        let local = regout_dir().join(format!("{}.{idx:02}.{ext}", self.test_name));
        let golden = golden_dir().join(format!("{}_golden.{idx:02}.{ext}", self.test_name));

        pixgrid_io::write_image(grid, &local).map_err(|source| TestError::ImageWrite {
            path: local.clone(),
            source,
        })?;

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(&local, &golden)?;
                eprintln!("generated {}", golden.display());
            }
            RegTestMode::Compare => {
                let detail = match pixgrid_io::read_image(&golden) {
                    Ok(expected) => grid_difference(&expected, grid),
                    Err(e) => Some(format!("golden {}: {e}", golden.display())),
                };
                self.record(detail.is_none(), || detail.unwrap_or_default());
            }
            RegTestMode::Display => {}
        }
        Ok(())
    }

    /// Print a summary and consume the test. `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("--- {}_reg: {} checks passed ---", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "--- {}_reg: {} of {} checks failed ---",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("    {failure}");
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Path a regression output named `file` would be written to.
    pub fn regout_path(&self, file: &str) -> PathBuf {
        regout_dir().join(format!("{}_{file}", self.test_name))
    }
}

/// First difference between two grids, or `None` if they are equal.
fn grid_difference(expected: &ImageGrid, actual: &ImageGrid) -> Option<String> {
    let meta = |g: &ImageGrid| (g.kind(), g.width(), g.height(), g.max_level());
    if meta(expected) != meta(actual) {
        let (ek, ew, eh, em) = meta(expected);
        let (ak, aw, ah, am) = meta(actual);
        return Some(format!(
            "expected {ek} {ew}x{eh} max {em}, got {ak} {aw}x{ah} max {am}"
        ));
    }
    let w = expected.width() as usize;
    expected
        .pixels()
        .iter()
        .zip(actual.pixels())
        .position(|(a, b)| a != b)
        .map(|i| {
            format!(
                "pixel ({}, {}): expected {:?}, got {:?}",
                i % w,
                i / w,
                expected.pixels()[i],
                actual.pixels()[i]
            )
        })
}
