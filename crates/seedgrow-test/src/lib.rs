//! seedgrow-test - Regression test framework for seedgrow
//!
//! Golden-file regression testing with three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! The [`fixtures`] module builds deterministic synthetic images and seed
//! maps.
//!
//! # Usage
//!
//! ```ignore
//! use seedgrow_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("grow2d");
//! rp.compare_values(8.0, claimed as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use seedgrow_core::Volume;
use seedgrow_io::{RawLayout, read_raw};

/// Load a raw test volume from the test data directory
///
/// # Arguments
///
/// * `name` - File name (e.g., "seeds_64.raw")
/// * `layout` - Shape and byte order of the file
pub fn load_test_volume<T: seedgrow_core::Pixel, const D: usize>(
    name: &str,
    layout: &RawLayout<D>,
) -> TestResult<Volume<T, D>> {
    let path = test_data_path(name);
    read_raw(&path, layout).map_err(|e| TestError::VolumeLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // seedgrow-test is at crates/seedgrow-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
