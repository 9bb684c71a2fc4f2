//! Android launcher icon generation.
//!
//! Takes one source image and writes `ic_launcher`, `ic_launcher_round` and
//! `ic_launcher_foreground` PNGs into every `mipmap-*` density folder, plus an
//! optional refresh of the web logo.

pub mod density;
pub mod error;
pub mod generate;
pub mod raster;

pub use density::{Density, LAUNCHER_NAMES, SIZE_TABLE, WEB_LOGO_SIZE};
pub use error::IconError;
pub use generate::{run, run_with, Artifact, Event, Layout, Report, DEFAULT_INPUT};
