//! Pan and pinch-zoom an image inside a fixed viewport, then export the
//! visible region as a cropped picture.
//!
//! The gesture engine (`geometry`, `state`, `engine`, `render`) is plain Rust
//! and runs anywhere. `canvas`, `pointer` and `cutter` bind it to a browser
//! canvas and touch events, and `components` is the Yew front end.

pub mod canvas;
pub mod components;
pub mod config;
pub mod cutter;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod pointer;
pub mod render;
pub mod state;
pub mod util;

pub use cutter::{Container, PictureCutter};
pub use engine::CropEngine;
pub use error::{CutterError, Result};
