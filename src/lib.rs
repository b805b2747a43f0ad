//! Slopeview - an interactive terminal explorer for y = kx + b.
//!
//! Slopeview draws a Cartesian plane with the line y = kx + b, its
//! y-intercept, a rise-over-run slope triangle and a plain-language
//! explanation of how k and b shape the line. Hovering the mouse near the
//! line shows the nearest point on it.
//!
//! # Features
//!
//! - Pure scene composition: state in, drawing commands out
//! - Closed-form nearest-point projection for the hover readout
//! - Keyboard sliders with reset and randomize actions
//! - English and Chinese explanations
//! - Gruvbox and classroom color themes
//!
//! # Example
//!
//! ```
//! use slopeview::config::PlaneConfig;
//! use slopeview::explain::Language;
//! use slopeview::plane::{Ink, LineParameters, PlaneRenderer};
//!
//! let mut plane = PlaneRenderer::new(
//!     PlaneConfig::default(),
//!     LineParameters::default(),
//!     Language::English,
//! );
//! plane.set_parameters(-2.0, 1.0);
//!
//! let labels: Vec<&str> = plane.scene().texts(Ink::Slope).collect();
//! assert_eq!(labels, ["Δx = 2", "Δy = -4.0"]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod controls;
pub mod error;
pub mod explain;
pub mod plane;
pub mod ui;
pub mod util;

pub use error::{Result, SlopeviewError};
