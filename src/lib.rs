//! Escape-time rendering of the Mandelbrot set to an RGBA pixel grid.
//!
//! ```no_run
//! use mandelbrot_png::{config::Config, output, render};
//!
//! let config = Config::default();
//! let grid = render::render(&config)?;
//! output::save(&grid, &config.outfile)?;
//! # Ok::<(), mandelbrot_png::error::Error>(())
//! ```

pub mod colour;
pub mod config;
pub mod error;
pub mod escape;
pub mod output;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewport;
