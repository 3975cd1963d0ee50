//! Mapping from pixel coordinates to points on the complex plane.

use num_complex::Complex64;

use crate::{
    error::{Error, Result},
    screen,
};

/// A rectangle of the complex plane sampled onto a `width × height` grid.
///
/// Column `i` samples `map_x(i)` and row `j` samples `map_y(j)`. The mapping is
/// half-open: `map_x(0) == xmin`, and `map_x(width)` would be `xmax` but no
/// column reaches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    size: screen::Size,
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, size: screen::Size) -> Result<Self> {
        if ![xmin, xmax, ymin, ymax].iter().all(|bound| bound.is_finite()) {
            return Err(Error::InvalidViewport(format!(
                "bounds must be finite, got x [{}, {}] y [{}, {}]",
                xmin, xmax, ymin, ymax
            )));
        }
        if xmax <= xmin {
            return Err(Error::InvalidViewport(format!(
                "xmax ({}) must be greater than xmin ({})",
                xmax, xmin
            )));
        }
        if ymax <= ymin {
            return Err(Error::InvalidViewport(format!(
                "ymax ({}) must be greater than ymin ({})",
                ymax, ymin
            )));
        }
        if size.is_empty() {
            return Err(Error::InvalidViewport(format!(
                "resolution must be non-zero, got {}",
                size
            )));
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            size,
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    /// Same region sampled at a different resolution.
    pub fn with_size(self, size: screen::Size) -> Result<Self> {
        Self::new(self.xmin, self.xmax, self.ymin, self.ymax, size)
    }

    pub fn map_x(&self, i: u32) -> f64 {
        ((self.xmax - self.xmin) * i as f64) / self.size.width as f64 + self.xmin
    }

    pub fn map_y(&self, j: u32) -> f64 {
        ((self.ymax - self.ymin) * j as f64) / self.size.height as f64 + self.ymin
    }

    /// The point `c` sampled by pixel `(i, j)`.
    pub fn point(&self, i: u32, j: u32) -> Complex64 {
        Complex64::new(self.map_x(i), self.map_y(j))
    }
}
