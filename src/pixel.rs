use bytemuck::{Pod, Zeroable};

use crate::screen;

/// An RGBA8 pixel, laid out the way PNG encoders expect it.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const OPAQUE_BLACK: Self = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// How many of red, green and blue are non-zero.
    pub fn lit_channels(&self) -> usize {
        [self.r, self.g, self.b]
            .iter()
            .filter(|channel| **channel != 0)
            .count()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

/// Row-major `width × height` grid of pixels. `(0, 0)` is the top-left pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: screen::Size,
    pixels: Vec<Rgba>,
}

impl Grid {
    pub fn new(size: screen::Size) -> Self {
        Self {
            size,
            pixels: vec![Rgba::default(); size.area()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Pixel at column `i`, row `j`. `None` outside the grid.
    pub fn get(&self, i: u32, j: u32) -> Option<Rgba> {
        if i >= self.size.width || j >= self.size.height {
            return None;
        }
        self.pixels
            .get(j as usize * self.size.width as usize + i as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks_exact(self.size.width.max(1) as usize)
    }

    /// The grid as a flat RGBA8 byte buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_opaque_black() {
        let grid = Grid::new(screen::Size::new(3, 2));
        assert_eq!(grid.pixels().len(), 6);
        assert!(grid.pixels().iter().all(|p| *p == Rgba::OPAQUE_BLACK));
    }

    #[test]
    fn get_indexes_row_major() {
        let mut grid = Grid::new(screen::Size::new(3, 2));
        grid.pixels_mut()[4] = Rgba::opaque(1, 2, 3);
        assert_eq!(grid.get(1, 1), Some(Rgba::opaque(1, 2, 3)));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn bytes_are_rgba_in_order() {
        let mut grid = Grid::new(screen::Size::new(2, 1));
        grid.pixels_mut()[1] = Rgba::opaque(10, 20, 30);
        assert_eq!(grid.as_bytes(), &[0, 0, 0, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn rows_have_grid_width() {
        let grid = Grid::new(screen::Size::new(4, 3));
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
    }
}
