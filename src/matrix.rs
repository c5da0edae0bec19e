//! In-memory bitmap for an 8x8 monochrome matrix.
//!
//! Each of the eight rows is a `u8` mask with one bit per column. Rows are
//! stored in physical order, which is the reverse of the logical `x`
//! coordinate: pixel `(x, y)` lives in bit `y` of row `7 - x`. The display's
//! wiring expects exactly this layout, so [`MatrixBuffer::rows`] can be
//! shifted out unchanged.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::OriginDimensions;
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use crate::COLS;
use crate::ROWS;

/// Physical row index holding logical column `x`.
const fn physical_row(x: usize) -> usize {
    ROWS - 1 - x
}

/// Map signed coordinates onto `(row, bit)`, or `None` when off the matrix.
fn locate(x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || x as usize >= ROWS || y < 0 || y as usize >= COLS {
        return None;
    }
    Some((physical_row(x as usize), y as usize))
}

/// Frame buffer for an 8x8 matrix
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatrixBuffer {
    rows: [u8; ROWS],
}

impl Default for MatrixBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixBuffer {
    /// Create a new frame buffer with every pixel off
    pub const fn new() -> Self {
        Self { rows: [0; ROWS] }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.rows.fill(0);
    }

    /// Turn on the pixel at `(x, y)`. Coordinates off the matrix are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((row, bit)) = locate(x, y) {
            self.rows[row] |= 1 << bit;
        }
    }

    /// Turn off the pixel at `(x, y)`. Coordinates off the matrix are ignored.
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        if let Some((row, bit)) = locate(x, y) {
            self.rows[row] &= !(1 << bit);
        }
    }

    /// Returns 1 if the pixel at `(x, y)` is on, 0 if it is off.
    ///
    /// Coordinates off the matrix always read as 0.
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        match locate(x, y) {
            Some((row, bit)) => (self.rows[row] >> bit) & 1,
            None => 0,
        }
    }

    /// Raw row masks in physical order, as they are shifted out.
    pub fn rows(&self) -> &[u8; ROWS] {
        &self.rows
    }
}

impl OriginDimensions for MatrixBuffer {
    fn size(&self) -> Size {
        Size::new(COLS as u32, ROWS as u32)
    }
}

impl DrawTarget for MatrixBuffer {
    type Color = BinaryColor;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            match c {
                BinaryColor::On => self.set_pixel(p.x, p.y),
                BinaryColor::Off => self.clear_pixel(p.x, p.y),
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = match color {
            BinaryColor::On => u8::MAX,
            BinaryColor::Off => 0,
        };
        self.rows.fill(fill);
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MatrixBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "MatrixBuffer({=[u8]:#x})", self.rows[..])
    }
}
