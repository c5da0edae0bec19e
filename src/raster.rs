//! Line and rectangle rasterization on top of the pixel primitives.
//!
//! Nothing here bounds-checks: pixels that land off the matrix are dropped
//! by [`MatrixBuffer::set_pixel`].

use core::ops::Range;

use crate::matrix::MatrixBuffer;
use crate::COLS;
use crate::ROWS;

/// The part of `start..end` that can land on the matrix.
fn visible(start: i32, end: i32, limit: usize) -> Range<i32> {
    start.max(0)..end.min(limit as i32)
}

impl MatrixBuffer {
    /// Light every pixel on the segment from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Integer Bresenham. Both axes may advance in the same step, so the
    /// result is 8-connected with no gaps. A zero-length segment lights a
    /// single pixel.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        // error terms are kept in i64 so that extreme endpoints can't overflow
        let dx = (i64::from(x2) - i64::from(x1)).abs();
        let dy = (i64::from(y2) - i64::from(y1)).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx - dy;

        let (mut x, mut y) = (x1, y1);
        loop {
            self.set_pixel(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a `w` by `h` rectangle with its top-left corner at `(x, y)`.
    ///
    /// When `filled` is false only the outline is drawn. A filled rectangle
    /// with a non-positive width or height draws nothing. An outline with one
    /// non-positive side still runs its other pair of edges, each one pixel
    /// before and at the start coordinate.
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool) {
        let right = x.saturating_add(w);
        let bottom = y.saturating_add(h);

        // x runs along physical rows, y along columns
        if filled {
            for row in visible(y, bottom, COLS) {
                for col in visible(x, right, ROWS) {
                    self.set_pixel(col, row);
                }
            }
            return;
        }

        for row in visible(y, bottom, COLS) {
            self.set_pixel(x, row);
            self.set_pixel(right.saturating_sub(1), row);
        }
        for col in visible(x, right, ROWS) {
            self.set_pixel(col, y);
            self.set_pixel(col, bottom.saturating_sub(1));
        }
    }
}
