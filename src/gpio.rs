//! Bit-banged driver for the matrix's shift-register chain.
//!
//! The display sits behind two daisy-chained 8-bit shift registers. The first
//! byte shifted in carries the column mask for a row, the second selects the
//! row. A rising edge on the latch pin copies both into the output stage.

use embedded_hal::digital::OutputPin;

use crate::matrix::MatrixBuffer;
use crate::LedMatrixError;
use crate::ROWS;

/// Order in which the bits of a byte are put on the data line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    LsbFirst,
    MsbFirst,
}

/// 8x8 LED matrix on a latch/data/clock shift-register interface.
///
/// All three pins must share an error type; for on-chip GPIO that is
/// normally [`core::convert::Infallible`].
pub struct LedMatrix<LAT, DATA, CLK> {
    lat: LAT,
    data: DATA,
    clk: CLK,
    buffer: MatrixBuffer,
}

impl<LAT, DATA, CLK, E> LedMatrix<LAT, DATA, CLK>
where
    LAT: OutputPin<Error = E>,
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
{
    /// Take ownership of three pins already configured as outputs.
    ///
    /// The frame buffer starts cleared. No pin is driven until the first
    /// [`update_matrix`](Self::update_matrix).
    pub fn new(lat: LAT, data: DATA, clk: CLK) -> Self {
        debug!("led matrix: new {}x{}", ROWS, crate::COLS);
        let mut matrix = Self {
            lat,
            data,
            clk,
            buffer: MatrixBuffer::new(),
        };
        matrix.clear();
        matrix
    }

    /// Give the pins back.
    pub fn release(self) -> (LAT, DATA, CLK) {
        (self.lat, self.data, self.clk)
    }

    pub fn buffer(&self) -> &MatrixBuffer {
        &self.buffer
    }

    /// Mutable access to the frame buffer, e.g. as an `embedded-graphics`
    /// draw target.
    pub fn buffer_mut(&mut self) -> &mut MatrixBuffer {
        &mut self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.buffer.set_pixel(x, y);
    }

    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.buffer.clear_pixel(x, y);
    }

    /// 1 if the pixel is on, 0 if it is off or outside the matrix.
    pub fn get_pixel(&self, x: i32, y: i32) -> u8 {
        self.buffer.get_pixel(x, y)
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.buffer.line(x1, y1, x2, y2);
    }

    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool) {
        self.buffer.draw_rectangle(x, y, w, h, filled);
    }

    /// Shift one byte into the register chain.
    ///
    /// Each bit is put on the data line and clocked in on a rising edge; the
    /// clock is left low.
    pub fn shift_out(&mut self, order: BitOrder, value: u8) -> Result<(), LedMatrixError<E>> {
        for i in 0..8 {
            let bit = match order {
                BitOrder::LsbFirst => (value >> i) & 1,
                BitOrder::MsbFirst => (value >> (7 - i)) & 1,
            };
            self.data
                .set_state((bit != 0).into())
                .map_err(LedMatrixError::Data)?;
            self.clock()?;
        }
        Ok(())
    }

    fn clock(&mut self) -> Result<(), LedMatrixError<E>> {
        self.clk.set_high().map_err(LedMatrixError::Clock)?;
        self.clk.set_low().map_err(LedMatrixError::Clock)
    }

    /// Push the whole frame buffer to the display.
    ///
    /// Every row is sent on every call, in ascending order: latch low, the
    /// row's column mask, the row select bit, latch high. Stops at the first
    /// pin error.
    pub fn update_matrix(&mut self) -> Result<(), LedMatrixError<E>> {
        let rows = *self.buffer.rows();
        for (i, mask) in rows.into_iter().enumerate() {
            self.render_row(i, mask).inspect_err(|_| {
                warn!("led matrix: pin error on row {}", i);
            })?;
        }
        Ok(())
    }

    fn render_row(&mut self, row: usize, mask: u8) -> Result<(), LedMatrixError<E>> {
        trace!("led matrix: row {} mask {}", row, mask);
        self.lat.set_low().map_err(LedMatrixError::Latch)?;
        self.shift_out(BitOrder::LsbFirst, mask)?;
        self.shift_out(BitOrder::LsbFirst, 1 << row)?;
        self.lat.set_high().map_err(LedMatrixError::Latch)
    }
}
