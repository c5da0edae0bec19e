//! Driver for 8x8 monochrome LED matrices behind a shift-register chain,
//! such as the Olimex LED Matrix L.
//!
//! The display is driven over three output pins: latch, data and clock.
//! Drawing happens in an in-memory [`MatrixBuffer`]; nothing reaches the
//! hardware until [`LedMatrix::update_matrix`] streams the buffer out, one
//! latched row at a time.
//!
//! # Example
//! ```rust
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{ErrorType, OutputPin};
//! # struct Pin;
//! # impl ErrorType for Pin { type Error = Infallible; }
//! # impl OutputPin for Pin {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # let (latch, data, clock) = (Pin, Pin, Pin);
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Circle;
//! use embedded_graphics::primitives::PrimitiveStyle;
//! use olimex_led_matrix::LedMatrix;
//!
//! let mut matrix = LedMatrix::new(latch, data, clock);
//!
//! matrix.draw_rectangle(0, 0, 8, 8, false);
//! matrix.line(0, 0, 7, 7);
//! assert_eq!(matrix.get_pixel(3, 3), 1);
//!
//! // the buffer is also an embedded-graphics draw target
//! Circle::new(Point::new(2, 2), 4)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(matrix.buffer_mut())
//!     .unwrap();
//!
//! matrix.update_matrix().unwrap();
//! ```
#![no_std]

#[macro_use]
mod fmt;

pub mod gpio;
pub mod matrix;
mod raster;

pub use gpio::BitOrder;
pub use gpio::LedMatrix;
pub use matrix::MatrixBuffer;

/// Number of rows on the matrix.
pub const ROWS: usize = 8;
/// Number of columns on the matrix.
pub const COLS: usize = 8;

/// A pin write failed while talking to the shift registers.
///
/// The payload is the error returned by the pin.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMatrixError<E> {
    Latch(E),
    Data(E),
    Clock(E),
}

impl<E> core::fmt::Display for LedMatrixError<E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Latch(e) => write!(f, "latch pin error: {e:?}"),
            Self::Data(e) => write!(f, "data pin error: {e:?}"),
            Self::Clock(e) => write!(f, "clock pin error: {e:?}"),
        }
    }
}

impl<E> core::error::Error for LedMatrixError<E> where E: core::fmt::Debug {}
