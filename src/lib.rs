//! Simulated memory leak responses and a marker-anchored decoder.
//!
//! A leak response looks like this:
//!
//! ```text
//! [random bytes, 0..=512][marker "Här får du: "][u64 LE][random bytes, 0..=512]
//! ```
//!
//! [`LeakGenerator`] produces such responses. [`Decoder`] finds the marker,
//! steps over it by its byte length and reads the 8 bytes that follow as a
//! little-endian `u64`.
//!
//! ```
//! use leak_marker::{LeakGenerator, Decoder, KNOWN_VALUE};
//!
//! let leak = LeakGenerator::default().generate_random();
//! let report = Decoder::default().decode(leak.as_bytes())?;
//! assert_eq!(report.value, KNOWN_VALUE);
//! # Ok::<(), leak_marker::LeakError>(())
//! ```

pub mod buffer;
pub mod builder;
pub mod decoder;
pub mod demo;
pub mod errors;
pub mod generator;
pub mod limits;
pub mod marker;
pub mod prelude;
pub mod util;

pub use buffer::LeakBuffer;
pub use builder::LeakBufferBuilder;
pub use decoder::{Decoder, LeakReport, decode_leak};
pub use demo::run;
pub use errors::LeakError;
pub use generator::LeakGenerator;
pub use marker::{DEFAULT_MARKER, Marker};

pub type Result<T> = std::result::Result<T, LeakError>;

/// The value every simulated response leaks.
pub const KNOWN_VALUE: u64 = 0xCAFE_BABE_FEED_F00D;
