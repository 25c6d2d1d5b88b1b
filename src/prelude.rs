//! Crate prelude: the types needed to generate and decode leaks.
//!
//! ```
//! use leak_marker::prelude::*;
//!
//! let leak = LeakBufferBuilder::default().suffix(vec![0x42; 20])?.build();
//! assert_eq!(decode_leak(leak.as_bytes())?, KNOWN_VALUE);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Limits and formatting helpers stay in [`crate::limits`] and
//! [`crate::util`].

pub use crate::{
    DEFAULT_MARKER, Decoder, KNOWN_VALUE, LeakBuffer, LeakBufferBuilder, LeakError, LeakGenerator,
    LeakReport, Marker, Result, decode_leak,
};
