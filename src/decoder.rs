//! Marker-anchored extraction of the leaked value.
//!
//! # Algorithm
//!
//! ```text
//! marker_start = first (and only) byte index of the marker
//! value_start  = marker_start + marker byte length
//! value        = u64::from_le_bytes(leak[value_start..value_start + 8])
//! ```
//!
//! The value start is derived from the marker's length in **bytes**. The
//! default marker contains `ä` and `å`, so its character count is two short
//! of its byte length and a character based offset lands inside the marker.
//!
//! # Example
//!
//! ```
//! use leak_marker::{Decoder, LeakBufferBuilder, KNOWN_VALUE};
//!
//! let leak = LeakBufferBuilder::default().prefix(vec![0x41; 10])?.build();
//! let report = Decoder::default().decode(leak.as_bytes())?;
//! assert_eq!(report.marker_start, 10);
//! assert_eq!(report.value_start, 24);
//! assert_eq!(report.value, KNOWN_VALUE);
//! # Ok::<(), leak_marker::LeakError>(())
//! ```

use std::{fmt, io::Write};

use crate::{
    KNOWN_VALUE, LeakError, Marker,
    limits::VALUE_LEN,
    util::{debug_bytes, hex_u64},
};

/// Outcome of a successful decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeakReport {
    /// Total length of the leak buffer.
    pub leak_len: usize,
    /// Byte index where the marker starts.
    pub marker_start: usize,
    /// Byte index right after the marker.
    pub value_start: usize,
    pub value_bytes: [u8; VALUE_LEN],
    pub value: u64,
}

impl LeakReport {
    /// Writes every intermediate offset, the raw bytes and the value.
    pub fn write_verbose<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Leak length: {}", self.leak_len)?;
        writeln!(out, "Phrase start index: {}", self.marker_start)?;
        writeln!(out, "Leak start index: {}", self.value_start)?;
        writeln!(
            out,
            "Leaked bytes (len: {}): {}",
            self.value_bytes.len(),
            debug_bytes(&self.value_bytes)
        )?;
        writeln!(out, "{self}")
    }
}

impl fmt::Display for LeakReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaked pointer: {}", hex_u64(self.value))
    }
}

/// Locates the marker and decodes the 8 bytes that follow it.
///
/// By default the decoder uses the default marker, expects [`KNOWN_VALUE`]
/// and prints only the condensed line from [`decode_to`](Self::decode_to).
#[derive(Clone, Debug)]
pub struct Decoder {
    marker: Marker,
    expected: Option<u64>,
    verbose: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            marker: Marker::default(),
            expected: Some(KNOWN_VALUE),
            verbose: false,
        }
    }
}

impl Decoder {
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
            ..Default::default()
        }
    }

    /// Value the decoded result is checked against. `None` accepts any value.
    pub fn expect_value(mut self, expected: Option<u64>) -> Self {
        self.expected = expected;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Decode the leaked value from `leak`.
    ///
    /// # Errors
    ///
    /// - [`LeakError::MarkerNotFound`] if the marker does not occur
    /// - [`LeakError::DuplicateMarker`] if it occurs more than once
    /// - [`LeakError::Truncated`] if fewer than 8 bytes follow the marker
    /// - [`LeakError::ValueMismatch`] if an expected value is set and differs
    pub fn decode(&self, leak: &[u8]) -> crate::Result<LeakReport> {
        let marker_start = self.marker.locate(leak)?;
        let value_start = marker_start + self.marker.len();

        let Some(window) = leak.get(value_start..value_start + VALUE_LEN) else {
            return Err(LeakError::Truncated {
                offset: value_start,
                available: leak.len() - value_start,
            });
        };
        let mut value_bytes = [0u8; VALUE_LEN];
        value_bytes.copy_from_slice(window);
        let value = u64::from_le_bytes(value_bytes);
        log::debug!(
            "leak of {} bytes: marker at {marker_start}, value at {value_start}: {value:016x}",
            leak.len()
        );

        if let Some(expected) = self.expected.filter(|expected| *expected != value) {
            return Err(LeakError::ValueMismatch {
                expected,
                actual: value,
            });
        }

        Ok(LeakReport {
            leak_len: leak.len(),
            marker_start,
            value_start,
            value_bytes,
            value,
        })
    }

    /// Decode `leak` and print the result to `out`: every offset when
    /// verbose, only the value otherwise.
    pub fn decode_to<W: Write>(&self, leak: &[u8], out: &mut W) -> crate::Result<LeakReport> {
        let report = self.decode(leak)?;
        let written = if self.verbose {
            report.write_verbose(out)
        } else {
            writeln!(out, "{report}")
        };
        written.map_err(|err| LeakError::io_error("<writer>", err))?;
        Ok(report)
    }
}

/// Decode with the default marker and check against [`KNOWN_VALUE`].
pub fn decode_leak(leak: &[u8]) -> crate::Result<u64> {
    Decoder::default().decode(leak).map(|report| report.value)
}
