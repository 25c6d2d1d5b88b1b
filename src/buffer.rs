//! Owned leak buffers.
//!
//! A [`LeakBuffer`] is what a simulated server "responds" with: noise, the
//! marker, the value and more noise. It has no header or framing, so reading
//! one back from a dump file just takes the raw bytes.
//!
//! # Example
//!
//! ```
//! use leak_marker::{LeakBufferBuilder, decode_leak, KNOWN_VALUE};
//!
//! let leak = LeakBufferBuilder::default()
//!     .prefix(vec![0x41; 10])?
//!     .suffix(vec![0x42; 20])?
//!     .build();
//! assert_eq!(leak.len(), 10 + 14 + 8 + 20);
//! assert_eq!(decode_leak(leak.as_bytes())?, KNOWN_VALUE);
//! # Ok::<(), leak_marker::LeakError>(())
//! ```

use std::{fs, io::Write, path::Path};

use crate::LeakError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeakBuffer {
    data: Vec<u8>,
}

impl LeakBuffer {
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Load a previously captured leak dump.
    ///
    /// # Errors
    ///
    /// Returns [`LeakError::IoError`] if the file cannot be read.
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let data = fs::read(path).map_err(|err| LeakError::io_error(path, err))?;
        log::debug!("read {} byte leak from '{}'", data.len(), path.display());
        Ok(Self { data })
    }

    /// Write the raw leak bytes.
    pub fn write<W: Write>(&self, writer: &mut W) -> crate::Result<()> {
        if let Err(err) = writer.write_all(&self.data) {
            return Err(LeakError::io_error("<writer>", err));
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for LeakBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}
