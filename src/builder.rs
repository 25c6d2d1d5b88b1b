use crate::{KNOWN_VALUE, LeakBuffer, LeakError, Marker, limits::MAX_NOISE_LEN};

/// The builder assembles a leak buffer from explicit regions.
///
/// Defaults to empty noise, the default marker and [`KNOWN_VALUE`].
#[derive(Clone, Debug)]
pub struct LeakBufferBuilder {
    prefix: Vec<u8>,
    marker: Marker,
    value: u64,
    suffix: Vec<u8>,
}

impl Default for LeakBufferBuilder {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            marker: Marker::default(),
            value: KNOWN_VALUE,
            suffix: Vec::new(),
        }
    }
}

impl LeakBufferBuilder {
    /// Noise placed before the marker.
    ///
    /// # Errors
    ///
    /// Returns [`LeakError::NoiseTooLong`] if `prefix` exceeds
    /// [`MAX_NOISE_LEN`] bytes.
    pub fn prefix(mut self, prefix: Vec<u8>) -> crate::Result<Self> {
        if prefix.len() > MAX_NOISE_LEN {
            return Err(LeakError::NoiseTooLong(prefix.len()));
        }
        self.prefix = prefix;
        Ok(self)
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    /// Noise placed after the value.
    ///
    /// # Errors
    ///
    /// Returns [`LeakError::NoiseTooLong`] if `suffix` exceeds
    /// [`MAX_NOISE_LEN`] bytes.
    pub fn suffix(mut self, suffix: Vec<u8>) -> crate::Result<Self> {
        if suffix.len() > MAX_NOISE_LEN {
            return Err(LeakError::NoiseTooLong(suffix.len()));
        }
        self.suffix = suffix;
        Ok(self)
    }

    pub fn build(self) -> LeakBuffer {
        let value = self.value.to_le_bytes();
        let len = self.prefix.len() + self.marker.len() + value.len() + self.suffix.len();
        let mut data = Vec::with_capacity(len);
        data.extend(&self.prefix);
        data.extend(self.marker.as_bytes());
        data.extend(value);
        data.extend(&self.suffix);
        LeakBuffer::from(data)
    }
}
