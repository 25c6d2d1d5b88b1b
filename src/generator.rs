//! Synthetic leak responses.
//!
//! [`LeakGenerator`] emulates a server that leaks memory: a random amount of
//! random bytes, the marker, the value (little-endian) and another random
//! amount of random bytes. Any [`rand::Rng`] can drive it, so tests seed it
//! for reproducible buffers.
//!
//! The marker appears exactly once in every generated leak. Noise bytes that
//! would start another occurrence are redrawn, and markers that could recur
//! through the value or the suffix are rejected when configured.
//!
//! ```
//! use leak_marker::{LeakGenerator, decode_leak, KNOWN_VALUE};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let leak = LeakGenerator::default().generate(&mut rng);
//! assert_eq!(decode_leak(leak.as_bytes()).unwrap(), KNOWN_VALUE);
//! ```

use rand::Rng;

use crate::{KNOWN_VALUE, LeakBuffer, LeakBufferBuilder, LeakError, Marker, limits::MAX_NOISE_LEN};

#[derive(Clone, Debug)]
pub struct LeakGenerator {
    marker: Marker,
    value: u64,
    max_prefix: usize,
    max_suffix: usize,
}

impl Default for LeakGenerator {
    fn default() -> Self {
        Self {
            marker: Marker::default(),
            value: KNOWN_VALUE,
            max_prefix: MAX_NOISE_LEN,
            max_suffix: MAX_NOISE_LEN,
        }
    }
}

impl LeakGenerator {
    /// # Errors
    ///
    /// Returns [`LeakError::MarkerRecurs`] if the marker could occur a second
    /// time within the marker and value bytes or across them into the suffix.
    pub fn with_marker(mut self, marker: Marker) -> crate::Result<Self> {
        check_layout(&marker, self.value)?;
        self.marker = marker;
        Ok(self)
    }

    /// # Errors
    ///
    /// Same as [`with_marker`](Self::with_marker).
    pub fn with_value(mut self, value: u64) -> crate::Result<Self> {
        check_layout(&self.marker, value)?;
        self.value = value;
        Ok(self)
    }

    /// Upper bounds (inclusive) for the noise lengths. Clamped to
    /// [`MAX_NOISE_LEN`].
    pub fn with_noise_limits(mut self, max_prefix: usize, max_suffix: usize) -> Self {
        self.max_prefix = max_prefix.min(MAX_NOISE_LEN);
        self.max_suffix = max_suffix.min(MAX_NOISE_LEN);
        self
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Produce one leak response.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> LeakBuffer {
        let prefix = noise(rng, self.max_prefix);
        let suffix = noise(rng, self.max_suffix);
        let anchor = prefix.len();
        log::trace!("generated leak with {anchor} prefix and {} suffix bytes", suffix.len());

        let mut data = prefix;
        data.extend(self.marker.as_bytes());
        data.extend(self.value.to_le_bytes());
        data.extend(suffix);

        // Every stray occurrence starts on a noise byte equal to the marker's
        // first byte; each redraw removes one such byte.
        let first = self.marker.as_bytes()[0];
        while let Some(pos) = stray_marker(&self.marker, &data, anchor) {
            let byte = rng.gen_range(0..=254u8);
            data[pos] = if byte >= first { byte + 1 } else { byte };
        }
        LeakBuffer::from(data)
    }

    /// Produce one leak response using the thread-local RNG.
    pub fn generate_random(&self) -> LeakBuffer {
        self.generate(&mut rand::thread_rng())
    }

    /// Same layout as [`generate`](Self::generate), with caller-chosen noise.
    pub fn builder(&self) -> LeakBufferBuilder {
        LeakBufferBuilder::default()
            .marker(self.marker.clone())
            .value(self.value)
    }
}

/// Rejects marker/value pairs where the marker recurs at `offset` of the
/// fixed bytes, either entirely or as a prefix the suffix could complete.
fn check_layout(marker: &Marker, value: u64) -> crate::Result<()> {
    let mut fixed = marker.as_bytes().to_vec();
    fixed.extend(value.to_le_bytes());
    for offset in 1..fixed.len() {
        let tail = &fixed[offset..];
        let recurs = if tail.len() >= marker.len() {
            tail.starts_with(marker.as_bytes())
        } else {
            marker.as_bytes().starts_with(tail)
        };
        if recurs {
            return Err(LeakError::MarkerRecurs(offset));
        }
    }
    Ok(())
}

/// First occurrence of the marker anywhere but at `anchor`, overlaps included.
fn stray_marker(marker: &Marker, data: &[u8], anchor: usize) -> Option<usize> {
    let mut from = 0;
    while let Some(rel) = marker.find_in(&data[from..]) {
        let pos = from + rel;
        if pos != anchor {
            return Some(pos);
        }
        from = pos + 1;
    }
    None
}

fn noise<R: Rng>(rng: &mut R, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    bytes
}
