//! Fixed sizes of a simulated leak response.
//!
//! Layout of a leak buffer:
//! - Prefix noise: 0..=512 random bytes
//! - Marker: the anchor phrase, UTF-8 encoded (14 bytes for the default)
//! - Value: 8 bytes, little-endian `u64`
//! - Suffix noise: 0..=512 random bytes

/// Maximum number of random bytes in the prefix or suffix region.
pub const MAX_NOISE_LEN: usize = 512;

/// Exact number of bytes of the leaked value.
pub const VALUE_LEN: usize = 8;
