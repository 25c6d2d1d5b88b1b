//! One simulated round: generate a leak, decode it, print the results.

use std::io::Write;

use rand::Rng;

use crate::{Decoder, LeakGenerator, LeakReport};

/// Generate one leak with `rng` and decode it twice: first printing every
/// offset, then printing only the value.
///
/// # Errors
///
/// Any decode error, including [`LeakError::ValueMismatch`](crate::LeakError::ValueMismatch),
/// ends the round.
pub fn run<R: Rng, W: Write>(rng: &mut R, out: &mut W) -> crate::Result<LeakReport> {
    let leak = LeakGenerator::default().generate(rng);

    let report = Decoder::default().verbose(true).decode_to(leak.as_bytes(), out)?;
    Decoder::default().decode_to(leak.as_bytes(), out)?;
    Ok(report)
}
