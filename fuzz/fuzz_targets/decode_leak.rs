#![no_main]
use libfuzzer_sys::fuzz_target;
use leak_marker::{Decoder, LeakError};

fuzz_target!(|data: &[u8]| {
    // Any input either decodes or fails with an error, never panics
    match Decoder::default().expect_value(None).decode(data) {
        Ok(report) => {
            assert_eq!(report.value_start, report.marker_start + 14);
            assert!(report.value_start + 8 <= data.len());
        }
        Err(LeakError::MarkerNotFound)
        | Err(LeakError::DuplicateMarker { .. })
        | Err(LeakError::Truncated { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
});
