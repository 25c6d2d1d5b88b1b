#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use leak_marker::Marker;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pattern: &'a [u8],
    haystack: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Ok(marker) = Marker::new(input.pattern) else {
        return;
    };
    if let Ok(index) = marker.locate(input.haystack) {
        assert_eq!(&input.haystack[index..index + marker.len()], marker.as_bytes());
    }
});
