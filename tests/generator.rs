use leak_marker::{
    DEFAULT_MARKER, Decoder, KNOWN_VALUE, LeakError, LeakGenerator, Marker, limits::MAX_NOISE_LEN,
};
use rand::{SeedableRng, rngs::StdRng};

const FIXED_LEN: usize = 14 + 8;

#[test]
fn test_length_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let generator = LeakGenerator::default();
    for _ in 0..500 {
        let leak = generator.generate(&mut rng);
        assert!(leak.len() >= FIXED_LEN);
        assert!(leak.len() <= FIXED_LEN + 2 * MAX_NOISE_LEN);
    }
}

#[test]
fn test_regions_surround_marker() {
    let mut rng = StdRng::seed_from_u64(2);
    let leak = LeakGenerator::default().generate(&mut rng);
    let report = Decoder::default().decode(leak.as_bytes()).unwrap();

    assert!(report.marker_start <= MAX_NOISE_LEN);
    assert_eq!(
        &leak.as_bytes()[report.marker_start..report.value_start],
        DEFAULT_MARKER.as_bytes()
    );
    assert_eq!(report.value_bytes, KNOWN_VALUE.to_le_bytes());
    assert!(leak.len() - (report.value_start + 8) <= MAX_NOISE_LEN);
}

#[test]
fn test_seeded_generation_is_deterministic() {
    let generator = LeakGenerator::default();
    let a = generator.generate(&mut StdRng::seed_from_u64(42));
    let b = generator.generate(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_noise_lengths_vary() {
    let mut rng = StdRng::seed_from_u64(3);
    let generator = LeakGenerator::default();
    let mut starts: Vec<usize> = (0..50)
        .map(|_| {
            let leak = generator.generate(&mut rng);
            Decoder::default().decode(leak.as_bytes()).unwrap().marker_start
        })
        .collect();
    starts.sort_unstable();
    starts.dedup();
    assert!(starts.len() > 1);
}

#[test]
fn test_zero_noise() {
    let generator = LeakGenerator::default().with_noise_limits(0, 0);
    let leak = generator.generate(&mut StdRng::seed_from_u64(4));
    let mut expected = DEFAULT_MARKER.as_bytes().to_vec();
    expected.extend_from_slice(&KNOWN_VALUE.to_le_bytes());
    assert_eq!(leak.as_bytes(), expected.as_slice());
}

#[test]
fn test_noise_limits_are_clamped() {
    let mut rng = StdRng::seed_from_u64(5);
    let generator = LeakGenerator::default().with_noise_limits(10_000, 10_000);
    for _ in 0..100 {
        assert!(generator.generate(&mut rng).len() <= FIXED_LEN + 2 * MAX_NOISE_LEN);
    }
}

#[test]
fn test_custom_marker_and_value() {
    let marker = Marker::new("ptr=").unwrap();
    let generator = LeakGenerator::default()
        .with_marker(marker.clone())
        .unwrap()
        .with_value(0xDEADBEEF)
        .unwrap();
    assert_eq!(generator.value(), 0xDEADBEEF);
    assert_eq!(generator.marker(), &marker);

    let leak = generator.generate(&mut StdRng::seed_from_u64(6));
    let report = Decoder::new(marker)
        .expect_value(Some(0xDEADBEEF))
        .decode(leak.as_bytes())
        .unwrap();
    assert_eq!(report.value, 0xDEADBEEF);
}

#[test]
fn test_generator_builder_uses_same_layout() {
    let generator = LeakGenerator::default().with_value(7).unwrap();
    let leak = generator.builder().prefix(vec![0xAA; 3]).unwrap().build();
    let report = Decoder::default().expect_value(Some(7)).decode(leak.as_bytes()).unwrap();
    assert_eq!(report.marker_start, 3);
    assert_eq!(report.value, 7);
}

#[test]
fn test_generate_random() {
    let leak = LeakGenerator::default().generate_random();
    assert_eq!(
        Decoder::default().decode(leak.as_bytes()).unwrap().value,
        KNOWN_VALUE
    );
}

#[test]
fn test_single_byte_marker_round_trip() {
    let marker = Marker::new("X").unwrap();
    let generator = LeakGenerator::default().with_marker(marker.clone()).unwrap();
    let decoder = Decoder::new(marker);
    for seed in 0..300 {
        let leak = generator.generate(&mut StdRng::seed_from_u64(seed));
        match decoder.decode(leak.as_bytes()) {
            Ok(report) => assert_eq!(report.value, KNOWN_VALUE),
            Err(err) => panic!("seed {seed}: {err:?}"),
        }
    }
}

#[test]
fn test_short_marker_prefix_does_not_anchor_early() {
    // Two-byte marker whose first byte is common in noise.
    let marker = Marker::new(b"\x00\x01".as_slice()).unwrap();
    let generator = LeakGenerator::default()
        .with_marker(marker.clone())
        .unwrap()
        .with_noise_limits(MAX_NOISE_LEN, 0);
    let decoder = Decoder::new(marker.clone());
    for seed in 0..300 {
        let leak = generator.generate(&mut StdRng::seed_from_u64(seed));
        let report = decoder.decode(leak.as_bytes()).unwrap();
        assert_eq!(leak.len(), report.value_start + 8);
        assert_eq!(&leak.as_bytes()[report.marker_start..report.value_start], marker.as_bytes());
    }
}

#[test]
fn test_marker_recurring_in_value_is_rejected() {
    // 0x0D is the lowest byte of the known value.
    let marker = Marker::new(b"\x0D".as_slice()).unwrap();
    assert!(matches!(
        LeakGenerator::default().with_marker(marker),
        Err(LeakError::MarkerRecurs(1))
    ));

    // "AA" followed by a value starting with 'A' overlaps itself.
    let generator = LeakGenerator::default()
        .with_marker(Marker::new("AA").unwrap())
        .unwrap();
    assert!(matches!(generator.with_value(0x41), Err(LeakError::MarkerRecurs(1))));
}

#[test]
fn test_marker_completed_by_suffix_is_rejected() {
    // The last value byte 0xCA could start the marker again in the suffix.
    let marker = Marker::new(b"\xCAtail".as_slice()).unwrap();
    assert!(matches!(
        LeakGenerator::default().with_marker(marker),
        Err(LeakError::MarkerRecurs(12))
    ));
}
