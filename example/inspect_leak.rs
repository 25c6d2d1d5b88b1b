use clap::Parser;
use leak_marker::{Decoder, LeakBuffer, LeakGenerator, Marker};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

/// Decode a leaked 64-bit value from a leak dump
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Leak dump to decode
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write a fresh synthetic leak to FILE before decoding it
    #[arg(short, long)]
    generate: bool,

    /// Marker phrase preceding the value
    #[arg(short, long, default_value = leak_marker::DEFAULT_MARKER)]
    marker: String,

    /// Expected value in hex; mismatches are reported as errors
    #[arg(short, long, value_parser = parse_hex, default_value = "cafebabefeedf00d")]
    expect: u64,

    /// Accept any decoded value
    #[arg(long, conflicts_with = "expect")]
    any: bool,

    /// Print every offset, not just the value
    #[arg(short, long)]
    verbose: bool,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s.trim_start_matches("0x");
    u64::from_str_radix(digits, 16).map_err(|err| format!("invalid hex value '{s}': {err}"))
}

fn main() {
    let args = Args::parse();

    let marker = match Marker::new(args.marker.as_str()) {
        Ok(marker) => marker,
        Err(err) => {
            eprintln!("Invalid marker: {err}");
            process::exit(2);
        }
    };

    if args.generate {
        let generator = match LeakGenerator::default()
            .with_marker(marker.clone())
            .and_then(|generator| generator.with_value(args.expect))
        {
            Ok(generator) => generator,
            Err(err) => {
                eprintln!("Cannot generate leak: {err}");
                process::exit(2);
            }
        };
        let leak = generator.generate_random();
        let written = File::create(&args.file)
            .map_err(|err| leak_marker::LeakError::io_error(&args.file, err))
            .and_then(|mut f| leak.write(&mut f));
        if let Err(err) = written {
            eprintln!("Error writing leak: {err}");
            process::exit(1);
        }
        println!("Wrote {} byte leak to '{}'", leak.len(), args.file.display());
    }

    let leak = match LeakBuffer::from_path(&args.file) {
        Ok(leak) => leak,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let expected = if args.any { None } else { Some(args.expect) };
    let decoder = Decoder::new(marker).expect_value(expected).verbose(args.verbose);
    if let Err(err) = decoder.decode_to(leak.as_bytes(), &mut io::stdout().lock()) {
        eprintln!("Error decoding leak: {err}");
        process::exit(1);
    }
}
