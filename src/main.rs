use std::{io, process};

fn main() {
    let stdout = io::stdout();
    if let Err(err) = leak_marker::run(&mut rand::thread_rng(), &mut stdout.lock()) {
        eprintln!("Error decoding leak: {err}");
        process::exit(1);
    }
}
