use std::ascii;

/// Formats a leaked value as 16 lowercase hex digits.
pub fn hex_u64(value: u64) -> String {
    format!("{value:016x}")
}

/// Byte-literal representation of raw bytes, e.g. `b'\r\xf0'`.
///
/// Printable ASCII stays as is, `\t`, `\r`, `\n`, `\'` and `\\` are escaped,
/// everything else becomes lowercase `\xNN`.
pub fn debug_bytes(bytes: &[u8]) -> String {
    let mut repr = String::from("b'");
    for &byte in bytes {
        match byte {
            b'"' => repr.push('"'),
            _ => repr.extend(ascii::escape_default(byte).map(char::from)),
        }
    }
    repr.push('\'');
    repr
}
