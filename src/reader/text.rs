use encoding_rs::{SHIFT_JIS, WINDOWS_1252};
use tracing::trace;

/// Byte segments carry no reliable charset. UTF-8 is tried first, then
/// Shift_JIS, and Windows-1252 (a superset of the ISO-8859-1 default) last
/// since it accepts every byte.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_string();
    }

    let (kanji, _, has_err) = SHIFT_JIS.decode(bytes);
    if !has_err {
        trace!("Decoded payload as Shift_JIS");
        return kanji.into_owned();
    }

    trace!("Decoded payload as Windows-1252");
    let (latin, _, _) = WINDOWS_1252.decode(bytes);
    latin.into_owned()
}
