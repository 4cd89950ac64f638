//! Integer encoding used in the proof-of-work preimage.

/// Appends `value` as lowercase base-16 ASCII with no `0x` prefix and no
/// zero padding. Negative values get a leading `-`.
pub fn push_hex(buf: &mut Vec<u8>, value: i64) {
    if value < 0 {
        buf.push(b'-');
    }
    buf.extend_from_slice(format!("{:x}", value.unsigned_abs()).as_bytes());
}

pub fn int_to_hex(value: i64) -> Vec<u8> {
    let mut out = Vec::with_capacity(17);
    push_hex(&mut out, value);
    out
}
