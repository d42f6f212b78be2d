//! Variable-length integers used for element ids and content lengths.
//!
//! The leading byte's highest set bit gives the total width: `1xxxxxxx` is one
//! byte, `01xxxxxx xxxxxxxx` two bytes, and so on up to eight. Values are
//! handled with the marker bit stripped, for ids as well as lengths.

use crate::error::{Error, Result};

/// Widest VINT the format allows.
pub const MAX_WIDTH: usize = 8;

/// Decode one VINT at `offset`, returning the value and the bytes consumed.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(u64, usize)> {
    let lead = *bytes.get(offset).ok_or(Error::Truncated {
        offset,
        needed: 1,
        available: 0,
    })?;
    if lead == 0 {
        return Err(Error::InvalidVintMarker { offset });
    }

    let width = lead.leading_zeros() as usize + 1;
    let available = bytes.len() - offset;
    if available < width {
        return Err(Error::Truncated {
            offset,
            needed: width,
            available,
        });
    }

    let mut value = u64::from(lead) - (1u64 << (8 - width));
    for &byte in &bytes[offset + 1..offset + width] {
        value = value * 256 + u64::from(byte);
    }

    Ok((value, width))
}

/// Number of bytes `encode` would produce for `value`, without writing.
///
/// Smallest width whose 7 bits per byte hold `value`.
pub fn encoded_width(value: u64) -> Result<usize> {
    (1..=MAX_WIDTH)
        .find(|&width| value < 1u64 << (7 * width))
        .ok_or(Error::VintOverflow(value))
}

/// Append the VINT encoding of `value` to `buf`.
pub fn encode(value: u64, buf: &mut Vec<u8>) -> Result<usize> {
    let width = encoded_width(value)?;
    let marked = value | (1u64 << (7 * width));
    for shift in (0..width).rev() {
        buf.push((marked >> (8 * shift)) as u8);
    }
    Ok(width)
}

/// Encode `value` into a fresh buffer.
pub fn to_vec(value: u64) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(MAX_WIDTH);
    encode(value, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_widths() {
        assert_eq!(decode(&[0x81], 0).unwrap(), (1, 1));
        assert_eq!(decode(&[0x40, 0x02], 0).unwrap(), (2, 2));
        assert_eq!(decode(&[0x20, 0x00, 0x03], 0).unwrap(), (3, 3));
        // Segment id as written on the wire
        assert_eq!(
            decode(&[0x18, 0x53, 0x80, 0x67], 0).unwrap(),
            (0x853_8067, 4)
        );
    }

    #[test]
    fn test_decode_at_offset() {
        let bytes = [0xff, 0x42, 0x86, 0x00];
        assert_eq!(decode(&bytes, 1).unwrap(), (0x286, 2));
    }

    #[test]
    fn test_decode_unknown_size_marker() {
        let bytes = [0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(decode(&bytes, 0).unwrap(), ((1u64 << 56) - 1, 8));
    }

    #[test]
    fn test_decode_rejects_zero_lead() {
        assert!(matches!(
            decode(&[0x00, 0x01], 0),
            Err(Error::InvalidVintMarker { offset: 0 })
        ));
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            decode(&[0x40], 0),
            Err(Error::Truncated {
                needed: 2,
                available: 1,
                ..
            })
        ));
        assert!(matches!(decode(&[], 0), Err(Error::Truncated { .. })));
    }

    #[test]
    fn test_encoded_width_is_minimal() {
        assert_eq!(encoded_width(0).unwrap(), 1);
        assert_eq!(encoded_width(127).unwrap(), 1);
        assert_eq!(encoded_width(128).unwrap(), 2);
        assert_eq!(encoded_width(0x3fff).unwrap(), 2);
        assert_eq!(encoded_width(0x4000).unwrap(), 3);
        assert_eq!(encoded_width((1u64 << 56) - 1).unwrap(), 8);
        assert!(matches!(
            encoded_width(1u64 << 56),
            Err(Error::VintOverflow(_))
        ));
    }

    #[test]
    fn test_encode_width_maxima() {
        assert_eq!(to_vec(127).unwrap(), vec![0xff]);
        assert_eq!(to_vec(128).unwrap(), vec![0x40, 0x80]);
        assert_eq!(
            to_vec((1u64 << 56) - 1).unwrap(),
            vec![0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn test_encode_matches_wire_ids() {
        assert_eq!(to_vec(0x853_8067).unwrap(), vec![0x18, 0x53, 0x80, 0x67]);
        assert_eq!(to_vec(0x549_a966).unwrap(), vec![0x15, 0x49, 0xa9, 0x66]);
        assert_eq!(to_vec(0xad7b1).unwrap(), vec![0x2a, 0xd7, 0xb1]);
        assert_eq!(to_vec(0x489).unwrap(), vec![0x44, 0x89]);
    }

    #[test]
    fn test_roundtrip_boundaries() {
        let mut values = vec![0u64, 1, 126, 127, 128, 255, 256, 1_000_000];
        for width in 1..=8u32 {
            let top = (1u64 << (7 * width)) - 1;
            values.extend([top - 1, top]);
        }
        for value in values {
            let bytes = to_vec(value).unwrap();
            assert_eq!(decode(&bytes, 0).unwrap(), (value, bytes.len()));
        }
    }
}
