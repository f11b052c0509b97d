//! Float to bit-string encoding
//!
//! Converts 32-bit floats into their IEEE-754 bit patterns rendered as
//! 32-character '0'/'1' strings, big-endian byte order. This is the wire
//! format expected by the `.mem` memory-initialization files.

/// Number of characters in an encoded bit string
pub const BIT_WIDTH: usize = 32;

/// Encode a 32-bit float as its IEEE-754 bit pattern.
///
/// The four bytes of the single-precision representation are emitted in
/// big-endian order, each as an 8-character zero-padded binary string.
/// Total for all float32 values: NaN and infinities pass through with
/// their standard bit patterns.
pub fn encode_f32(value: f32) -> String {
    let mut bits = String::with_capacity(BIT_WIDTH);
    for byte in value.to_be_bytes() {
        bits.push_str(&format!("{:08b}", byte));
    }
    bits
}

/// Encode a 64-bit float after narrowing it to `f32`.
///
/// The narrowing is the natural float32 truncation; no additional rounding
/// is applied.
pub fn encode_f64(value: f64) -> String {
    encode_f32(value as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test-only inverse of `encode_f32`.
    fn decode(bits: &str) -> f32 {
        f32::from_bits(u32::from_str_radix(bits, 2).unwrap())
    }

    #[test]
    fn test_encode_one() {
        assert_eq!(encode_f32(1.0), "00111111100000000000000000000000");
    }

    #[test]
    fn test_encode_length_and_charset() {
        for value in [0.0, -0.0, 1.0, -1.5, 3.25e7, f32::MIN_POSITIVE, 1e-42] {
            let bits = encode_f32(value);
            assert_eq!(bits.len(), BIT_WIDTH);
            assert!(bits.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn test_round_trip() {
        for value in [0.0f32, -0.0, 0.5, -1.0, 0.25, 255.0, 1.0 / 3.0, f32::MAX, 1e-42] {
            let decoded = decode(&encode_f32(value));
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_round_trip_non_finite() {
        for value in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let decoded = decode(&encode_f32(value));
            assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_encode_f64_narrows() {
        // 0.1 is not exactly representable; encoding must match the f32 value
        assert_eq!(encode_f64(0.1), encode_f32(0.1f32));
        assert_eq!(encode_f64(1.0), encode_f32(1.0));
    }

    #[test]
    fn test_sign_bit() {
        assert_eq!(&encode_f32(-1.0)[..1], "1");
        assert_eq!(&encode_f32(1.0)[..1], "0");
        assert_eq!(encode_f32(-0.0), "10000000000000000000000000000000");
    }
}
