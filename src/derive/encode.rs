//! Arbitrary-base encoding of a digest.
//!
//! The digest is read as one big-endian unsigned integer and re-expressed in
//! base B, where B is the alphabet's total symbol count. 256 bits exceed any
//! native integer width, so the division runs as schoolbook long division
//! over the byte array.

use crate::alphabet::Alphabet;
use crate::error::DeriveError;

/// Encodes `digest` into exactly `length` symbols drawn from `alphabet`.
///
/// Produces the base-B representation of the digest value, most significant
/// digit first. If that representation is `length` symbols or longer, the
/// *last* `length` symbols are kept (the least-significant digits); if it is
/// shorter, the output is left-padded with the alphabet's first symbol. An
/// all-zero digest yields the first symbol repeated `length` times.
///
/// # Errors
///
/// Returns [`DeriveError::InvalidLength`] if `length` is 0.
pub fn encode_symbols(
    digest: &[u8],
    alphabet: &Alphabet,
    length: usize,
) -> Result<String, DeriveError> {
    if length == 0 {
        return Err(DeriveError::InvalidLength(length));
    }

    let base = alphabet.len() as u32;

    let mut value = digest.to_vec();
    trim_leading_zeros(&mut value);

    if value.is_empty() {
        return Ok(alphabet.first().to_string().repeat(length));
    }

    // Least-significant digit first; each pass divides the value by the base.
    let mut digits: Vec<char> = Vec::new();
    while !value.is_empty() {
        let rem = div_rem_in_place(&mut value, base);
        digits.push(alphabet.symbol(rem as usize));
        trim_leading_zeros(&mut value);
    }

    if digits.len() >= length {
        // Keep the least-significant `length` digits, restored to
        // most-significant-first order.
        Ok(digits[..length].iter().rev().collect())
    } else {
        let mut out = alphabet.first().to_string().repeat(length - digits.len());
        out.extend(digits.iter().rev());
        Ok(out)
    }
}

/// Divides the big-endian byte array by `base` in place, returning the
/// remainder. The accumulator is u64: `rem * 256 + byte` must not wrap even
/// for a radix near `u32::MAX`.
fn div_rem_in_place(value: &mut [u8], base: u32) -> u32 {
    let base = u64::from(base);
    let mut rem: u64 = 0;
    for byte in value.iter_mut() {
        let acc = rem * 256 + u64::from(*byte);
        *byte = (acc / base) as u8;
        rem = acc % base;
    }
    rem as u32
}

fn trim_leading_zeros(value: &mut Vec<u8>) {
    let nonzero = value.iter().position(|&b| b != 0).unwrap_or(value.len());
    value.drain(..nonzero);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_alphabet() -> Alphabet {
        Alphabet::new("0123456789abcdef").unwrap()
    }

    #[test]
    fn base16_reproduces_the_hex_digits() {
        // Base-16 encoding with 0-9a-f must equal the plain hex rendering.
        let digest = [
            0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x00, 0x11,
            0x22, 0x33,
        ];
        let encoded = encode_symbols(&digest, &hex_alphabet(), 32).unwrap();
        assert_eq!(encoded, "deadbeef0123456789abcdef00112233");
    }

    #[test]
    fn truncation_keeps_the_least_significant_digits() {
        let digest = [0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_symbols(&digest, &hex_alphabet(), 4).unwrap();
        assert_eq!(encoded, "beef");
    }

    #[test]
    fn short_value_is_left_padded_with_first_symbol() {
        let digest = [0x0f];
        let encoded = encode_symbols(&digest, &hex_alphabet(), 6).unwrap();
        assert_eq!(encoded, "00000f");
    }

    #[test]
    fn zero_digest_yields_first_symbol_repeated() {
        let digest = [0u8; 32];
        let encoded = encode_symbols(&digest, &hex_alphabet(), 5).unwrap();
        assert_eq!(encoded, "00000");

        let ascii = Alphabet::ascii();
        let encoded = encode_symbols(&digest, &ascii, 18).unwrap();
        assert_eq!(encoded, "a".repeat(18));
    }

    #[test]
    fn base2_matches_the_bit_pattern() {
        let binary = Alphabet::new("01").unwrap();
        let encoded = encode_symbols(&[0b1010_0001], &binary, 8).unwrap();
        assert_eq!(encoded, "10100001");
    }

    #[test]
    fn zero_length_is_rejected() {
        let result = encode_symbols(&[1, 2, 3], &hex_alphabet(), 0);
        assert_eq!(result, Err(DeriveError::InvalidLength(0)));
    }

    #[test]
    fn every_output_symbol_is_in_the_alphabet() {
        let ascii = Alphabet::ascii();
        let digest: Vec<u8> = (0..32).map(|i| i * 7 + 3).collect();
        let encoded = encode_symbols(&digest, &ascii, 40).unwrap();
        assert_eq!(encoded.chars().count(), 40);
        assert!(encoded.chars().all(|c| ascii.contains(c)));
    }

    #[test]
    fn division_by_a_radix_beyond_24_bits_does_not_wrap() {
        // 0xffff_ffff divided by 2^25: quotient 127, remainder 2^25 - 1.
        let base = 1u32 << 25;
        let mut value = [0xff, 0xff, 0xff, 0xff];
        let rem = div_rem_in_place(&mut value, base);
        assert_eq!(rem, base - 1);
        assert_eq!(value, [0, 0, 0, 127]);
    }

    #[test]
    fn duplicate_symbols_do_not_break_determinism() {
        let dup = Alphabet::new("abab").unwrap();
        let digest = [0x5a; 16];
        let a = encode_symbols(&digest, &dup, 20).unwrap();
        let b = encode_symbols(&digest, &dup, 20).unwrap();
        assert_eq!(a, b);
        assert!(a.chars().all(|c| c == 'a' || c == 'b'));
    }
}
