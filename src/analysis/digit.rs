/// Fractional digits assumed when the feed omits a pip size.
pub const DEFAULT_PIP_SIZE: u32 = 5;

/// Most fractional digits a quote is ever rendered at. Feed-supplied pip
/// sizes above this are treated as malformed and capped; no synthetic
/// index quotes anywhere near it.
pub const MAX_PIP_SIZE: u32 = 10;

/// Last decimal digit of `quote` rendered at `pip_size` fractional digits.
///
/// The quote is formatted with trailing zeros, so `10.0` at pip size 5 reads
/// `10.00000` and yields 0. With pip size 0 the digit comes from the integer
/// part.
pub fn last_digit(quote: f64, pip_size: u32) -> u8 {
    let rendered = format!("{:.*}", pip_size as usize, quote);
    match rendered.bytes().last() {
        Some(byte) if byte.is_ascii_digit() => byte - b'0',
        // Non-finite quotes never reach this point; the feed layer drops them.
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_last_fractional_digit() {
        assert_eq!(last_digit(4.12345, 5), 5);
        assert_eq!(last_digit(700.23, 2), 3);
        assert_eq!(last_digit(9087.1654, 4), 4);
    }

    /// Verifies round quotes are zero-padded before extraction.
    #[test]
    fn pads_short_fractions_with_zeros() {
        assert_eq!(last_digit(10.0, 5), 0);
        assert_eq!(last_digit(1.2, 5), 0);
        assert_eq!(last_digit(255.5, 3), 0);
    }

    #[test]
    fn pip_size_zero_uses_integer_part() {
        assert_eq!(last_digit(123.0, 0), 3);
        assert_eq!(last_digit(8.9, 0), 9);
    }

    #[test]
    fn pip_size_changes_the_digit() {
        let quote = 700.2371;
        assert_eq!(last_digit(quote, 4), 1);
        assert_eq!(last_digit(quote, 2), 4);
        assert_eq!(last_digit(quote, 1), 2);
    }

    #[test]
    fn always_in_digit_range() {
        let mut quote = 0.00017;
        for _ in 0..1000 {
            quote = quote * 1.31 + 0.017;
            for pip_size in 0..=7 {
                assert!(last_digit(quote, pip_size) <= 9);
            }
        }
    }
}
