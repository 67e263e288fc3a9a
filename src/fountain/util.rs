// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

/// Calculates the quotient of `a` and `b`, rounding the results towards
/// positive infinity.
///
/// Note: there's an implementation on the `usize` type of this function,
/// but it's not stable yet.
#[must_use]
pub const fn div_ceil(a: usize, b: usize) -> usize {
    let d = a / b;
    let r = a % b;
    if r > 0 {
        d + 1
    } else {
        d
    }
}

/// Calculate a nominal fragment length from the message length, a minimum
/// and a maximum fragment size.
///
/// Tries increasing fragment counts until the resulting fragment length fits
/// under `max_fragment_length`; the result is never smaller than
/// `min_fragment_length` unless the whole message already is.
///
/// # Examples
///
/// ```
/// # use ur::fountain::find_nominal_fragment_length;
///
/// assert_eq!(find_nominal_fragment_length(12345, 1005, 1955), 1764);
/// assert_eq!(find_nominal_fragment_length(12345, 1005, 30000), 12345);
/// ```
///
/// # Panics
///
/// This function panics if `message_length` or `min_fragment_length` is
/// zero, or if `max_fragment_length` is smaller than `min_fragment_length`.
#[must_use]
pub const fn find_nominal_fragment_length(
    message_length: usize,
    min_fragment_length: usize,
    max_fragment_length: usize,
) -> usize {
    assert!(message_length > 0, "message length must be greater than zero");
    assert!(
        min_fragment_length > 0,
        "minimum fragment length must be greater than zero"
    );
    assert!(
        max_fragment_length >= min_fragment_length,
        "maximum fragment length must not be smaller than the minimum"
    );

    let max_fragment_count = div_ceil(message_length, min_fragment_length);
    let mut fragment_count = 1;
    while fragment_count < max_fragment_count {
        let fragment_length = div_ceil(message_length, fragment_count);
        if fragment_length <= max_fragment_length {
            break;
        }
        fragment_count += 1;
    }

    div_ceil(message_length, fragment_count)
}

/// XOR `v2` into `v1` in place.
///
/// # Panics
///
/// Panics if `v1` and `v2` have different lengths.
pub fn xor_into(v1: &mut [u8], v2: &[u8]) {
    assert_eq!(v1.len(), v2.len());

    for (x1, &x2) in v1.iter_mut().zip(v2.iter()) {
        *x1 ^= x2;
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[should_panic]
    #[test]
    fn test_div_ceil_divide_by_zero() {
        let _ = div_ceil(1, 0);
    }

    #[test]
    fn test_find_nominal_fragment_length() {
        assert_eq!(find_nominal_fragment_length(12345, 1005, 1955), 1764);
        assert_eq!(find_nominal_fragment_length(12345, 1005, 30000), 12345);

        assert_eq!(find_nominal_fragment_length(10, 1, 4), 4);
        assert_eq!(find_nominal_fragment_length(10, 1, 5), 5);
        assert_eq!(find_nominal_fragment_length(10, 1, 6), 5);
        assert_eq!(find_nominal_fragment_length(10, 1, 10), 10);
    }

    #[test]
    #[should_panic]
    fn test_find_nominal_fragment_length_zero_max() {
        let _ = find_nominal_fragment_length(10, 1, 0);
    }

    #[test]
    #[should_panic]
    fn test_xor_into_different_len() {
        let mut a = [0; 10];
        let b = [0; 9];
        xor_into(&mut a, &b);
    }

    #[test]
    fn test_xor_into() {
        const A: [u8; 10] = [0x91, 0x6e, 0xc6, 0x5c, 0xf7, 0x7c, 0xad, 0xf5, 0x5c, 0xd7];
        const B: [u8; 10] = [0xf9, 0xcd, 0xa1, 0xa1, 0x03, 0x00, 0x26, 0xdd, 0xd4, 0x2e];
        const C: [u8; 10] = [0x68, 0xa3, 0x67, 0xfd, 0xf4, 0x7c, 0x8b, 0x28, 0x88, 0xf9];

        let mut a = A;
        xor_into(&mut a, &B);
        assert_eq!(a, C);

        xor_into(&mut a, &A);
        assert_eq!(a, B);
    }
}
