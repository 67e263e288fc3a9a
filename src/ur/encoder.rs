// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

//! Encoder.

use crate::{fountain, ur::UR};

/// A uniform resource encoder with an underlying fountain encoding.
///
/// # Examples
///
/// See the [`crate`] documentation for an example.
pub struct Encoder<'a, 'b> {
    ur_type: Option<&'a str>,
    fountain: fountain::Encoder<'b>,
}

impl<'a, 'b> Default for Encoder<'a, 'b> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, 'b> Encoder<'a, 'b> {
    /// Construct a new [`Encoder`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fountain: fountain::Encoder::new(),
            ur_type: None,
        }
    }

    /// Construct a new [`Encoder`] with a custom minimum fragment length and
    /// first sequence number.
    ///
    /// See [`fountain::Encoder::with_options`].
    #[must_use]
    pub const fn with_options(min_fragment_length: usize, first_seq_num: u32) -> Self {
        Self {
            fountain: fountain::Encoder::with_options(min_fragment_length, first_seq_num),
            ur_type: None,
        }
    }

    /// Creates a new encoder for the given message payload.
    ///
    /// The emitted fountain parts will respect the maximum fragment length
    /// argument.
    ///
    /// # Examples
    ///
    /// See the [`crate`] documentation for an example.
    ///
    /// # Panics
    ///
    /// This function panics if `ur_type` or `message` is empty, or if
    /// `max_fragment_length` is zero.
    pub fn start(&mut self, ur_type: &'a str, message: &'b [u8], max_fragment_length: usize) {
        assert!(!ur_type.is_empty(), "UR type must not be empty");
        self.ur_type = Some(ur_type);
        self.fountain.start(message, max_fragment_length);
    }

    /// Returns the current count of already emitted parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ur::Encoder;
    ///
    /// let mut encoder = Encoder::new();
    /// encoder.start("bytes", "data".as_bytes(), 5);
    ///
    /// assert_eq!(encoder.current_sequence(), 0);
    /// encoder.next_part();
    /// assert_eq!(encoder.current_sequence(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn current_sequence(&self) -> u32 {
        self.fountain.current_sequence()
    }

    /// Returns the number of segments the original message has been split up into.
    ///
    /// # Examples
    ///
    /// ```
    /// use ur::Encoder;
    ///
    /// let mut encoder = Encoder::new();
    /// encoder.start("bytes", "data".as_bytes(), 3);
    /// assert_eq!(encoder.sequence_count(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn sequence_count(&self) -> u32 {
        self.fountain.sequence_count()
    }

    /// Returns whether all original segments have been emitted at least once.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fountain.is_complete()
    }

    /// Returns the URI corresponding to next fountain part.
    ///
    /// # Examples
    ///
    /// See the [`crate`] documentation for an example.
    pub fn next_part(&mut self) -> UR {
        UR::MultiPartDeserialized {
            ur_type: self.ur_type.expect("encoder is not initialized"),
            fragment: self.fountain.next_part(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::ur::tests::make_message_ur;

    #[test]
    fn test_ur_encoder() {
        let ur = make_message_ur(256, "Wolf");
        let mut encoder = Encoder::new();
        encoder.start("bytes", &ur, 30);

        assert_eq!(encoder.sequence_count(), 9);
        for index in 0..20u32 {
            assert_eq!(encoder.current_sequence(), index);
            let part = encoder.next_part();
            assert!(part.to_string().starts_with("ur:bytes/"));
            assert_eq!(part.sequence(), Some(index + 1));
            assert_eq!(part.sequence_count(), Some(9));
        }
        assert!(encoder.is_complete());
    }

    #[test]
    #[should_panic(expected = "UR type must not be empty")]
    fn test_ur_encoder_empty_type() {
        let mut encoder = Encoder::new();
        encoder.start("", "data".as_bytes(), 5);
    }

    #[test]
    fn test_ur_encoder_first_seq_num() {
        let mut encoder = Encoder::with_options(1, 100);
        encoder.start("bytes", "data".as_bytes(), 5);
        assert_eq!(encoder.current_sequence(), 100);
        assert_eq!(encoder.next_part().sequence(), Some(101));
    }
}
