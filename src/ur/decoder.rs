// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

//! Decoder.

use core::{fmt, str};

use crate::{
    bytewords::{self, Style},
    cbor,
    fountain,
    fountain::part::Part,
    ur::UR,
};

/// A uniform resource decoder able to receive URIs that encode a fountain part.
///
/// # Examples
///
/// See the [`crate`] module documentation for an example.
#[derive(Default)]
pub struct Decoder {
    fountain: fountain::Decoder,
    fragment: Vec<u8>,
    ur_type: Vec<u8>,
}

impl Decoder {
    /// Receives a URI representing a CBOR and `bytewords`-encoded fountain part
    /// into the decoder.
    ///
    /// # Examples
    ///
    /// See the [`crate`] module documentation for examples.
    ///
    /// # Errors
    ///
    /// This function may error along all the necessary decoding steps:
    ///  - The string may not be a well-formed URI according to the uniform resource scheme
    ///  - The URI payload may not be a well-formed `bytewords` string
    ///  - The decoded byte payload may not be valid CBOR
    ///  - The CBOR-encoded fountain part may be inconsistent with previously received ones
    ///
    /// In all these cases, an error will be returned.
    pub fn receive(&mut self, ur: UR) -> Result<(), Error> {
        if !ur.is_multi_part() {
            return Err(Error::NotMultiPart);
        }

        if self.ur_type.is_empty() {
            self.ur_type.extend_from_slice(ur.as_type().as_bytes());
        } else if self.ur_type != ur.as_type().as_bytes() {
            return Err(Error::InconsistentType);
        }

        let part = if !ur.is_deserialized() {
            let bytewords = ur
                .as_bytewords()
                .expect("resource shouldn't be deserialized at this point");

            let size = bytewords::validate(bytewords, Style::Minimal)?;
            self.fragment.clear();
            self.fragment.resize(size, 0);

            bytewords::decode_to_slice(bytewords, &mut self.fragment, Style::Minimal)?;
            Some(Part::from_cbor(&self.fragment[..size])?)
        } else {
            None
        };

        let part = part.as_ref().unwrap_or_else(|| ur.as_part().unwrap());
        self.fountain.receive(part)?;
        Ok(())
    }

    /// Returns whether the decoder is complete and hence the message available.
    ///
    /// # Examples
    ///
    /// See the [`crate`] module documentation for an example.
    #[must_use]
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.fountain.is_complete()
    }

    /// Returns the UR type.
    #[must_use]
    pub fn ur_type(&self) -> Option<&str> {
        if !self.ur_type.is_empty() {
            Some(str::from_utf8(&self.ur_type).unwrap())
        } else {
            None
        }
    }

    /// If [`complete`], returns the decoded message, `None` otherwise.
    ///
    /// # Errors
    ///
    /// If an inconsistent internal state is detected, an error will be
    /// returned.
    ///
    /// # Examples
    ///
    /// See the [`crate`] documentation for an example.
    ///
    /// [`complete`]: Decoder::is_complete
    #[inline]
    pub fn message(&self) -> Result<Option<&[u8]>, Error> {
        self.fountain.message().map_err(Error::from)
    }

    /// Calculate estimated percentage of completion.
    #[inline]
    #[must_use]
    pub fn estimated_percent_complete(&self) -> f64 {
        self.fountain.estimated_percent_complete()
    }

    /// Returns `true` if the decoder doesn't contain any data.
    ///
    /// Once a part is successfully [received](Self::receive) this method will
    /// return `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ur::Decoder;
    ///
    /// let decoder = Decoder::default();
    /// assert!(decoder.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fountain.is_empty()
    }

    /// Clear the decoder so that it can be used again.
    pub fn clear(&mut self) {
        self.fountain.clear();
        self.fragment.clear();
        self.ur_type.clear();
    }
}

/// Errors that can happen during decoding.
#[derive(Debug)]
pub enum Error {
    /// CBOR decoding error.
    Cbor(cbor::DecodeError),
    /// Fountain decoder error.
    Fountain(fountain::decoder::Error),
    /// Bytewords decoding error.
    Bytewords(bytewords::DecodeError),
    /// The part received is not multi-part.
    NotMultiPart,
    /// The UR type of this fragment is not consistent.
    InconsistentType,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Cbor(e) => write!(f, "CBOR decoding error: {e}"),
            Error::Fountain(e) => write!(f, "Fountain decoding error: {e}"),
            Error::Bytewords(e) => write!(f, "Bytewords decoding error: {e}"),
            Error::NotMultiPart => write!(f, "The Uniform Resource is not multi-part"),
            Error::InconsistentType => write!(
                f,
                "The received fragment is not consistent with the type of the previous fragments"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<cbor::DecodeError> for Error {
    fn from(e: cbor::DecodeError) -> Self {
        Self::Cbor(e)
    }
}

impl From<bytewords::DecodeError> for Error {
    fn from(e: bytewords::DecodeError) -> Self {
        Self::Bytewords(e)
    }
}

impl From<fountain::decoder::Error> for Error {
    fn from(e: fountain::decoder::Error) -> Self {
        Self::Fountain(e)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::ur::{encoder::Encoder, tests::make_message_ur, UR};

    #[test]
    fn test_ur_decoder_roundtrip() {
        let ur = make_message_ur(256, "Wolf");
        let mut encoder = Encoder::new();
        encoder.start("bytes", &ur, 30);

        let mut decoder = Decoder::default();
        while !decoder.is_complete() {
            assert_eq!(decoder.message().unwrap(), None);
            let part = encoder.next_part();
            decoder.receive(part).unwrap();
        }
        assert_eq!(decoder.message().unwrap(), Some(ur.as_slice()));
        assert_eq!(decoder.ur_type(), Some("bytes"));
    }

    #[test]
    fn test_ur_decoder_inconsistent_type() {
        let ur = make_message_ur(64, "Wolf");
        let mut encoder = Encoder::new();
        encoder.start("bytes", &ur, 16);
        let mut decoder = Decoder::default();
        decoder.receive(encoder.next_part()).unwrap();

        let err = decoder
            .receive(UR::parse("ur:other/2-4/aeadaolazmjendeoti").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::InconsistentType));
    }

    #[test]
    fn test_ur_decoder_not_multi_part() {
        let mut decoder = Decoder::default();
        let err = decoder
            .receive(UR::parse("ur:bytes/aeadaolazmjendeoti").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::NotMultiPart));
    }

    #[test]
    fn test_ur_decoder_empty() {
        let decoder = Decoder::default();
        assert!(decoder.is_empty());
        assert_eq!(decoder.ur_type(), None);
    }
}
