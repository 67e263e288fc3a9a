// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

//! A minimal CBOR (RFC 8949) sub-codec.
//!
//! Only what [`Part`](crate::fountain::Part) needs to frame itself on the
//! wire is implemented: unsigned integers, definite-length byte strings and
//! definite-length arrays, always using the shortest additional-info form.
//! There is no support for maps, tags, floats, indefinite length items or any
//! other major type; callers that need those should reach for a general
//! purpose CBOR crate instead.

use core::fmt;

const MAJOR_UNSIGNED: u8 = 0;
const MAJOR_BYTES: u8 = 2;
const MAJOR_ARRAY: u8 = 4;

const MINOR_LEN1: u8 = 24;
const MINOR_LEN2: u8 = 25;
const MINOR_LEN4: u8 = 26;
const MINOR_LEN8: u8 = 27;

/// A destination for CBOR-encoded bytes.
///
/// Implemented for [`Vec<u8>`] for the common in-memory case, and
/// by [`bytewords`](crate::bytewords) to stream CBOR straight into bytewords
/// without an intermediate buffer.
pub trait Write {
    /// The error returned when writing fails.
    type Error;

    /// Write all of `buf` to this destination.
    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

impl Write for Vec<u8> {
    type Error = core::convert::Infallible;

    fn write_all(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Error returned while encoding CBOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeError<E>(E);

impl<E: fmt::Display> fmt::Display for EncodeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write CBOR: {}", self.0)
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for EncodeError<E> {}

/// A minimal streaming CBOR encoder.
pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    /// Construct a new encoder writing into `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the encoder, returning the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Encode the header of an array with `len` elements.
    pub fn array(&mut self, len: u64) -> Result<&mut Self, EncodeError<W::Error>> {
        self.header(MAJOR_ARRAY, len)?;
        Ok(self)
    }

    /// Encode an unsigned integer.
    pub fn u64(&mut self, value: u64) -> Result<&mut Self, EncodeError<W::Error>> {
        self.header(MAJOR_UNSIGNED, value)?;
        Ok(self)
    }

    /// Encode an unsigned integer.
    pub fn u32(&mut self, value: u32) -> Result<&mut Self, EncodeError<W::Error>> {
        self.u64(u64::from(value))
    }

    /// Encode a definite-length byte string.
    pub fn bytes(&mut self, data: &[u8]) -> Result<&mut Self, EncodeError<W::Error>> {
        self.header(MAJOR_BYTES, data.len() as u64)?;
        self.writer.write_all(data).map_err(EncodeError)?;
        Ok(self)
    }

    fn header(&mut self, major: u8, value: u64) -> Result<(), EncodeError<W::Error>> {
        let top = major << 5;
        if value < 24 {
            self.writer
                .write_all(&[top | value as u8])
                .map_err(EncodeError)?;
        } else if value <= u64::from(u8::MAX) {
            self.writer
                .write_all(&[top | MINOR_LEN1, value as u8])
                .map_err(EncodeError)?;
        } else if value <= u64::from(u16::MAX) {
            let mut buf = [top | MINOR_LEN2, 0, 0];
            buf[1..].copy_from_slice(&(value as u16).to_be_bytes());
            self.writer.write_all(&buf).map_err(EncodeError)?;
        } else if value <= u64::from(u32::MAX) {
            let mut buf = [top | MINOR_LEN4, 0, 0, 0, 0];
            buf[1..].copy_from_slice(&(value as u32).to_be_bytes());
            self.writer.write_all(&buf).map_err(EncodeError)?;
        } else {
            let mut buf = [top | MINOR_LEN8, 0, 0, 0, 0, 0, 0, 0, 0];
            buf[1..].copy_from_slice(&value.to_be_bytes());
            self.writer.write_all(&buf).map_err(EncodeError)?;
        }

        Ok(())
    }
}

/// Error returned while decoding CBOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended before a complete item could be read.
    UnexpectedEof,
    /// The major type read did not match what the caller expected.
    UnexpectedMajorType {
        /// The major type the caller required.
        expected: u8,
        /// The major type actually present.
        actual: u8,
    },
    /// An additional-info value reserved for future use (28-30) was seen, or
    /// an indefinite-length item (31) was seen where only definite-length
    /// items are supported.
    UnsupportedAdditionalInfo(u8),
    /// A length or count value did not fit the target integer type.
    ValueOutOfRange,
    /// An array did not have the length the caller required.
    UnexpectedArrayLength {
        /// The array length the caller required.
        expected: u64,
        /// The array length actually present.
        actual: u64,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of CBOR input"),
            Self::UnexpectedMajorType { expected, actual } => write!(
                f,
                "unexpected CBOR major type: expected {expected}, got {actual}"
            ),
            Self::UnsupportedAdditionalInfo(info) => {
                write!(f, "unsupported CBOR additional info {info}")
            }
            Self::ValueOutOfRange => write!(f, "CBOR value out of range"),
            Self::UnexpectedArrayLength { expected, actual } => write!(
                f,
                "unexpected CBOR array length: expected {expected}, got {actual}"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// A minimal CBOR decoder over an in-memory byte slice.
pub struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Construct a decoder over `input`.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Decode an array header, returning its element count.
    pub fn array(&mut self) -> Result<u64, DecodeError> {
        self.header(MAJOR_ARRAY)
    }

    /// Decode an array header, failing unless it declares exactly `expected`
    /// elements.
    pub fn array_exact(&mut self, expected: u64) -> Result<(), DecodeError> {
        let actual = self.array()?;
        if actual != expected {
            return Err(DecodeError::UnexpectedArrayLength { expected, actual });
        }
        Ok(())
    }

    /// Decode an unsigned integer.
    pub fn u64(&mut self) -> Result<u64, DecodeError> {
        self.header(MAJOR_UNSIGNED)
    }

    /// Decode an unsigned integer that fits in a `u32`.
    pub fn u32(&mut self) -> Result<u32, DecodeError> {
        u32::try_from(self.u64()?).map_err(|_| DecodeError::ValueOutOfRange)
    }

    /// Decode a definite-length byte string, returning a view into the
    /// original input.
    pub fn bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.header(MAJOR_BYTES)?;
        let len = usize::try_from(len).map_err(|_| DecodeError::ValueOutOfRange)?;
        let start = self.pos;
        let end = start.checked_add(len).ok_or(DecodeError::ValueOutOfRange)?;
        let slice = self.input.get(start..end).ok_or(DecodeError::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    fn header(&mut self, expected_major: u8) -> Result<u64, DecodeError> {
        let (major, additional) = self.tag_and_additional()?;
        if major != expected_major {
            return Err(DecodeError::UnexpectedMajorType {
                expected: expected_major,
                actual: major,
            });
        }

        match additional {
            0..=23 => Ok(u64::from(additional)),
            MINOR_LEN1 => self.take_uint::<1>(),
            MINOR_LEN2 => self.take_uint::<2>(),
            MINOR_LEN4 => self.take_uint::<4>(),
            MINOR_LEN8 => self.take_uint::<8>(),
            other => Err(DecodeError::UnsupportedAdditionalInfo(other)),
        }
    }

    fn tag_and_additional(&mut self) -> Result<(u8, u8), DecodeError> {
        let byte = *self.input.get(self.pos).ok_or(DecodeError::UnexpectedEof)?;
        self.pos += 1;
        Ok((byte >> 5, byte & 0x1F))
    }

    fn take_uint<const N: usize>(&mut self) -> Result<u64, DecodeError> {
        let start = self.pos;
        let end = start + N;
        let slice = self.input.get(start..end).ok_or(DecodeError::UnexpectedEof)?;
        self.pos = end;

        let mut buf = [0u8; 8];
        buf[8 - N..].copy_from_slice(slice);
        Ok(u64::from_be_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_minimal_lengths() {
        let mut buf: Vec<u8> = Vec::new();
        let mut enc = Encoder::new(buf);
        enc.u64(0).unwrap();
        enc.u64(23).unwrap();
        enc.u64(24).unwrap();
        enc.u64(255).unwrap();
        enc.u64(256).unwrap();
        enc.u64(u64::from(u32::MAX)).unwrap();
        enc.u64(u64::from(u32::MAX) + 1).unwrap();
        buf = enc.into_writer();

        assert_eq!(
            buf,
            vec![
                0x00, 0x17, 0x18, 0x18, 0x18, 0xFF, 0x19, 0x01, 0x00, 0x1A, 0xFF, 0xFF, 0xFF,
                0xFF, 0x1B, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
            ]
        );
    }

    #[test]
    fn test_array_and_bytes_roundtrip() {
        let mut buf: Vec<u8> = Vec::new();
        let mut enc = Encoder::new(buf);
        enc.array(5).unwrap();
        enc.u32(12).unwrap();
        enc.u64(8).unwrap();
        enc.u64(100).unwrap();
        enc.u32(0x1234_5678).unwrap();
        enc.bytes(&[1, 5, 3, 3, 5]).unwrap();
        buf = enc.into_writer();

        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.array().unwrap(), 5);
        assert_eq!(dec.u32().unwrap(), 12);
        assert_eq!(dec.u64().unwrap(), 8);
        assert_eq!(dec.u64().unwrap(), 100);
        assert_eq!(dec.u32().unwrap(), 0x1234_5678);
        assert_eq!(dec.bytes().unwrap(), &[1, 5, 3, 3, 5]);
        assert_eq!(dec.position(), buf.len());
    }

    #[test]
    fn test_decode_wrong_major_type() {
        let mut dec = Decoder::new(&[0x41, 0x01]);
        assert_eq!(
            dec.array(),
            Err(DecodeError::UnexpectedMajorType {
                expected: MAJOR_ARRAY,
                actual: MAJOR_BYTES,
            })
        );
    }

    #[test]
    fn test_decode_truncated() {
        let mut dec = Decoder::new(&[0x18]);
        assert_eq!(dec.u64(), Err(DecodeError::UnexpectedEof));

        let mut dec = Decoder::new(&[0x41]);
        assert_eq!(dec.bytes(), Err(DecodeError::UnexpectedEof));
    }
}
