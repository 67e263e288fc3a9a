// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

//! Encoder.

use crate::{
    fountain::{
        chooser::FragmentChooser,
        part::Part,
        util::{div_ceil, find_nominal_fragment_length, xor_into},
    },
    CRC32,
};

/// The default minimum fragment length, in bytes, used by [`Encoder::new`].
pub const DEFAULT_MIN_FRAGMENT_LEN: usize = 10;

/// The default first sequence number used by [`Encoder::new`].
pub const DEFAULT_FIRST_SEQ_NUM: u32 = 0;

/// An encoder capable of emitting fountain-encoded transmissions.
///
/// # Examples
///
/// See the [`crate::fountain`] module documentation for an example.
pub struct Encoder<'a> {
    message: Option<&'a [u8]>,
    fragment_length: usize,
    min_fragment_length: usize,
    checksum: u32,
    current_sequence: u32,
    first_seq_num: u32,
    chooser: FragmentChooser,
    data: Vec<u8>,
    indexes: std::collections::BTreeSet<usize>,
}

impl<'a> Default for Encoder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Encoder<'a> {
    /// Construct a new [`Encoder`] with the default minimum fragment length
    /// and first sequence number.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: None,
            fragment_length: 0,
            min_fragment_length: DEFAULT_MIN_FRAGMENT_LEN,
            checksum: 0,
            current_sequence: 0,
            first_seq_num: DEFAULT_FIRST_SEQ_NUM,
            chooser: FragmentChooser::new(),
            data: Vec::new(),
            indexes: std::collections::BTreeSet::new(),
        }
    }

    /// Construct a new [`Encoder`] with a custom minimum fragment length and
    /// first sequence number.
    ///
    /// `min_fragment_length` bounds how small [`start`](Self::start) is
    /// allowed to make fragments; `first_seq_num` offsets every sequence
    /// number emitted by [`next_part`](Self::next_part), which is useful
    /// when resuming a transmission that was already partially sent.
    #[must_use]
    pub const fn with_options(min_fragment_length: usize, first_seq_num: u32) -> Self {
        Self {
            message: None,
            fragment_length: 0,
            min_fragment_length,
            checksum: 0,
            current_sequence: 0,
            first_seq_num,
            chooser: FragmentChooser::new(),
            data: Vec::new(),
            indexes: std::collections::BTreeSet::new(),
        }
    }

    /// Start encoding a new message.
    ///
    /// # Panics
    ///
    /// This function panics if:
    ///
    /// - The message is empty.
    /// - The maximum fragment length is zero, or smaller than the minimum
    ///   fragment length configured for this encoder.
    pub fn start(&mut self, message: &'a [u8], max_fragment_length: usize) {
        assert!(!message.is_empty(), "message must not be empty");
        assert_ne!(
            max_fragment_length, 0,
            "fragment length must be greater than zero"
        );

        self.fragment_length = find_nominal_fragment_length(
            message.len(),
            self.min_fragment_length.min(max_fragment_length),
            max_fragment_length,
        );
        self.message = Some(message);
        self.checksum = CRC32.checksum(message);
        self.current_sequence = self.first_seq_num;

        self.data.clear();
        self.data.resize(self.fragment_length, 0);
    }

    /// Returns the current count of how many parts have been emitted.
    #[must_use]
    #[inline]
    pub fn current_sequence(&self) -> u32 {
        self.current_sequence
    }

    /// Returns the number of segments the original message has been split up into.
    #[must_use]
    pub fn sequence_count(&self) -> u32 {
        div_ceil(self.message.unwrap().len(), self.fragment_length)
            .try_into()
            .unwrap()
    }

    /// Returns whether all original segments have been emitted at least once.
    /// The fountain encoding is defined as doing this before combining segments
    /// with each other. Thus, this is equivalent to checking whether
    /// [`current_sequence`] >= [`first_seq_num`] + [`sequence_count`].
    ///
    /// [`sequence_count`]: Encoder::sequence_count
    /// [`current_sequence`]: Encoder::current_sequence
    /// [`first_seq_num`]: Encoder::current_sequence
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_sequence.wrapping_sub(self.first_seq_num) >= self.sequence_count()
    }

    /// Returns the next part to be emitted by the fountain encoder.
    /// After all parts of the original message have been emitted once,
    /// the fountain encoder will emit the result of xor-ing together the parts
    /// selected by the Xoshiro RNG (which could be a single part).
    ///
    /// # Examples
    ///
    /// See the [`crate::fountain`] module documentation for an example.
    pub fn next_part(&mut self) -> Part {
        self.current_sequence = self.current_sequence.wrapping_add(1);

        self.indexes = self.chooser.choose_fragments(
            self.current_sequence,
            self.sequence_count(),
            self.checksum,
        );

        self.data.fill(0);
        for &index in self.indexes.iter() {
            let fragment = self
                .message
                .map(|msg| &msg[index * self.fragment_length..])
                .unwrap();
            let fragment = fragment.get(..self.fragment_length).unwrap_or(fragment);

            xor_into(&mut self.data[..fragment.len()], fragment);
        }

        Part {
            sequence: self.current_sequence,
            sequence_count: self.sequence_count(),
            message_length: self.message.unwrap().len(),
            checksum: self.checksum,
            data: &self.data,
        }
    }
}
