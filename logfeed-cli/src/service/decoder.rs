//! Chunk decoding
//!
//! Turns raw body chunks into text. Decoding is lossy and never fails:
//! invalid sequences become U+FFFD.

use clap::ValueEnum;

/// How multi-byte characters split across chunk boundaries are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodeMode {
    /// Every chunk is decoded on its own; a split character turns into
    /// replacement characters on both sides of the boundary
    #[default]
    PerChunk,
    /// An incomplete trailing sequence is held back and completed by the
    /// next chunk
    Carry,
}

/// Incremental UTF-8 decoder
#[derive(Debug, Default)]
pub struct ChunkDecoder {
    mode: DecodeMode,
    pending: Vec<u8>,
}

impl ChunkDecoder {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            pending: Vec::new(),
        }
    }

    /// Decodes one chunk
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        match self.mode {
            DecodeMode::PerChunk => String::from_utf8_lossy(chunk).into_owned(),
            DecodeMode::Carry => {
                self.pending.extend_from_slice(chunk);
                let complete = complete_prefix_len(&self.pending);
                let tail = self.pending.split_off(complete);
                let text = String::from_utf8_lossy(&self.pending).into_owned();
                self.pending = tail;
                text
            }
        }
    }

    /// Flushes whatever is still held back at end of stream
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let rest = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&rest).into_owned()
    }
}

/// Length of `bytes` without a trailing, still incomplete UTF-8 sequence
fn complete_prefix_len(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(3) {
        let byte = bytes[len - back];
        if byte & 0x80 == 0 {
            return len;
        }
        if byte & 0xC0 == 0xC0 {
            let needed = if byte >= 0xF0 {
                4
            } else if byte >= 0xE0 {
                3
            } else {
                2
            };
            return if needed > back { len - back } else { len };
        }
        // continuation byte, keep looking for the lead
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    // "é" is 0xC3 0xA9, "€" is 0xE2 0x82 0xAC
    #[test]
    fn test_per_chunk_decodes_independently() {
        let mut decoder = ChunkDecoder::new(DecodeMode::PerChunk);
        assert_eq!(decoder.decode(b"He"), "He");
        assert_eq!(decoder.decode(b"llo"), "llo");

        let first = decoder.decode(&[b'a', 0xC3]);
        let second = decoder.decode(&[0xA9, b'b']);
        assert_eq!(first, "a\u{FFFD}");
        assert_eq!(second, "\u{FFFD}b");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_carry_joins_split_character() {
        let mut decoder = ChunkDecoder::new(DecodeMode::Carry);
        assert_eq!(decoder.decode(&[b'a', 0xE2, 0x82]), "a");
        assert_eq!(decoder.decode(&[0xAC, b'!']), "€!");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_carry_flushes_dangling_bytes_lossily() {
        let mut decoder = ChunkDecoder::new(DecodeMode::Carry);
        assert_eq!(decoder.decode(&[b'x', 0xC3]), "x");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }

    #[test]
    fn test_complete_prefix_len() {
        assert_eq!(complete_prefix_len(b""), 0);
        assert_eq!(complete_prefix_len(b"abc"), 3);
        assert_eq!(complete_prefix_len(&[b'a', 0xC3, 0xA9]), 3);
        assert_eq!(complete_prefix_len(&[b'a', 0xC3]), 1);
        assert_eq!(complete_prefix_len(&[0xF0, 0x9F, 0x98]), 0);
        assert_eq!(complete_prefix_len(&[0xF0, 0x9F, 0x98, 0x80]), 4);
    }
}
