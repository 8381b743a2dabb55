use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::WideCharPolicy;

/// Lookup table driving the rolling update.
///
/// Part of the output format: changing a single entry changes every
/// checksum ever produced.
pub const CHECKSUM_TABLE: [u16; 256] = [
    0x0000, 0x01B0, 0x0360, 0x02D0, 0x06C0, 0x0770, 0x05A0, 0x0410,
    0x0D80, 0x0C30, 0x0EE0, 0x0F50, 0x0B40, 0x0AF0, 0x0820, 0x0990,
    0x1B00, 0x1AB0, 0x1860, 0x19D0, 0x1DC0, 0x1C70, 0x1EA0, 0x1F10,
    0x1680, 0x1730, 0x15E0, 0x1450, 0x1040, 0x11F0, 0x1320, 0x1290,
    0x3600, 0x37B0, 0x3560, 0x34D0, 0x30C0, 0x3170, 0x33A0, 0x3210,
    0x3B80, 0x3A30, 0x38E0, 0x3950, 0x3D40, 0x3CF0, 0x3E20, 0x3F90,
    0x2D00, 0x2CB0, 0x2E60, 0x2FD0, 0x2BC0, 0x2A70, 0x28A0, 0x2910,
    0x2080, 0x2130, 0x23E0, 0x2250, 0x2640, 0x27F0, 0x2520, 0x2490,
    0x6C00, 0x6DB0, 0x6F60, 0x6ED0, 0x6AC0, 0x6B70, 0x69A0, 0x6810,
    0x6180, 0x6030, 0x62E0, 0x6350, 0x6740, 0x66F0, 0x6420, 0x6590,
    0x7700, 0x76B0, 0x7460, 0x75D0, 0x71C0, 0x7070, 0x72A0, 0x7310,
    0x7A80, 0x7B30, 0x79E0, 0x7850, 0x7C40, 0x7DF0, 0x7F20, 0x7E90,
    0x5A00, 0x5BB0, 0x5960, 0x58D0, 0x5CC0, 0x5D70, 0x5FA0, 0x5E10,
    0x5780, 0x5630, 0x54E0, 0x5550, 0x5140, 0x50F0, 0x5220, 0x5390,
    0x4100, 0x40B0, 0x4260, 0x43D0, 0x47C0, 0x4670, 0x44A0, 0x4510,
    0x4C80, 0x4D30, 0x4FE0, 0x4E50, 0x4A40, 0x4BF0, 0x4920, 0x4890,
    0xD800, 0xD9B0, 0xDB60, 0xDAD0, 0xDEC0, 0xDF70, 0xDDA0, 0xDC10,
    0xD580, 0xD430, 0xD6E0, 0xD750, 0xD340, 0xD2F0, 0xD020, 0xD190,
    0xC300, 0xC2B0, 0xC060, 0xC1D0, 0xC5C0, 0xC470, 0xC6A0, 0xC710,
    0xCE80, 0xCF30, 0xCDE0, 0xCC50, 0xC840, 0xC9F0, 0xCB20, 0xCA90,
    0xEE00, 0xEFB0, 0xED60, 0xECD0, 0xE8C0, 0xE970, 0xEBA0, 0xEA10,
    0xE380, 0xE230, 0xE0E0, 0xE150, 0xE540, 0xE4F0, 0xE620, 0xE790,
    0xF500, 0xF4B0, 0xF660, 0xF7D0, 0xF3C0, 0xF270, 0xF0A0, 0xF110,
    0xF880, 0xF930, 0xFBE0, 0xFA50, 0xFE40, 0xFFF0, 0xFD20, 0xFC90,
    0xB400, 0xB5B0, 0xB760, 0xB6D0, 0xB2C0, 0xB370, 0xB1A0, 0xB010,
    0xB980, 0xB830, 0xBAE0, 0xBB50, 0xBF40, 0xBEF0, 0xBC20, 0xBD90,
    0xAF00, 0xAEB0, 0xAC60, 0xADD0, 0xA9C0, 0xA870, 0xAAA0, 0xAB10,
    0xA280, 0xA330, 0xA1E0, 0xA050, 0xA440, 0xA5F0, 0xA720, 0xA690,
    0x8200, 0x83B0, 0x8160, 0x80D0, 0x84C0, 0x8570, 0x87A0, 0x8610,
    0x8F80, 0x8E30, 0x8CE0, 0x8D50, 0x8940, 0x88F0, 0x8A20, 0x8B90,
    0x9900, 0x98B0, 0x9A60, 0x9BD0, 0x9FC0, 0x9E70, 0x9CA0, 0x9D10,
    0x9480, 0x9530, 0x97E0, 0x9650, 0x9240, 0x93F0, 0x9120, 0x9090,
];

/// Rolling checksum state: eight bytes, byte 7 most significant.
///
/// There is no finalize step, the state after the last byte is the checksum.
/// The serialized form is the canonical `WWWW-WWWW-WWWW-WWWW` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ChecksumState([u8; 8]);

impl ChecksumState {
    /// Checksum of the empty text.
    pub const EMPTY: ChecksumState = ChecksumState([0; 8]);

    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        ChecksumState(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// The same state viewed as four little-endian 16-bit words,
    /// `words[0] = bytes[1..0]` through `words[3] = bytes[7..6]`.
    pub fn to_words(&self) -> [u16; 4] {
        let b = &self.0;
        [
            u16::from_le_bytes([b[0], b[1]]),
            u16::from_le_bytes([b[2], b[3]]),
            u16::from_le_bytes([b[4], b[5]]),
            u16::from_le_bytes([b[6], b[7]]),
        ]
    }

    pub fn from_words(words: [u16; 4]) -> Self {
        let mut bytes = [0u8; 8];
        for (chunk, word) in bytes.chunks_exact_mut(2).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        ChecksumState(bytes)
    }

    /// True for the all-zero state produced by empty input.
    pub fn is_empty_text(&self) -> bool {
        self.0 == [0; 8]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("Character {character:?} at position {position} does not fit in a single byte")]
    CharacterOutOfRange { character: char, position: usize },
}

impl WideCharPolicy {
    /// The input byte hashed for `character`.
    pub fn byte_for(self, character: char, position: usize) -> Result<u8, ChecksumError> {
        let code = u32::from(character);
        match self {
            WideCharPolicy::Truncate => Ok((code & 0xFF) as u8),
            WideCharPolicy::Reject => u8::try_from(code)
                .map_err(|_| ChecksumError::CharacterOutOfRange { character, position }),
        }
    }
}

/// Table-driven byte-wise checksum engine.
///
/// Line checksums and the document-level aggregate both run through the
/// same [`ChecksumEngine::update`].
#[derive(Debug, Clone, Copy)]
pub struct ChecksumEngine {
    table: &'static [u16; 256],
}

impl Default for ChecksumEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChecksumEngine {
    pub const fn new(table: &'static [u16; 256]) -> Self {
        Self { table }
    }

    /// Engine over [`CHECKSUM_TABLE`].
    pub const fn standard() -> Self {
        Self::new(&CHECKSUM_TABLE)
    }

    /// Feed one byte: every byte moves one slot toward index 0 and the
    /// table constant lands XORed in the top two bytes.
    #[inline]
    pub fn update(&self, state: &mut ChecksumState, byte: u8) {
        let s = &mut state.0;
        let v = self.table[usize::from(byte ^ s[0])];
        s.copy_within(1..8, 0);
        s[6] ^= (v & 0xFF) as u8;
        s[7] = (v >> 8) as u8;
    }

    pub fn compute_bytes(&self, bytes: &[u8]) -> ChecksumState {
        let mut state = ChecksumState::EMPTY;
        for &byte in bytes {
            self.update(&mut state, byte);
        }
        state
    }

    /// Checksum of `text`, one input byte per character.
    ///
    /// Under [`WideCharPolicy::Reject`] the whole text is checked before
    /// anything is hashed.
    pub fn compute(&self, text: &str, policy: WideCharPolicy) -> Result<ChecksumState, ChecksumError> {
        let bytes = text_bytes(text, policy)?;
        Ok(self.compute_bytes(&bytes))
    }

    pub fn checksummer(&self) -> Checksummer {
        Checksummer {
            engine: *self,
            state: ChecksumState::EMPTY,
        }
    }
}

fn text_bytes(text: &str, policy: WideCharPolicy) -> Result<Vec<u8>, ChecksumError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| policy.byte_for(character, position))
        .collect()
}

/// Incremental checksum over chunked input.
///
/// Feeding `"ab"` then `"c"` yields the same state as feeding `"abc"`.
#[derive(Debug, Clone)]
pub struct Checksummer {
    engine: ChecksumEngine,
    state: ChecksumState,
}

impl Checksummer {
    pub fn update(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.engine.update(&mut self.state, byte);
        }
    }

    /// Feeds `text` per character. On error the state is left untouched.
    ///
    /// Reported positions are relative to this chunk.
    pub fn update_text(&mut self, text: &str, policy: WideCharPolicy) -> Result<(), ChecksumError> {
        let bytes = text_bytes(text, policy)?;
        self.update(&bytes);
        Ok(())
    }

    pub fn state(&self) -> ChecksumState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = ChecksumState::EMPTY;
    }
}
