/// Byte-level membership table for token delimiters.
///
/// Bytes `0x80..=0xFF` are delimiters in every set. Only the ASCII half is
/// configurable.
#[derive(Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    table: [bool; 256],
}

impl DelimiterSet {
    /// Every byte that is not ASCII `[0-9A-Za-z]`.
    pub fn non_alphanumeric() -> Self {
        let mut table = [false; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            *slot = !(byte as u8).is_ascii_alphanumeric();
        }
        Self { table }
    }

    /// Build a set from explicit ASCII delimiters, plus the non-ASCII range.
    pub fn from_bytes(delimiters: &[u8]) -> Self {
        let mut table = [false; 256];
        for slot in table.iter_mut().skip(0x80) {
            *slot = true;
        }
        for &byte in delimiters {
            table[byte as usize] = true;
        }
        Self { table }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }

    /// Number of delimiter bytes in the set.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|&&is_delim| is_delim).count()
    }

    /// Always false: the non-ASCII range is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::non_alphanumeric()
    }
}

impl std::fmt::Debug for DelimiterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ascii: Vec<char> = (0u8..0x80)
            .filter(|&b| self.contains(b) && b.is_ascii_graphic())
            .map(char::from)
            .collect();
        f.debug_struct("DelimiterSet")
            .field("len", &self.len())
            .field("ascii_graphic", &ascii)
            .finish()
    }
}
