pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_PIPE: u8 = 124;

/// The symbol written into an aligned sequence wherever the other sequence consumed a residue.
pub const GAP_SYMBOL: u8 = UTF8_DASH;

/// The byte stored at index 0 of every sequence, so that residue `i` lives at index `i`.
pub const PADDING_BYTE: u8 = 255;
