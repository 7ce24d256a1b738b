pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Backslash escapes apply to ASCII punctuation only; `\a` is two
    /// literal characters.
    #[must_use]
    pub fn escapable(byte: u8) -> bool {
        byte.is_ascii_punctuation()
    }
}
