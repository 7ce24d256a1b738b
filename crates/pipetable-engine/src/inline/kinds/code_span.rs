pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
