//! Deterministic decorative icon per project name.
//!
//! Stored configs already contain icons produced by this exact scheme, so the
//! hash, the token order and the duplicate entries in [`ICON_TOKENS`] must not
//! change.

/// Animal tokens, indexed by the name hash.
pub const ICON_TOKENS: [&str; 86] = [
    "🦁", "🐯", "🐻", "🐼", "🐨", "🐵", "🐶", "🐺", "🦊", "🦝", //
    "🐱", "🦁", "🐴", "🦄", "🦓", "🦌", "🐮", "🐷", "🐗", "🐭", //
    "🐹", "🐰", "🐇", "🐿️", "🦔", "🦇", "🐻‍❄️", "🐨", "🐼", "🦥", //
    "🦦", "🦨", "🦘", "🦡", "🐾", "🦃", "🐔", "🐓", "🐣", "🐤", //
    "🐥", "🐦", "🐧", "🕊️", "🦅", "🦆", "🦢", "🦉", "🦤", "🪶", //
    "🦩", "🦚", "🦜", "🐸", "🐊", "🐢", "🦎", "🐍", "🐲", "🐉", //
    "🦕", "🦖", "🐳", "🐋", "🐬", "🦭", "🐟", "🐠", "🐡", "🦈", //
    "🐙", "🐚", "🪸", "🐌", "🦋", "🐛", "🐝", "🪲", "🐞", "🦗", //
    "🕷️", "🦂", "🦟", "🪰", "🪱", "🦠",
];

/// `hash = hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits.
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Icon token for a project name.
pub fn icon_for(name: &str) -> &'static str {
    // unsigned_abs keeps i32::MIN at 2^31 instead of overflowing.
    let index = name_hash(name).unsigned_abs() as usize % ICON_TOKENS.len();
    ICON_TOKENS[index]
}
