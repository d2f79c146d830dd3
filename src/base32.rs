use crate::error::DecodeError;

// RFC 4648 base32 https://datatracker.ietf.org/doc/html/rfc4648#section-6

// 8 symbols of 5 bits fill exactly 5 bytes
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const PADDING: char = '=';

const CHUNK_CHARS: usize = 8;
const BITS_PER_CHAR: usize = 5;

// Trailing '=' counts that can close an 8 character group
const ALLOWED_PADDING: [usize; 5] = [0, 1, 3, 4, 6];

const INVALID: u8 = 0xFF;
static REVERSE_LOOKUP: [u8; 128] = build_reverse_lookup();

const fn build_reverse_lookup() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn symbol_value(c: char) -> Option<u8> {
    match REVERSE_LOOKUP.get(c as usize) {
        Some(&INVALID) | None => None,
        Some(&value) => Some(value),
    }
}

/// Decode a padded or unpadded base32 secret into the raw key bytes.
///
/// Padding is validated strictly: the trailing run of `=` must be one of the
/// lengths a real 8 character group can end with, and `=` may not appear
/// anywhere else. Lowercase letters are rejected.
pub fn decode(secret: &str) -> Result<Vec<u8>, DecodeError> {
    if secret.is_empty() {
        return Err(DecodeError::EmptySecret);
    }

    let padding = secret.chars().rev().take_while(|&c| c == PADDING).count();
    if !ALLOWED_PADDING.contains(&padding) {
        return Err(DecodeError::InvalidPaddingCount(padding));
    }

    let data: Vec<char> = secret.chars().collect();
    let data = &data[..data.len() - padding];
    if let Some(position) = data.iter().position(|&c| c == PADDING) {
        return Err(DecodeError::InvalidPaddingPlacement(position));
    }

    let mut bytes = Vec::with_capacity(data.len() * BITS_PER_CHAR / 8);
    for (chunk_index, chunk) in data.chunks(CHUNK_CHARS).enumerate() {
        let mut buffer: u64 = 0;
        for slot in 0..CHUNK_CHARS {
            // a short final chunk reads as zero bits
            let value = match chunk.get(slot) {
                Some(&c) => symbol_value(c).ok_or(DecodeError::InvalidCharacter {
                    character: c,
                    position: chunk_index * CHUNK_CHARS + slot,
                })?,
                None => 0,
            };
            buffer = buffer << BITS_PER_CHAR | u64::from(value);
        }

        // only whole bytes backed by real symbols are emitted
        let byte_count = chunk.len() * BITS_PER_CHAR / 8;
        for i in 0..byte_count {
            bytes.push((buffer >> (32 - 8 * i)) as u8);
        }
    }

    Ok(bytes)
}
