pub const CODE_DIGITS: usize = 6;

// Left pad the decimal form of `value` with `pad` up to `length` chars.
// Longer numbers are returned whole.
pub fn pad_from_left(value: u32, length: usize, pad: char) -> String {
    let digits = value.to_string();
    let fill = length.saturating_sub(digits.len());

    let mut padded = String::with_capacity(fill + digits.len());
    padded.extend(std::iter::repeat(pad).take(fill));
    padded.push_str(&digits);
    padded
}

// Render an OTP value as a fixed width code
pub fn format_code(value: u32) -> String {
    pad_from_left(value, CODE_DIGITS, '0')
}
