//! Card field formatting for the mock payment form.
//!
//! These run on every keystroke. They never reject input, they only reshape it.

pub const CARD_NUMBER_MAX_LEN: usize = 19;
pub const EXPIRY_MAX_LEN: usize = 5;
pub const CVC_MAX_LEN: usize = 4;

/// Keep digits only and group them in blocks of four: `4242424242424242` -> `4242 4242 4242 4242`
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep digits only and insert a slash after the month once two digits are present
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 2 {
        return digits;
    }
    let year: String = digits.chars().skip(2).take(2).collect();
    format!("{}/{}", &digits[..2], year)
}
