//! Pure pre-filtering and normalization that sits upstream of the speller (§4.7).
//!
//! Both functions here are the only part of the distilled source's pre-analysis the
//! core keeps ownership of: they're plain string transforms with no file I/O, no
//! dictionary state, and no regex dependency, so they stay inside the rule-synthesis
//! boundary rather than becoming a collaborator concern.

/// Rejects passwords that are unlikely to be reversible: all-digit, or under 25%
/// letters.
pub fn is_reversible_password(password: &str) -> bool {
    let len = password.chars().count();
    if len == 0 {
        return false;
    }

    let digits = password.chars().filter(|c| c.is_numeric()).count();
    if digits == len {
        return false;
    }

    let letters = password.chars().filter(|c| c.is_alphabetic()).count();
    letters >= len / 4
}

/// Substitutes common leet-speak characters with the letters they stand in for.
pub fn leet_normalize(password: &str) -> String {
    password.chars().map(leet_substitute).collect()
}

fn leet_substitute(c: char) -> char {
    match c {
        '1' => 'i',
        '2' => 'z',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '6' => 'b',
        '7' => 't',
        '8' => 'b',
        '9' => 'g',
        '0' => 'o',
        '!' => 'i',
        '|' => 'i',
        '@' => 'a',
        '$' => 's',
        '+' => 't',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_digit_passwords_are_rejected() {
        assert!(!is_reversible_password("123456"));
    }

    #[test]
    fn low_letter_density_passwords_are_rejected() {
        assert!(!is_reversible_password("1a234567"));
    }

    #[test]
    fn mostly_alphabetic_passwords_are_accepted() {
        assert!(is_reversible_password("password1"));
        assert!(is_reversible_password("California"));
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(!is_reversible_password(""));
    }

    #[test]
    fn non_ascii_digits_count_as_digits_not_letters() {
        assert!(!is_reversible_password("٣٣٣٣٣٣"));
    }

    #[test]
    fn leet_normalize_maps_digits_and_symbols_to_letters() {
        assert_eq!(leet_normalize("l33t"), "leet");
        assert_eq!(leet_normalize("p@$$w0rd"), "passsword");
        assert_eq!(leet_normalize("h3ll0"), "hello");
    }

    #[test]
    fn leet_normalize_leaves_plain_letters_alone() {
        assert_eq!(leet_normalize("hello"), "hello");
    }
}
