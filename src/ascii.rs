/// Lowercase an ASCII letter; every other byte passes through unchanged.
pub fn fold_case(byte: u8) -> u8 {
    match byte {
        b'A'..=b'Z' => byte - b'A' + b'a',
        _ => byte,
    }
}

/// Alphabet value of an ASCII letter: 1..=26 for lowercase, 27..=52 for
/// uppercase, `None` for everything else.
pub fn letter_value(byte: u8) -> Option<u8> {
    match byte {
        b'a'..=b'z' => Some(byte - b'a' + 1),
        b'A'..=b'Z' => Some(byte - b'A' + 27),
        _ => None,
    }
}

/// Palindrome check over only the ASCII alphanumeric bytes of `s`, case
/// folded. Punctuation, whitespace, and non-ASCII bytes are skipped. A
/// string with nothing left after filtering counts as a palindrome.
pub fn is_clean_palindrome(s: &str) -> bool {
    let mut significant = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(fold_case);

    while let (Some(front), Some(back)) = (significant.next(), significant.next_back()) {
        if front != back {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn folds_only_letters() {
        assert_eq!(fold_case(b'A'), b'a');
        assert_eq!(fold_case(b'Z'), b'z');
        assert_eq!(fold_case(b'a'), b'a');
        assert_eq!(fold_case(b'3'), b'3');
        assert_eq!(fold_case(b'['), b'[');
    }

    #[test]
    fn letter_values() {
        assert_eq!(letter_value(b'a'), Some(1));
        assert_eq!(letter_value(b'z'), Some(26));
        assert_eq!(letter_value(b'A'), Some(27));
        assert_eq!(letter_value(b'Z'), Some(52));
        assert_eq!(letter_value(b'0'), None);
        assert_eq!(letter_value(b' '), None);
    }

    #[test]
    fn clean_palindromes() {
        assert!(is_clean_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_clean_palindrome("No 'x' in Nixon"));
        assert!(!is_clean_palindrome("race a car"));
        assert!(is_clean_palindrome(""));
        assert!(is_clean_palindrome(".,!"));
    }

    proptest! {
        #[test]
        fn fold_case_is_idempotent(byte: u8) {
            prop_assert_eq!(fold_case(fold_case(byte)), fold_case(byte));
        }

        #[test]
        fn letter_value_covers_exactly_the_letters(byte: u8) {
            prop_assert_eq!(letter_value(byte).is_some(), byte.is_ascii_alphabetic());
        }

        #[test]
        fn clean_palindrome_matches_filtered_reversal(s in "[ -~]{0,32}") {
            let filtered: Vec<u8> = s
                .bytes()
                .filter(u8::is_ascii_alphanumeric)
                .map(fold_case)
                .collect();
            let reversed: Vec<u8> = filtered.iter().rev().copied().collect();

            prop_assert_eq!(is_clean_palindrome(&s), filtered == reversed);
        }
    }
}
