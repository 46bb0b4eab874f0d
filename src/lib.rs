//! Scanning patterns for slices and strings: fixed and dynamic sliding
//! windows, converging two-pointer scans, ASCII range arithmetic, frequency
//! counting, and digit-reversal arithmetic.
//!
//! The centerpiece is [`longest_unique_window`], the expand/shrink window
//! scan that finds the longest duplicate-free run of a sequence in a single
//! amortized-O(n) pass. Every function here is pure and total over its
//! input; the one operation that can genuinely fail ([`reverse_digits`],
//! whose result may not fit its integer type) says so in its signature.

pub mod ascii;
pub mod counter;
pub mod digits;
pub mod pointers;
pub mod window;

pub use ascii::{fold_case, is_clean_palindrome, letter_value};
pub use counter::{are_anagrams, Counter};
pub use digits::{is_digit_palindrome, reverse_digits, DigitOverflow};
pub use pointers::{is_palindrome, pair_with_sum, reverse_in_place};
pub use window::{
    all_distinct, first_distinct_window, longest_unique_substring, longest_unique_window,
    max_window_sum,
};
