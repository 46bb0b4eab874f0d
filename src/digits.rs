use thiserror::Error;

/// The reversal of an input's digits doesn't fit in the input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reversing the digits of {0} overflows i32")]
pub struct DigitOverflow(pub i32);

/// Reverse the decimal digits of `n`, keeping its sign. `120` reverses to
/// `21`: the zeros that would lead the reversal are dropped by the
/// arithmetic itself.
///
/// Negative inputs accumulate through the same negative-remainder loop, so
/// `i32::MIN` needs no special case; it simply overflows, like any other
/// input whose reversal falls outside `i32`.
pub fn reverse_digits(n: i32) -> Result<i32, DigitOverflow> {
    let mut remaining = n;
    let mut reversed: i32 = 0;

    while remaining != 0 {
        let digit = remaining % 10;
        remaining /= 10;

        reversed = reversed
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(DigitOverflow(n))?;
    }

    Ok(reversed)
}

/// True if the decimal digits of `n` read the same in both directions.
///
/// Builds the reversal of only the low half of the number and compares it
/// against the remaining high half, so the intermediate value stays small
/// enough that the arithmetic cannot overflow.
pub fn is_digit_palindrome(n: u64) -> bool {
    // a trailing zero can never be matched by a leading one
    if n != 0 && n % 10 == 0 {
        return false;
    }

    let mut high = n;
    let mut low_reversed: u64 = 0;

    while high > low_reversed {
        low_reversed = low_reversed * 10 + high % 10;
        high /= 10;
    }

    high == low_reversed || high == low_reversed / 10
}
