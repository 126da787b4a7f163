//! Lexer for size tokens.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, separated_pair},
    IResult,
};

/// Parse a run of ASCII digits.
pub fn digits(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit())(input)
}

/// Parse an unsigned decimal number (`50`, `33.33`).
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digits, opt(pair(char('.'), digits)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a fraction (`1/3`) into its numerator and denominator digit runs.
///
/// The runs are left as text; they may be too long for any integer type.
pub fn fraction(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(digits, char('/'), digits)(input)
}

/// Parse a percentage (`50%`), or a bare number that is read as one.
///
/// Returns the number and whether the `%` sign was present.
pub fn percentage(input: &str) -> IResult<&str, (f64, bool)> {
    pair(number, map(opt(char('%')), |sign| sign.is_some()))(input)
}

/// Recognize a complete fraction token.
pub fn full_fraction(input: &str) -> Option<(&str, &str)> {
    all_consuming(fraction)(input).ok().map(|(_, f)| f)
}

/// Recognize a complete percentage token.
pub fn full_percentage(input: &str) -> Option<(f64, bool)> {
    all_consuming(percentage)(input).ok().map(|(_, p)| p)
}
