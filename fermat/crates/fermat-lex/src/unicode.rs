//! Character classes used by the lexer.
//!
//! Letters and digits are classified by Unicode general category: any `L*`
//! category is a letter and `Nd` is a decimal digit.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks if a character is skipped between tokens.
///
/// Only the six ASCII whitespace characters count: space, tab, vertical
/// tab, form feed, carriage return and newline.
///
/// # Example
///
/// ```
/// use fermat_lex::unicode::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\u{0B}'));
/// assert!(!is_space('\u{A0}'));  // no-break space
/// ```
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{0B}' | '\u{0C}' | '\r' | '\n')
}

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters:
/// - Unicode letters (including ASCII a-z, A-Z)
/// - Underscore: _
///
/// Letter numbers such as `Ⅻ` and combining marks are not letters.
///
/// # Example
///
/// ```
/// use fermat_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));  // Greek alpha
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// assert!(!is_ident_start('Ⅻ'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// All start characters plus the decimal digits.
///
/// # Example
///
/// ```
/// use fermat_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('.'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

/// Checks if a character is a decimal digit in any script.
///
/// # Example
///
/// ```
/// use fermat_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));   // Arabic-Indic three
/// assert!(!is_digit('½'));
/// ```
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Checks if a character is in one of the letter categories.
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_set() {
        for c in [' ', '\t', '\u{0B}', '\u{0C}', '\r', '\n'] {
            assert!(is_space(c), "{:?} should be space", c);
        }
        for c in ['\u{85}', '\u{A0}', '\u{2003}', 'a', '\0'] {
            assert!(!is_space(c), "{:?} should not be space", c);
        }
    }

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('Ж'));
        assert!(is_ident_continue('Ж'));
        assert!(!is_ident_start('9'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_decimal_digits_in_any_script() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(is_digit('٣')); // Arabic-Indic three
        assert!(is_digit('७')); // Devanagari seven
        assert!(is_digit('９')); // fullwidth nine
        assert!(!is_digit('a'));
        assert!(!is_digit('²'));
        assert!(!is_digit('Ⅻ'));
    }

    #[test]
    fn test_letter_categories() {
        assert!(is_letter('ǅ')); // titlecase
        assert!(is_letter('ʰ')); // modifier
        assert!(is_letter('中'));
        assert!(!is_letter('Ⅻ')); // letter number
        assert!(!is_letter('\u{345}')); // combining ypogegrammeni
        assert!(!is_ident_start('Ⅻ'));
        assert!(!is_ident_start('\u{345}'));
    }

    #[test]
    fn test_ident_continue_takes_unicode_digits() {
        assert!(is_ident_continue('٣'));
        assert!(!is_ident_start('٣'));
    }
}
