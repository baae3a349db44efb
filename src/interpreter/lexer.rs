use logos::Logos;

/// Represents one classified token of an expression.
/// A token is a single whitespace-delimited word of the input line: an
/// operand in Roman or decimal notation, or one of the four operator symbols.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Roman numeral tokens, such as `XIV`.
    ///
    /// Any non-empty combination of the seven Roman symbols classifies as a
    /// numeral; well-formedness (for example rejecting `IIII`) is not
    /// checked.
    #[regex(r"[IVXLCDM]+", |lex| lex.slice().to_string())]
    Numeral(String),
    /// Decimal integer tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Classifies a single whitespace-delimited word.
///
/// The word must lex as exactly one token that spans the whole word;
/// anything else, including words that mix digits with letters such as
/// `12X`, yields `None`. The caller decides which parse error the position
/// calls for.
///
/// # Parameters
/// - `word`: One whitespace-delimited word of the input line.
///
/// # Returns
/// - `Some(Token)`: The single token covering the entire word.
/// - `None`: If the word is not exactly one recognizable token.
///
/// # Example
/// ```
/// use romana::interpreter::lexer::{Token, classify_word};
///
/// assert_eq!(classify_word("XIV"), Some(Token::Numeral("XIV".to_string())));
/// assert_eq!(classify_word("42"), Some(Token::Integer(42)));
/// assert_eq!(classify_word("+"), Some(Token::Plus));
/// assert_eq!(classify_word("12X"), None);
/// assert_eq!(classify_word("abc"), None);
/// ```
#[must_use]
pub fn classify_word(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);

    let token = match lexer.next() {
        Some(Ok(token)) => token,
        _ => return None,
    };

    if lexer.next().is_some() {
        return None;
    }

    Some(token)
}

/// Parses a decimal integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits in an `i64`.
/// - `None`: If the literal is too large to represent.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
