//! Lexers for templates and for the text inside a placeholder, using logos

use logos::Logos;

use crate::error::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Text copied to the output verbatim. A stray `}` is ordinary text.
    #[regex(r"[^{]+")]
    Literal,

    /// `{` ... `}` with no `}` in between
    #[regex(r"\{[^}]*\}")]
    Placeholder,
}

/// Lex a template into tokens with spans
///
/// An unterminated `{` comes back as `Err(())` spanning from the brace.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

/// Tokens of the text between a placeholder's braces
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecToken {
    #[regex(r"[0-9]+")]
    Digits,

    #[token(":")]
    Colon,

    /// A single ASCII letter: a fill or a layout
    #[regex(r"[A-Za-z]")]
    Alpha,

    /// Any other single character
    #[regex(r"[^0-9A-Za-z:]")]
    Other,
}

/// Lex specifier text into tokens with spans
///
/// Every character belongs to some token, so the stream has no errors.
pub fn lex_specifier(input: &str) -> impl Iterator<Item = (SpecToken, Span)> + '_ {
    SpecToken::lexer(input)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(SpecToken::Other), span))
}
