//! Parser for the text between a placeholder's braces
//!
//! ```text
//! placeholder   = "{" [position] [":" formatspec] "}"
//! formatspec    = [fill] [width] [layout]
//! fill          = ALPHA / "0"
//! width         = 1*DIGIT        ; at most 65535
//! layout        = "x"/"X"/"o"/"O"/"b"/"B"/"f"/"F"/"c"/"C"/"p"/"P"
//! ```

use std::fmt;

use crate::error::{Span, TemplateError};

use super::lexer::{lex_specifier, SpecToken};

/// Conversion selected by the trailing layout character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Hex,
    Octal,
    Binary,
    Float,
    Char,
    Pointer,
}

impl Layout {
    /// Map a layout character (either case) to its conversion
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'x' => Some(Self::Hex),
            'o' => Some(Self::Octal),
            'b' => Some(Self::Binary),
            'f' => Some(Self::Float),
            'c' => Some(Self::Char),
            'p' => Some(Self::Pointer),
            _ => None,
        }
    }

    /// The lower-case layout character
    pub fn as_char(self) -> char {
        match self {
            Self::Hex => 'x',
            Self::Octal => 'o',
            Self::Binary => 'b',
            Self::Float => 'f',
            Self::Char => 'c',
            Self::Pointer => 'p',
        }
    }
}

/// Parsed contents of one placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specifier {
    /// Zero-based argument index, explicit or assigned by the scanner
    pub position: usize,
    /// Whether the placeholder spelled out its position
    pub explicit_position: bool,
    pub layout: Option<Layout>,
    /// The layout character was upper case (`X` renders upper-case digits)
    pub uppercase: bool,
    pub width: Option<usize>,
    pub fill: char,
}

impl Default for Specifier {
    fn default() -> Self {
        Self {
            position: 0,
            explicit_position: false,
            layout: None,
            uppercase: false,
            width: None,
            fill: ' ',
        }
    }
}

impl Specifier {
    /// Parse the text between a placeholder's braces
    ///
    /// Error offsets are relative to the start of `text`.
    ///
    /// ```rust
    /// use brace_fmt::parser::{Layout, Specifier};
    ///
    /// let spec = Specifier::parse("1:08x").unwrap();
    /// assert_eq!(spec.position, 1);
    /// assert_eq!(spec.fill, '0');
    /// assert_eq!(spec.width, Some(8));
    /// assert_eq!(spec.layout, Some(Layout::Hex));
    /// ```
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        parse_specifier(text)
    }

    /// Whether the default fill is still in place
    pub fn has_default_fill(&self) -> bool {
        self.fill == ' '
    }

    /// Copy of this specifier with a different layout
    pub fn with_layout(&self, layout: Option<Layout>) -> Self {
        Self {
            layout,
            ..self.clone()
        }
    }
}

impl fmt::Display for Specifier {
    /// Canonical placeholder text (`{1:08x}`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if self.explicit_position {
            write!(f, "{}", self.position)?;
        }
        let has_format = self.width.is_some() || self.layout.is_some();
        if has_format {
            f.write_str(":")?;
        }
        if let Some(width) = self.width {
            if !self.has_default_fill() {
                write!(f, "{}", self.fill)?;
            }
            write!(f, "{}", width)?;
        }
        if let Some(layout) = self.layout {
            let c = layout.as_char();
            write!(f, "{}", if self.uppercase { c.to_ascii_uppercase() } else { c })?;
        }
        f.write_str("}")
    }
}

/// Widest field a placeholder may request
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// One lexed token with its text
struct Piece<'a> {
    token: SpecToken,
    span: Span,
    text: &'a str,
}

impl Piece<'_> {
    fn first_char(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }
}

fn parse_specifier(text: &str) -> Result<Specifier, TemplateError> {
    let mut spec = Specifier::default();
    let mut pieces = lex_specifier(text).map(|(token, span)| Piece {
        token,
        text: &text[span.clone()],
        span,
    });

    // Position: an optional digit run, then ':' or the end
    let mut next = pieces.next();
    if let Some(digits) = next.as_ref().filter(|p| p.token == SpecToken::Digits) {
        spec.position = to_number(digits.text, digits.span.clone())?;
        spec.explicit_position = true;
        next = pieces.next();
    }
    let format_start = match next {
        None => return Ok(spec),
        Some(colon) if colon.token == SpecToken::Colon => colon.span.end,
        Some(other) => {
            return Err(TemplateError::InvalidPositionChar {
                offset: other.span.start,
                found: other.first_char(),
            })
        }
    };

    let section: Vec<Piece<'_>> = pieces.collect();
    let Some(first) = section.first() else {
        return Ok(spec);
    };

    // A lone character is the width digit or the layout
    if text[format_start..].chars().count() == 1 {
        match first.token {
            SpecToken::Digits => spec.width = Some(to_width(first.text, first.span.clone())?),
            SpecToken::Alpha => set_layout(&mut spec, first)?,
            SpecToken::Colon | SpecToken::Other => {
                return Err(TemplateError::InvalidCharAfterColon {
                    offset: first.span.start,
                    found: first.first_char(),
                })
            }
        }
        return Ok(spec);
    }

    let mut rest = &section[1..];
    let width = match first.token {
        SpecToken::Alpha => {
            spec.fill = first.first_char();
            match rest.first() {
                Some(digits) if digits.token == SpecToken::Digits => {
                    rest = &rest[1..];
                    Some((digits.text, digits.span.clone()))
                }
                Some(other) => return Err(invalid_number(other)),
                None => None,
            }
        }
        // A leading zero is the fill; the width starts after it
        SpecToken::Digits if first.text.starts_with('0') => {
            spec.fill = '0';
            if first.text.len() > 1 {
                Some((&first.text[1..], first.span.start + 1..first.span.end))
            } else if let Some(other) = rest.first() {
                return Err(invalid_number(other));
            } else {
                None
            }
        }
        SpecToken::Digits => Some((first.text, first.span.clone())),
        SpecToken::Colon | SpecToken::Other => {
            return Err(TemplateError::InvalidCharAfterColon {
                offset: first.span.start,
                found: first.first_char(),
            })
        }
    };
    if let Some((digits, span)) = width {
        spec.width = Some(to_width(digits, span)?);
    }

    if let [layout, trailing @ ..] = rest {
        set_layout(&mut spec, layout)?;
        if let Some(extra) = trailing.first() {
            return Err(TemplateError::InvalidLayoutChar {
                offset: extra.span.start,
                found: extra.first_char(),
            });
        }
    }

    Ok(spec)
}

fn set_layout(spec: &mut Specifier, piece: &Piece<'_>) -> Result<(), TemplateError> {
    let found = piece.first_char();
    let layout = Layout::from_char(found)
        .filter(|_| piece.token == SpecToken::Alpha)
        .ok_or(TemplateError::InvalidLayoutChar {
            offset: piece.span.start,
            found,
        })?;
    spec.layout = Some(layout);
    spec.uppercase = found.is_ascii_uppercase();
    Ok(())
}

fn invalid_number(piece: &Piece<'_>) -> TemplateError {
    TemplateError::InvalidNumberChar {
        offset: piece.span.start,
        found: piece.first_char(),
    }
}

fn to_width(digits: &str, span: Span) -> Result<usize, TemplateError> {
    let width = to_number(digits, span.clone())?;
    if width > MAX_WIDTH {
        return Err(TemplateError::NumberOverflow { span });
    }
    Ok(width)
}

fn to_number(digits: &str, span: Span) -> Result<usize, TemplateError> {
    let mut value: usize = 0;
    for (i, c) in digits.char_indices() {
        let digit = c.to_digit(10).ok_or(TemplateError::InvalidNumberChar {
            offset: span.start + i,
            found: c,
        })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as usize))
            .ok_or_else(|| TemplateError::NumberOverflow { span: span.clone() })?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Specifier {
        Specifier::parse(text).expect("should parse")
    }

    #[test]
    fn test_empty_specifier() {
        assert_eq!(parse(""), Specifier::default());
    }

    #[test]
    fn test_explicit_position() {
        let spec = parse("12");
        assert_eq!(spec.position, 12);
        assert!(spec.explicit_position);
        assert_eq!(spec.width, None);
        assert_eq!(spec.layout, None);
    }

    #[test]
    fn test_empty_format_section() {
        let spec = parse("0:");
        assert!(spec.explicit_position);
        assert_eq!(spec.width, None);
        assert_eq!(spec.fill, ' ');
        assert_eq!(parse(":"), Specifier::default());
    }

    #[test]
    fn test_layout_only() {
        let spec = parse(":x");
        assert_eq!(spec.layout, Some(Layout::Hex));
        assert!(!spec.uppercase);
        assert!(!spec.explicit_position);

        let spec = parse("2:X");
        assert_eq!(spec.layout, Some(Layout::Hex));
        assert!(spec.uppercase);
        assert_eq!(spec.position, 2);
    }

    #[test]
    fn test_all_layout_chars() {
        for (c, layout) in [
            ('o', Layout::Octal),
            ('B', Layout::Binary),
            ('f', Layout::Float),
            ('C', Layout::Char),
            ('p', Layout::Pointer),
        ] {
            assert_eq!(parse(&format!(":{}", c)).layout, Some(layout));
        }
    }

    #[test]
    fn test_width_and_layout() {
        let spec = parse(":4x");
        assert_eq!(spec.width, Some(4));
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.layout, Some(Layout::Hex));
    }

    #[test]
    fn test_width_only() {
        assert_eq!(parse(":12").width, Some(12));
        assert_eq!(parse(":7").width, Some(7));
        assert_eq!(parse(":0").width, Some(0));
    }

    #[test]
    fn test_zero_fill() {
        let spec = parse("1:08b");
        assert_eq!(spec.position, 1);
        assert_eq!(spec.fill, '0');
        assert_eq!(spec.width, Some(8));
        assert_eq!(spec.layout, Some(Layout::Binary));
    }

    #[test]
    fn test_alpha_fill() {
        let spec = parse(":a5");
        assert_eq!(spec.fill, 'a');
        assert_eq!(spec.width, Some(5));
        assert_eq!(spec.layout, None);

        // A letter in fill position may also be a layout letter
        let spec = parse(":x5o");
        assert_eq!(spec.fill, 'x');
        assert_eq!(spec.layout, Some(Layout::Octal));
    }

    #[test]
    fn test_invalid_position_char() {
        assert_eq!(
            Specifier::parse("1a:x"),
            Err(TemplateError::InvalidPositionChar {
                offset: 1,
                found: 'a'
            })
        );
        assert!(matches!(
            Specifier::parse("x"),
            Err(TemplateError::InvalidPositionChar { offset: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_char_after_colon() {
        assert_eq!(
            Specifier::parse(":-5"),
            Err(TemplateError::InvalidCharAfterColon {
                offset: 1,
                found: '-'
            })
        );
        assert!(matches!(
            Specifier::parse("::"),
            Err(TemplateError::InvalidCharAfterColon { found: ':', .. })
        ));
        assert!(matches!(
            Specifier::parse(":#"),
            Err(TemplateError::InvalidCharAfterColon { found: '#', .. })
        ));
    }

    #[test]
    fn test_invalid_number_char() {
        assert_eq!(
            Specifier::parse(":ax"),
            Err(TemplateError::InvalidNumberChar {
                offset: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_invalid_layout_char() {
        assert_eq!(
            Specifier::parse(":4z"),
            Err(TemplateError::InvalidLayoutChar {
                offset: 2,
                found: 'z'
            })
        );
        assert!(matches!(
            Specifier::parse(":q"),
            Err(TemplateError::InvalidLayoutChar { found: 'q', .. })
        ));
    }

    #[test]
    fn test_trailing_characters_after_layout() {
        assert_eq!(
            Specifier::parse("0:4xy"),
            Err(TemplateError::InvalidLayoutChar {
                offset: 4,
                found: 'y'
            })
        );
        assert!(matches!(
            Specifier::parse(":5:"),
            Err(TemplateError::InvalidLayoutChar { found: ':', .. })
        ));
    }

    #[test]
    fn test_number_overflow() {
        let huge = "99999999999999999999999999";
        assert_eq!(
            Specifier::parse(huge),
            Err(TemplateError::NumberOverflow { span: 0..huge.len() })
        );
    }

    #[test]
    fn test_width_limit() {
        assert_eq!(parse(":65535").width, Some(MAX_WIDTH));
        assert_eq!(
            Specifier::parse(":65536"),
            Err(TemplateError::NumberOverflow { span: 1..6 })
        );
        assert_eq!(
            Specifier::parse("0:99999999999x"),
            Err(TemplateError::NumberOverflow { span: 2..13 })
        );
        // The fill is not part of the number
        assert_eq!(
            Specifier::parse(":070000"),
            Err(TemplateError::NumberOverflow { span: 2..7 })
        );
    }

    #[test]
    fn test_leading_zero_is_fill() {
        assert_eq!(
            Specifier::parse(":0x"),
            Err(TemplateError::InvalidNumberChar {
                offset: 2,
                found: 'x'
            })
        );
        let spec = parse(":00x");
        assert_eq!(spec.fill, '0');
        assert_eq!(spec.width, Some(0));
        assert_eq!(spec.layout, Some(Layout::Hex));
    }

    #[test]
    fn test_non_ascii_offsets_are_bytes() {
        assert_eq!(
            Specifier::parse(":4é"),
            Err(TemplateError::InvalidLayoutChar {
                offset: 2,
                found: 'é'
            })
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        for text in ["", "3", ":x", "1:08b", ":a5", "0:"] {
            assert_eq!(Specifier::parse(text), Specifier::parse(text));
        }
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(parse("").to_string(), "{}");
        assert_eq!(parse("1:08X").to_string(), "{1:08X}");
        assert_eq!(parse(":a5").to_string(), "{:a5}");
        assert_eq!(parse(":c").to_string(), "{:c}");
    }
}
