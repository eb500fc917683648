use crate::TextSpan;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"[A-Za-z]+").unwrap();
    static ref TRAILING_WORD: Regex = Regex::new(r"[A-Za-z]+$").unwrap();
}

/// Tokens this short are never flagged.
pub const MAX_EXEMPT_LEN: usize = 2;

/// A maximal run of ASCII letters, lowercased, with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: TextSpan,
}

impl Token {
    fn from_match(m: regex::Match<'_>) -> Self {
        Self {
            text: m.as_str().to_ascii_lowercase(),
            span: TextSpan {
                start: m.start(),
                end: m.end(),
            },
        }
    }
}

/// Every token in `text`, in order of appearance.
pub fn tokens(text: &str) -> Vec<Token> {
    WORD.find_iter(text).map(Token::from_match).collect()
}

/// The token ending exactly at `cursor`, a zero-based char offset.
/// Offsets past the end of the text are treated as the end.
pub fn token_before(text: &str, cursor: usize) -> Option<Token> {
    let end = byte_offset(text, cursor);
    TRAILING_WORD.find(&text[..end]).map(Token::from_match)
}

pub fn is_checkable(token: &str) -> bool {
    token.len() > MAX_EXEMPT_LEN
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// 1-indexed line and column (in chars) of a byte offset.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// The line around a span, clipped to about 20 chars either side.
pub fn context(text: &str, span: &TextSpan) -> String {
    let line_start = text[..span.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[span.end..]
        .find('\n')
        .map(|i| span.end + i)
        .unwrap_or(text.len());

    let before: Vec<char> = text[line_start..span.start].chars().collect();
    let after: Vec<char> = text[span.end..line_end].trim_end_matches('\r').chars().collect();

    let head: String = before[before.len().saturating_sub(20)..].iter().collect();
    let tail: String = after[..after.len().min(20)].iter().collect();
    let snippet = format!("{}{}{}", head, &text[span.start..span.end], tail);

    match (before.len() > 20, after.len() > 20) {
        (true, true) => format!("...{}...", snippet),
        (true, false) => format!("...{}", snippet),
        (false, true) => format!("{}...", snippet),
        (false, false) => snippet,
    }
}
