//! Lexical highlighting of raw log text.
//!
//! The tokenizer works on the bytes of the text, not on parsed entries, and
//! does not care which dialect the file uses. Every byte that is not a space,
//! tab or line terminator lands in exactly one token, tokens never overlap and
//! they are produced left to right.

use serde::Serialize;

/// Classified kind of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Timestamp,
    Level,
    LevelError,
    LevelWarning,
    LevelInfo,
    LevelDebug,
    Source,
    Message,
    IPAddress,
    HTTPMethod,
    HTTPStatus,
    URL,
    Number,
    Bracket,
    String,
    Separator,
}

impl TokenType {
    /// Stable human-readable name, used for legends
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Timestamp => "Timestamp",
            TokenType::Level => "Level",
            TokenType::LevelError => "Error",
            TokenType::LevelWarning => "Warning",
            TokenType::LevelInfo => "Info",
            TokenType::LevelDebug => "Debug",
            TokenType::Source => "Source",
            TokenType::Message => "Message",
            TokenType::IPAddress => "IP Address",
            TokenType::HTTPMethod => "HTTP Method",
            TokenType::HTTPStatus => "HTTP Status",
            TokenType::URL => "URL",
            TokenType::Number => "Number",
            TokenType::Bracket => "Bracket",
            TokenType::String => "String",
            TokenType::Separator => "Separator",
        }
    }

    /// Colour class a display layer should paint this token with
    pub fn color(&self) -> TokenColor {
        match self {
            TokenType::Bracket | TokenType::Separator => TokenColor::Operator,
            TokenType::String => TokenColor::String,
            TokenType::Number | TokenType::HTTPStatus => TokenColor::Number,
            TokenType::IPAddress | TokenType::HTTPMethod | TokenType::LevelWarning => {
                TokenColor::Keyword2
            }
            TokenType::Timestamp | TokenType::LevelInfo | TokenType::Level => TokenColor::Keyword,
            TokenType::LevelError => TokenColor::Error,
            TokenType::LevelDebug => TokenColor::Comment,
            TokenType::Message | TokenType::Source | TokenType::URL => TokenColor::Word,
        }
    }
}

/// Colour classes understood by the display layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenColor {
    Word,
    Keyword,
    Keyword2,
    String,
    Number,
    Operator,
    Comment,
    Error,
}

impl TokenColor {
    /// ANSI SGR code for terminal rendering
    pub fn ansi(&self) -> &'static str {
        match self {
            TokenColor::Word => "0",
            TokenColor::Keyword => "34",
            TokenColor::Keyword2 => "36",
            TokenColor::String => "32",
            TokenColor::Number => "35",
            TokenColor::Operator => "90",
            TokenColor::Comment => "2",
            TokenColor::Error => "1;31",
        }
    }
}

/// One highlighted span, `start..end` in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenType,
    pub start: usize,
    pub end: usize,
    pub color: TokenColor,
}

/// Receiver for tokens, implemented by whatever renders highlighting
pub trait TokenSink {
    fn append(&mut self, kind: TokenType, start: usize, end: usize, color: TokenColor);
}

impl TokenSink for Vec<Token> {
    fn append(&mut self, kind: TokenType, start: usize, end: usize, color: TokenColor) {
        self.push(Token {
            kind,
            start,
            end,
            color,
        });
    }
}

/// Tokenize `text` into a fresh vector
pub fn tokenize(text: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::new();
    tokenize_into(text, &mut tokens);
    tokens
}

/// Tokenize `text`, handing every span to `sink`
pub fn tokenize_into<S: TokenSink + ?Sized>(text: &[u8], sink: &mut S) {
    let len = text.len();
    let mut pos = 0;

    while pos < len {
        while pos < len && matches!(text[pos], b' ' | b'\t') {
            pos += 1;
        }
        if pos >= len {
            break;
        }

        let start = pos;
        let ch = text[pos];

        let kind = match ch {
            b'\n' | b'\r' => {
                pos += 1;
                if pos < len && matches!((ch, text[pos]), (b'\r', b'\n') | (b'\n', b'\r')) {
                    pos += 1;
                }
                continue;
            }
            b'[' | b']' | b'(' | b')' | b'{' | b'}' | b'<' | b'>' => {
                pos += 1;
                TokenType::Bracket
            }
            b'"' | b'\'' => {
                pos = scan_string(text, pos);
                TokenType::String
            }
            b'0'..=b'9' => {
                let (end, kind) = scan_number(text, pos);
                pos = end;
                kind
            }
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => {
                pos = scan_word(text, pos);
                classify_word(&text[start..pos])
            }
            _ => {
                pos += char_width(text, pos);
                TokenType::Separator
            }
        };

        sink.append(kind, start, pos, kind.color());
    }
}

/// Quoted run up to the matching quote or end of line; a backslash skips
/// the byte after it. Returns the end offset, closing quote included.
fn scan_string(text: &[u8], start: usize) -> usize {
    let len = text.len();
    let quote = text[start];
    let mut pos = start + 1;

    while pos < len && text[pos] != quote && text[pos] != b'\n' && text[pos] != b'\r' {
        if text[pos] == b'\\' && pos + 1 < len {
            pos += 1;
        }
        pos += 1;
    }
    if pos < len && text[pos] == quote {
        pos += 1;
    }
    pos
}

/// Digit-led run, classified as an IP address, timestamp or plain number
fn scan_number(text: &[u8], start: usize) -> (usize, TokenType) {
    let mut pos = start;
    let mut dots = 0;
    let mut has_colon = false;
    let mut has_dash = false;

    while pos < text.len() {
        match text[pos] {
            b'0'..=b'9' | b'/' | b'T' | b'Z' | b'+' => {}
            b'.' => dots += 1,
            b':' => has_colon = true,
            b'-' => has_dash = true,
            _ => break,
        }
        pos += 1;
    }

    let kind = if dots == 3 && !has_colon && !has_dash {
        TokenType::IPAddress
    } else if has_dash || has_colon {
        TokenType::Timestamp
    } else {
        TokenType::Number
    };
    (pos, kind)
}

fn scan_word(text: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < text.len()
        && (text[pos].is_ascii_alphanumeric() || matches!(text[pos], b'_' | b'-' | b'.'))
    {
        pos += 1;
    }
    pos
}

/// Severity names win over HTTP verbs, so `TRACE` is a debug level
fn classify_word(word: &[u8]) -> TokenType {
    let upper = word.to_ascii_uppercase();
    match upper.as_slice() {
        b"ERROR" | b"ERR" | b"ERRO" => TokenType::LevelError,
        b"WARN" | b"WARNING" | b"WRN" => TokenType::LevelWarning,
        b"INFO" | b"INF" | b"INFORMATION" => TokenType::LevelInfo,
        b"DEBUG" | b"DBG" | b"DEBU" | b"TRACE" | b"TRC" => TokenType::LevelDebug,
        b"FATAL" | b"FTL" | b"CRITICAL" | b"CRIT" => TokenType::LevelError,
        b"GET" | b"POST" | b"PUT" | b"DELETE" | b"PATCH" | b"HEAD" | b"OPTIONS" | b"CONNECT"
        | b"HTTP" => TokenType::HTTPMethod,
        _ => TokenType::Message,
    }
}

/// Width of the character starting at `pos`: 1 for ASCII and stray bytes,
/// the full sequence length for a UTF-8 lead byte.
fn char_width(text: &[u8], pos: usize) -> usize {
    let expected = match text[pos] {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    let mut width = 1;
    while width < expected
        && pos + width < text.len()
        && (text[pos + width] & 0xC0) == 0x80
    {
        width += 1;
    }
    width
}
