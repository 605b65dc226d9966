use memchr::memmem;
use regex::bytes::Regex;

/// Returns true if `needle` occurs anywhere in `haystack`.
#[inline]
pub fn contains(haystack: &[u8], needle: &str) -> bool {
    memmem::find(haystack, needle.as_bytes()).is_some()
}

/// Returns true if any of the `needles` occurs in `haystack`.
#[inline]
pub fn contains_any(haystack: &[u8], needles: &[&str]) -> bool {
    needles.iter().any(|needle| contains(haystack, needle))
}

/// Byte offset of the first occurrence of `needle` at or after `from`.
#[inline]
pub fn find_from(haystack: &[u8], needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    memmem::find(&haystack[from..], needle.as_bytes()).map(|pos| pos + from)
}

/// Line matcher used by the search transform
pub trait PatternMatcher {
    fn is_match(&self, text: &[u8]) -> bool;
}

/// SIMD-accelerated literal matcher using memchr crate
pub struct SimdLiteralMatcher {
    finder: memmem::Finder<'static>,
}

impl SimdLiteralMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            finder: memmem::Finder::new(pattern.as_bytes()).into_owned(),
        }
    }
}

impl PatternMatcher for SimdLiteralMatcher {
    fn is_match(&self, text: &[u8]) -> bool {
        self.finder.find(text).is_some()
    }
}

/// Plain substring matcher for builds without SIMD acceleration
pub struct LiteralMatcher {
    pattern: Vec<u8>,
}

impl LiteralMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.as_bytes().to_vec(),
        }
    }
}

impl PatternMatcher for LiteralMatcher {
    fn is_match(&self, text: &[u8]) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        text.windows(self.pattern.len()).any(|w| w == self.pattern.as_slice())
    }
}

pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl PatternMatcher for RegexMatcher {
    fn is_match(&self, text: &[u8]) -> bool {
        self.regex.is_match(text)
    }
}

/// Factory for creating the most appropriate pattern matcher based on the pattern.
pub struct PatternMatcherFactory;

impl PatternMatcherFactory {
    /// Creates the most optimized pattern matcher for the given pattern.
    ///
    /// This will automatically select between:
    /// - SIMD-accelerated literal matcher for simple patterns
    /// - Standard literal matcher for simple patterns (feature disabled)
    /// - Regex matcher for complex patterns
    pub fn create(pattern: &str) -> Result<Box<dyn PatternMatcher + Send + Sync>, regex::Error> {
        if Self::is_complex_pattern(pattern) {
            return Ok(Box::new(RegexMatcher::new(pattern)?));
        }

        #[cfg(feature = "simd_acceleration")]
        {
            Ok(Box::new(SimdLiteralMatcher::new(pattern)))
        }

        #[cfg(not(feature = "simd_acceleration"))]
        {
            Ok(Box::new(LiteralMatcher::new(pattern)))
        }
    }

    /// Determines if a pattern is complex and requires regex capabilities
    fn is_complex_pattern(pattern: &str) -> bool {
        pattern.contains(|c: char| {
            matches!(
                c,
                '*' | '?' | '[' | '(' | '|' | '+' | '.' | '^' | '$' | '\\'
            )
        })
    }
}

// SIMD-accelerated line processing utilities
pub mod line_processing {
    use memchr::memchr;

    /// One physical line of a buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RawLine<'a> {
        /// 1-based ordinal, counting blank lines too
        pub number: u32,
        pub start: usize,
        /// Exclusive end, before the `\n` and any `\r` preceding it
        pub end: usize,
        pub text: &'a [u8],
    }

    /// Iterates the lines of a buffer, splitting on `\n` and stripping one
    /// trailing `\r`. Blank lines are yielded too; callers decide what to skip.
    pub struct Lines<'a> {
        buffer: &'a [u8],
        pos: usize,
        number: u32,
    }

    impl<'a> Iterator for Lines<'a> {
        type Item = RawLine<'a>;

        fn next(&mut self) -> Option<Self::Item> {
            if self.pos >= self.buffer.len() {
                return None;
            }

            let start = self.pos;
            let newline = memchr(b'\n', &self.buffer[start..])
                .map(|offset| start + offset)
                .unwrap_or(self.buffer.len());

            let mut end = newline;
            if end > start && self.buffer[end - 1] == b'\r' {
                end -= 1;
            }

            self.pos = newline + 1;
            self.number = self.number.saturating_add(1);

            Some(RawLine {
                number: self.number,
                start,
                end,
                text: &self.buffer[start..end],
            })
        }
    }

    pub fn lines(buffer: &[u8]) -> Lines<'_> {
        Lines {
            buffer,
            pos: 0,
            number: 0,
        }
    }

    /// Count lines in a buffer quickly
    pub fn count_lines(buffer: &[u8]) -> usize {
        memchr::memchr_iter(b'\n', buffer).count()
            + if buffer.is_empty() || buffer[buffer.len() - 1] == b'\n' {
                0
            } else {
                1
            }
    }
}
