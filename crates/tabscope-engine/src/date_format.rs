//! Candidate date formats.
//!
//! A [`DateFormat`] pairs the pattern users see (`yyyy-MM-dd`) with the
//! strptime pattern the engine parses with (`%Y-%m-%d`).

use std::borrow::Cow;
use std::fmt;

use crate::error::{EngineError, Result};

/// One date pattern, in user and engine notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    pattern: Cow<'static, str>,
    strptime: Cow<'static, str>,
}

impl DateFormat {
    pub const ISO: DateFormat = DateFormat::builtin("yyyy-MM-dd", "%Y-%m-%d");
    pub const US: DateFormat = DateFormat::builtin("MM/dd/yyyy", "%m/%d/%Y");
    pub const DAY_FIRST: DateFormat = DateFormat::builtin("dd-MM-yyyy", "%d-%m-%Y");
    pub const SLASHED_ISO: DateFormat = DateFormat::builtin("yyyy/MM/dd", "%Y/%m/%d");

    /// Formats tried by the date detector, highest priority first.
    pub const DEFAULT_CANDIDATES: &'static [DateFormat] =
        &[Self::ISO, Self::US, Self::DAY_FIRST, Self::SLASHED_ISO];

    const fn builtin(pattern: &'static str, strptime: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            strptime: Cow::Borrowed(strptime),
        }
    }

    /// Builds a format from a `yyyy`/`MM`/`dd` style pattern.
    ///
    /// Supported fields: `yyyy`, `yy`, `M`, `MM`, `MMM`, `MMMM`, `d`, `dd`.
    /// Text in single quotes is literal, `''` is a quote, and any other
    /// non-letter character is copied as is. The pattern must name a year, a
    /// month, and a day.
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let invalid = |reason: String| EngineError::InvalidDateFormat {
            pattern: pattern.to_string(),
            reason,
        };

        let chars: Vec<char> = pattern.chars().collect();
        let mut strptime = String::with_capacity(pattern.len() + 4);
        let (mut year, mut month, mut day) = (false, false, false);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if ch == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    strptime.push('\'');
                    i += 2;
                    continue;
                }
                let Some(close) = chars[i + 1..].iter().position(|&c| c == '\'') else {
                    return Err(invalid("unterminated quote".to_string()));
                };
                for &literal in &chars[i + 1..i + 1 + close] {
                    push_literal(&mut strptime, literal);
                }
                i += close + 2;
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                push_literal(&mut strptime, ch);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&c| c == ch).count();
            let field = match (ch, run) {
                ('y', 4) => {
                    year = true;
                    "%Y"
                }
                ('y', 2) => {
                    year = true;
                    "%y"
                }
                ('M', 1 | 2) => {
                    month = true;
                    "%m"
                }
                ('M', 3) => {
                    month = true;
                    "%b"
                }
                ('M', 4) => {
                    month = true;
                    "%B"
                }
                ('d', 1 | 2) => {
                    day = true;
                    "%d"
                }
                _ => {
                    let token: String = chars[i..i + run].iter().collect();
                    return Err(invalid(format!("unsupported field '{token}'")));
                }
            };
            strptime.push_str(field);
            i += run;
        }

        if !(year && month && day) {
            return Err(invalid("pattern must contain year, month, and day".to_string()));
        }

        Ok(Self {
            pattern: Cow::Owned(pattern.to_string()),
            strptime: Cow::Owned(strptime),
        })
    }

    /// The pattern in `yyyy-MM-dd` notation.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern in strptime notation.
    pub fn strptime(&self) -> &str {
        &self.strptime
    }
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
