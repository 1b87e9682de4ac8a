//! Shell-style glob patterns compiled to anchored regular expressions.
//!
//! Supported syntax: `*` (any run of characters), `?` (one character),
//! `[abc]`, `[a-z]` and `[!abc]`. An unterminated `[` is a literal.
//!
//! Unlike Python's `fnmatch`, a reversed range such as `[z-a]` is not
//! dropped: it makes [`Glob::new`] fail.

use regex::Regex;

#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    regex: Regex,
}

impl Glob {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&translate(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// True when the whole of `name` matches the pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Translate a glob into regex source matching the full string.
pub fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from("(?s)^(?:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(")$");
    out
}

/// Index of the `]` closing a class that opens just before `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    // A `]` right after the opening is part of the set.
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn translate_class(body: &[char]) -> String {
    let mut out = String::from("[");
    let body = match body.split_first() {
        Some(('!', rest)) => {
            out.push('^');
            rest
        }
        _ => body,
    };

    // Every item is emitted as an explicit char or `a-b` range so that a
    // `-` endpoint can't turn into the regex `--` set difference.
    let mut i = 0;
    while i < body.len() {
        push_class_char(&mut out, body[i]);
        if i + 2 < body.len() && body[i + 1] == '-' {
            out.push('-');
            push_class_char(&mut out, body[i + 2]);
            i += 3;
        } else {
            i += 1;
        }
    }
    out.push(']');
    out
}

fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^' | '-') {
        out.push('\\');
    }
    out.push(c);
}
