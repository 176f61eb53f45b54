//! GML tokeniser.
//!
//! Recognises keys, integers, reals (including `INF` and `NAN` with an
//! optional sign), double-quoted strings with `&...;` entities, list
//! brackets, and `#` line comments.

use std::{iter::Peekable, str::Chars};

use crate::errors::GmlError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Key(String),
    Int(i64),
    Real(f64),
    Str(String),
    Open,
    Close,
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Key(key) => format!("key `{key}`"),
            Self::Int(value) => format!("integer {value}"),
            Self::Real(value) => format!("real {value}"),
            Self::Str(value) => format!("string {value:?}"),
            Self::Open => "`[`".to_owned(),
            Self::Close => "`]`".to_owned(),
        }
    }
}

/// A token and the line it started on.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub line: usize,
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Spanned>, GmlError> {
    let mut lexer = Lexer {
        chars: input.chars().peekable(),
        line: 1,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Lexer<'_> {
    fn next_token(&mut self) -> Result<Option<Spanned>, GmlError> {
        self.skip_trivia();
        let line = self.line;
        let Some(&first) = self.chars.peek() else {
            return Ok(None);
        };
        let token = match first {
            '[' => {
                self.chars.next();
                Token::Open
            }
            ']' => {
                self.chars.next();
                Token::Close
            }
            '"' => {
                self.chars.next();
                Token::Str(self.string(line)?)
            }
            c if c.is_ascii_alphabetic() || c == '_' => Token::Key(self.word()),
            c if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => self.number(line)?,
            other => return Err(GmlError::UnexpectedCharacter { line, found: other }),
        };
        Ok(Some(Spanned { token, line }))
    }

    fn skip_trivia(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '#' {
                while self.chars.next_if(|&next| next != '\n').is_some() {}
            } else if c.is_whitespace() {
                if c == '\n' {
                    self.line += 1;
                }
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self
            .chars
            .next_if(|&c| c.is_ascii_alphanumeric() || c == '_')
        {
            word.push(c);
        }
        word
    }

    fn number(&mut self, line: usize) -> Result<Token, GmlError> {
        let mut text = String::new();
        if let Some(sign) = self.chars.next_if(|&c| matches!(c, '+' | '-')) {
            text.push(sign);
        }
        if self.chars.peek().is_some_and(char::is_ascii_alphabetic) {
            text.push_str(&self.word());
            return special_real(&text)
                .map(Token::Real)
                .ok_or(GmlError::InvalidNumber { line, text });
        }
        let mut is_real = false;
        while let Some(c) = self
            .chars
            .next_if(|&c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E'))
        {
            is_real |= !c.is_ascii_digit();
            text.push(c);
            if matches!(c, 'e' | 'E') {
                if let Some(sign) = self.chars.next_if(|&s| matches!(s, '+' | '-')) {
                    text.push(sign);
                }
            }
        }
        let parsed = if is_real {
            text.parse::<f64>().ok().map(Token::Real)
        } else {
            text.parse::<i64>().ok().map(Token::Int)
        };
        parsed.ok_or(GmlError::InvalidNumber { line, text })
    }

    fn string(&mut self, line: usize) -> Result<String, GmlError> {
        let mut raw = String::new();
        loop {
            match self.chars.next() {
                Some('"') => return Ok(unescape(&raw)),
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    raw.push(c);
                }
                None => return Err(GmlError::UnterminatedString { line }),
            }
        }
    }
}

/// Parses `INF`/`NAN` with an optional sign.
pub(crate) fn special_real(text: &str) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let value = match body {
        "INF" => f64::INFINITY,
        "NAN" => f64::NAN,
        _ => return None,
    };
    Some(if negative { -value } else { value })
}

/// Decodes `&name;` and `&#N;`/`&#xN;` entities; unknown entities are kept
/// verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        let (before, tail) = rest.split_at(start);
        out.push_str(before);
        let decoded = tail
            .find(';')
            .and_then(|end| tail.get(1..end).and_then(decode_entity).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = tail.get(end + 1..).unwrap_or_default();
            }
            None => {
                out.push('&');
                rest = tail.get(1..).unwrap_or_default();
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "quot" => Some('"'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("input must tokenize")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_nested_lists() {
        assert_eq!(
            tokens("graph [ node [ id 0 label \"a\" ] ]"),
            vec![
                Token::Key("graph".into()),
                Token::Open,
                Token::Key("node".into()),
                Token::Open,
                Token::Key("id".into()),
                Token::Int(0),
                Token::Key("label".into()),
                Token::Str("a".into()),
                Token::Close,
                Token::Close,
            ]
        );
    }

    #[rstest]
    #[case("42", Token::Int(42))]
    #[case("-7", Token::Int(-7))]
    #[case("0.5", Token::Real(0.5))]
    #[case("-1.25", Token::Real(-1.25))]
    #[case("1e-7", Token::Real(1e-7))]
    #[case("2.5E+3", Token::Real(2500.0))]
    #[case("+INF", Token::Real(f64::INFINITY))]
    #[case("-INF", Token::Real(f64::NEG_INFINITY))]
    fn tokenizes_numbers(#[case] input: &str, #[case] expected: Token) {
        assert_eq!(tokens(input), vec![expected]);
    }

    #[test]
    fn signed_nan_is_real() {
        let parsed = tokens("-NAN");
        assert!(matches!(parsed.as_slice(), [Token::Real(value)] if value.is_nan()));
    }

    #[rstest]
    #[case("\"a &amp; b\"", "a & b")]
    #[case("\"say &quot;hi&quot;\"", "say \"hi\"")]
    #[case("\"caf&#233;\"", "café")]
    #[case("\"&#x41;\"", "A")]
    #[case("\"&bogus; &\"", "&bogus; &")]
    fn decodes_entities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(tokens(input), vec![Token::Str(expected.to_owned())]);
    }

    #[test]
    fn skips_comments_and_counts_lines() {
        let spanned = tokenize("# header\ngraph # trailing\n[\n]").expect("input must tokenize");
        let lines: Vec<usize> = spanned.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
    }

    #[rstest]
    #[case::unterminated("\"open", "unterminated string")]
    #[case::bad_char("graph { }", "unexpected character")]
    #[case::bad_number("1.2.3", "invalid number")]
    #[case::bad_word("-abc", "invalid number")]
    fn reports_lexical_errors(#[case] input: &str, #[case] fragment: &str) {
        let err = tokenize(input).expect_err("input must be rejected");
        assert!(err.to_string().contains(fragment), "{err}");
    }
}
