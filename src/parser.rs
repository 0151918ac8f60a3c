use crate::{
    ast::{Node, RepeatCount},
    error::{PatternError, PatternErrorKind},
    template::{Dialect, MAX_REPEAT},
};

type ParseResult<T> = Result<T, PatternError>;

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    /// Current column (1-indexed, in characters)
    column: usize,
    dialect: Dialect,
    symbol: char,
    nodes: Vec<Node<'a>>,
    /// Byte offset where the pending run of literal text started, if any.
    literal_start: Option<usize>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, dialect: Dialect, symbol: char) -> Self {
        Parser {
            input,
            pos: 0,
            column: 1,
            dialect,
            symbol,
            nodes: Vec::new(),
            literal_start: None,
        }
    }

    #[inline]
    fn make_error(&self, column: usize, kind: PatternErrorKind) -> PatternError {
        PatternError { column, kind }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn advance_char(&mut self, c: char) {
        self.pos += c.len_utf8();
        self.column += 1;
    }

    /// Advances past a token that was already matched against `rest()`.
    fn advance_over(&mut self, token: &str) {
        self.pos += token.len();
        self.column += token.chars().count();
    }

    fn push_literal_char(&mut self, c: char) {
        if self.literal_start.is_none() {
            self.literal_start = Some(self.pos);
        }
        self.advance_char(c);
    }

    fn flush_literal(&mut self) {
        if let Some(start) = self.literal_start.take() {
            if let Some(data) = self.input.get(start..self.pos) {
                self.nodes.push(Node::Literal { data });
            }
        }
    }

    /// Closes any pending literal at the cursor, then consumes `token` as
    /// `node`.
    fn push_token(&mut self, node: Node<'a>, token: &str) {
        self.flush_literal();
        self.advance_over(token);
        self.nodes.push(node);
    }

    fn push_char_token(&mut self, node: Node<'a>, c: char) {
        self.flush_literal();
        self.advance_char(c);
        self.nodes.push(node);
    }

    fn has_subject(&self) -> bool {
        match self.literal_start {
            Some(start) => start < self.pos,
            None => self.nodes.last().is_some_and(Node::is_repeatable),
        }
    }

    /// Removes the single-character subject directly before the cursor.
    ///
    /// Pending literal text is split so that only its last char is repeated.
    fn take_subject(&mut self) -> Option<Node<'a>> {
        if let Some(start) = self.literal_start {
            let text = self.input.get(start..self.pos)?;
            let (last, _) = text.char_indices().next_back()?;
            let (head, subject) = text.split_at(last);
            self.literal_start = None;
            if !head.is_empty() {
                self.nodes.push(Node::Literal { data: head });
            }
            return Some(Node::Literal { data: subject });
        }

        if self.nodes.last().is_some_and(Node::is_repeatable) {
            self.nodes.pop()
        } else {
            None
        }
    }

    fn parse(mut self) -> ParseResult<Vec<Node<'a>>> {
        while let Some(c) = self.peek_char() {
            if c == '[' && self.parse_range()? {
                continue;
            }

            if c == '{' && self.parse_repeat()? {
                continue;
            }

            if self.dialect.has_placeholders() && c == self.symbol {
                self.push_char_token(Node::Digit, c);
            } else if self.dialect.has_placeholders() && c == '!' {
                self.push_char_token(Node::NonZeroDigit, c);
            } else if self.dialect.has_luhn_marker() && c == 'L' {
                self.push_char_token(Node::Luhn, c);
            } else {
                self.push_literal_char(c);
            }
        }

        self.flush_literal();
        Ok(self.nodes)
    }

    /// Parses `[min-max]` at the cursor and pushes a range node.
    ///
    /// Returns `Ok(false)` when the text should be kept literally: an
    /// unterminated bracket, or a non-numeric body outside of strict dialects.
    fn parse_range(&mut self) -> ParseResult<bool> {
        let rest = self.rest();
        let Some(close) = rest.find(']') else {
            return Ok(false);
        };
        let (Some(token), Some(body)) = (rest.get(..=close), rest.get(1..close)) else {
            return Ok(false);
        };

        let Some((min, max)) = parse_bounds(body, '-') else {
            if self.dialect.has_strict_ranges() {
                return Err(self.make_error(
                    self.column,
                    PatternErrorKind::MalformedRange {
                        token: token.to_string(),
                    },
                ));
            }
            return Ok(false);
        };

        if min > max {
            return Err(self.make_error(self.column, PatternErrorKind::InvertedRange { min, max }));
        }

        self.push_token(Node::Range { min, max }, token);
        Ok(true)
    }

    /// Parses `{n}` or `{min,max}` at the cursor and wraps the preceding
    /// subject in a repeat node.
    ///
    /// Returns `Ok(false)` if there is no subject or the braces do not hold a
    /// count, in which case the brace is literal text.
    fn parse_repeat(&mut self) -> ParseResult<bool> {
        if !self.has_subject() {
            return Ok(false);
        }

        let rest = self.rest();
        let Some(close) = rest.find('}') else {
            return Ok(false);
        };
        let (Some(token), Some(body)) = (rest.get(..=close), rest.get(1..close)) else {
            return Ok(false);
        };

        let (count, upper) = if let Some((min, max)) = parse_bounds(body, ',') {
            if min > max {
                return Err(
                    self.make_error(self.column, PatternErrorKind::InvertedRepeat { min, max })
                );
            }
            (RepeatCount::Between { min, max }, max)
        } else if let Some(n) = parse_number(body) {
            (RepeatCount::Exact(n), n)
        } else {
            return Ok(false);
        };

        if upper > MAX_REPEAT {
            return Err(self.make_error(
                self.column,
                PatternErrorKind::RepeatTooLarge {
                    count: upper,
                    limit: MAX_REPEAT,
                },
            ));
        }

        let Some(subject) = self.take_subject() else {
            return Ok(false);
        };
        self.advance_over(token);
        self.nodes.push(Node::Repeat {
            subject: Box::new(subject),
            count,
        });
        Ok(true)
    }
}

/// Parses a non-empty run of ASCII digits.
fn parse_number(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_bounds(body: &str, separator: char) -> Option<(u64, u64)> {
    let (min, max) = body.split_once(separator)?;
    Some((parse_number(min)?, parse_number(max)?))
}

pub(crate) fn tokenize(input: &str, dialect: Dialect, symbol: char) -> ParseResult<Vec<Node<'_>>> {
    if input.is_empty() {
        return Ok(vec![]);
    }
    Parser::new(input, dialect, symbol).parse()
}
