//! Translation of ECMAScript patterns into the syntax of the engine.
//!
//! The engine follows the syntax and semantics of the `regex` crate, which differ from
//! ECMAScript on several points:
//!
//! - `\d`, `\w` and `\b` only know about ASCII, and `\s` has its own set of chars.
//! - `.`, and `^` and `$` with the `m` flag, know about four line terminators.
//! - `[]`, `[^]`, `\cX`, `\0`, `\v`, `\uHHHH`, legacy octal escapes and identity escapes have
//!   no equivalent.
//! - a `[` inside a class is a literal, and so are unbalanced `]`, `{` and `}`.
//!
//! Those constructs are rewritten into equivalent ones. Literal chars that are not
//! alphanumeric are written as `\x{...}` escapes.
//!
//! Named groups lose their names, which are only tracked by the capture descriptor, and
//! named backreferences become numbered ones. This keeps the engine away from group names it
//! would not accept, such as names containing a `$`.
use std::fmt::Write as _;

use literate_regex_parser::{CaptureDescriptor, Flags};

const DIGIT: &str = "0-9";
const WORD: &str = "0-9A-Za-z_";
const SPACE: &str = "\\x{9}-\\x{D}\\x{20}\\x{A0}\\x{1680}\\x{2000}-\\x{200A}\\x{2028}\\x{2029}\
                     \\x{202F}\\x{205F}\\x{3000}\\x{FEFF}";
const LINE_TERMINATOR: &str = "\\x{A}\\x{D}\\x{2028}\\x{2029}";

const WORD_BOUNDARY: &str =
    "(?:(?<=[0-9A-Za-z_])(?![0-9A-Za-z_])|(?<![0-9A-Za-z_])(?=[0-9A-Za-z_]))";
const NOT_WORD_BOUNDARY: &str =
    "(?:(?<=[0-9A-Za-z_])(?=[0-9A-Za-z_])|(?<![0-9A-Za-z_])(?![0-9A-Za-z_]))";

/// Matches any char.
const ANYTHING: &str = "[\\s\\S]";
/// Never matches.
const NOTHING: &str = "(?!)";

/// Translate a pattern, described by `capture`, into the syntax of the engine.
pub(crate) fn translate(pattern: &str, flags: Flags, capture: &CaptureDescriptor) -> String {
    let mut translator = Translator {
        rest: pattern,
        out: String::with_capacity(pattern.len()),
        class: None,
        capture,
        unicode: flags.unicode() || flags.unicode_sets(),
        unicode_sets: flags.unicode_sets(),
        dot_all: flags.dot_all(),
        multiline: flags.multiline(),
    };

    while let Some(c) = translator.next_char() {
        if translator.class.is_some() {
            translator.class_char(c);
        } else {
            translator.char(c);
        }
    }
    translator.finish()
}

/// Character class being translated.
#[derive(Debug)]
struct Class {
    negated: bool,
    body: String,

    /// Depth of nested classes, only possible with the `v` flag.
    depth: usize,
}

#[derive(Debug)]
struct Translator<'a> {
    /// Part of the pattern left to translate.
    rest: &'a str,
    out: String,

    /// Class being translated, if inside one.
    class: Option<Class>,

    capture: &'a CaptureDescriptor,
    unicode: bool,
    unicode_sets: bool,
    dot_all: bool,
    multiline: bool,
}

impl Translator<'_> {
    fn next_char(&mut self) -> Option<char> {
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn advance(&mut self, len: usize) {
        self.rest = &self.rest[len..];
    }

    /// Where translated text goes: the current class, or the output.
    fn output(&mut self) -> &mut String {
        match &mut self.class {
            Some(class) => &mut class.body,
            None => &mut self.out,
        }
    }

    fn push_str(&mut self, s: &str) {
        self.output().push_str(s);
    }

    fn push_literal(&mut self, c: char) {
        push_literal(self.output(), c);
    }

    /// Push a code point. Lone surrogates cannot appear in a haystack, so they match nothing.
    fn push_code_point(&mut self, value: u32) {
        match char::from_u32(value) {
            Some(c) => self.push_literal(c),
            None if self.class.is_none() => self.push_str(NOTHING),
            None => (),
        }
    }

    /// Push a set of chars such as `\d`, given by its class body.
    fn push_set(&mut self, set: &str, negated: bool) {
        let bare = self.class.is_some() && !negated;
        let out = self.output();
        if bare {
            out.push_str(set);
        } else {
            out.push('[');
            if negated {
                out.push('^');
            }
            out.push_str(set);
            out.push(']');
        }
    }

    fn push_backreference(&mut self, index: usize) {
        let _r = write!(self.output(), "(?:\\{index})");
    }

    /// Translate a char outside of a class.
    fn char(&mut self, c: char) {
        match c {
            '\\' => self.escape(),
            '[' => {
                let negated = match self.rest.strip_prefix('^') {
                    Some(rest) => {
                        self.rest = rest;
                        true
                    }
                    None => false,
                };
                self.class = Some(Class {
                    negated,
                    body: String::new(),
                    depth: 0,
                });
            }
            '(' => self.group(),
            '.' if self.dot_all => self.out.push_str(ANYTHING),
            '.' => {
                self.out.push_str("[^");
                self.out.push_str(LINE_TERMINATOR);
                self.out.push(']');
            }
            '^' if self.multiline => {
                self.out.push_str("(?<![^");
                self.out.push_str(LINE_TERMINATOR);
                self.out.push_str("])");
            }
            '$' if self.multiline => {
                self.out.push_str("(?![^");
                self.out.push_str(LINE_TERMINATOR);
                self.out.push_str("])");
            }
            '{' => match quantifier_len(self.rest) {
                Some(len) => {
                    let (quantifier, rest) = self.rest.split_at(len);
                    self.out.push('{');
                    self.out.push_str(quantifier);
                    self.rest = rest;
                }
                None => self.push_literal('{'),
            },
            '}' | ']' => self.push_literal(c),
            _ => self.out.push(c),
        }
    }

    /// Translate the opening of a group, the `(` being consumed.
    fn group(&mut self) {
        self.out.push('(');

        let Some(rest) = self.rest.strip_prefix("?<") else {
            return;
        };
        let Some(end) = rest.find('>') else {
            return;
        };
        // Lookbehinds and invalid names are not in the descriptor.
        if self.capture.index_of(&rest[..end]).is_some() {
            self.rest = &rest[(end + 1)..];
        }
    }

    /// Translate a char inside a class.
    fn class_char(&mut self, c: char) {
        let unicode_sets = self.unicode_sets;
        let Some(class) = &mut self.class else {
            return;
        };

        match c {
            '\\' => self.escape(),
            ']' if class.depth == 0 => self.close_class(),
            ']' => {
                class.depth -= 1;
                class.body.push(']');
            }
            '[' if unicode_sets => {
                class.depth += 1;
                class.body.push('[');
            }
            // Set operators of the engine, literals in ECMAScript.
            '[' | '&' | '~' if !unicode_sets => push_literal(&mut class.body, c),
            '-' if !unicode_sets && class.body.ends_with('-') => push_literal(&mut class.body, c),
            _ => class.body.push(c),
        }
    }

    fn close_class(&mut self) {
        let Some(class) = self.class.take() else {
            return;
        };

        if class.body.is_empty() {
            self.out
                .push_str(if class.negated { ANYTHING } else { NOTHING });
        } else {
            self.out.push('[');
            if class.negated {
                self.out.push('^');
            }
            self.out.push_str(&class.body);
            self.out.push(']');
        }
    }

    /// Translate an escape, the `\` being consumed.
    fn escape(&mut self) {
        let in_class = self.class.is_some();
        let Some(c) = self.next_char() else {
            // Rejected by the engine.
            self.push_str("\\");
            return;
        };

        match c {
            'd' => self.push_set(DIGIT, false),
            'D' => self.push_set(DIGIT, true),
            'w' => self.push_set(WORD, false),
            'W' => self.push_set(WORD, true),
            's' => self.push_set(SPACE, false),
            'S' => self.push_set(SPACE, true),
            'b' if in_class => self.push_literal('\u{8}'),
            'b' => self.push_str(WORD_BOUNDARY),
            'B' if !in_class => self.push_str(NOT_WORD_BOUNDARY),
            't' => self.push_literal('\t'),
            'n' => self.push_literal('\n'),
            'v' => self.push_literal('\u{B}'),
            'f' => self.push_literal('\u{C}'),
            'r' => self.push_literal('\r'),
            'c' => self.control_escape(),
            'x' => match hex_prefix(self.rest, 2) {
                Some(value) => {
                    self.advance(2);
                    self.push_code_point(value);
                }
                None => self.push_literal('x'),
            },
            'u' => self.unicode_escape(),
            'k' if !in_class => self.named_backreference(),
            '1'..='9' if !in_class => self.backreference(c),
            '0'..='7' => self.legacy_octal(c),
            'p' | 'P' if self.unicode && self.rest.starts_with('{') => {
                match self.rest.find('}') {
                    Some(end) => {
                        let (property, rest) = self.rest.split_at(end + 1);
                        let out = self.output();
                        out.push('\\');
                        out.push(c);
                        out.push_str(property);
                        self.rest = rest;
                    }
                    None => self.push_literal(c),
                }
            }
            _ => self.push_literal(c),
        }
    }

    /// `\cX`, the `c` being consumed.
    fn control_escape(&mut self) {
        match self.rest.chars().next() {
            Some(letter) if letter.is_ascii_alphabetic() => {
                self.advance(1);
                self.push_code_point(u32::from(letter) % 32);
            }
            _ => {
                self.push_literal('\\');
                self.push_literal('c');
            }
        }
    }

    /// `\uHHHH`, `\uHHHH\uHHHH` surrogate pairs and `\u{...}`, the `u` being consumed.
    fn unicode_escape(&mut self) {
        if self.unicode && self.rest.starts_with('{') {
            let value = self
                .rest
                .find('}')
                .and_then(|end| parse_hex(&self.rest[1..end]).map(|value| (end, value)));
            match value {
                Some((end, value)) => {
                    self.advance(end + 1);
                    self.push_code_point(value);
                }
                None => self.push_literal('u'),
            }
            return;
        }

        let Some(value) = hex_prefix(self.rest, 4) else {
            self.push_literal('u');
            return;
        };
        self.advance(4);

        if (0xD800..0xDC00).contains(&value) {
            let low = self
                .rest
                .strip_prefix("\\u")
                .and_then(|rest| hex_prefix(rest, 4))
                .filter(|low| (0xDC00..0xE000).contains(low));
            if let Some(low) = low {
                self.advance(6);
                self.push_code_point(0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00));
                return;
            }
        }
        self.push_code_point(value);
    }

    /// `\k<name>`, the `k` being consumed.
    fn named_backreference(&mut self) {
        let name = self
            .rest
            .strip_prefix('<')
            .and_then(|rest| rest.find('>').map(|end| &rest[..end]));
        let target = name.and_then(|name| {
            self.capture
                .index_of(name)
                .map(|index| (name.len(), index))
        });

        match target {
            Some((len, index)) => {
                self.advance(len + 2);
                self.push_backreference(index);
            }
            // Without named groups, this is an identity escape.
            None if !self.unicode && !self.capture.has_named_groups() => self.push_literal('k'),
            // Rejected by the engine.
            None => self.push_str("\\k"),
        }
    }

    /// `\N`, the first digit being consumed.
    ///
    /// A number greater than the number of groups is a legacy octal escape.
    fn backreference(&mut self, first: char) {
        let len = self.rest.bytes().take_while(u8::is_ascii_digit).count();
        let number = format!("{first}{}", &self.rest[..len]).parse::<usize>().ok();

        match number {
            Some(index) if index <= self.capture.group_count => {
                self.advance(len);
                self.push_backreference(index);
            }
            _ => self.legacy_octal(first),
        }
    }

    /// Legacy octal escape, from `\0` to `\377`, the first digit being consumed.
    fn legacy_octal(&mut self, first: char) {
        let Some(mut value) = first.to_digit(8) else {
            self.push_literal(first);
            return;
        };

        for _ in 0..2 {
            match self.rest.chars().next().and_then(|c| c.to_digit(8)) {
                Some(digit) if value * 8 + digit <= 0o377 => {
                    value = value * 8 + digit;
                    self.advance(1);
                }
                _ => break,
            }
        }
        self.push_code_point(value);
    }

    fn finish(mut self) -> String {
        // An unterminated class is rejected by the engine.
        if let Some(class) = self.class.take() {
            self.out.push('[');
            if class.negated {
                self.out.push('^');
            }
            self.out.push_str(&class.body);
        }
        self.out
    }
}

fn push_literal(out: &mut String, c: char) {
    if c.is_alphanumeric() || c == '_' {
        out.push(c);
    } else {
        let _r = write!(out, "\\x{{{:X}}}", u32::from(c));
    }
}

/// Length of a `{n}`, `{n,}` or `{n,m}` quantifier, the `{` being consumed.
fn quantifier_len(rest: &str) -> Option<usize> {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let mut len = digits(rest);
    if len == 0 {
        return None;
    }
    if rest[len..].starts_with(',') {
        len += 1;
        len += digits(&rest[len..]);
    }
    rest[len..].starts_with('}').then_some(len + 1)
}

fn hex_prefix(s: &str, len: usize) -> Option<u32> {
    s.get(..len).and_then(parse_hex)
}

fn parse_hex(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}
