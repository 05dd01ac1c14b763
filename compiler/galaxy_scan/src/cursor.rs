//! Cursor state machine over an expression buffer.
//!
//! The cursor advances through the buffer one character at a time and
//! tracks which of three contexts it is in:
//!
//! - [`Context::Code`]: bare expression code. Whitespace is insignificant
//!   and never reaches a visitor.
//! - [`Context::QuotedString`]: inside `'...'` or `"..."`.
//! - [`Context::TemplateLiteral`]: inside `` `...` ``, where `${` opens an
//!   interpolation that switches back to code until its matching `}`.
//!
//! # Interpolation Tracking
//!
//! `brace_depth` counts unmatched `{` seen in code. Opening `${` pushes the
//! current depth onto `brace_stack` before incrementing it, so a `}` that
//! brings the depth back to the top of the stack closes the interpolation
//! rather than a plain code block.

/// Which kind of region the cursor is currently inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// Bare expression code.
    #[default]
    Code,
    /// Single- or double-quoted string content.
    QuotedString,
    /// Backtick template-literal content (outside any `${ ... }`).
    TemplateLiteral,
}

impl Context {
    /// Returns `true` for both string-like contexts.
    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, Context::QuotedString | Context::TemplateLiteral)
    }
}

/// Visitor verdict after seeing a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Step {
    /// Keep scanning.
    Continue,
    /// End the scan, leaving the cursor on the current character.
    Stop,
}

/// Whitespace skipped in code context.
#[inline]
pub fn is_code_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Identifier characters: ASCII letters, digits, `_` and `$`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Characters that may appear in a name but never start one.
#[inline]
pub fn is_forbidden_ident_start(b: u8) -> bool {
    b.is_ascii_digit() || b == b'$'
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Context-tracking cursor over a source buffer.
///
/// One cursor is owned by exactly one scan. Nested rewrites build a fresh
/// cursor over the region they recurse into instead of sharing this one.
///
/// # Invariants
///
/// - `open_quote` is `Some` iff `context` is a string context.
/// - `pos <= buf.len()`; reaching `buf.len()` is EOF.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a str,
    pos: usize,
    context: Context,
    /// The previous character was an unconsumed `\` inside a string context.
    escaping: bool,
    /// Brace depth at which each open `${` interpolation began.
    brace_stack: Vec<u32>,
    /// Delimiter that opened the current string or template region.
    open_quote: Option<u8>,
    /// Unmatched `{` seen in code.
    brace_depth: u32,
    /// Position requested by a visitor for the next step.
    resume: Option<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`, in code context.
    pub fn new(buf: &'a str) -> Self {
        Self::at(buf, 0)
    }

    /// Create a cursor at `pos` (clamped to the buffer length), in code context.
    pub fn at(buf: &'a str, pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
            context: Context::Code,
            escaping: false,
            brace_stack: Vec::new(),
            open_quote: None,
            brace_depth: 0,
            resume: None,
        }
    }

    /// The whole buffer being scanned.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.buf
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn context(&self) -> Context {
        self.context
    }

    /// Returns `true` while the current character follows an escape marker.
    #[inline]
    pub fn is_escaping(&self) -> bool {
        self.escaping
    }

    #[inline]
    pub fn brace_depth(&self) -> u32 {
        self.brace_depth
    }

    /// Number of `${ ... }` interpolations currently open.
    #[inline]
    pub fn interpolation_depth(&self) -> usize {
        self.brace_stack.len()
    }

    /// Delimiter of the string or template region the cursor is inside.
    #[inline]
    pub fn open_quote(&self) -> Option<u8> {
        self.open_quote
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte at `index`, or `0x00` past the end of the buffer.
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.buf.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current, or `0x00`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte one position behind current, or `0x00` at the start.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(index) => self.byte_at(index),
            None => 0,
        }
    }

    /// The full character at the current position.
    pub fn current_char(&self) -> Option<char> {
        self.buf.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Extract `start..end` from the buffer.
    ///
    /// Out-of-range or non-boundary requests yield an empty string; every
    /// offset handed out by the scanner is a valid boundary.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.buf.get(start..end).unwrap_or("")
    }

    /// Extract a substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance past the current character without visiting it.
    ///
    /// Context is not updated; use this only to step over a character a
    /// visitor has already classified (e.g. the `(` that stopped a scan).
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += utf8_char_width(self.current());
        }
    }

    /// Ask the running scan to continue from `pos` instead of the next
    /// character. Takes effect when the current visitor returns
    /// [`Step::Continue`].
    ///
    /// The skipped region must be balanced (it must leave the cursor in the
    /// same context it was in), which holds for any span a nested scan
    /// consumed completely.
    pub fn resume_at(&mut self, pos: usize) {
        self.resume = Some(pos.min(self.buf.len()));
    }

    /// Scan forward, dispatching code characters to `on_code` and string
    /// characters to `on_string`. Returns the final position.
    pub fn scan(
        &mut self,
        mut on_code: impl FnMut(&mut Self) -> Step,
        mut on_string: impl FnMut(&mut Self) -> Step,
    ) -> usize {
        let outcome = self.try_scan::<std::convert::Infallible>(
            |cursor| Ok(on_code(cursor)),
            |cursor| Ok(on_string(cursor)),
        );
        match outcome {
            Ok(pos) => pos,
            Err(never) => match never {},
        }
    }

    /// Scan forward visiting only code characters.
    pub fn scan_code(&mut self, on_code: impl FnMut(&mut Self) -> Step) -> usize {
        self.scan(on_code, |_| Step::Continue)
    }

    /// Fallible variant of [`scan_code`](Self::scan_code).
    pub fn try_scan_code<E>(
        &mut self,
        on_code: impl FnMut(&mut Self) -> Result<Step, E>,
    ) -> Result<usize, E> {
        self.try_scan(on_code, |_| Ok(Step::Continue))
    }

    /// Fallible scan: a visitor error ends the scan immediately and is
    /// returned as-is, with the cursor left on the offending character.
    pub fn try_scan<E>(
        &mut self,
        mut on_code: impl FnMut(&mut Self) -> Result<Step, E>,
        mut on_string: impl FnMut(&mut Self) -> Result<Step, E>,
    ) -> Result<usize, E> {
        while !self.is_eof() {
            let b = self.current();

            let step = if self.context == Context::Code {
                if self.code_transition(b) {
                    continue;
                }
                on_code(self)?
            } else {
                if !self.escaping {
                    if self.string_transition(b) {
                        continue;
                    }
                    if b == b'\\' {
                        // Escape marker: consumed here, the next character
                        // is visited with `is_escaping()` set.
                        self.escaping = true;
                        self.pos += 1;
                        continue;
                    }
                }
                let step = on_string(self)?;
                if step == Step::Continue {
                    self.escaping = false;
                }
                step
            };

            if step == Step::Stop {
                self.resume = None;
                return Ok(self.pos);
            }

            let next = self.pos + utf8_char_width(b);
            self.pos = self.resume.take().unwrap_or(next);
        }
        Ok(self.pos)
    }

    /// Apply code-context transitions. Returns `true` when the character
    /// was consumed by the state machine and must not be visited.
    fn code_transition(&mut self, b: u8) -> bool {
        match b {
            b'\'' | b'"' => {
                self.enter_string(Context::QuotedString, b);
                true
            }
            b'`' => {
                self.enter_string(Context::TemplateLiteral, b);
                true
            }
            b'{' => {
                self.brace_depth += 1;
                false
            }
            b'}' => {
                self.brace_depth = self.brace_depth.saturating_sub(1);
                if self.brace_stack.last() == Some(&self.brace_depth) {
                    // Closes a `${ ... }` interpolation.
                    self.brace_stack.pop();
                    self.context = Context::TemplateLiteral;
                    self.open_quote = Some(b'`');
                    self.pos += 1;
                    true
                } else {
                    false
                }
            }
            _ if is_code_whitespace(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Apply string/template transitions for an unescaped character.
    fn string_transition(&mut self, b: u8) -> bool {
        if self.context == Context::TemplateLiteral && b == b'$' && self.peek() == b'{' {
            self.brace_stack.push(self.brace_depth);
            self.brace_depth += 1;
            self.context = Context::Code;
            self.open_quote = None;
            self.pos += 2;
            return true;
        }
        if self.open_quote == Some(b) {
            self.open_quote = None;
            self.context = Context::Code;
            self.pos += 1;
            return true;
        }
        false
    }

    fn enter_string(&mut self, context: Context, delimiter: u8) {
        self.context = context;
        self.open_quote = Some(delimiter);
        self.pos += 1;
    }
}
