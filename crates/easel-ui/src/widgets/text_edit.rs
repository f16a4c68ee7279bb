//! Caret and string mutation shared by text-editing widgets.

use log::debug;

/// A single-line editing buffer with a caret.
///
/// The caret is a byte offset into `text`, always on a `char` boundary in
/// `0..=text.len()`. Every mutation keeps it on a boundary.
#[derive(Debug, Default)]
pub struct EditState {
    text: String,
    caret: usize,
}

impl EditState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self { text, caret }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The text before the caret.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.text[..self.caret]
    }

    /// Replaces the buffer, keeping the caret position where possible.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.caret.min(self.text.len());
        while !self.text.is_char_boundary(self.caret) {
            self.caret -= 1;
        }
    }

    pub fn caret_to_end(&mut self) {
        self.caret = self.text.len();
    }

    // ── caret movement ──────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.caret = prev_char(&self.text, self.caret);
    }

    pub fn move_right(&mut self) {
        self.caret = next_char(&self.text, self.caret);
    }

    pub fn move_word_left(&mut self) {
        self.caret = prev_word(&self.text, self.caret);
    }

    pub fn move_word_right(&mut self) {
        self.caret = next_word(&self.text, self.caret);
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.text.len();
    }

    // ── mutation ────────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.caret, ch);
        self.caret += ch.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.caret, s);
        self.caret += s.len();
    }

    /// Deletes the character before the caret. No-op at the start.
    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let start = prev_char(&self.text, self.caret);
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    /// Deletes the character after the caret. No-op at the end.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret == self.text.len() {
            return false;
        }
        let end = next_char(&self.text, self.caret);
        self.text.replace_range(self.caret..end, "");
        true
    }

    // ── clipboard ───────────────────────────────────────────────────────────

    /// Puts the whole buffer on the system clipboard. Quietly does nothing
    /// when no clipboard is available (headless environments).
    pub fn copy_to_clipboard(&self) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(self.text.clone()) {
                    debug!("clipboard copy failed: {err}");
                }
            }
            Err(err) => debug!("clipboard unavailable: {err}"),
        }
    }

    /// Inserts clipboard text at the caret, dropping control characters
    /// and anything in `reject`. Returns whether the buffer changed.
    pub fn paste_from_clipboard(&mut self, reject: &[char]) -> bool {
        let pasted = match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => text,
                Err(err) => {
                    debug!("clipboard paste failed: {err}");
                    return false;
                }
            },
            Err(err) => {
                debug!("clipboard unavailable: {err}");
                return false;
            }
        };
        let clean = sanitize(&pasted, reject);
        if clean.is_empty() {
            return false;
        }
        self.insert_str(&clean);
        true
    }
}

/// Strips control characters and every char in `reject`.
pub fn sanitize(text: &str, reject: &[char]) -> String {
    text.chars()
        .filter(|c| !c.is_control() && !reject.contains(c))
        .collect()
}

// ── byte-offset helpers ─────────────────────────────────────────────────────

fn prev_char(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

fn prev_word(text: &str, pos: usize) -> usize {
    let mut i = pos;
    while i > 0 && last_char(text, i).is_whitespace() {
        i = prev_char(text, i);
    }
    while i > 0 && !last_char(text, i).is_whitespace() {
        i = prev_char(text, i);
    }
    i
}

fn next_word(text: &str, pos: usize) -> usize {
    let mut i = pos;
    while i < text.len() && !first_char(text, i).is_whitespace() {
        i = next_char(text, i);
    }
    while i < text.len() && first_char(text, i).is_whitespace() {
        i = next_char(text, i);
    }
    i
}

fn last_char(text: &str, pos: usize) -> char {
    text[..pos].chars().next_back().unwrap_or(' ')
}

fn first_char(text: &str, pos: usize) -> char {
    text[pos..].chars().next().unwrap_or(' ')
}

// ── tests ───────────────────────────────────────────────────────────────────
