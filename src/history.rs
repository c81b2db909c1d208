//! Command History
//!
//! Append-only list of submitted commands plus the recall cursor the input
//! box walks with "previous" / "next".

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    /// Recall position in `0..=entries.len()`; `len` means "past the newest".
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        let cursor = entries.len();
        Self { entries, cursor }
    }

    /// Record a submitted command and park the cursor past the newest entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    /// Step back one entry. `None` at the oldest entry: the input stays as is.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry, or past the newest one, which yields `""`.
    pub fn next(&mut self) -> &str {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            &self.entries[self.cursor]
        } else {
            self.cursor = self.entries.len();
            ""
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-indexed listing, oldest first.
    pub fn numbered(&self) -> String {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{}  {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
