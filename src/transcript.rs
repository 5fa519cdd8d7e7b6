//! Transcript: ordered chat entries, append-only except one in-place settlement.

/// Who produced an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// Stable handle to a transcript entry. Entries are never removed, so the
/// index stays valid for the life of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

#[derive(Clone, Debug)]
pub struct ChatEntry {
    pub text: String,
    pub direction: Direction,
    /// Set when a placeholder settled into the failure text.
    pub error: bool,
    /// True while this entry is an unsettled placeholder.
    pub pending: bool,
}

/// Ordered list of chat entries.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    pub fn append(&mut self, text: String, direction: Direction) -> EntryId {
        self.push(ChatEntry {
            text,
            direction,
            error: false,
            pending: false,
        })
    }

    /// Append an incoming placeholder that a later [`settle`] will rewrite.
    ///
    /// [`settle`]: Transcript::settle
    pub fn append_pending(&mut self, text: String) -> EntryId {
        self.push(ChatEntry {
            text,
            direction: Direction::Incoming,
            error: false,
            pending: true,
        })
    }

    /// Rewrite a placeholder in place. Settles at most once: an entry that is
    /// not pending (never was, or already settled) is left untouched.
    pub fn settle(&mut self, id: EntryId, text: String, error: bool) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            if entry.pending {
                entry.text = text;
                entry.error = error;
                entry.pending = false;
            }
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&ChatEntry> {
        self.entries.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: ChatEntry) -> EntryId {
        self.entries.push(entry);
        EntryId(self.entries.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order_and_direction() {
        let mut t = Transcript::default();
        t.append("hello".into(), Direction::Outgoing);
        t.append("hi there".into(), Direction::Incoming);
        assert_eq!(t.len(), 2);
        assert_eq!(t.entries()[0].text, "hello");
        assert_eq!(t.entries()[0].direction, Direction::Outgoing);
        assert_eq!(t.entries()[1].direction, Direction::Incoming);
        assert!(!t.entries()[0].pending);
    }

    #[test]
    fn settle_rewrites_placeholder_once() {
        let mut t = Transcript::default();
        let id = t.append_pending("Thinking...".into());
        assert!(t.get(id).unwrap().pending);

        t.settle(id, "All set".into(), false);
        let entry = t.get(id).unwrap();
        assert_eq!(entry.text, "All set");
        assert!(!entry.pending);
        assert!(!entry.error);

        // A second settlement is ignored.
        t.settle(id, "late".into(), true);
        let entry = t.get(id).unwrap();
        assert_eq!(entry.text, "All set");
        assert!(!entry.error);
    }

    #[test]
    fn settle_marks_error_flag() {
        let mut t = Transcript::default();
        let id = t.append_pending("Thinking...".into());
        t.settle(id, "Oops! Something went wrong. Please try again".into(), true);
        assert!(t.get(id).unwrap().error);
    }

    #[test]
    fn settle_ignores_plain_entries() {
        let mut t = Transcript::default();
        let id = t.append("hello".into(), Direction::Outgoing);
        t.settle(id, "rewritten".into(), false);
        assert_eq!(t.get(id).unwrap().text, "hello");
    }
}
