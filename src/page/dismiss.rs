/// Identifies an entry of a [`DismissibleList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

/// Entries that remove themselves when their delete control is clicked,
/// such as flash notifications.
#[derive(Debug, Clone)]
pub struct DismissibleList<T> {
    entries: Vec<(ItemId, T)>,
    next_id: u64,
}

impl<T> Default for DismissibleList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> DismissibleList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, item));
        id
    }

    /// Removes the entry whose delete control was clicked. Unknown or already
    /// dismissed ids are ignored.
    pub fn dismiss(&mut self, id: ItemId) -> Option<T> {
        let position = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(position).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
