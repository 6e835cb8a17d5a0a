/// Session history the navigator records resolved paths into.
///
/// The browser history API lives in the Dioxus router; this trait only covers
/// what the navigator itself needs.
pub trait History {
    fn push(&mut self, path: String);
    fn back(&mut self) -> Option<&str>;
    fn forward(&mut self) -> Option<&str>;
    fn location(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: Option<usize>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for MemoryHistory {
    /// Pushing drops any entries ahead of the current position.
    fn push(&mut self, path: String) {
        let next = self.position.map_or(0, |p| p + 1);
        self.entries.truncate(next);
        self.entries.push(path);
        self.position = Some(next);
    }

    fn back(&mut self) -> Option<&str> {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                self.location()
            }
            _ => None,
        }
    }

    fn forward(&mut self) -> Option<&str> {
        match self.position {
            Some(p) if p + 1 < self.entries.len() => {
                self.position = Some(p + 1);
                self.location()
            }
            _ => None,
        }
    }

    fn location(&self) -> Option<&str> {
        self.position.map(|p| self.entries[p].as_str())
    }
}
