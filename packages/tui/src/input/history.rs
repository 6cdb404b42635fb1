/// Recall of previously submitted inputs for Up/Down navigation
#[derive(Debug, Clone)]
pub struct InputHistory {
    entries: Vec<String>,
    /// Current position while navigating (None = not navigating)
    position: Option<usize>,
    /// The unsubmitted input stashed when navigation started
    draft: Option<String>,
    max_entries: usize,
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHistory {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            position: None,
            draft: None,
            max_entries,
        }
    }

    /// Record a submitted input. Empty strings and immediate repeats are
    /// skipped; recording ends any navigation in progress.
    pub fn record(&mut self, entry: String) {
        if !entry.is_empty() && self.entries.last() != Some(&entry) {
            self.entries.push(entry);
            if self.entries.len() > self.max_entries {
                self.entries.remove(0);
            }
        }
        self.position = None;
        self.draft = None;
    }

    /// Step to an older entry (Up). The first call stashes `current_input`
    /// as the draft to restore later.
    pub fn older(&mut self, current_input: &str) -> Option<&str> {
        match self.position {
            None => {
                if self.entries.is_empty() {
                    return None;
                }
                self.draft = Some(current_input.to_string());
                self.position = Some(self.entries.len() - 1);
            }
            Some(0) => {}
            Some(index) => self.position = Some(index - 1),
        }
        self.position.and_then(|i| self.entries.get(i)).map(String::as_str)
    }

    /// Step to a newer entry (Down). Stepping past the newest entry ends
    /// navigation and returns the stashed draft.
    pub fn newer(&mut self) -> Option<Recall> {
        let index = self.position?;
        if index + 1 < self.entries.len() {
            self.position = Some(index + 1);
            self.entries.get(index + 1).map(|e| Recall::Entry(e.clone()))
        } else {
            self.position = None;
            Some(Recall::Draft(self.draft.take().unwrap_or_default()))
        }
    }

    /// Abort navigation, returning the stashed draft
    pub fn cancel(&mut self) -> Option<String> {
        self.position = None;
        self.draft.take()
    }

    pub fn is_navigating(&self) -> bool {
        self.position.is_some()
    }

    /// (current, total) indicator while navigating
    pub fn position(&self) -> Option<(usize, usize)> {
        self.position.map(|i| (i + 1, self.entries.len()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a Down-arrow step recalled
#[derive(Debug, Clone, PartialEq)]
pub enum Recall {
    Entry(String),
    Draft(String),
}
