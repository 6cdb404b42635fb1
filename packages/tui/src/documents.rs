use std::collections::HashSet;

use uwc_client::types::DocumentInfo;

/// Sort orders for the documents screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest upload first
    #[default]
    UploadDesc,
    /// Filename A-Z
    NameAsc,
    /// Largest chunk count first
    ChunksDesc,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::UploadDesc => SortKey::NameAsc,
            SortKey::NameAsc => SortKey::ChunksDesc,
            SortKey::ChunksDesc => SortKey::UploadDesc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::UploadDesc => "newest",
            SortKey::NameAsc => "name",
            SortKey::ChunksDesc => "chunks",
        }
    }
}

/// Local view of the backend's document index.
///
/// The server list replaces the local one only on a successful load; a
/// failed load leaves it untouched. Deletes are folded in only after the
/// server confirms. Selection is a separate id set, not part of the
/// document entries.
#[derive(Debug, Default)]
pub struct DocumentsState {
    documents: Vec<DocumentInfo>,
    filter: String,
    sort_key: SortKey,
    selected_ids: HashSet<String>,
    cursor: usize,
    /// Transient footer notice (e.g. a failed load or delete)
    notice: Option<String>,
}

impl DocumentsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh server snapshot
    pub fn set_documents(&mut self, documents: Vec<DocumentInfo>) {
        self.documents = documents;
        let known: HashSet<&str> = self.documents.iter().map(|d| d.document_id.as_str()).collect();
        self.selected_ids.retain(|id| known.contains(id.as_str()));
        self.notice = None;
        self.clamp_cursor();
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Prepend a newly uploaded document
    pub fn prepend(&mut self, document: DocumentInfo) {
        self.documents.insert(0, document);
    }

    /// Remove one entry after the server confirmed its deletion
    pub fn remove(&mut self, document_id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.document_id != document_id);
        self.selected_ids.remove(document_id);
        self.clamp_cursor();
        self.documents.len() < before
    }

    /// Remove the confirmed subset of a bulk delete, returning how many went
    pub fn remove_many(&mut self, document_ids: &[String]) -> usize {
        let mut removed = 0;
        for id in document_ids {
            if self.remove(id) {
                removed += 1;
            }
        }
        removed
    }

    pub fn documents(&self) -> &[DocumentInfo] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    // Filtering

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn push_filter_char(&mut self, ch: char) {
        self.filter.push(ch);
        self.clamp_cursor();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.clamp_cursor();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.clamp_cursor();
    }

    /// Documents passing the filter, in the active sort order.
    ///
    /// The filter is a case-insensitive substring match on the filename.
    pub fn filtered(&self) -> Vec<&DocumentInfo> {
        let needle = self.filter.to_lowercase();
        let mut view: Vec<&DocumentInfo> = self
            .documents
            .iter()
            .filter(|d| needle.is_empty() || d.filename.to_lowercase().contains(&needle))
            .collect();

        match self.sort_key {
            SortKey::UploadDesc => view.sort_by(|a, b| b.upload_time.cmp(&a.upload_time)),
            SortKey::NameAsc => {
                view.sort_by(|a, b| a.filename.to_lowercase().cmp(&b.filename.to_lowercase()))
            }
            SortKey::ChunksDesc => view.sort_by(|a, b| b.num_chunks.cmp(&a.num_chunks)),
        }

        view
    }

    // Sorting

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn cycle_sort(&mut self) {
        self.sort_key = self.sort_key.next();
    }

    // Selection

    pub fn is_selected(&self, document_id: &str) -> bool {
        self.selected_ids.contains(document_id)
    }

    pub fn toggle_select(&mut self, document_id: &str) {
        if !self.selected_ids.remove(document_id) {
            self.selected_ids.insert(document_id.to_string());
        }
    }

    /// Select every document in the current filtered view.
    ///
    /// Documents hidden by the filter are deliberately not touched.
    pub fn select_all_filtered(&mut self) {
        let ids: Vec<String> = self
            .filtered()
            .iter()
            .map(|d| d.document_id.clone())
            .collect();
        self.selected_ids.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub fn selected_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected_ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn selection_len(&self) -> usize {
        self.selected_ids.len()
    }

    // Cursor over the filtered view

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    /// Document under the cursor in the filtered view
    pub fn cursor_document(&self) -> Option<&DocumentInfo> {
        self.filtered().get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        self.cursor = self.cursor.min(max);
    }

    // Dashboard aggregates

    pub fn total_chunks(&self) -> u64 {
        self.documents.iter().map(|d| u64::from(d.num_chunks)).sum()
    }

    pub fn total_pages(&self) -> u64 {
        self.documents.iter().map(|d| u64::from(d.num_pages)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, name: &str, chunks: u32, uploaded: &str) -> DocumentInfo {
        DocumentInfo {
            document_id: id.to_string(),
            filename: name.to_string(),
            num_chunks: chunks,
            num_pages: 4,
            upload_time: uploaded.to_string(),
        }
    }

    fn sample() -> Vec<DocumentInfo> {
        vec![
            doc("d1", "Policy-2024.pdf", 14, "2026-02-10T10:00:00Z"),
            doc("d2", "loss-runs.docx", 8, "2026-02-11T09:30:00Z"),
            doc("d3", "policy-endorsement.pdf", 20, "2026-02-09T16:45:00Z"),
        ]
    }

    #[test]
    fn test_set_documents_replaces_list() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());
        assert_eq!(state.len(), 3);

        state.set_documents(vec![doc("d9", "fresh.pdf", 1, "2026-02-12T00:00:00Z")]);
        assert_eq!(state.len(), 1);
        assert_eq!(state.documents()[0].document_id, "d9");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());

        for ch in "POLICY".chars() {
            state.push_filter_char(ch);
        }
        let names: Vec<&str> = state.filtered().iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Policy-2024.pdf"));
        assert!(names.contains(&"policy-endorsement.pdf"));
    }

    #[test]
    fn test_select_all_respects_filter() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());
        for ch in "policy".chars() {
            state.push_filter_char(ch);
        }

        state.select_all_filtered();
        assert_eq!(state.selection_len(), 2);
        assert!(state.is_selected("d1"));
        assert!(state.is_selected("d3"));
        assert!(!state.is_selected("d2"));
    }

    #[test]
    fn test_remove_targets_one_entry() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());
        state.toggle_select("d2");

        assert!(state.remove("d2"));
        assert_eq!(state.len(), 2);
        assert!(!state.is_selected("d2"));
        assert!(state.documents().iter().all(|d| d.document_id != "d2"));

        assert!(!state.remove("d2"));
    }

    #[test]
    fn test_remove_many_counts_confirmed_only() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());

        let removed = state.remove_many(&["d1".to_string(), "missing".to_string()]);
        assert_eq!(removed, 1);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_sort_orders() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());

        // Default: newest upload first
        assert_eq!(state.filtered()[0].document_id, "d2");

        state.cycle_sort();
        assert_eq!(state.sort_key(), SortKey::NameAsc);
        assert_eq!(state.filtered()[0].filename, "loss-runs.docx");

        state.cycle_sort();
        assert_eq!(state.sort_key(), SortKey::ChunksDesc);
        assert_eq!(state.filtered()[0].num_chunks, 20);

        state.cycle_sort();
        assert_eq!(state.sort_key(), SortKey::UploadDesc);
    }

    #[test]
    fn test_selection_survives_reload_of_known_ids() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());
        state.toggle_select("d1");
        state.toggle_select("d2");

        // d2 disappeared server-side; its selection must not linger
        state.set_documents(vec![
            doc("d1", "Policy-2024.pdf", 14, "2026-02-10T10:00:00Z"),
        ]);
        assert!(state.is_selected("d1"));
        assert_eq!(state.selection_len(), 1);
    }

    #[test]
    fn test_cursor_clamps_to_filtered_view() {
        let mut state = DocumentsState::new();
        state.set_documents(sample());
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor(), 2);

        for ch in "loss".chars() {
            state.push_filter_char(ch);
        }
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.cursor_document().unwrap().document_id, "d2");
    }
}
