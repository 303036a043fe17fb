/// The set of paper ids the user has ticked for feed curation.
///
/// Insertion order is preserved so the submitted id list matches the
/// order the user clicked in. Invariant: the selection only ever holds
/// ids present in the currently displayed paper list — callers must run
/// [`SelectionState::retain_known`] whenever that list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Flip membership of a single id.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn select_all(&mut self, known_ids: &[String]) {
        self.ids = known_ids.to_vec();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Select-all / deselect-all as one action: if every known id is
    /// already selected, clear; otherwise select everything. Two
    /// invocations with no intervening change round-trip full ⇄ empty.
    pub fn toggle_all(&mut self, known_ids: &[String]) {
        let all_selected =
            !known_ids.is_empty() && known_ids.iter().all(|id| self.is_selected(id));
        if all_selected {
            self.clear();
        } else {
            self.select_all(known_ids);
        }
    }

    /// Drop ids that no longer appear in the displayed paper list.
    pub fn retain_known(&mut self, known_ids: &[String]) {
        self.ids.retain(|id| known_ids.contains(id));
    }
}
