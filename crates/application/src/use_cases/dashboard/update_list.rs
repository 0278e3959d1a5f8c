use crate::dto::EditableList;
use crate::ports::ListStorePort;
use palisade_dns_domain::normalize_domain;
use std::collections::HashSet;
use std::sync::Arc;

pub struct UpdateListUseCase {
    list_store: Arc<dyn ListStorePort>,
}

impl UpdateListUseCase {
    pub fn new(list_store: Arc<dyn ListStorePort>) -> Self {
        Self { list_store }
    }

    /// Normalize, lowercase and dedupe `domains`, then replace `which`
    /// wholesale. An empty or all-invalid input clears the list. Returns
    /// the size of the resulting set, not the length of the input.
    pub fn execute(&self, which: EditableList, domains: Vec<String>) -> usize {
        let normalized: HashSet<String> = domains
            .iter()
            .filter_map(|raw| normalize_domain(raw))
            .collect();
        let count = normalized.len();

        match which {
            EditableList::Allowlist => self.list_store.replace_allowlist(normalized),
            EditableList::Denylist => self.list_store.replace_denylist(normalized),
        }

        count
    }
}
