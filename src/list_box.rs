use crate::release_status::ReleaseStatus;
use serde_derive::Serialize;

/// One entry of a select box: `name` is shown, `value` is submitted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ListBoxOption {
    pub name: String,
    pub value: String,
}

impl ListBoxOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ListBox(Vec<ListBoxOption>);

impl ListBox {
    /// The release status selection, in display order.
    pub fn release_statuses() -> Self {
        let mut list = Self::default();
        ReleaseStatus::fill_list_box(&mut list);
        list
    }

    pub fn add(&mut self, option: ListBoxOption) {
        self.0.push(option);
    }

    /// Inserts at `index`, or appends when `index` is past the end.
    pub fn insert(&mut self, index: usize, option: ListBoxOption) {
        let index = index.min(self.0.len());
        self.0.insert(index, option);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListBoxOption> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ListBoxOption] {
        &self.0
    }
}
