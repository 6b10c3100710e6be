/// Removes duplicates, keeping the first occurrence of every tag.
pub fn dedup_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref();
        if !result.iter().any(|t| t == tag) {
            result.push(tag.to_string());
        }
    }
    result
}

/// Tags picked for a post being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    selected: Vec<String>,
}

impl TagSelection {
    pub fn new(tags: &[String]) -> Self {
        Self {
            selected: dedup_tags(tags),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Deselects a selected tag, selects an unselected one.
    pub fn toggle(&mut self, tag: &str) {
        if self.is_selected(tag) {
            self.selected.retain(|t| t != tag);
        } else {
            self.selected.push(tag.to_string());
        }
    }

    /// Selects a new tag. Blank input and tags already selected are ignored.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.is_selected(tag) {
            return false;
        }
        self.selected.push(tag.to_string());
        true
    }

    /// Every tag that can be offered: the known ones plus the selection.
    pub fn available(&self, base: &[String]) -> Vec<String> {
        dedup_tags(base.iter().chain(self.selected.iter()))
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
