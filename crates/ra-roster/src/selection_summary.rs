use std::fmt;

/// Toolbar counter, shown as "Selected: N of M"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selected: {} of {}", self.selected, self.total)
    }
}
