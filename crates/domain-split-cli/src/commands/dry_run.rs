use crate::utils::ui;

/// Before and after content of one changed file.
#[derive(Debug, Clone)]
pub struct DryRunDiff {
    path: String,
    before: String,
    after: String,
}

impl DryRunDiff {
    pub fn new(path: impl Into<String>, before: String, after: String) -> Self {
        Self {
            path: path.into(),
            before,
            after,
        }
    }

    pub fn print(&self) {
        ui::print_diff_header(&self.path);
        ui::print_diff(&self.before, &self.after);
    }
}
