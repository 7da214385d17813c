//! Project preview selection
//!
//! At most one project is selected; the preview dialog is visible exactly
//! while a selection exists.

use crate::model::content::Project;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPreview {
    selected: Option<Project>,
}

impl ProjectPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `project` for preview
    ///
    /// Projects without preview images are ignored and the current selection
    /// is kept. Returns whether the selection changed to `project`.
    pub fn select(&mut self, project: &Project) -> bool {
        if !project.has_previews() {
            debug!(project_id = project.id, "No preview images, ignoring demo");
            return false;
        }
        debug!(project_id = project.id, "Opening project preview");
        self.selected = Some(project.clone());
        true
    }

    /// Drop the selection (modal dismissed)
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
