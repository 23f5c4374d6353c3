use brawn_domain::{ExerciseTag, Selection, SelectionFilter};
use log::debug;

pub const NO_RESULTS: &str = "No muscles found";

/// Searchable drop-down that turns a chosen muscle into the tags of an exercise.
#[derive(Debug, Default)]
pub struct MuscleSelector {
    filter: SelectionFilter,
    open: bool,
    selected_tags: Vec<ExerciseTag>,
}

impl MuscleSelector {
    #[must_use]
    pub fn with_tags(tags: Vec<ExerciseTag>) -> Self {
        Self {
            selected_tags: tags,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.filter.search
    }

    pub fn set_search(&mut self, search: &str) {
        search.clone_into(&mut self.filter.search);
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Entries of the drop-down, empty while it is closed.
    #[must_use]
    pub fn results(&self) -> Vec<&'static Selection> {
        if self.open {
            self.filter.selections()
        } else {
            vec![]
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.open && self.filter.selections().is_empty()).then_some(NO_RESULTS)
    }

    /// Takes over the tags of the result at `index`, then closes the drop-down and clears
    /// the search.
    pub fn select(&mut self, index: usize) -> Option<&[ExerciseTag]> {
        let Some(selection) = self.results().get(index).copied() else {
            debug!("no muscle selection at index {index}");
            return None;
        };
        self.selected_tags = selection.tags();
        self.open = false;
        self.filter.search.clear();
        Some(&self.selected_tags)
    }

    pub fn clear(&mut self) {
        self.selected_tags.clear();
    }

    #[must_use]
    pub fn selected_tags(&self) -> &[ExerciseTag] {
        &self.selected_tags
    }
}
