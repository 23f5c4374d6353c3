use std::sync::LazyLock;

use log::debug;

use crate::{
    ExerciseTag,
    taxonomy::{self, Division, MuscleGroup},
    tag,
};

pub const SEPARATOR: &str = " > ";

/// A fully specified path through the muscle taxonomy.
///
/// Selections are only produced by traversing the taxonomy, so their fields always name
/// a reachable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub group: &'static str,
    pub muscle: &'static str,
    pub sub_muscle: Option<&'static str>,
    pub head: Option<&'static str>,
}

impl Selection {
    #[must_use]
    pub fn display_name(&self) -> String {
        self.display_name_with(SEPARATOR)
    }

    #[must_use]
    pub fn display_name_with(&self, separator: &str) -> String {
        self.segments().collect::<Vec<_>>().join(separator)
    }

    /// The most specific non-empty segment of the path.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.segments().last().unwrap_or(self.muscle)
    }

    #[must_use]
    pub fn tags(&self) -> Vec<ExerciseTag> {
        tag::tags_for(self.group, self.muscle, self.sub_muscle, self.head)
    }

    fn segments(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.group), Some(self.muscle), self.sub_muscle, self.head]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
    }
}

static ALL_SELECTIONS: LazyLock<Vec<Selection>> = LazyLock::new(|| {
    let selections = selections(taxonomy::groups());
    debug!("expanded muscle taxonomy into {} selections", selections.len());
    selections
});

#[must_use]
pub fn all_selections() -> &'static [Selection] {
    &ALL_SELECTIONS
}

/// Depth-first expansion of the given groups in declaration order.
#[must_use]
pub fn selections(groups: &'static [MuscleGroup]) -> Vec<Selection> {
    let mut result = vec![];

    for group in groups {
        for muscle in group.muscles() {
            let path = Selection {
                group: group.name(),
                muscle: muscle.name(),
                sub_muscle: None,
                head: None,
            };

            match muscle.division() {
                Division::SubMuscles(sub_muscles) => {
                    for sub_muscle in sub_muscles {
                        let path = Selection {
                            sub_muscle: Some(sub_muscle.name()),
                            ..path
                        };
                        if sub_muscle.heads().is_empty() {
                            result.push(path);
                        } else {
                            result.extend(sub_muscle.heads().iter().map(|h| Selection {
                                head: Some(h.name()),
                                ..path
                            }));
                        }
                    }
                }
                Division::Heads(heads) => {
                    result.extend(heads.iter().map(|h| Selection {
                        head: Some(h.name()),
                        ..path
                    }));
                }
                Division::Leaf => result.push(path),
            }
        }
    }

    result
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionFilter {
    pub group: Option<String>,
    pub search: String,
}

impl SelectionFilter {
    #[must_use]
    pub fn selections(&self) -> Vec<&'static Selection> {
        let search = self.search.to_lowercase();
        all_selections()
            .iter()
            .filter(|s| {
                self.group.as_ref().is_none_or(|g| s.group == g.as_str())
                    && s.display_name().to_lowercase().contains(&search)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.group.is_none() && self.search.is_empty()
    }

    pub fn toggle_group(&mut self, group: &str) {
        if self.group.as_deref() == Some(group) {
            self.group = None;
        } else {
            self.group = Some(group.to_string());
        }
    }
}
