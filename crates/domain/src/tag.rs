use log::debug;

use crate::{
    Color,
    taxonomy::{self, MuscleGroup},
};

/// A colored label describing one level of a muscle selection.
///
/// Tags can only be created through a muscle group, so every tag carries the color of the
/// group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTag {
    name: String,
    color: Color,
    level: TagLevel,
}

impl ExerciseTag {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn level(&self) -> TagLevel {
        self.level
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum TagLevel {
    Group,
    Muscle,
    SubMuscle,
    Head,
}

struct Tagger {
    group: &'static MuscleGroup,
    tags: Vec<ExerciseTag>,
}

impl Tagger {
    fn new(group: &'static MuscleGroup) -> Self {
        Self {
            group,
            tags: Vec::with_capacity(4),
        }
    }

    fn push(&mut self, name: impl Into<String>, level: TagLevel) {
        self.tags.push(ExerciseTag {
            name: name.into(),
            color: self.group.color(),
            level,
        });
    }
}

/// Derives the tags of a path through the muscle taxonomy, from the group down to the head.
///
/// A head tag is prefixed with the name of its parent, so that equally named heads of
/// different muscles stay distinguishable. Unknown groups yield no tags, empty optional
/// segments count as absent.
#[must_use]
pub fn tags_for(
    group_name: &str,
    muscle_name: &str,
    sub_muscle_name: Option<&str>,
    head_name: Option<&str>,
) -> Vec<ExerciseTag> {
    let Some(group) = taxonomy::group(group_name) else {
        debug!("no tags for unknown muscle group {group_name:?}");
        return vec![];
    };

    let sub_muscle_name = sub_muscle_name.filter(|s| !s.is_empty());
    let head_name = head_name.filter(|h| !h.is_empty());
    let mut tagger = Tagger::new(group);

    tagger.push(group.name(), TagLevel::Group);
    tagger.push(muscle_name, TagLevel::Muscle);

    if let Some(sub_muscle_name) = sub_muscle_name {
        tagger.push(sub_muscle_name, TagLevel::SubMuscle);
    }

    if let Some(head_name) = head_name {
        let parent = sub_muscle_name.unwrap_or(muscle_name);
        tagger.push(format!("{parent} - {head_name}"), TagLevel::Head);
    }

    tagger.tags
}
