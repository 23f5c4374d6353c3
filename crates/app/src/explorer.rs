use brawn_domain::{
    Color, ExerciseTag, Focus, Selection, SelectionFilter, Statistics, groups, statistics,
};

use crate::Settings;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupCard {
    pub name: &'static str,
    pub color: Color,
    pub muscles: usize,
    pub selected: bool,
}

impl GroupCard {
    #[must_use]
    pub fn muscle_count(&self) -> String {
        format!(
            "{} muscle{}",
            self.muscles,
            if self.muscles == 1 { "" } else { "s" }
        )
    }

    #[must_use]
    pub fn swatch(&self) -> String {
        self.color.with_alpha(0x40)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionCard {
    pub label: &'static str,
    pub display_name: String,
    pub tags: Vec<ExerciseTag>,
}

/// Colors of a tag badge: a faint background, a stronger border and the plain group color
/// for the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: String,
    pub border: String,
    pub text: String,
}

impl From<&ExerciseTag> for BadgeStyle {
    fn from(tag: &ExerciseTag) -> Self {
        Self {
            background: tag.color().with_alpha(0x15),
            border: tag.color().with_alpha(0x60),
            text: tag.color().to_string(),
        }
    }
}

/// State of the muscle explorer: a group list, the body model and the muscles of the
/// selected group.
pub struct MuscleExplorer {
    filter: SelectionFilter,
    separator: String,
}

impl MuscleExplorer {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            filter: SelectionFilter::default(),
            separator: settings.label_separator.clone(),
        }
    }

    pub fn toggle_group(&mut self, group: &str) {
        self.filter.toggle_group(group);
    }

    #[must_use]
    pub fn selected_group(&self) -> Option<&str> {
        self.filter.group.as_deref()
    }

    #[must_use]
    pub fn group_cards(&self) -> Vec<GroupCard> {
        groups()
            .iter()
            .map(|g| GroupCard {
                name: g.name(),
                color: g.color(),
                muscles: g.muscles().len(),
                selected: self.selected_group() == Some(g.name()),
            })
            .collect()
    }

    #[must_use]
    pub fn cards(&self) -> Vec<SelectionCard> {
        self.filter
            .selections()
            .into_iter()
            .map(|s| SelectionCard {
                label: s.label(),
                display_name: s.display_name_with(&self.separator),
                tags: s.tags(),
            })
            .collect()
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.selected_group() {
            Some(group) => format!("{group} Muscles"),
            None => "All Muscles".to_string(),
        }
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        statistics()
    }

    /// What the body model highlights.
    #[must_use]
    pub fn focus(&self) -> Focus<'_> {
        self.selected_group().map_or(Focus::None, Focus::Group)
    }

    #[must_use]
    pub fn selections(&self) -> Vec<&'static Selection> {
        self.filter.selections()
    }
}
