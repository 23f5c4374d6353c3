use crate::Selection;

/// Labels of one rendered part of the body model.
///
/// `muscle` is the most specific muscle name the part represents, which is a sub-muscle
/// name for parts modelling a sub-muscle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPart<'a> {
    pub group: &'a str,
    pub muscle: &'a str,
    pub head: Option<&'a str>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus<'a> {
    #[default]
    None,
    Group(&'a str),
    Selection(&'a Selection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Highlighted,
    Dimmed,
    Neutral,
}

impl Highlight {
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Highlight::Highlighted => 1.0,
            Highlight::Dimmed => 0.2,
            Highlight::Neutral => 0.8,
        }
    }

    #[must_use]
    pub fn emissive(self) -> u32 {
        match self {
            Highlight::Highlighted => 0x44_44_44,
            Highlight::Dimmed | Highlight::Neutral => 0,
        }
    }
}

/// The most specific field of a selection decides whether a part matches: head, then
/// sub-muscle, then muscle.
#[must_use]
pub fn highlight(part: &BodyPart, focus: Focus) -> Highlight {
    let matches = match focus {
        Focus::None => return Highlight::Neutral,
        Focus::Group(group) => part.group == group,
        Focus::Selection(selection) => match (selection.head, part.head) {
            (Some(head), Some(part_head)) => {
                part_head == head && part.muscle == selection.sub_muscle.unwrap_or(selection.muscle)
            }
            _ => part.muscle == selection.sub_muscle.unwrap_or(selection.muscle),
        },
    };

    if matches {
        Highlight::Highlighted
    } else {
        Highlight::Dimmed
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::all_selections;

    const LONG_HEAD_BICEPS: BodyPart = BodyPart {
        group: "Arms",
        muscle: "Biceps Brachii",
        head: Some("Long Head"),
    };
    const LONG_HEAD_TRICEPS: BodyPart = BodyPart {
        group: "Arms",
        muscle: "Triceps",
        head: Some("Long Head"),
    };
    const BRACHIALIS: BodyPart = BodyPart {
        group: "Arms",
        muscle: "Brachialis",
        head: None,
    };
    const RHOMBOIDS: BodyPart = BodyPart {
        group: "Back",
        muscle: "Rhomboids",
        head: None,
    };
    const UPPER_TRAPEZIUS: BodyPart = BodyPart {
        group: "Back",
        muscle: "Trapezius",
        head: Some("Upper"),
    };

    fn find(display_name: &str) -> &'static Selection {
        all_selections()
            .iter()
            .find(|s| s.display_name() == display_name)
            .unwrap()
    }

    #[rstest]
    #[case::head_under_sub_muscle(LONG_HEAD_BICEPS, "Arms > Biceps > Biceps Brachii > Long Head", Highlight::Highlighted)]
    #[case::same_head_other_muscle(LONG_HEAD_TRICEPS, "Arms > Biceps > Biceps Brachii > Long Head", Highlight::Dimmed)]
    #[case::head_under_muscle(LONG_HEAD_TRICEPS, "Arms > Triceps > Long Head", Highlight::Highlighted)]
    #[case::other_head(LONG_HEAD_BICEPS, "Arms > Biceps > Biceps Brachii > Short Head", Highlight::Dimmed)]
    #[case::part_without_head(BRACHIALIS, "Arms > Triceps > Long Head", Highlight::Dimmed)]
    #[case::sub_muscle(BRACHIALIS, "Arms > Biceps > Brachialis", Highlight::Highlighted)]
    #[case::sub_muscle_other_part(LONG_HEAD_BICEPS, "Arms > Biceps > Brachialis", Highlight::Dimmed)]
    #[case::muscle(RHOMBOIDS, "Back > Rhomboids", Highlight::Highlighted)]
    #[case::muscle_other_group(RHOMBOIDS, "Core > Erector Spinae", Highlight::Dimmed)]
    #[case::muscle_part_with_head(UPPER_TRAPEZIUS, "Back > Latissimus Dorsi", Highlight::Dimmed)]
    #[case::other_head_same_muscle(UPPER_TRAPEZIUS, "Back > Trapezius > Middle", Highlight::Dimmed)]
    fn test_highlight_selection(
        #[case] part: BodyPart<'static>,
        #[case] selection: &str,
        #[case] expected: Highlight,
    ) {
        assert_eq!(highlight(&part, Focus::Selection(find(selection))), expected);
    }

    #[rstest]
    #[case(RHOMBOIDS, "Back", Highlight::Highlighted)]
    #[case(UPPER_TRAPEZIUS, "Back", Highlight::Highlighted)]
    #[case(BRACHIALIS, "Back", Highlight::Dimmed)]
    #[case(BRACHIALIS, "Nonexistent", Highlight::Dimmed)]
    fn test_highlight_group(#[case] part: BodyPart<'static>, #[case] group: &str, #[case] expected: Highlight) {
        assert_eq!(highlight(&part, Focus::Group(group)), expected);
    }

    #[test]
    fn test_highlight_without_focus() {
        for part in [LONG_HEAD_BICEPS, BRACHIALIS, RHOMBOIDS] {
            assert_eq!(highlight(&part, Focus::default()), Highlight::Neutral);
        }
    }

    #[test]
    fn test_highlight_material() {
        assert_approx_eq!(Highlight::Highlighted.opacity(), 1.0);
        assert_approx_eq!(Highlight::Dimmed.opacity(), 0.2);
        assert_approx_eq!(Highlight::Neutral.opacity(), 0.8);
        assert_eq!(Highlight::Highlighted.emissive(), 0x44_44_44);
        assert_eq!(Highlight::Dimmed.emissive(), 0);
        assert_eq!(Highlight::Neutral.emissive(), 0);
    }
}
