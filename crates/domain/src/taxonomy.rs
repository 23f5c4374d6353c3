use std::collections::HashSet;

use log::debug;

use crate::{Color, selection};

#[derive(Debug, PartialEq, Eq)]
pub struct MuscleGroup {
    name: &'static str,
    color: Color,
    muscles: &'static [Muscle],
}

impl MuscleGroup {
    const fn new(name: &'static str, color: Color, muscles: &'static [Muscle]) -> Self {
        assert!(!muscles.is_empty(), "muscle group without muscles");
        Self {
            name,
            color,
            muscles,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn muscles(&self) -> &'static [Muscle] {
        self.muscles
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Muscle {
    name: &'static str,
    division: Division,
}

/// How a muscle subdivides. A muscle never has both heads and sub-muscles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    Leaf,
    Heads(&'static [MuscleHead]),
    SubMuscles(&'static [SubMuscle]),
}

impl Muscle {
    const fn leaf(name: &'static str) -> Self {
        Self {
            name,
            division: Division::Leaf,
        }
    }

    const fn with_heads(name: &'static str, heads: &'static [MuscleHead]) -> Self {
        assert!(!heads.is_empty(), "muscle with empty head list");
        Self {
            name,
            division: Division::Heads(heads),
        }
    }

    const fn with_sub_muscles(name: &'static str, sub_muscles: &'static [SubMuscle]) -> Self {
        assert!(!sub_muscles.is_empty(), "muscle with empty sub-muscle list");
        Self {
            name,
            division: Division::SubMuscles(sub_muscles),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn division(&self) -> Division {
        self.division
    }

    #[must_use]
    pub fn heads(&self) -> &'static [MuscleHead] {
        match self.division {
            Division::Heads(heads) => heads,
            Division::Leaf | Division::SubMuscles(_) => &[],
        }
    }

    #[must_use]
    pub fn sub_muscles(&self) -> &'static [SubMuscle] {
        match self.division {
            Division::SubMuscles(sub_muscles) => sub_muscles,
            Division::Leaf | Division::Heads(_) => &[],
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SubMuscle {
    name: &'static str,
    heads: &'static [MuscleHead],
}

impl SubMuscle {
    const fn new(name: &'static str) -> Self {
        Self { name, heads: &[] }
    }

    const fn with_heads(name: &'static str, heads: &'static [MuscleHead]) -> Self {
        assert!(!heads.is_empty(), "sub-muscle with empty head list");
        Self { name, heads }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Empty if the sub-muscle does not subdivide further.
    #[must_use]
    pub fn heads(&self) -> &'static [MuscleHead] {
        self.heads
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MuscleHead {
    name: &'static str,
}

impl MuscleHead {
    const fn new(name: &'static str) -> Self {
        Self { name }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

static MUSCLE_GROUPS: [MuscleGroup; 6] = [
    MuscleGroup::new(
        "Chest",
        Color::rgb(0x22, 0xc5, 0x5e),
        &[Muscle::with_heads(
            "Pectoralis Major",
            &[
                MuscleHead::new("Upper (Clavicular Head)"),
                MuscleHead::new("Middle (Sternal Head)"),
                MuscleHead::new("Lower (Costal Head)"),
            ],
        )],
    ),
    MuscleGroup::new(
        "Back",
        Color::rgb(0x3b, 0x82, 0xf6),
        &[
            Muscle::leaf("Latissimus Dorsi"),
            Muscle::with_heads(
                "Trapezius",
                &[
                    MuscleHead::new("Upper"),
                    MuscleHead::new("Middle"),
                    MuscleHead::new("Lower"),
                ],
            ),
            Muscle::leaf("Rhomboids"),
            Muscle::leaf("Teres Major"),
            Muscle::leaf("Erector Spinae (Lower Back)"),
        ],
    ),
    MuscleGroup::new(
        "Shoulders",
        Color::rgb(0xea, 0xb3, 0x08),
        &[Muscle::with_heads(
            "Deltoids",
            &[
                MuscleHead::new("Anterior Deltoid (Front)"),
                MuscleHead::new("Lateral Deltoid (Side)"),
                MuscleHead::new("Posterior Deltoid (Rear)"),
            ],
        )],
    ),
    MuscleGroup::new(
        "Arms",
        Color::rgb(0xef, 0x44, 0x44),
        &[
            Muscle::with_sub_muscles(
                "Biceps",
                &[
                    SubMuscle::with_heads(
                        "Biceps Brachii",
                        &[MuscleHead::new("Long Head"), MuscleHead::new("Short Head")],
                    ),
                    SubMuscle::new("Brachialis"),
                    SubMuscle::new("Brachioradialis"),
                ],
            ),
            Muscle::with_heads(
                "Triceps",
                &[
                    MuscleHead::new("Long Head"),
                    MuscleHead::new("Lateral Head"),
                    MuscleHead::new("Medial Head"),
                ],
            ),
            Muscle::with_sub_muscles(
                "Forearms",
                &[
                    SubMuscle::new("Wrist Flexors"),
                    SubMuscle::new("Wrist Extensors"),
                ],
            ),
        ],
    ),
    MuscleGroup::new(
        "Legs",
        Color::rgb(0xf9, 0x73, 0x16),
        &[
            Muscle::with_sub_muscles(
                "Quadriceps",
                &[
                    SubMuscle::new("Rectus Femoris"),
                    SubMuscle::new("Vastus Lateralis"),
                    SubMuscle::new("Vastus Medialis"),
                    SubMuscle::new("Vastus Intermedius"),
                ],
            ),
            Muscle::with_sub_muscles(
                "Hamstrings",
                &[
                    SubMuscle::new("Biceps Femoris"),
                    SubMuscle::new("Semitendinosus"),
                    SubMuscle::new("Semimembranosus"),
                ],
            ),
            Muscle::with_sub_muscles(
                "Glutes",
                &[
                    SubMuscle::new("Gluteus Maximus"),
                    SubMuscle::new("Gluteus Medius"),
                    SubMuscle::new("Gluteus Minimus"),
                ],
            ),
            Muscle::with_sub_muscles(
                "Calves",
                &[SubMuscle::new("Gastrocnemius"), SubMuscle::new("Soleus")],
            ),
        ],
    ),
    MuscleGroup::new(
        "Core",
        Color::rgb(0xa8, 0x55, 0xf7),
        &[
            Muscle::leaf("Rectus Abdominis"),
            Muscle::leaf("Obliques (Internal & External)"),
            Muscle::leaf("Transverse Abdominis"),
            Muscle::leaf("Erector Spinae"),
        ],
    ),
];

#[must_use]
pub fn groups() -> &'static [MuscleGroup] {
    &MUSCLE_GROUPS
}

/// Case-sensitive lookup by the group's declared name.
#[must_use]
pub fn group(name: &str) -> Option<&'static MuscleGroup> {
    MUSCLE_GROUPS.iter().find(|g| g.name == name)
}

#[must_use]
pub fn color_of(group_name: &str) -> Color {
    if let Some(group) = group(group_name) {
        group.color
    } else {
        debug!("no color for unknown muscle group {group_name:?}");
        Color::NEUTRAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub groups: usize,
    pub muscles: usize,
    pub selections: usize,
}

#[must_use]
pub fn statistics() -> Statistics {
    Statistics {
        groups: MUSCLE_GROUPS.len(),
        muscles: MUSCLE_GROUPS.iter().map(|g| g.muscles.len()).sum(),
        selections: selection::all_selections().len(),
    }
}

/// Checks the naming invariants every revision of the dataset must keep.
pub fn validate(groups: &[MuscleGroup]) -> Result<(), TaxonomyError> {
    let mut group_names = HashSet::new();

    for group in groups {
        check_name(group.name)?;
        if !group_names.insert(group.name) {
            return Err(TaxonomyError::DuplicateGroup(group.name));
        }

        let mut muscle_names = HashSet::new();

        for muscle in group.muscles {
            check_name(muscle.name)?;
            if !muscle_names.insert(muscle.name) {
                return Err(TaxonomyError::DuplicateMuscle {
                    group: group.name,
                    muscle: muscle.name,
                });
            }

            match muscle.division {
                Division::Leaf => {}
                Division::Heads(heads) => check_heads(muscle.name, heads)?,
                Division::SubMuscles(sub_muscles) => {
                    let mut sub_muscle_names = HashSet::new();
                    for sub_muscle in sub_muscles {
                        check_name(sub_muscle.name)?;
                        if !sub_muscle_names.insert(sub_muscle.name) {
                            return Err(TaxonomyError::DuplicateSubMuscle {
                                muscle: muscle.name,
                                sub_muscle: sub_muscle.name,
                            });
                        }
                        check_heads(sub_muscle.name, sub_muscle.heads)?;
                    }
                }
            }
        }
    }

    Ok(())
}

fn check_heads(owner: &'static str, heads: &'static [MuscleHead]) -> Result<(), TaxonomyError> {
    let mut names = HashSet::new();
    for head in heads {
        check_name(head.name)?;
        if !names.insert(head.name) {
            return Err(TaxonomyError::DuplicateHead {
                owner,
                head: head.name,
            });
        }
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), TaxonomyError> {
    if name.trim().is_empty() {
        return Err(TaxonomyError::EmptyName);
    }
    Ok(())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TaxonomyError {
    #[error("Names in the muscle taxonomy must not be empty")]
    EmptyName,
    #[error("Duplicate muscle group {0:?}")]
    DuplicateGroup(&'static str),
    #[error("Duplicate muscle {muscle:?} in group {group:?}")]
    DuplicateMuscle {
        group: &'static str,
        muscle: &'static str,
    },
    #[error("Duplicate sub-muscle {sub_muscle:?} in muscle {muscle:?}")]
    DuplicateSubMuscle {
        muscle: &'static str,
        sub_muscle: &'static str,
    },
    #[error("Duplicate head {head:?} in {owner:?}")]
    DuplicateHead {
        owner: &'static str,
        head: &'static str,
    },
}
