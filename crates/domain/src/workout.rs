use derive_more::{Display, Into};

use crate::{Name, NameError};

pub static POPULAR_EXERCISES: [&str; 14] = [
    "Push-ups",
    "Squats",
    "Lunges",
    "Plank",
    "Burpees",
    "Pull-ups",
    "Deadlifts",
    "Bench Press",
    "Shoulder Press",
    "Bicep Curls",
    "Tricep Dips",
    "Mountain Climbers",
    "Jumping Jacks",
    "Russian Twists",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum WorkoutKind {
    #[default]
    Strength,
    Cardio,
    Hiit,
    Flexibility,
}

impl WorkoutKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Strength => "Strength Training",
            WorkoutKind::Cardio => "Cardio",
            WorkoutKind::Hiit => "HIIT",
            WorkoutKind::Flexibility => "Flexibility",
        }
    }
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u32);

impl Seconds {
    pub const MAX: u32 = 3599;

    pub fn new(value: u32) -> Result<Self, SecondsError> {
        if value > Self::MAX {
            return Err(SecondsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Seconds {
    type Error = SecondsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Seconds::new(parsed_value),
            Err(_) => Err(SecondsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SecondsError {
    #[error("Time must be in the range 0 to 3599 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// Raw input of the exercise form of a new workout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseForm {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub duration: String,
    pub rest: String,
}

impl ExerciseForm {
    #[must_use]
    pub fn new(default_rest: Seconds) -> Self {
        Self {
            rest: default_rest.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub name: Name,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub duration: Option<Seconds>,
    pub rest: Option<Seconds>,
}

impl PlannedExercise {
    pub fn from_form(form: &ExerciseForm) -> Result<Self, WorkoutError> {
        let sets = match form.sets.trim() {
            "" => None,
            sets => Some(sets.parse::<u32>().map_err(|_| WorkoutError::Sets)?),
        };
        let optional_seconds = |value: &str| match value.trim() {
            "" => Ok(None),
            value => Seconds::try_from(value).map(Some),
        };

        Ok(Self {
            name: Name::new(&form.name)?,
            sets,
            reps: Some(form.reps.trim())
                .filter(|r| !r.is_empty())
                .map(ToString::to_string),
            duration: optional_seconds(&form.duration).map_err(WorkoutError::Duration)?,
            rest: optional_seconds(&form.rest).map_err(WorkoutError::Rest)?,
        })
    }

    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.duration.map_or(0, u32::from) + self.rest.map_or(0, u32::from)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Sets must be an integer")]
    Sets,
    #[error("Duration: {0}")]
    Duration(SecondsError),
    #[error("Rest: {0}")]
    Rest(SecondsError),
    #[error("No exercise at position {0}")]
    NoSuchExercise(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub name: String,
    pub kind: WorkoutKind,
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn new(name: &str, kind: WorkoutKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            exercises: vec![],
        }
    }

    pub fn add(&mut self, form: &ExerciseForm) -> Result<&PlannedExercise, WorkoutError> {
        let exercise = PlannedExercise::from_form(form)?;
        self.exercises.push(exercise);
        Ok(&self.exercises[self.exercises.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Result<PlannedExercise, WorkoutError> {
        if index >= self.exercises.len() {
            return Err(WorkoutError::NoSuchExercise(index));
        }
        Ok(self.exercises.remove(index))
    }

    /// Sum of all durations and rests in whole minutes, rounded half up.
    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        let seconds = self
            .exercises
            .iter()
            .map(PlannedExercise::total_seconds)
            .sum::<u32>();
        (seconds + 30) / 60
    }

    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().filter_map(|e| e.sets).sum()
    }

    /// A plan can be saved once it has a name and at least one exercise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.exercises.is_empty()
    }
}
