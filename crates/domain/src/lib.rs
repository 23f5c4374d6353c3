#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod color;
pub mod goal;
pub mod highlight;
pub mod name;
pub mod selection;
pub mod tag;
pub mod taxonomy;
pub mod timer;
pub mod workout;

pub use catalog::{
    Catalog, CatalogError, CatalogExercise, CatalogExerciseForm, CatalogPlan, Equipment,
    ExerciseID, Machine, MachineForm, MachineID, PlanEntry,
};
pub use color::{Color, ColorError};
pub use goal::{Goal, GoalError, GoalForm, GoalKind, ProgressBand};
pub use highlight::{BodyPart, Focus, Highlight, highlight};
pub use name::{Name, NameError};
pub use selection::{Selection, SelectionFilter, all_selections};
pub use tag::{ExerciseTag, TagLevel, tags_for};
pub use taxonomy::{
    Division, Muscle, MuscleGroup, MuscleHead, Statistics, SubMuscle, TaxonomyError, color_of,
    groups, statistics, validate,
};
pub use timer::{Difficulty, Phase, TimedExercise, TimerError, WorkoutTimer, format_time};
pub use workout::{
    ExerciseForm, POPULAR_EXERCISES, PlannedExercise, Seconds, SecondsError, WorkoutError,
    WorkoutKind, WorkoutPlan,
};
