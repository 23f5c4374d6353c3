use std::collections::BTreeMap;

use derive_more::{Display, Into};
use log::debug;

use crate::{Name, NameError, Seconds, SecondsError};

/// Preparation and transition time added to every plan.
pub const BUFFER_MINUTES: u32 = 5;

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineID(u32);

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    pub id: MachineID,
    pub name: Name,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equipment {
    Bodyweight,
    Machine(MachineID),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExercise {
    pub id: ExerciseID,
    pub name: Name,
    pub equipment: Equipment,
    pub muscle_groups: Vec<String>,
    pub time_per_rep: Seconds,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MachineForm {
    pub name: String,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExerciseForm {
    pub name: String,
    pub machine: Option<MachineID>,
    pub muscle_groups: String,
    pub time_per_rep: String,
    pub description: String,
}

impl Default for CatalogExerciseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            machine: None,
            muscle_groups: String::new(),
            time_per_rep: "2".into(),
            description: String::new(),
        }
    }
}

/// One exercise of a plan, performed as `sets` sets with `rest` between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub exercise: ExerciseID,
    pub sets: u32,
    pub reps: u32,
    pub rest: Seconds,
}

impl PlanEntry {
    /// Entry with 3 sets of 10 reps and 30 s rest.
    #[must_use]
    pub fn new(exercise: ExerciseID) -> Self {
        Self {
            exercise,
            sets: 3,
            reps: 10,
            rest: Seconds::new(30).unwrap_or_default(),
        }
    }

    /// Duration of all sets without a rest after the last one.
    #[must_use]
    pub fn seconds(&self, time_per_rep: Seconds) -> u32 {
        if self.sets == 0 {
            return 0;
        }
        let rest = u32::from(self.rest);
        let set = self
            .reps
            .saturating_mul(u32::from(time_per_rep))
            .saturating_add(rest);
        set.saturating_mul(self.sets) - rest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPlan {
    pub name: Name,
    pub description: String,
    pub entries: Vec<PlanEntry>,
    pub total_minutes: u32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    machines: BTreeMap<MachineID, Machine>,
    exercises: BTreeMap<ExerciseID, CatalogExercise>,
    plans: Vec<CatalogPlan>,
    next_id: u32,
}

impl Catalog {
    pub fn machines(&self) -> impl Iterator<Item = &Machine> {
        self.machines.values()
    }

    pub fn exercises(&self) -> impl Iterator<Item = &CatalogExercise> {
        self.exercises.values()
    }

    #[must_use]
    pub fn plans(&self) -> &[CatalogPlan] {
        &self.plans
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&CatalogExercise> {
        self.exercises.get(&id)
    }

    pub fn add_machine(&mut self, form: &MachineForm) -> Result<&Machine, CatalogError> {
        let id = MachineID(self.next_id());
        let machine = Machine {
            id,
            name: Name::new(&form.name)?,
            kind: form.kind.trim().to_string(),
            description: form.description.trim().to_string(),
        };
        Ok(self.machines.entry(id).or_insert(machine))
    }

    pub fn add_exercise(
        &mut self,
        form: &CatalogExerciseForm,
    ) -> Result<&CatalogExercise, CatalogError> {
        let equipment = match form.machine {
            Some(id) if self.machines.contains_key(&id) => Equipment::Machine(id),
            Some(id) => return Err(CatalogError::NoSuchMachine(id)),
            None => Equipment::Bodyweight,
        };
        let name = Name::new(&form.name)?;
        let time_per_rep =
            Seconds::try_from(form.time_per_rep.as_str()).map_err(CatalogError::TimePerRep)?;
        let id = ExerciseID(self.next_id());
        let exercise = CatalogExercise {
            id,
            name,
            equipment,
            muscle_groups: form
                .muscle_groups
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(ToString::to_string)
                .collect(),
            time_per_rep,
            description: form.description.trim().to_string(),
        };
        Ok(self.exercises.entry(id).or_insert(exercise))
    }

    /// Removes a machine together with the exercises performed on it.
    pub fn remove_machine(&mut self, id: MachineID) -> Result<Machine, CatalogError> {
        let machine = self
            .machines
            .remove(&id)
            .ok_or(CatalogError::NoSuchMachine(id))?;
        self.exercises
            .retain(|_, e| e.equipment != Equipment::Machine(id));
        Ok(machine)
    }

    pub fn remove_exercise(&mut self, id: ExerciseID) -> Result<CatalogExercise, CatalogError> {
        self.exercises
            .remove(&id)
            .ok_or(CatalogError::NoSuchExercise(id))
    }

    /// Estimated minutes of a plan: the buffer plus the duration of each entry, rounded to
    /// whole minutes. Entries referring to unknown exercises are skipped.
    #[must_use]
    pub fn workout_minutes(&self, entries: &[PlanEntry]) -> u32 {
        let seconds = entries
            .iter()
            .filter_map(|entry| match self.exercises.get(&entry.exercise) {
                Some(exercise) => Some(entry.seconds(exercise.time_per_rep)),
                None => {
                    debug!("skipping unknown exercise {} in plan", entry.exercise);
                    None
                }
            })
            .sum::<u32>();
        (BUFFER_MINUTES * 60 + seconds + 30) / 60
    }

    pub fn add_plan(
        &mut self,
        name: &str,
        description: &str,
        entries: Vec<PlanEntry>,
    ) -> Result<&CatalogPlan, CatalogError> {
        let name = Name::new(name)?;
        let total_minutes = self.workout_minutes(&entries);
        self.plans.push(CatalogPlan {
            name,
            description: description.trim().to_string(),
            entries,
            total_minutes,
        });
        Ok(&self.plans[self.plans.len() - 1])
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Time per rep: {0}")]
    TimePerRep(SecondsError),
    #[error("No machine with ID {0}")]
    NoSuchMachine(MachineID),
    #[error("No exercise with ID {0}")]
    NoSuchExercise(ExerciseID),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    fn entry(exercise: u32, sets: u32, reps: u32, rest: u32) -> PlanEntry {
        PlanEntry {
            exercise: ExerciseID(exercise),
            sets,
            reps,
            rest: Seconds::new(rest).unwrap(),
        }
    }

    #[fixture]
    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        let bench = catalog
            .add_machine(&MachineForm {
                name: "Bench Press".into(),
                kind: "Strength".into(),
                description: "Adjustable bench with barbell rack".into(),
            })
            .unwrap()
            .id;
        catalog
            .add_exercise(&CatalogExerciseForm {
                name: "Push-ups".into(),
                muscle_groups: "Chest, Triceps".into(),
                ..CatalogExerciseForm::default()
            })
            .unwrap();
        catalog
            .add_exercise(&CatalogExerciseForm {
                name: "Bench Press".into(),
                machine: Some(bench),
                muscle_groups: "Chest,Triceps".into(),
                time_per_rep: "3".into(),
                ..CatalogExerciseForm::default()
            })
            .unwrap();
        catalog
    }

    #[rstest]
    fn test_add_exercise(catalog: Catalog) {
        assert_eq!(
            catalog
                .exercises()
                .map(|e| (e.id, e.equipment, e.muscle_groups.clone()))
                .collect::<Vec<_>>(),
            vec![
                (
                    ExerciseID(2),
                    Equipment::Bodyweight,
                    vec!["Chest".to_string(), "Triceps".to_string()]
                ),
                (
                    ExerciseID(3),
                    Equipment::Machine(MachineID(1)),
                    vec!["Chest".to_string(), "Triceps".to_string()]
                ),
            ]
        );
    }

    #[rstest]
    #[case::unknown_machine(
        CatalogExerciseForm { name: "Leg Press".into(), machine: Some(MachineID(9)), ..CatalogExerciseForm::default() },
        CatalogError::NoSuchMachine(MachineID(9))
    )]
    #[case::no_name(CatalogExerciseForm::default(), CatalogError::Name(NameError::Empty))]
    #[case::invalid_time_per_rep(
        CatalogExerciseForm { name: "Dips".into(), time_per_rep: "fast".into(), ..CatalogExerciseForm::default() },
        CatalogError::TimePerRep(SecondsError::ParseError)
    )]
    fn test_add_exercise_error(
        mut catalog: Catalog,
        #[case] form: CatalogExerciseForm,
        #[case] expected: CatalogError,
    ) {
        assert_eq!(catalog.add_exercise(&form), Err(expected));
    }

    #[rstest]
    #[case::single_set(entry(2, 1, 10, 60), 20)]
    #[case::no_rest_after_last_set(entry(2, 3, 12, 30), 132)]
    #[case::no_sets(entry(2, 0, 12, 30), 0)]
    #[case::no_rest(entry(3, 4, 8, 0), 96)]
    fn test_plan_entry_seconds(
        catalog: Catalog,
        #[case] entry: PlanEntry,
        #[case] expected: u32,
    ) {
        let exercise = catalog.exercise(entry.exercise).unwrap();
        assert_eq!(entry.seconds(exercise.time_per_rep), expected);
    }

    #[rstest]
    #[case::buffer_only(vec![], 5)]
    #[case::upper_body(vec![entry(2, 3, 12, 30), entry(3, 4, 8, 60)], 12)]
    #[case::unknown_exercise(vec![entry(2, 3, 12, 30), entry(42, 10, 10, 60)], 7)]
    #[case::rounded_down(vec![entry(2, 1, 14, 0)], 5)]
    #[case::rounded_up(vec![entry(2, 1, 15, 0)], 6)]
    fn test_workout_minutes(
        catalog: Catalog,
        #[case] entries: Vec<PlanEntry>,
        #[case] expected: u32,
    ) {
        assert_eq!(catalog.workout_minutes(&entries), expected);
    }

    #[rstest]
    fn test_add_plan(mut catalog: Catalog) {
        let plan = catalog
            .add_plan(
                "Upper Body Strength",
                "Focus on chest, shoulders, and arms",
                vec![entry(2, 3, 12, 30), entry(3, 4, 8, 60)],
            )
            .unwrap();

        assert_eq!(plan.total_minutes, 12);
        assert_eq!(catalog.plans().len(), 1);
        assert_eq!(
            catalog.add_plan("", "", vec![]),
            Err(CatalogError::Name(NameError::Empty))
        );
    }

    #[rstest]
    fn test_remove_machine(mut catalog: Catalog) {
        assert_eq!(
            catalog.remove_machine(MachineID(1)).map(|m| m.name.to_string()),
            Ok("Bench Press".to_string())
        );
        assert_eq!(catalog.machines().count(), 0);
        assert_eq!(
            catalog.exercises().map(|e| e.id).collect::<Vec<_>>(),
            vec![ExerciseID(2)]
        );
        assert_eq!(
            catalog.remove_machine(MachineID(1)),
            Err(CatalogError::NoSuchMachine(MachineID(1)))
        );
    }

    #[rstest]
    fn test_remove_exercise(mut catalog: Catalog) {
        assert!(catalog.remove_exercise(ExerciseID(2)).is_ok());
        assert_eq!(
            catalog.remove_exercise(ExerciseID(2)),
            Err(CatalogError::NoSuchExercise(ExerciseID(2)))
        );
        assert_eq!(catalog.workout_minutes(&[entry(2, 3, 12, 30)]), 5);
    }

    #[test]
    fn test_plan_entry_new() {
        assert_eq!(
            PlanEntry::new(ExerciseID(1)),
            entry(1, 3, 10, 30)
        );
    }
}
