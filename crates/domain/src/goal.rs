use chrono::NaiveDate;
use log::debug;

use crate::{Name, NameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum GoalKind {
    WeightLoss,
    MuscleGain,
    Endurance,
    Strength,
    Consistency,
    BodyFat,
    Flexibility,
    Other,
}

impl GoalKind {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            GoalKind::WeightLoss => "weight-loss",
            GoalKind::MuscleGain => "muscle-gain",
            GoalKind::Endurance => "endurance",
            GoalKind::Strength => "strength",
            GoalKind::Consistency => "consistency",
            GoalKind::BodyFat => "body-fat",
            GoalKind::Flexibility => "flexibility",
            GoalKind::Other => "other",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GoalKind::WeightLoss => "Weight Loss",
            GoalKind::MuscleGain => "Muscle Gain",
            GoalKind::Endurance => "Endurance",
            GoalKind::Strength => "Strength",
            GoalKind::Consistency => "Consistency",
            GoalKind::BodyFat => "Body Fat",
            GoalKind::Flexibility => "Flexibility",
            GoalKind::Other => "Other",
        }
    }

    /// Unit prefilled when the kind is chosen.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            GoalKind::WeightLoss | GoalKind::MuscleGain | GoalKind::Strength => "kg",
            GoalKind::Endurance => "km",
            GoalKind::Consistency => "days",
            GoalKind::BodyFat => "%",
            GoalKind::Flexibility => "cm",
            GoalKind::Other => "",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<GoalKind> {
        <GoalKind as strum::IntoEnumIterator>::iter().find(|k| k.id() == id)
    }
}

/// Raw input of the goal form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GoalForm {
    pub name: String,
    pub kind: Option<GoalKind>,
    pub target: String,
    pub current: String,
    pub unit: String,
    pub target_date: String,
    pub description: String,
}

impl GoalForm {
    /// Selects the kind and replaces the unit by the kind's default unit.
    pub fn set_kind(&mut self, kind: Option<GoalKind>) {
        self.kind = kind;
        self.unit = kind.map(GoalKind::unit).unwrap_or_default().to_string();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: Name,
    pub kind: GoalKind,
    pub target: f32,
    pub current: f32,
    pub unit: String,
    pub target_date: NaiveDate,
    pub description: String,
    pub completed: bool,
    pub created: NaiveDate,
}

impl Goal {
    /// Creates a goal from the form. An empty current value counts as 0.
    pub fn from_form(form: &GoalForm, created: NaiveDate) -> Result<Self, GoalError> {
        let kind = form.kind.ok_or(GoalError::Kind)?;
        let target = parse_value(&form.target).ok_or(GoalError::Target)?;
        let current = if form.current.trim().is_empty() {
            0.0
        } else {
            parse_value(&form.current).ok_or(GoalError::Current)?
        };
        let target_date = NaiveDate::parse_from_str(form.target_date.trim(), "%Y-%m-%d")
            .map_err(|_| GoalError::TargetDate)?;

        Ok(Self {
            name: Name::new(&form.name)?,
            kind,
            target,
            current,
            unit: form.unit.trim().to_string(),
            target_date,
            description: form.description.trim().to_string(),
            completed: false,
            created,
        })
    }

    /// Reached share of the target in percent, clamped to 0..=100.
    ///
    /// A goal without a positive target counts as reached.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.target <= 0.0 {
            return 100.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn progress_band(&self) -> ProgressBand {
        ProgressBand::from(self.progress())
    }

    pub fn update_progress(&mut self, current: f32) {
        self.current = current;
        if self.progress() >= 100.0 && !self.completed {
            debug!("goal {} reached", self.name);
            self.completed = true;
        }
    }
}

fn parse_value(value: &str) -> Option<f32> {
    value
        .replace(',', ".")
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Color band of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Low,
    Medium,
    High,
}

impl From<f32> for ProgressBand {
    fn from(percentage: f32) -> Self {
        if percentage >= 80.0 {
            ProgressBand::High
        } else if percentage >= 50.0 {
            ProgressBand::Medium
        } else {
            ProgressBand::Low
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Goal type must be selected")]
    Kind,
    #[error("Target value must be a non-negative decimal number")]
    Target,
    #[error("Current value must be a non-negative decimal number")]
    Current,
    #[error("Invalid target date")]
    TargetDate,
}
