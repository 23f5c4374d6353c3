use derive_more::{AsRef, Display};

pub const MAX_NAME_LEN: usize = 64;

/// A trimmed, non-empty name of a workout or an exercise.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();
        let len = name.chars().count();

        match len {
            0 => Err(NameError::Empty),
            1..=MAX_NAME_LEN => Ok(Self(name.to_string())),
            _ => Err(NameError::TooLong(len)),
        }
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be {MAX_NAME_LEN} characters or fewer ({0} > {MAX_NAME_LEN})")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("Push-ups", Ok("Push-ups"))]
    #[case::trimmed("  Mountain Climbers\n", Ok("Mountain Climbers"))]
    #[case::empty("", Err(NameError::Empty))]
    #[case::whitespace("   ", Err(NameError::Empty))]
    #[case::multibyte_at_limit(
        "üüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüü",
        Ok("üüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüüü")
    )]
    #[case::too_long(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<&str, NameError>) {
        assert_eq!(
            Name::new(name).as_ref().map(|n| n.as_ref().as_str()),
            expected.as_ref().copied()
        );
    }

    #[test]
    fn test_name_display() {
        assert_eq!(Name::try_from(" Plank ").unwrap().to_string(), "Plank");
    }

    #[test]
    fn test_name_error_display() {
        assert_eq!(
            NameError::TooLong(70).to_string(),
            "Name must be 64 characters or fewer (70 > 64)"
        );
    }
}
