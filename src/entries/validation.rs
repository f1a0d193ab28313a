use std::ops::RangeInclusive;

use thiserror::Error;

pub const ENERGY_RANGE: RangeInclusive<i32> = 1..=10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least one of description or energy must be provided")]
    Empty,
    #[error("Energy must be between 1 and 10, got {0}")]
    EnergyOutOfRange(i32),
}

/// Entry content that passed validation: at least one field present,
/// energy (if any) within [`ENERGY_RANGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContent {
    description: Option<String>,
    energy: Option<i32>,
}

impl EntryContent {
    /// Blank descriptions count as absent and are dropped; others are kept verbatim.
    pub fn new(description: Option<String>, energy: Option<i32>) -> Result<Self, ValidationError> {
        let description = description.filter(|d| !d.trim().is_empty());

        if description.is_none() && energy.is_none() {
            return Err(ValidationError::Empty);
        }
        if let Some(e) = energy {
            if !ENERGY_RANGE.contains(&e) {
                return Err(ValidationError::EnergyOutOfRange(e));
            }
        }
        Ok(Self {
            description,
            energy,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn energy(&self) -> Option<i32> {
        self.energy
    }

    pub fn into_parts(self) -> (Option<String>, Option<i32>) {
        (self.description, self.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_only_keeps_energy_absent() {
        let c = EntryContent::new(Some("walked the dog".into()), None).unwrap();
        assert_eq!(c.description(), Some("walked the dog"));
        assert_eq!(c.energy(), None);
    }

    #[test]
    fn energy_only_keeps_description_absent() {
        let c = EntryContent::new(None, Some(7)).unwrap();
        assert_eq!(c.description(), None);
        assert_eq!(c.energy(), Some(7));
    }

    #[test]
    fn neither_field_is_rejected() {
        assert_eq!(EntryContent::new(None, None), Err(ValidationError::Empty));
    }

    #[test]
    fn blank_description_counts_as_absent() {
        assert_eq!(
            EntryContent::new(Some("   ".into()), None),
            Err(ValidationError::Empty)
        );
        let c = EntryContent::new(Some("\n".into()), Some(4)).unwrap();
        assert_eq!(c.into_parts(), (None, Some(4)));
    }

    #[test]
    fn description_is_kept_verbatim() {
        let c = EntryContent::new(Some("  spaced out \n".into()), None).unwrap();
        assert_eq!(c.description(), Some("  spaced out \n"));
    }

    #[test]
    fn energy_bounds_are_inclusive() {
        assert!(EntryContent::new(None, Some(1)).is_ok());
        assert!(EntryContent::new(None, Some(10)).is_ok());
        for bad in [0, 11, -3, i32::MIN, i32::MAX] {
            assert_eq!(
                EntryContent::new(Some("note".into()), Some(bad)),
                Err(ValidationError::EnergyOutOfRange(bad))
            );
        }
    }

    #[test]
    fn messages_name_the_failed_rule() {
        assert!(ValidationError::Empty.to_string().contains("description or energy"));
        assert!(ValidationError::EnergyOutOfRange(11)
            .to_string()
            .contains("between 1 and 10"));
    }
}
