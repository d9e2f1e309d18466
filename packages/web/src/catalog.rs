//! Shared read-only doctor roster
//!
//! Both the home page and the directory read from the same catalog, which is
//! provided once through context by the root component.

use std::collections::HashSet;
use std::sync::Arc;

use crate::types::Doctor;

const SEED_DOCTORS: &str = include_str!("../data/doctors.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid doctor record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate doctor id {0}")]
    DuplicateId(u32),

    #[error("Doctor {0} has an empty name")]
    EmptyName(u32),
}

/// Immutable list of doctors, cheap to clone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    doctors: Arc<Vec<Doctor>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and unnamed doctors
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(doctors.len());
        for doctor in &doctors {
            if doctor.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(doctor.id));
            }
            if !seen.insert(doctor.id) {
                return Err(CatalogError::DuplicateId(doctor.id));
            }
        }

        Ok(Self {
            doctors: Arc::new(doctors),
        })
    }

    /// Parse a JSON array of doctor records.
    ///
    /// A specialty outside the known set fails here rather than leaving the
    /// doctor unreachable from every filter.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doctors: Vec<Doctor> = serde_json::from_str(json)?;
        Self::new(doctors)
    }

    /// The roster bundled with the site
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_DOCTORS)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Specialty;

    #[test]
    fn seed_roster_loads() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.get(1).unwrap().name, "Dr. Smith");
        assert_eq!(catalog.get(2).unwrap().specialty, Specialty::GeneralPhysician);
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "specialty": "Dentist", "image": "a.png", "available": true},
            {"id": 1, "name": "B", "specialty": "Neurologist", "image": "b.png", "available": false}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn unknown_specialty_is_rejected_at_load() {
        let json = r#"[
            {"id": 1, "name": "A", "specialty": "Cardiologist", "image": "a.png", "available": true}
        ]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn specialty_match_is_case_sensitive() {
        let json = r#"[
            {"id": 1, "name": "A", "specialty": "dentist", "image": "a.png", "available": true}
        ]"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        let json = r#"[
            {"id": 7, "name": "  ", "specialty": "Dentist", "image": "a.png", "available": true}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::EmptyName(7))
        ));
    }
}
