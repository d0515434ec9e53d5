use std::sync::{Arc, Mutex, PoisonError};

use course_types::Course;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("registry lock poisoned: {0}")]
    Poisoned(String),
}

impl<T> From<PoisonError<T>> for RegistryError {
    fn from(err: PoisonError<T>) -> Self {
        RegistryError::Poisoned(err.to_string())
    }
}

/// In-memory course collection plus the id counter that feeds it. The
/// counter only moves forward, so ids are never reused after a delete.
#[derive(Clone)]
pub struct CourseRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

struct RegistryInner {
    courses: Vec<Course>,
    next_id: u64,
}

impl CourseRegistry {
    pub fn new(courses: Vec<Course>) -> Self {
        let next_id = courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(RegistryInner { courses, next_id })),
        }
    }

    /// Registry pre-populated with the three fixture records served at boot.
    pub fn seeded() -> Self {
        Self::new(vec![
            Course {
                id: 1,
                name: "course1".into(),
            },
            Course {
                id: 2,
                name: "course2".into(),
            },
            Course {
                id: 3,
                name: "course3".into(),
            },
        ])
    }

    pub fn list(&self) -> Result<Vec<Course>, RegistryError> {
        Ok(self.inner.lock()?.courses.clone())
    }

    pub fn get(&self, id: u64) -> Result<Course, RegistryError> {
        self.inner
            .lock()?
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    pub fn create(&self, name: Option<&str>) -> Result<Course, RegistryError> {
        let name = validate_name(name)?;
        let mut inner = self.inner.lock()?;
        let course = Course {
            id: inner.next_id,
            name,
        };
        inner.next_id += 1;
        inner.courses.push(course.clone());
        Ok(course)
    }

    pub fn update(&self, id: u64, name: Option<&str>) -> Result<Course, RegistryError> {
        let mut inner = self.inner.lock()?;
        // unknown id reports not-found before the name is validated
        let idx = inner
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound)?;
        inner.courses[idx].name = validate_name(name)?;
        Ok(inner.courses[idx].clone())
    }

    pub fn delete(&self, id: u64) -> Result<Course, RegistryError> {
        let mut inner = self.inner.lock()?;
        let idx = inner
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(RegistryError::NotFound)?;
        Ok(inner.courses.remove(idx))
    }
}

pub fn validate_name(name: Option<&str>) -> Result<String, RegistryError> {
    match name {
        Some(name) if name.chars().count() >= 3 => Ok(name.to_string()),
        _ => Err(RegistryError::Validation(
            "Name is required and should be > 3".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_missing_and_short() {
        assert!(matches!(
            validate_name(None),
            Err(RegistryError::Validation(_))
        ));
        assert!(matches!(
            validate_name(Some("ab")),
            Err(RegistryError::Validation(_))
        ));
        assert_eq!(validate_name(Some("abc")).unwrap(), "abc");
    }

    #[test]
    fn seeded_registry_assigns_id_four_next() {
        let registry = CourseRegistry::seeded();
        let created = registry.create(Some("course4")).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.name, "course4");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let registry = CourseRegistry::seeded();
        registry.delete(3).unwrap();
        let created = registry.create(Some("replacement")).unwrap();
        assert_eq!(created.id, 4);

        registry.delete(4).unwrap();
        let next = registry.create(Some("another")).unwrap();
        assert_eq!(next.id, 5);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let registry = CourseRegistry::seeded();
        let removed = registry.delete(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(removed.name, "course2");

        let remaining = registry.list().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|c| c.id != 2));
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let registry = CourseRegistry::seeded();
        assert!(matches!(
            registry.update(42, Some("course42")),
            Err(RegistryError::NotFound)
        ));
        assert_eq!(registry.list().unwrap(), CourseRegistry::seeded().list().unwrap());
    }

    #[test]
    fn update_checks_existence_before_validating() {
        let registry = CourseRegistry::seeded();
        // both problems present: not-found wins
        assert!(matches!(
            registry.update(42, Some("x")),
            Err(RegistryError::NotFound)
        ));
    }

    #[test]
    fn empty_registry_starts_ids_at_one() {
        let registry = CourseRegistry::new(Vec::new());
        assert_eq!(registry.list().unwrap(), Vec::new());
        let created = registry.create(Some("first")).unwrap();
        assert_eq!(created.id, 1);
    }
}
