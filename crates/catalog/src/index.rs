//! The in-memory course catalog.
//!
//! A `Catalog` is an ordered, immutable list of courses plus an id index.
//! Catalog order is significant: the engine's fallback path and its tie
//! breaking both follow it.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::Course;
use std::collections::HashMap;
use std::path::Path;

/// Closed, static set of courses known at startup.
///
/// Share it across threads behind an `Arc`; nothing mutates it after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from courses in the given order.
    ///
    /// Fails on duplicate or empty ids, ratings outside 0.0-5.0 and
    /// negative prices.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            parser::validate_course(course)?;
            if by_id.insert(course.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }
        Ok(Self { courses, by_id })
    }

    /// Assemble a catalog whose courses are already known to be valid.
    pub(crate) fn from_parts(courses: Vec<Course>, by_id: HashMap<String, usize>) -> Self {
        Self { courses, by_id }
    }

    /// Load a catalog from a JSON course list.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let courses = parser::load_courses(path)?;
        let catalog = Self::from_courses(courses)?;
        tracing::info!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&position| &self.courses[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
