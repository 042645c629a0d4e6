//! Parsing catalog files.
//!
//! A catalog file is a JSON array of course records:
//!
//! ```json
//! [{ "id": "react-101", "title": "React Fundamentals", "platform": "Udemy",
//!    "level": "beginner", "duration": "beginner", "price": 9.99,
//!    "rating": 4.7, "students": 450000, "tags": ["react", "frontend"],
//!    "instructor": "Brad Traversy", "description": "..." }]
//! ```
//!
//! Level labels are lenient (unknown → beginner) and so are duration labels
//! (unknown → no duration class).

use crate::error::{CatalogError, Result};
use crate::types::{Course, DurationClass};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Serde helper for `Course::duration_class`.
pub(crate) fn lenient_duration_class<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DurationClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(DurationClass::from_label))
}

/// Parse a JSON course list from a string.
pub fn parse_courses(content: &str, path: &Path) -> Result<Vec<Course>> {
    serde_json::from_str(content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON course list from disk.
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let courses = parse_courses(&content, path)?;
    tracing::debug!("Parsed {} courses from {}", courses.len(), path.display());
    Ok(courses)
}

/// Check a single course against the catalog invariants.
pub fn validate_course(course: &Course) -> Result<()> {
    if course.id.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            course_id: course.id.clone(),
            field: "id",
            value: course.id.clone(),
        });
    }
    if !course.rating.is_finite() || !(0.0..=5.0).contains(&course.rating) {
        return Err(CatalogError::InvalidValue {
            course_id: course.id.clone(),
            field: "rating",
            value: course.rating.to_string(),
        });
    }
    if !course.price.is_finite() || course.price < 0.0 {
        return Err(CatalogError::InvalidValue {
            course_id: course.id.clone(),
            field: "price",
            value: course.price.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "id": "rust-101",
            "title": "Rust Basics",
            "platform": "Udemy",
            "level": "Beginner",
            "duration": "weekend-sprint",
            "price": 12.5,
            "rating": 4.4,
            "students": 1200,
            "tags": ["rust", "systems"],
            "instructor": "Ferris",
            "description": "Ownership without tears"
        },
        {
            "id": "rust-async",
            "title": "Async Rust",
            "platform": "Coursera",
            "level": "advanced",
            "price": 0,
            "rating": 4.9,
            "tags": ["rust", "async"]
        }
    ]"#;

    #[test]
    fn test_parse_courses() {
        let courses = parse_courses(SAMPLE, Path::new("inline.json")).unwrap();
        assert_eq!(courses.len(), 2);

        assert_eq!(courses[0].level, Level::Beginner);
        assert_eq!(courses[0].duration_class, None);
        assert_eq!(courses[0].students_count, 1200);

        assert_eq!(courses[1].level, Level::Advanced);
        assert_eq!(courses[1].duration_class, None);
        assert!(courses[1].instructor.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_courses("{not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_load_courses_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let courses = load_courses(file.path()).unwrap();
        assert_eq!(courses[1].id, "rust-async");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_courses(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut courses = parse_courses(SAMPLE, Path::new("inline.json")).unwrap();
        courses[0].rating = 5.5;
        let err = validate_course(&courses[0]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { field: "rating", .. }));

        courses[1].price = -1.0;
        assert!(validate_course(&courses[1]).is_err());
    }
}
