//! The built-in course catalog.
//!
//! Covers frontend, backend, cybersecurity, UI/UX, data science and cloud.
//! Production deployments can swap this for [`Catalog::load_from_file`].

use crate::index::Catalog;
use crate::types::{Course, DurationClass, Level};

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    platform: &str,
    level: Level,
    duration_class: DurationClass,
    price: f64,
    rating: f32,
    students_count: u64,
    tags: &[&str],
    instructor: &str,
    description: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        platform: platform.to_string(),
        level,
        duration_class: Some(duration_class),
        price,
        rating,
        students_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        instructor: instructor.to_string(),
        description: description.to_string(),
    }
}

/// Courses of the built-in catalog, in catalog order.
pub fn builtin_courses() -> Vec<Course> {
    use DurationClass as D;
    use Level::*;

    vec![
        // Frontend
        course(
            "react-101",
            "React Fundamentals",
            "Udemy",
            Beginner,
            D::Beginner,
            9.99,
            4.7,
            450_000,
            &["react", "frontend", "javascript", "web development"],
            "Brad Traversy",
            "Learn React from scratch with hands-on projects",
        ),
        course(
            "react-advanced",
            "Advanced React Patterns",
            "Coursera",
            Intermediate,
            D::Intermediate,
            49.99,
            4.8,
            120_000,
            &["react", "frontend", "advanced", "javascript"],
            "Meta",
            "Master advanced React patterns and optimization",
        ),
        course(
            "react-native",
            "React Native Mobile Development",
            "Udemy",
            Intermediate,
            D::Intermediate,
            9.99,
            4.6,
            200_000,
            &["react native", "mobile", "javascript"],
            "Maximilian Schwarzmüller",
            "Build mobile apps with React Native",
        ),
        course(
            "vue-fundamentals",
            "Vue.js 3 Fundamentals",
            "LinkedIn Learning",
            Beginner,
            D::Beginner,
            39.99,
            4.5,
            80_000,
            &["vue", "frontend", "javascript"],
            "Ben Hong",
            "Get started with Vue.js 3",
        ),
        course(
            "css-advanced",
            "Advanced CSS & SASS",
            "Udemy",
            Intermediate,
            D::Beginner,
            9.99,
            4.7,
            300_000,
            &["css", "sass", "frontend", "design"],
            "Jonas Schmedtmann",
            "Master CSS and SASS for modern web design",
        ),
        // Backend
        course(
            "nodejs-intro",
            "Node.js and Express.js",
            "Udemy",
            Beginner,
            D::Beginner,
            9.99,
            4.6,
            500_000,
            &["nodejs", "backend", "javascript"],
            "Brad Traversy",
            "Build backend applications with Node.js and Express",
        ),
        course(
            "python-django",
            "Django for Beginners",
            "Coursera",
            Beginner,
            D::Intermediate,
            49.99,
            4.7,
            150_000,
            &["python", "django", "backend"],
            "William Vincent",
            "Build web applications with Django",
        ),
        course(
            "microservices",
            "Microservices Architecture",
            "Udemy",
            Advanced,
            D::Advanced,
            9.99,
            4.8,
            50_000,
            &["microservices", "backend", "architecture"],
            "Sam Newman",
            "Design and implement microservices",
        ),
        // Cybersecurity
        course(
            "cyber-basics",
            "Cybersecurity Fundamentals",
            "Coursera",
            Beginner,
            D::Beginner,
            0.0,
            4.6,
            300_000,
            &["cybersecurity", "security", "networking"],
            "University of Maryland",
            "Learn the basics of cybersecurity",
        ),
        course(
            "ethical-hacking",
            "Ethical Hacking Course",
            "Udemy",
            Intermediate,
            D::Advanced,
            9.99,
            4.7,
            200_000,
            &["cybersecurity", "hacking", "penetration testing"],
            "Suresh Sharma",
            "Learn ethical hacking and penetration testing",
        ),
        course(
            "cloud-security",
            "Cloud Security Essentials",
            "LinkedIn Learning",
            Intermediate,
            D::Intermediate,
            39.99,
            4.5,
            100_000,
            &["cybersecurity", "cloud", "aws", "security"],
            "Graham Land",
            "Secure cloud applications and infrastructure",
        ),
        // UI/UX
        course(
            "uiux-basics",
            "UI/UX Design Fundamentals",
            "Udemy",
            Beginner,
            D::Beginner,
            9.99,
            4.7,
            250_000,
            &["uiux", "design", "figma"],
            "Andrej Pashtetsky",
            "Learn the principles of UI/UX design",
        ),
        course(
            "figma-design",
            "Figma UI Design Course",
            "Coursera",
            Beginner,
            D::Beginner,
            49.99,
            4.8,
            180_000,
            &["figma", "design", "uiux"],
            "Google",
            "Master Figma for professional design",
        ),
        course(
            "design-systems",
            "Building Design Systems",
            "LinkedIn Learning",
            Advanced,
            D::Intermediate,
            39.99,
            4.6,
            60_000,
            &["design systems", "uiux", "design"],
            "Dan Mall",
            "Create scalable design systems",
        ),
        // Data science
        course(
            "python-datascience",
            "Python for Data Science",
            "Coursera",
            Beginner,
            D::Intermediate,
            49.99,
            4.7,
            400_000,
            &["python", "data science", "pandas"],
            "Tech Institute",
            "Learn Python for data analysis",
        ),
        course(
            "ml-basics",
            "Machine Learning Basics",
            "Udemy",
            Intermediate,
            D::Intermediate,
            9.99,
            4.6,
            250_000,
            &["machine learning", "python", "data science"],
            "Andrew Ng",
            "Introduction to machine learning",
        ),
        course(
            "deep-learning",
            "Deep Learning Specialization",
            "Coursera",
            Advanced,
            D::Advanced,
            49.99,
            4.8,
            150_000,
            &["deep learning", "tensorflow", "neural networks"],
            "Andrew Ng",
            "Master deep learning and neural networks",
        ),
        // Cloud
        course(
            "aws-basics",
            "AWS Fundamentals",
            "Coursera",
            Beginner,
            D::Intermediate,
            49.99,
            4.6,
            200_000,
            &["aws", "cloud", "computing"],
            "Amazon",
            "Get started with AWS",
        ),
        course(
            "azure-fundamentals",
            "Azure Fundamentals",
            "Microsoft Learn",
            Beginner,
            D::Beginner,
            0.0,
            4.5,
            150_000,
            &["azure", "cloud", "microsoft"],
            "Microsoft",
            "Learn Azure cloud platform",
        ),
    ]
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let courses = builtin_courses();
        let by_id = courses
            .iter()
            .enumerate()
            .map(|(position, course)| (course.id.clone(), position))
            .collect();
        Self::from_parts(courses, by_id)
    }
}
