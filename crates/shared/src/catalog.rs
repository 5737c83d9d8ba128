use std::collections::HashSet;

use crate::{
    domain::{Course, CourseId, Level},
    error::CatalogError,
};

/// Ordered, read-only list of courses. Built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for (index, course) in courses.iter().enumerate() {
            if course.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(course.id.clone()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
            if !course.price.is_finite() || course.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: course.id.clone(),
                    price: course.price,
                });
            }
            if !course.rating.is_finite() || !(0.0..=5.0).contains(&course.rating) {
                return Err(CatalogError::InvalidRating {
                    id: course.id.clone(),
                    rating: course.rating,
                });
            }
        }
        Ok(Self { courses })
    }

    /// Parses a JSON array of course records and validates it.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(raw)?;
        Self::new(courses)
    }

    pub fn builtin() -> Self {
        Self {
            courses: builtin_courses(),
        }
    }

    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    instructor: &str,
    price: f64,
    duration: &str,
    level: Level,
    students: u64,
    rating: f64,
    description: &str,
    category: &str,
    icon: &str,
) -> Course {
    Course {
        id: CourseId::from(id),
        title: title.to_string(),
        instructor: instructor.to_string(),
        price,
        duration_label: duration.to_string(),
        level,
        student_count: students,
        rating,
        description: description.to_string(),
        category: category.to_string(),
        icon_glyph: icon.to_string(),
    }
}

fn builtin_courses() -> Vec<Course> {
    vec![
        course(
            "java-fundamentals",
            "Java Programming Fundamentals",
            "Dr. Sarah Mitchell",
            89.99,
            "8 weeks",
            Level::Beginner,
            12847,
            4.8,
            "Master the fundamentals of Java programming with hands-on projects and real-world examples.",
            "Programming",
            "☕",
        ),
        course(
            "react-mastery",
            "Complete React Developer Course",
            "Alex Johnson",
            129.99,
            "12 weeks",
            Level::Intermediate,
            8934,
            4.9,
            "Build modern web applications with React, Redux, and the latest JavaScript features.",
            "Web Development",
            "⚛️",
        ),
        course(
            "python-data-science",
            "Python for Data Science",
            "Prof. Maria Rodriguez",
            149.99,
            "10 weeks",
            Level::Intermediate,
            15623,
            4.7,
            "Learn Python programming for data analysis, machine learning, and visualization.",
            "Data Science",
            "🐍",
        ),
        course(
            "kubernetes-basics",
            "Kubernetes Fundamentals",
            "Mike Chen",
            99.99,
            "6 weeks",
            Level::Advanced,
            5432,
            4.6,
            "Deploy and manage containerized applications with Kubernetes orchestration.",
            "DevOps",
            "☸️",
        ),
        course(
            "spring-boot-microservices",
            "Spring Boot Microservices",
            "Jennifer Liu",
            159.99,
            "14 weeks",
            Level::Advanced,
            7821,
            4.8,
            "Build scalable microservices architecture using Spring Boot, Kafka, and Docker.",
            "Backend Development",
            "🍃",
        ),
        course(
            "aws-cloud-practitioner",
            "AWS Cloud Practitioner",
            "David Thompson",
            79.99,
            "5 weeks",
            Level::Beginner,
            11234,
            4.5,
            "Get started with Amazon Web Services and prepare for the Cloud Practitioner certification.",
            "Cloud Computing",
            "☁️",
        ),
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
