use thiserror::Error;

use crate::domain::CourseId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course id must not be empty (entry {index})")]
    EmptyId { index: usize },
    #[error("duplicate course id {0}")]
    DuplicateId(CourseId),
    #[error("course {id} has invalid price {price}; expected a finite value >= 0")]
    InvalidPrice { id: CourseId, price: f64 },
    #[error("course {id} has invalid rating {rating}; expected a finite value in [0, 5]")]
    InvalidRating { id: CourseId, rating: f64 },
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}
