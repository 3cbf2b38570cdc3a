use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
}

/// Exact-match list filters. Absent fields match every row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}
