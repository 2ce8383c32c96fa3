use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// e.g. "COMP-3351"
    pub course: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletinDocument {
    pub courses: Vec<Course>,
}
