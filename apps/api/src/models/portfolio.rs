use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    /// Free-form range such as "December 2023 - Present".
    pub duration: String,
    pub achievements: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub achievements: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i32,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub doc_type: String,
    pub description: String,
    pub pages: i32,
    pub file_path: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub doc_type: String,
    pub description: String,
    pub pages: i32,
    pub file_path: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub name: String,
    /// 0-100
    pub proficiency: i32,
    /// Beginner, Advanced, Expert
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub category: String,
    pub name: String,
    pub proficiency: i32,
    pub level: String,
}

/// Orders experiences the way the listing endpoint returns them: non-current
/// roles first, current roles last, otherwise keeping the incoming order.
pub fn order_current_last(experiences: &mut [Experience]) {
    // stable: equal keys keep their id order
    experiences.sort_by_key(|e| e.current);
}
