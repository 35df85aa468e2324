// src/entity/course.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Design,
    Business,
    Languages,
    Music,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Technology => write!(f, "technology"),
            Category::Design => write!(f, "design"),
            Category::Business => write!(f, "business"),
            Category::Languages => write!(f, "languages"),
            Category::Music => write!(f, "music"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technology" => Ok(Category::Technology),
            "design" => Ok(Category::Design),
            "business" => Ok(Category::Business),
            "languages" => Ok(Category::Languages),
            "music" => Ok(Category::Music),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Beginner => write!(f, "beginner"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Invalid level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub title: String,
}

/// A catalog course. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub level: Level,
    pub duration: String,
    pub price: u32,
    pub original_price: u32,
    pub rating: f32,
    pub students: u32,
    pub instructor: Instructor,
    pub curriculum: Vec<String>,
    pub icon: String,
}

impl Course {
    /// Leading hour count of the duration string, e.g. "12 hours" -> 12.
    /// Malformed strings count as zero hours.
    pub fn duration_hours(&self) -> u32 {
        self.duration
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}
