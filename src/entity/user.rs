// src/entity/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
    #[default]
    Other,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Phd => "PhD",
            EducationLevel::Other => "Other",
        }
    }
}

impl std::str::FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high-school" | "highschool" => Ok(EducationLevel::HighSchool),
            "bachelors" => Ok(EducationLevel::Bachelors),
            "masters" => Ok(EducationLevel::Masters),
            "phd" => Ok(EducationLevel::Phd),
            "other" => Ok(EducationLevel::Other),
            _ => Err(format!("Invalid education level: {}", s)),
        }
    }
}

/// Profile document for a registered user, as stored by the database collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub education_level: EducationLevel,
    pub newsletter: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
