//! Practice catalog types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// The four core ILP modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKey {
    Body,
    Mind,
    Spirit,
    Shadow,
}

impl ModuleKey {
    pub const ALL: [ModuleKey; 4] = [
        ModuleKey::Body,
        ModuleKey::Mind,
        ModuleKey::Spirit,
        ModuleKey::Shadow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Body => "body",
            ModuleKey::Mind => "mind",
            ModuleKey::Spirit => "spirit",
            ModuleKey::Shadow => "shadow",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            ModuleKey::Body => "Body",
            ModuleKey::Mind => "Mind",
            ModuleKey::Spirit => "Spirit",
            ModuleKey::Shadow => "Shadow",
        }
    }
}

impl Default for ModuleKey {
    fn default() -> Self {
        ModuleKey::Spirit
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "body" => Ok(ModuleKey::Body),
            "mind" => Ok(ModuleKey::Mind),
            "spirit" => Ok(ModuleKey::Spirit),
            "shadow" => Ok(ModuleKey::Shadow),
            _ => Err(ValidationError::InvalidValue {
                field: "module".to_string(),
                message: format!("'{s}' is not one of body, mind, spirit, shadow"),
            }),
        }
    }
}

/// Return on investment rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roi {
    #[serde(rename = "EXTREME")]
    Extreme,
    #[serde(rename = "VERY HIGH")]
    VeryHigh,
    #[serde(rename = "HIGH")]
    High,
}

impl Roi {
    pub fn label(&self) -> &'static str {
        match self {
            Roi::Extreme => "EXTREME",
            Roi::VeryHigh => "VERY HIGH",
            Roi::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Trivial,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    #[serde(rename = "Low-Medium")]
    LowMedium,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Trivial => "Trivial",
            Difficulty::VeryLow => "Very Low",
            Difficulty::Low => "Low",
            Difficulty::LowMedium => "Low-Medium",
            Difficulty::Medium => "Medium",
            Difficulty::MediumHigh => "Medium-High",
            Difficulty::High => "High",
        }
    }
}

/// A trackable practice, built-in or user-created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practice {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub module: ModuleKey,
    pub description: String,
    #[serde(default)]
    pub why: String,
    /// Research the practice is based on.
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub affects_system: Vec<String>,
    /// Step-by-step instructions.
    #[serde(default)]
    pub how: Vec<String>,
    /// Weekly time commitment in hours.
    pub time_per_week: f64,
    pub roi: Roi,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization_question: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    /// Fields written by other clients, kept for the next export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Practice {
    /// Build a user-created practice with a fresh `custom-` id.
    ///
    /// Name and description are trimmed and must be non-empty; the weekly
    /// time must be a finite, non-negative number of hours.
    pub fn custom(
        module: ModuleKey,
        name: &str,
        description: &str,
        why: &str,
        time_per_week: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let description = description.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if description.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "description".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !time_per_week.is_finite() || time_per_week < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "time_per_week".to_string(),
                message: format!("{time_per_week} is not a valid, positive number of hours"),
            });
        }

        Ok(Self {
            id: format!("custom-{}", Uuid::new_v4()),
            name: name.to_string(),
            module,
            description: description.to_string(),
            why: why.trim().to_string(),
            evidence: String::new(),
            affects_system: Vec::new(),
            how: Vec::new(),
            time_per_week,
            roi: Roi::High,
            difficulty: Difficulty::Medium,
            customization_question: None,
            is_custom: true,
            extra: serde_json::Map::new(),
        })
    }
}
