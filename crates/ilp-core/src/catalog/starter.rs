//! Starter stacks: curated practice bundles of increasing commitment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarterStack {
    /// Short key (e.g., "spark", "green").
    pub key: String,
    pub name: String,
    pub description: String,
    /// Practice ids, in the order they are added.
    pub practices: Vec<String>,
    pub difficulty: String,
    pub why: String,
}

/// Returns all starter stacks, lightest first.
pub fn get_starter_stacks() -> Vec<StarterStack> {
    vec![
        stack(
            "spark",
            "Spark Stack (Foundation)",
            "The absolute basics for establishing stability and quick wins.",
            &["sleep", "gratitude"],
            "Very Easy to start",
            "Focuses on the non-negotiable bedrock of sleep and the fastest way to boost mood with gratitude. Builds initial confidence and trust in the system.",
        ),
        stack(
            "green",
            "Green - Core Physical",
            "Builds a strong physical foundation for energy and resilience.",
            &["sleep", "gratitude", "resistance", "zone2-cardio"],
            "Easy to maintain",
            "Establishes foundational physical practices that are high ROI and can be started with low difficulty. Sets you up for consistent progress in other areas.",
        ),
        stack(
            "yellow",
            "Yellow - Mindful Spirit",
            "Expands your practice to include mental focus and deeper presence.",
            &["sleep", "gratitude", "resistance", "zone2-cardio", "meditation", "deep-learning"],
            "Medium commitment",
            "Broadens your ILP beyond the physical, cultivating mental clarity through deep learning and emotional regulation through daily meditation.",
        ),
        stack(
            "orange",
            "Orange - Shadow Explorer",
            "Begins the crucial work of integrating unconscious patterns and inner conflicts.",
            &[
                "sleep",
                "gratitude",
                "resistance",
                "zone2-cardio",
                "meditation",
                "deep-learning",
                "self-compassion",
                "three-two-one",
            ],
            "Medium-High commitment",
            "Introduces direct shadow work to help resolve internal conflicts, understand disowned parts, and build resilience through self-kindness.",
        ),
        stack(
            "red",
            "Red - Integral Catalyst",
            "A comprehensive stack for advanced integration and transformative inner work.",
            &[
                "sleep",
                "gratitude",
                "resistance",
                "zone2-cardio",
                "meditation",
                "deep-learning",
                "self-compassion",
                "three-two-one",
                "parts-dialogue",
                "integral-inquiry",
            ],
            "High commitment for deep transformation",
            "For the dedicated practitioner, this stack integrates advanced self-exploration techniques including guided parts dialogue and profound spiritual inquiry.",
        ),
    ]
}

/// Find a starter stack by key.
pub fn find_starter_stack(key: &str) -> Option<StarterStack> {
    let key = key.to_ascii_lowercase();
    get_starter_stacks().into_iter().find(|s| s.key == key)
}

fn stack(
    key: &str,
    name: &str,
    description: &str,
    practices: &[&str],
    difficulty: &str,
    why: &str,
) -> StarterStack {
    StarterStack {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        practices: practices.iter().map(|p| p.to_string()).collect(),
        difficulty: difficulty.to_string(),
        why: why.to_string(),
    }
}
