//! Rule-based stack recommendations.
//!
//! Used when no remote analysis is available. Checks module coverage and
//! the weekly time budget.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ModuleKey};
use crate::stack::PracticeStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    StartHere,
    MissingModule,
    TimeAlert,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleKey>,
    pub message: String,
}

impl Recommendation {
    fn new(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            module: None,
            message: message.into(),
        }
    }
}

fn missing_module_message(module: ModuleKey) -> &'static str {
    match module {
        ModuleKey::Body => "Missing Body - A physical practice like Sleep Foundation or Resistance Training is crucial for overall well-being.",
        ModuleKey::Mind => "Missing Mind - Add a practice like Deep Learning to sharpen your cognitive skills and bring clarity.",
        ModuleKey::Spirit => "Missing Spirit - Practices like Daily Meditation or Gratitude have an extremely high ROI for mood and focus.",
        ModuleKey::Shadow => "Missing Shadow - To grow, we must integrate our disowned parts. Try the 3-2-1 Process or Shadow Journaling.",
    }
}

/// Recommendations for the current stack.
///
/// `time_alert_hours` is the weekly commitment above which a burnout
/// warning is added.
pub fn local_recommendations(
    stack: &PracticeStack,
    catalog: &Catalog,
    time_alert_hours: f64,
) -> Vec<Recommendation> {
    if stack.is_empty() {
        return vec![Recommendation::new(
            RecommendationKind::StartHere,
            "Start Here - Try a pre-built stack (Spark/Green/Yellow/Orange/Red) or pick one practice that calls to you.",
        )];
    }

    let mut recs = Vec::new();
    for module in ModuleKey::ALL {
        let covered = stack.practices(catalog).any(|p| p.module == module);
        if !covered {
            recs.push(Recommendation {
                kind: RecommendationKind::MissingModule,
                module: Some(module),
                message: missing_module_message(module).to_string(),
            });
        }
    }

    let hours = stack.time_commitment(catalog);
    if hours > time_alert_hours {
        recs.push(Recommendation::new(
            RecommendationKind::TimeAlert,
            format!(
                "Time Alert - Your stack is {hours:.1}h/week. This is ambitious and might lead to burnout. Consider focusing on fewer practices."
            ),
        ));
    }

    if recs.is_empty() {
        recs.push(Recommendation::new(
            RecommendationKind::Balanced,
            "Balanced Stack - Your practices span all 4 core modules. Consider deepening your existing practices or exploring an auxiliary one.",
        ));
    }
    recs
}
