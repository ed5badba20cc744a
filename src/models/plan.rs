use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "HIPERTROFIA")]
    Hypertrophy,
    #[serde(rename = "EMAGRECIMENTO")]
    WeightLoss,
    #[serde(rename = "MANUTENCAO")]
    Maintenance,
    #[serde(rename = "CONDICIONAMENTO")]
    Conditioning,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Hypertrophy,
        Goal::WeightLoss,
        Goal::Maintenance,
        Goal::Conditioning,
    ];

    /// Código tal como lo espera el backend (y los `<option value>`)
    pub fn code(&self) -> &'static str {
        match self {
            Goal::Hypertrophy => "HIPERTROFIA",
            Goal::WeightLoss => "EMAGRECIMENTO",
            Goal::Maintenance => "MANUTENCAO",
            Goal::Conditioning => "CONDICIONAMENTO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Hypertrophy => "Hipertrofia",
            Goal::WeightLoss => "Emagrecimento",
            Goal::Maintenance => "Manutenção",
            Goal::Conditioning => "Condicionamento",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "SEDENTARIO")]
    Sedentary,
    #[serde(rename = "LEVE")]
    Light,
    #[serde(rename = "MODERADO")]
    Moderate,
    #[serde(rename = "INTENSO")]
    Intense,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "SEDENTARIO",
            ActivityLevel::Light => "LEVE",
            ActivityLevel::Moderate => "MODERADO",
            ActivityLevel::Intense => "INTENSO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentário",
            ActivityLevel::Light => "Leve",
            ActivityLevel::Moderate => "Moderado",
            ActivityLevel::Intense => "Intenso",
        }
    }
}

/// Plan de cuidado de un paciente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    /// ID de la persona dueña del plan
    #[serde(rename = "paciente")]
    pub patient_id: String,
    #[serde(rename = "objetivo")]
    pub goal: Goal,
    #[serde(rename = "nivelAtividade")]
    pub activity_level: ActivityLevel,
    #[serde(rename = "nutricionista", default, skip_serializing_if = "Option::is_none")]
    pub nutritionist_id: Option<String>,
    #[serde(rename = "educadorFisico", default, skip_serializing_if = "Option::is_none")]
    pub physical_educator_id: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body de `POST /planos`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPlan {
    #[serde(rename = "paciente")]
    pub patient_id: String,
    #[serde(rename = "objetivo")]
    pub goal: Goal,
    #[serde(rename = "nivelAtividade")]
    pub activity_level: ActivityLevel,
    #[serde(rename = "nutricionista", skip_serializing_if = "Option::is_none")]
    pub nutritionist_id: Option<String>,
    #[serde(rename = "educadorFisico", skip_serializing_if = "Option::is_none")]
    pub physical_educator_id: Option<String>,
}

/// Body de `PUT /planos/{id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlanPatch {
    #[serde(rename = "objetivo", skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(rename = "nivelAtividade", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(rename = "nutricionista", skip_serializing_if = "Option::is_none")]
    pub nutritionist_id: Option<String>,
    #[serde(rename = "educadorFisico", skip_serializing_if = "Option::is_none")]
    pub physical_educator_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_wire_format() {
        let json = r#"{
            "id": "p1",
            "paciente": "u1",
            "objetivo": "HIPERTROFIA",
            "nivelAtividade": "MODERADO",
            "nutricionista": "n9",
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.patient_id, "u1");
        assert_eq!(plan.goal, Goal::Hypertrophy);
        assert_eq!(plan.activity_level, ActivityLevel::Moderate);
        assert_eq!(plan.nutritionist_id.as_deref(), Some("n9"));
        assert!(plan.physical_educator_id.is_none());
        assert!(plan.created_at.is_some());
        assert!(plan.updated_at.is_none());
    }

    #[test]
    fn test_codes_match_serde() {
        for goal in Goal::ALL {
            let encoded = serde_json::to_string(&goal).unwrap();
            assert_eq!(encoded, format!("\"{}\"", goal.code()));
            assert_eq!(Goal::from_code(goal.code()), Some(goal));
        }
        for level in ActivityLevel::ALL {
            let encoded = serde_json::to_string(&level).unwrap();
            assert_eq!(encoded, format!("\"{}\"", level.code()));
            assert_eq!(ActivityLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(Goal::from_code("hipertrofia"), None);
    }

    #[test]
    fn test_plan_patch_skips_unset_fields() {
        let patch = PlanPatch {
            goal: Some(Goal::WeightLoss),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "objetivo": "EMAGRECIMENTO" }));
    }
}
