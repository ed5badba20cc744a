// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni toca el estado de sesión
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{LoginRequest, NewPlan, Person, Plan, PlanPatch, SignUpRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Erro de rede: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Resposta inválida: {0}")]
    Parse(String),

    #[error("Erro serializando requisição: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Login con email + senha
    pub async fn login(&self, email: &str, password: &str) -> Result<Person, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Login para: {}", email);

        let response = Request::post(&self.url("/auth/login"))
            .json(&body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }

    /// Registro de una nueva persona
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<Person, ApiError> {
        log::info!("📝 [API] Registro de {} ({:?})", request.email, request.role);

        let response = Request::post(&self.url("/pessoas"))
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }

    pub async fn update_person(&self, person: &Person) -> Result<Person, ApiError> {
        let url = self.url(&format!("/pessoas/{}", person.id));

        let response = Request::put(&url)
            .json(person)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }

    /// Plan del paciente. 404 significa "todavía no tiene plan" → `Ok(None)`
    pub async fn plan_by_patient(&self, patient_id: &str) -> Result<Option<Plan>, ApiError> {
        let url = self.url(&format!("/planos/paciente/{}", patient_id));

        log::info!("📋 [API] Obteniendo plan del paciente: {}", patient_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }

        parse_json(response).await.map(Some)
    }

    pub async fn create_plan(&self, plan: &NewPlan) -> Result<Plan, ApiError> {
        log::info!("🆕 [API] Creando plan para paciente: {}", plan.patient_id);

        let response = Request::post(&self.url("/planos"))
            .json(plan)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }

    pub async fn update_plan(&self, plan_id: &str, patch: &PlanPatch) -> Result<Plan, ApiError> {
        let url = self.url(&format!("/planos/{}", plan_id));

        let response = Request::put(&url)
            .json(patch)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_json(response).await
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| response.status_text());
        return Err(ApiError::Http { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
