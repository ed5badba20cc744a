use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;

use crate::models::{NewPlan, Plan, PlanPatch};
use crate::services::api_client::{ApiClient, ApiError};
use crate::state::SessionStore;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("A sessão mudou antes de o plano ser salvo")]
    SessionChanged,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Lectura del plan por dueño, consumida por `SessionStore`
pub trait PlanSource {
    /// `Ok(None)` cuando el paciente todavía no tiene plan
    fn plan_for_patient(
        &self,
        patient_id: &str,
    ) -> LocalBoxFuture<'static, Result<Option<Plan>, ApiError>>;
}

/// `PlanSource` sobre el backend REST
#[derive(Debug, Clone)]
pub struct HttpPlanSource {
    api: ApiClient,
}

impl HttpPlanSource {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl PlanSource for HttpPlanSource {
    fn plan_for_patient(
        &self,
        patient_id: &str,
    ) -> LocalBoxFuture<'static, Result<Option<Plan>, ApiError>> {
        let api = self.api.clone();
        let patient_id = patient_id.to_string();
        async move { api.plan_by_patient(&patient_id).await }.boxed_local()
    }
}

/// Espera el resultado de crear/editar un plan y lo instala en la sesión.
///
/// En caso de error la sesión no se toca. Si la persona cambió mientras el
/// guardado estaba en vuelo, el plan no se instala.
pub async fn complete_plan_save<F>(session: &SessionStore, attempt: F) -> Result<Plan, PlanError>
where
    F: Future<Output = Result<Plan, ApiError>>,
{
    let owner = session.person_id();

    let plan = match attempt.await {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("❌ [PLAN] Error guardando plan: {}", e);
            return Err(e.into());
        }
    };

    if owner.is_none() || session.person_id() != owner || !session.set_plan(Some(plan.clone())) {
        log::warn!("🚫 [PLAN] Plan {} guardado pero la sesión cambió", plan.id);
        return Err(PlanError::SessionChanged);
    }

    log::info!("✅ [PLAN] Plan guardado: {}", plan.id);
    Ok(plan)
}

pub async fn create_plan(
    session: &SessionStore,
    api: &ApiClient,
    plan: NewPlan,
) -> Result<Plan, PlanError> {
    complete_plan_save(session, api.create_plan(&plan)).await
}

pub async fn update_plan(
    session: &SessionStore,
    api: &ApiClient,
    plan_id: &str,
    patch: PlanPatch,
) -> Result<Plan, PlanError> {
    complete_plan_save(session, api.update_plan(plan_id, &patch)).await
}
