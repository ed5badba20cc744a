use std::future::Future;

use thiserror::Error;

use crate::models::{Person, ProfilePatch, SignUpRequest};
use crate::services::api_client::{ApiClient, ApiError};
use crate::state::SessionStore;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Nenhum usuário logado")]
    NotSignedIn,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Termina un login/registro: solo un resultado `Ok` toca la sesión
pub async fn complete_sign_in<F>(session: &SessionStore, attempt: F) -> Result<Person, ApiError>
where
    F: Future<Output = Result<Person, ApiError>>,
{
    match attempt.await {
        Ok(person) => {
            log::info!("✅ [AUTH] Login exitoso: {} ({})", person.id, person.role.label());
            session.set_person(Some(person.clone()));
            Ok(person)
        }
        Err(e) => {
            log::error!("❌ [AUTH] Login fallido: {}", e);
            Err(e)
        }
    }
}

pub async fn sign_in(
    session: &SessionStore,
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<Person, ApiError> {
    complete_sign_in(session, api.login(email, password)).await
}

pub async fn sign_up(
    session: &SessionStore,
    api: &ApiClient,
    request: SignUpRequest,
) -> Result<Person, ApiError> {
    complete_sign_in(session, api.sign_up(&request)).await
}

pub fn sign_out(session: &SessionStore) {
    session.set_person(None);
}

/// Aplica el patch localmente, lo envía con `send` y guarda la versión del servidor
pub async fn complete_profile_update<F, Fut>(
    session: &SessionStore,
    patch: &ProfilePatch,
    send: F,
) -> Result<Person, ProfileError>
where
    F: FnOnce(Person) -> Fut,
    Fut: Future<Output = Result<Person, ApiError>>,
{
    let current = session.person().ok_or(ProfileError::NotSignedIn)?;
    let updated = send(patch.apply(&current)).await?;

    // Si mientras tanto hubo logout o cambio de persona, no se pisa la sesión
    if session.person_id().as_deref() != Some(updated.id.as_str()) {
        log::warn!("🚫 [AUTH] Perfil {} actualizado pero la sesión cambió", updated.id);
        return Err(ProfileError::NotSignedIn);
    }

    log::info!("✅ [AUTH] Perfil actualizado: {}", updated.id);
    session.set_person(Some(updated.clone()));
    Ok(updated)
}

pub async fn update_profile(
    session: &SessionStore,
    api: &ApiClient,
    patch: &ProfilePatch,
) -> Result<Person, ProfileError> {
    complete_profile_update(session, patch, |person| {
        let api = api.clone();
        async move { api.update_person(&person).await }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_patient, sample_plan, TestSession};
    use crate::utils::STORAGE_KEY_PERSON;
    use futures::future::ready;

    #[test]
    fn test_sign_in_success_sets_person() {
        let mut t = TestSession::new();
        t.store.initialize();
        t.plans.reply_ok(sample_plan("p1", "u1"));

        let result = t
            .pool
            .run_until(complete_sign_in(&t.store, ready(Ok(sample_patient("u1")))));
        t.pool.run_until_stalled();

        assert_eq!(result.unwrap().id, "u1");
        assert!(t.store.is_authenticated());
        assert_eq!(t.store.plan(), Some(sample_plan("p1", "u1")));
    }

    #[test]
    fn test_failed_sign_in_leaves_session_untouched() {
        let mut t = TestSession::new();
        t.sign_in(sample_patient("u1"));

        let failure = ready(Err(ApiError::Http {
            status: 401,
            message: "Credenciais inválidas".to_string(),
        }));
        let result = t.pool.run_until(complete_sign_in(&t.store, failure));

        assert_eq!(result.unwrap_err().status(), Some(401));
        assert_eq!(t.store.person_id().as_deref(), Some("u1"));
        assert_eq!(t.plans.calls(), 1);
    }

    #[test]
    fn test_failed_sign_in_when_signed_out() {
        let mut t = TestSession::new();
        t.store.initialize();

        let failure = ready(Err(ApiError::Network("offline".to_string())));
        let _ = t.pool.run_until(complete_sign_in(&t.store, failure));

        assert!(!t.store.is_authenticated());
        assert!(!t.storage.contains_key(STORAGE_KEY_PERSON));
    }

    #[test]
    fn test_sign_out() {
        let mut t = TestSession::new();
        t.sign_in(sample_patient("u1"));
        sign_out(&t.store);
        assert!(!t.store.is_authenticated());
    }

    #[test]
    fn test_profile_update_sends_patched_person() {
        let mut t = TestSession::new();
        t.sign_in(sample_patient("u1"));

        let patch = ProfilePatch {
            phone: Some(Some("11 90000-0000".to_string())),
            ..Default::default()
        };
        let result = t.pool.run_until(complete_profile_update(&t.store, &patch, |person| {
            assert_eq!(person.phone.as_deref(), Some("11 90000-0000"));
            ready(Ok(person))
        }));

        assert_eq!(result.unwrap().phone.as_deref(), Some("11 90000-0000"));
        assert_eq!(
            t.store.person().and_then(|p| p.phone),
            Some("11 90000-0000".to_string())
        );
    }

    #[test]
    fn test_profile_update_requires_person() {
        let mut t = TestSession::new();
        t.store.initialize();

        let result = t.pool.run_until(complete_profile_update(
            &t.store,
            &ProfilePatch::default(),
            |person| ready(Ok(person)),
        ));
        assert!(matches!(result, Err(ProfileError::NotSignedIn)));
    }

    #[test]
    fn test_profile_update_failure_keeps_person() {
        let mut t = TestSession::new();
        t.sign_in(sample_patient("u1"));

        let patch = ProfilePatch {
            first_name: Some("Outra".to_string()),
            ..Default::default()
        };
        let result = t.pool.run_until(complete_profile_update(&t.store, &patch, |_| {
            ready(Err(ApiError::Http {
                status: 422,
                message: "inválido".to_string(),
            }))
        }));

        assert!(matches!(result, Err(ProfileError::Api(_))));
        assert_eq!(t.store.person(), Some(sample_patient("u1")));
    }
}
