//! Fixtures compartidos por los tests unitarios.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::task::LocalSpawnExt;
use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::models::{ActivityLevel, Goal, Person, Plan, UserRole};
use crate::services::api_client::ApiError;
use crate::services::plan_service::PlanSource;
use crate::state::{SessionStore, TaskSpawner};
use crate::utils::storage::{KeyValueStorage, MemoryStorage, StorageError};

type PlanResult = Result<Option<Plan>, ApiError>;

impl TaskSpawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(e) = self.spawn_local(task) {
            panic!("LocalPool cerrado: {:?}", e);
        }
    }
}

enum Reply {
    Ready(PlanResult),
    Deferred(oneshot::Receiver<PlanResult>),
}

/// `PlanSource` con respuestas encoladas. Sin respuestas devuelve `Ok(None)`.
#[derive(Default)]
pub struct ScriptedPlans {
    replies: RefCell<VecDeque<Reply>>,
    requested: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedPlans {
    pub fn reply_ok(&self, plan: Plan) {
        self.replies
            .borrow_mut()
            .push_back(Reply::Ready(Ok(Some(plan))));
    }

    pub fn reply_err(&self, error: ApiError) {
        self.replies.borrow_mut().push_back(Reply::Ready(Err(error)));
    }

    /// La respuesta queda pendiente hasta que el test use el `Sender`
    pub fn reply_deferred(&self) -> oneshot::Sender<PlanResult> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl PlanSource for ScriptedPlans {
    fn plan_for_patient(&self, patient_id: &str) -> LocalBoxFuture<'static, PlanResult> {
        self.calls.set(self.calls.get() + 1);
        self.requested.borrow_mut().push(patient_id.to_string());

        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Ready(result)) => async move { result }.boxed_local(),
            Some(Reply::Deferred(rx)) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::Network("respuesta cancelada".to_string())))
            }
            .boxed_local(),
            None => async { Ok(None) }.boxed_local(),
        }
    }
}

/// Storage que siempre falla, como un localStorage bloqueado por el navegador
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Store + storage en memoria + pool local para correr las cargas
pub struct TestSession {
    pub store: SessionStore,
    pub storage: MemoryStorage,
    pub plans: Rc<ScriptedPlans>,
    pub pool: LocalPool,
}

impl TestSession {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }

    pub fn with_storage(storage: MemoryStorage) -> Self {
        let pool = LocalPool::new();
        let plans = Rc::new(ScriptedPlans::default());
        let store = SessionStore::new(
            Rc::new(storage.clone()),
            plans.clone(),
            Rc::new(pool.spawner()),
        );
        Self {
            store,
            storage,
            plans,
            pool,
        }
    }

    /// Inicializa si hace falta, establece la persona y deja correr la carga del plan
    pub fn sign_in(&mut self, person: Person) {
        if !self.store.is_ready() {
            self.store.initialize();
        }
        self.store.set_person(Some(person));
        self.pool.run_until_stalled();
    }
}

pub fn sample_patient(id: &str) -> Person {
    Person {
        id: id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Souza".to_string(),
        email: format!("{}@example.com", id),
        phone: None,
        address: None,
        role: UserRole::Patient,
    }
}

pub fn sample_plan(id: &str, patient_id: &str) -> Plan {
    Plan {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        goal: Goal::Hypertrophy,
        activity_level: ActivityLevel::Moderate,
        nutritionist_id: Some("n1".to_string()),
        physical_educator_id: None,
        created_at: None,
        updated_at: None,
    }
}
