// ============================================================================
// SESSION STATE - Persona logueada + su plan
// ============================================================================
// Se crea UNA vez al arrancar la app y se comparte por contexto (Rc).
// Todo corre en el event loop del navegador: sin locks, solo Cell/RefCell.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::models::{Person, Plan, ProfilePatch};
use crate::services::api_client::ApiClient;
use crate::services::plan_service::{HttpPlanSource, PlanSource};
use crate::state::reactivity::{SubscriptionId, Subscribers};
use crate::state::spawner::{BrowserSpawner, TaskSpawner};
use crate::utils::storage::{load_json, save_json, KeyValueStorage, LocalStorageBackend};
use crate::utils::STORAGE_KEY_PERSON;

/// Carga de plan compartida: todos los que la esperan ven el mismo final
type PlanLoad = Shared<LocalBoxFuture<'static, ()>>;

/// Estado de sesión compartido. Clonar solo copia el `Rc`.
#[derive(Clone)]
pub struct SessionStore {
    person: Rc<RefCell<Option<Person>>>,
    plan: Rc<RefCell<Option<Plan>>>,
    ready: Rc<Cell<bool>>,
    initialized: Rc<Cell<bool>>,
    /// Generación de identidad: cambia con cada login/logout/cambio de persona
    epoch: Rc<Cell<u64>>,
    /// Carga de plan en curso y el epoch en que arrancó
    in_flight: Rc<RefCell<Option<(u64, PlanLoad)>>>,
    storage: Rc<dyn KeyValueStorage>,
    plans: Rc<dyn PlanSource>,
    spawner: Rc<dyn TaskSpawner>,
    subscribers: Rc<Subscribers>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.person, &other.person)
    }
}

impl SessionStore {
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        plans: Rc<dyn PlanSource>,
        spawner: Rc<dyn TaskSpawner>,
    ) -> Self {
        Self {
            person: Rc::new(RefCell::new(None)),
            plan: Rc::new(RefCell::new(None)),
            ready: Rc::new(Cell::new(false)),
            initialized: Rc::new(Cell::new(false)),
            epoch: Rc::new(Cell::new(0)),
            in_flight: Rc::new(RefCell::new(None)),
            storage,
            plans,
            spawner,
            subscribers: Rc::new(Subscribers::new()),
        }
    }

    /// localStorage + backend HTTP + event loop del navegador
    pub fn browser(api: ApiClient) -> Self {
        Self::new(
            Rc::new(LocalStorageBackend),
            Rc::new(HttpPlanSource::new(api)),
            Rc::new(BrowserSpawner),
        )
    }

    /// Restaura la persona guardada y marca `ready`. Solo corre la primera vez.
    pub fn initialize(&self) {
        if self.initialized.replace(true) {
            log::debug!("🔁 [SESSION] initialize() ya ejecutado, ignorando");
            return;
        }

        if self.person.borrow().is_none() {
            if let Some(person) = self.restore_person() {
                log::info!("💾 [SESSION] Sesión restaurada desde storage: {}", person.id);
                *self.person.borrow_mut() = Some(person);
                self.bump_epoch();
            }
        }

        self.ready.set(true);

        // La carga se registra antes de notificar
        self.spawn_plan_load();
        self.subscribers.notify();
    }

    fn restore_person(&self) -> Option<Person> {
        match load_json::<Person>(self.storage.as_ref(), STORAGE_KEY_PERSON) {
            Ok(person) => person,
            Err(e) => {
                log::warn!("⚠️ [SESSION] No se pudo restaurar la sesión: {}", e);
                if let Err(e) = self.storage.remove_item(STORAGE_KEY_PERSON) {
                    log::warn!("⚠️ [SESSION] No se pudo limpiar la entrada corrupta: {}", e);
                }
                None
            }
        }
    }

    pub fn person(&self) -> Option<Person> {
        self.person.borrow().clone()
    }

    pub fn person_id(&self) -> Option<String> {
        self.person.borrow().as_ref().map(|p| p.id.clone())
    }

    pub fn plan(&self) -> Option<Plan> {
        self.plan.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.person.borrow().is_some()
    }

    /// Hay una carga de plan en curso para la persona actual
    pub fn is_loading_plan(&self) -> bool {
        matches!(&*self.in_flight.borrow(), Some((epoch, _)) if *epoch == self.epoch.get())
    }

    /// Reemplaza la identidad actual.
    ///
    /// `Some` se persiste en storage; `None` borra storage y el plan en el
    /// mismo paso. Los subscribers se notifican antes de volver.
    pub fn set_person(&self, person: Option<Person>) {
        match person {
            Some(person) => {
                if let Err(e) = save_json(self.storage.as_ref(), STORAGE_KEY_PERSON, &person) {
                    log::error!("❌ [SESSION] Error guardando persona en storage: {}", e);
                }

                let previous_id = self.person_id();
                let same_person = previous_id.as_deref() == Some(person.id.as_str());
                log::info!("👤 [SESSION] Persona establecida: {}", person.id);
                *self.person.borrow_mut() = Some(person);

                if !same_person {
                    // El plan cargado (si hay) pertenece a otra persona
                    *self.plan.borrow_mut() = None;
                    self.bump_epoch();
                    if self.ready.get() {
                        self.spawn_plan_load();
                    }
                }

                self.subscribers.notify();
            }
            None => {
                if let Err(e) = self.storage.remove_item(STORAGE_KEY_PERSON) {
                    log::error!("❌ [SESSION] Error eliminando persona de storage: {}", e);
                }

                *self.plan.borrow_mut() = None;
                *self.person.borrow_mut() = None;
                self.bump_epoch();
                log::info!("👋 [SESSION] Logout");

                self.subscribers.notify();
            }
        }
    }

    /// Resultado de un flujo de crear/editar plan.
    ///
    /// Devuelve `false` (y no toca nada) si no hay persona o si el plan
    /// pertenece a otro paciente.
    pub fn set_plan(&self, plan: Option<Plan>) -> bool {
        let Some(person_id) = self.person_id() else {
            log::warn!("⚠️ [SESSION] set_plan sin persona logueada, ignorado");
            return false;
        };
        if let Some(plan) = plan.as_ref().filter(|p| p.patient_id != person_id) {
            log::warn!(
                "🚫 [SESSION] Plan {} es de {}, no de {}: ignorado",
                plan.id,
                plan.patient_id,
                person_id
            );
            return false;
        }

        *self.plan.borrow_mut() = plan;
        self.subscribers.notify();
        true
    }

    /// Aplica un patch al perfil actual y lo guarda vía `set_person`
    pub fn update_profile(&self, patch: &ProfilePatch) -> Option<Person> {
        let updated = patch.apply(self.person.borrow().as_ref()?);
        self.set_person(Some(updated.clone()));
        Some(updated)
    }

    /// Carga el plan de la persona actual.
    ///
    /// No hace nada si no hay persona o si ya hay plan. Si ya hay una carga en
    /// curso para esta persona, espera esa misma en vez de pedir otra. Los
    /// errores se loguean y quedan como "sin plan"; el future nunca falla. Si
    /// la identidad cambia mientras la petición está en vuelo, el resultado
    /// se descarta.
    pub async fn load_plan_for_current_person(&self) {
        let was_loading = self.is_loading_plan();
        let Some(load) = self.begin_plan_load() else {
            return;
        };
        if !was_loading {
            self.subscribers.notify();
        }
        load.await;
    }

    /// Registra la carga para el epoch actual, o devuelve la que ya está en curso
    fn begin_plan_load(&self) -> Option<PlanLoad> {
        let person_id = self.person_id()?;
        if self.plan.borrow().is_some() {
            return None;
        }

        let epoch = self.epoch.get();
        let running = self
            .in_flight
            .borrow()
            .as_ref()
            .filter(|(started, _)| *started == epoch)
            .map(|(_, load)| load.clone());
        if let Some(load) = running {
            log::debug!("⏳ [SESSION] Carga de plan ya en curso para {}", person_id);
            return Some(load);
        }

        let store = self.clone();
        let load = async move { store.run_plan_load(epoch, person_id).await }
            .boxed_local()
            .shared();
        *self.in_flight.borrow_mut() = Some((epoch, load.clone()));
        Some(load)
    }

    async fn run_plan_load(&self, epoch: u64, person_id: String) {
        let result = self.plans.plan_for_patient(&person_id).await;

        {
            let mut in_flight = self.in_flight.borrow_mut();
            if matches!(&*in_flight, Some((started, _)) if *started == epoch) {
                *in_flight = None;
            }
        }

        if self.epoch.get() != epoch {
            log::warn!(
                "🚫 [SESSION] Plan de {} descartado: la sesión cambió durante la carga",
                person_id
            );
            return;
        }

        let already_installed = self.plan.borrow().is_some();
        match result {
            Ok(Some(plan)) if !already_installed => {
                log::info!("✅ [SESSION] Plan cargado: {} (paciente {})", plan.id, person_id);
                *self.plan.borrow_mut() = Some(plan);
            }
            Ok(Some(plan)) => {
                log::info!("ℹ️ [SESSION] Plan {} ignorado: ya hay un plan instalado", plan.id);
            }
            Ok(None) => {
                log::info!("ℹ️ [SESSION] {} todavía no tiene plan", person_id);
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error cargando plan de {}: {}", person_id, e);
            }
        }

        self.subscribers.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn bump_epoch(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }

    fn spawn_plan_load(&self) {
        if let Some(load) = self.begin_plan_load() {
            self.spawner.spawn(load.boxed_local());
        }
    }
}
