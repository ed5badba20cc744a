use yew::prelude::*;

use crate::state::SessionStore;

/// Devuelve el `SessionStore` del contexto y re-renderiza el componente
/// cada vez que el store notifica un cambio.
#[hook]
pub fn use_session() -> SessionStore {
    let store = use_context::<SessionStore>()
        .expect("use_session() debe usarse dentro de <SessionProvider>");
    let force_update = use_force_update();

    use_effect_with(store.clone(), move |store| {
        let id = store.subscribe(move || force_update.force_update());
        let store = store.clone();
        move || {
            store.unsubscribe(id);
        }
    });

    store
}
