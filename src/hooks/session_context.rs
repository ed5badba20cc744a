// ============================================================================
// SESSION CONTEXT - Compartir el SessionStore entre componentes
// ============================================================================
// Usa Context API de Yew. El store se crea fuera (en App) una sola vez.
// ============================================================================

use yew::prelude::*;

use crate::state::SessionStore;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub store: SessionStore,
    pub children: Children,
}

/// Provider que envuelve la app y restaura la sesión al montarse
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    {
        let store = props.store.clone();
        use_effect_with((), move |_| {
            // initialize() tiene su propio guard: re-montar no vuelve a restaurar
            store.initialize();
            || ()
        });
    }

    html! {
        <ContextProvider<SessionStore> context={props.store.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionStore>>
    }
}
