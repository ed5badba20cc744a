use yew::prelude::*;

use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    /// Vista de login a mostrar cuando no hay sesión
    pub fallback: Html,
    pub children: Children,
}

/// Guard de rutas autenticadas.
///
/// Mientras la restauración inicial no terminó (`is_ready() == false`) solo
/// muestra un loader, así un usuario con sesión guardada no ve el login.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();

    if !session.is_ready() {
        return html! {
            <div class="loading-screen">
                <span class="spinner"></span>
            </div>
        };
    }

    if !session.is_authenticated() {
        return props.fallback.clone();
    }

    html! { <>{props.children.clone()}</> }
}
