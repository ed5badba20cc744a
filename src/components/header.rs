use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::sign_out;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();

    let Some(person) = session.person() else {
        return html! {};
    };

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| sign_out(&session))
    };

    html! {
        <header class="app-header">
            <div class="user-info">
                <span class="user-name">{person.full_name()}</span>
                <span class="user-role">{person.role.label()}</span>
            </div>
            <button type="button" class="btn-sign-out" onclick={on_sign_out}>
                {"Sair"}
            </button>
        </header>
    }
}
