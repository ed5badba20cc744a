use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{AddressPatch, ProfilePatch};
use crate::services::{update_profile, ApiClient};

/// `Some(nuevo)` solo si el campo cambió
fn changed(current: Option<&str>, input: String) -> Option<String> {
    let input = input.trim().to_string();
    if current.unwrap_or_default() == input {
        None
    } else {
        Some(input)
    }
}

/// Como `changed` para campos opcionales: un input vacío borra el valor
fn changed_optional(current: Option<&str>, input: String) -> Option<Option<String>> {
    let input = input.trim();
    match current.filter(|value| !value.is_empty()) {
        Some(value) if value == input => None,
        None if input.is_empty() => None,
        _ if input.is_empty() => Some(None),
        _ => Some(Some(input.to_string())),
    }
}

fn read(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(ProfileEditor)]
pub fn profile_editor() -> Html {
    let session = use_session();
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let city_ref = use_node_ref();
    let state_ref = use_node_ref();
    let status = use_state(|| None::<Result<(), String>>);
    let saving = use_state(|| false);

    let Some(person) = session.person() else {
        return html! {};
    };
    let address = person.address.clone().unwrap_or_default();

    let on_submit = {
        let session = session.clone();
        let person = person.clone();
        let refs = (
            first_name_ref.clone(),
            last_name_ref.clone(),
            phone_ref.clone(),
            city_ref.clone(),
            state_ref.clone(),
        );
        let status = status.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (first_name, last_name, phone, city, state) = &refs;
            let current_address = person.address.clone().unwrap_or_default();

            let patch = ProfilePatch {
                first_name: changed(Some(&person.first_name), read(first_name)),
                last_name: changed(Some(&person.last_name), read(last_name)),
                email: None,
                phone: changed_optional(person.phone.as_deref(), read(phone)),
                address: Some(AddressPatch {
                    city: changed_optional(current_address.city.as_deref(), read(city)),
                    state: changed_optional(current_address.state.as_deref(), read(state)),
                    ..Default::default()
                }),
            };

            if patch.is_empty() {
                status.set(Some(Ok(())));
                return;
            }

            saving.set(true);
            let session = session.clone();
            let status = status.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match update_profile(&session, &api, &patch).await {
                    Ok(_) => status.set(Some(Ok(()))),
                    Err(e) => status.set(Some(Err(e.to_string()))),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <section class="profile-editor">
            <h2>{"Meu perfil"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="profile-first-name">{"Nome"}</label>
                    <input type="text" id="profile-first-name" ref={first_name_ref}
                        value={person.first_name.clone()} />
                </div>
                <div class="form-group">
                    <label for="profile-last-name">{"Sobrenome"}</label>
                    <input type="text" id="profile-last-name" ref={last_name_ref}
                        value={person.last_name.clone()} />
                </div>
                <div class="form-group">
                    <label for="profile-phone">{"Telefone"}</label>
                    <input type="tel" id="profile-phone" ref={phone_ref}
                        value={person.phone.clone().unwrap_or_default()} />
                </div>
                <div class="form-group">
                    <label for="profile-city">{"Cidade"}</label>
                    <input type="text" id="profile-city" ref={city_ref}
                        value={address.city.clone().unwrap_or_default()} />
                </div>
                <div class="form-group">
                    <label for="profile-state">{"Estado"}</label>
                    <input type="text" id="profile-state" ref={state_ref}
                        value={address.state.clone().unwrap_or_default()} />
                </div>

                <button type="submit" class="btn-primary" disabled={*saving}>{"Salvar"}</button>

                {
                    match (*status).clone() {
                        Some(Ok(())) => html! { <p class="form-ok">{"Perfil salvo"}</p> },
                        Some(Err(message)) => html! { <p class="form-error">{message}</p> },
                        None => html! {},
                    }
                }
            </form>
        </section>
    }
}
