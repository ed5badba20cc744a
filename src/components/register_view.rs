use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{SignUpRequest, UserRole};
use crate::services::{sign_up, ApiClient};

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    pub on_back: Callback<()>,
}

fn role_from_value(value: &str) -> UserRole {
    match value {
        "Nutritionist" => UserRole::Nutritionist,
        "PhysicalEducator" => UserRole::PhysicalEducator,
        _ => UserRole::Patient,
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let session = use_session();
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let role_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let refs = (
            first_name_ref.clone(),
            last_name_ref.clone(),
            email_ref.clone(),
            phone_ref.clone(),
            password_ref.clone(),
            role_ref.clone(),
        );
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (first_name, last_name, email, phone, password, role) = &refs;

            let phone = input_value(phone);
            let role = role
                .cast::<HtmlSelectElement>()
                .map(|select| role_from_value(&select.value()))
                .unwrap_or(UserRole::Patient);
            let request = SignUpRequest {
                first_name: input_value(first_name),
                last_name: input_value(last_name),
                email: input_value(email),
                password: password
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                phone: if phone.is_empty() { None } else { Some(phone) },
                role,
            };

            if let Err(message) = request.validate() {
                error.set(Some(message));
                return;
            }

            error.set(None);
            submitting.set(true);

            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                if let Err(e) = sign_up(&session, &api, request).await {
                    error.set(Some(e.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <h1>{"Criar conta"}</h1>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="first-name">{"Nome"}</label>
                        <input type="text" id="first-name" ref={first_name_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="last-name">{"Sobrenome"}</label>
                        <input type="text" id="last-name" ref={last_name_ref} />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"E-mail"}</label>
                        <input type="email" id="register-email" ref={email_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Telefone"}</label>
                        <input type="tel" id="phone" ref={phone_ref} />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Senha"}</label>
                        <input type="password" id="register-password" ref={password_ref} required=true />
                    </div>
                    <div class="form-group">
                        <label for="role">{"Perfil"}</label>
                        <select id="role" ref={role_ref}>
                            <option value="Patient" selected=true>{UserRole::Patient.label()}</option>
                            <option value="Nutritionist">{UserRole::Nutritionist.label()}</option>
                            <option value="PhysicalEducator">{UserRole::PhysicalEducator.label()}</option>
                        </select>
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        {"Cadastrar"}
                    </button>
                    <button type="button" class="btn-register-link" onclick={props.on_back.reform(|_| ())}>
                        {"Já tenho conta"}
                    </button>
                </form>
            </div>
        </div>
    }
}
