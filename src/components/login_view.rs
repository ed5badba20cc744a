use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::{sign_in, ApiClient};

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub on_show_register: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value().trim().to_string();
            let password = password_input.value();
            if email.is_empty() || password.is_empty() {
                error.set(Some("Preencha e-mail e senha".to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                // Si falla, la sesión queda como estaba
                if let Err(e) = sign_in(&session, &api, &email, &password).await {
                    error.set(Some(e.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"💪"}</div>
                    <h1>{"FitCare"}</h1>
                    <p>{"Acompanhamento nutricional e de treino"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"E-mail"}</label>
                        <input type="email" id="email" name="email" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Senha"}</label>
                        <input type="password" id="password" name="password" ref={password_ref} required=true />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <p class="form-error">{message}</p>
                    }

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        {if *submitting { "Entrando..." } else { "Entrar" }}
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            {"Ainda não tem conta? Cadastre-se"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
