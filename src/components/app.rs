use yew::prelude::*;

use super::{Header, LoginView, PlanPanel, ProfileEditor, RegisterView, RequireAuth};
use crate::hooks::SessionProvider;
use crate::services::ApiClient;
use crate::state::SessionStore;

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Plan,
    Profile,
}

#[function_component(App)]
pub fn app() -> Html {
    // Se construye una sola vez y vive lo que vive la app
    let store = use_state(|| SessionStore::browser(ApiClient::new()));

    html! {
        <SessionProvider store={(*store).clone()}>
            <Shell />
        </SessionProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let show_register = use_state(|| false);
    let tab = use_state(|| Tab::Plan);

    let fallback = if *show_register {
        let show_register = show_register.clone();
        html! { <RegisterView on_back={Callback::from(move |_: ()| show_register.set(false))} /> }
    } else {
        let show_register = show_register.clone();
        html! { <LoginView on_show_register={Callback::from(move |_: ()| show_register.set(true))} /> }
    };

    let select_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |target: Tab| if *tab == target { "tab active" } else { "tab" };

    html! {
        <RequireAuth fallback={fallback}>
            <Header />
            <nav class="tabs">
                <button type="button" class={tab_class(Tab::Plan)} onclick={select_tab(Tab::Plan)}>
                    {"Plano"}
                </button>
                <button type="button" class={tab_class(Tab::Profile)} onclick={select_tab(Tab::Profile)}>
                    {"Perfil"}
                </button>
            </nav>
            <main class="content">
                {
                    match *tab {
                        Tab::Plan => html! { <PlanPanel /> },
                        Tab::Profile => html! { <ProfileEditor /> },
                    }
                }
            </main>
        </RequireAuth>
    }
}
