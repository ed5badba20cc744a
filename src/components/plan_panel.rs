use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::{ActivityLevel, Goal, NewPlan, Plan, PlanPatch};
use crate::services::{create_plan, update_plan, ApiClient};

#[derive(Properties, PartialEq)]
struct PlanFormProps {
    goal: Option<Goal>,
    activity_level: Option<ActivityLevel>,
    submit_label: AttrValue,
    busy: bool,
    on_submit: Callback<(Goal, ActivityLevel)>,
}

#[function_component(PlanForm)]
fn plan_form(props: &PlanFormProps) -> Html {
    let goal_ref = use_node_ref();
    let level_ref = use_node_ref();

    let on_submit = {
        let goal_ref = goal_ref.clone();
        let level_ref = level_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let goal = goal_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| Goal::from_code(&select.value()));
            let level = level_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| ActivityLevel::from_code(&select.value()));
            if let (Some(goal), Some(level)) = (goal, level) {
                on_submit.emit((goal, level));
            }
        })
    };

    html! {
        <form class="plan-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="goal">{"Objetivo"}</label>
                <select id="goal" ref={goal_ref}>
                    { for Goal::ALL.iter().map(|goal| html! {
                        <option value={goal.code()} selected={props.goal == Some(*goal)}>
                            {goal.label()}
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="activity-level">{"Nível de atividade"}</label>
                <select id="activity-level" ref={level_ref}>
                    { for ActivityLevel::ALL.iter().map(|level| html! {
                        <option value={level.code()} selected={props.activity_level == Some(*level)}>
                            {level.label()}
                        </option>
                    }) }
                </select>
            </div>
            <button type="submit" class="btn-primary" disabled={props.busy}>
                {props.submit_label.clone()}
            </button>
        </form>
    }
}

fn plan_details(plan: &Plan) -> Html {
    let updated = plan
        .updated_at
        .or(plan.created_at)
        .map(|at| at.format("%d/%m/%Y").to_string());

    html! {
        <dl class="plan-details">
            <dt>{"Objetivo"}</dt>
            <dd>{plan.goal.label()}</dd>
            <dt>{"Nível de atividade"}</dt>
            <dd>{plan.activity_level.label()}</dd>
            if let Some(nutritionist) = plan.nutritionist_id.clone() {
                <dt>{"Nutricionista"}</dt>
                <dd>{nutritionist}</dd>
            }
            if let Some(educator) = plan.physical_educator_id.clone() {
                <dt>{"Educador físico"}</dt>
                <dd>{educator}</dd>
            }
            if let Some(updated) = updated {
                <dt>{"Atualizado em"}</dt>
                <dd>{updated}</dd>
            }
        </dl>
    }
}

/// Plan de la persona logueada. No hace fetch propio: lo lee del `SessionStore`.
#[function_component(PlanPanel)]
pub fn plan_panel() -> Html {
    let session = use_session();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);

    let Some(person) = session.person() else {
        return html! {};
    };

    let on_create = {
        let session = session.clone();
        let busy = busy.clone();
        let error = error.clone();
        let patient_id = person.id.clone();
        Callback::from(move |(goal, activity_level): (Goal, ActivityLevel)| {
            let new_plan = NewPlan {
                patient_id: patient_id.clone(),
                goal,
                activity_level,
                nutritionist_id: None,
                physical_educator_id: None,
            };
            let session = session.clone();
            let busy = busy.clone();
            let error = error.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match create_plan(&session, &api, new_plan).await {
                    Ok(_) => error.set(None),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let body = match session.plan() {
        Some(plan) => {
            let on_update = {
                let session = session.clone();
                let busy = busy.clone();
                let error = error.clone();
                let plan_id = plan.id.clone();
                Callback::from(move |(goal, activity_level): (Goal, ActivityLevel)| {
                    let patch = PlanPatch {
                        goal: Some(goal),
                        activity_level: Some(activity_level),
                        ..Default::default()
                    };
                    let session = session.clone();
                    let busy = busy.clone();
                    let error = error.clone();
                    let plan_id = plan_id.clone();
                    busy.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        let api = ApiClient::new();
                        match update_plan(&session, &api, &plan_id, patch).await {
                            Ok(_) => error.set(None),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                        busy.set(false);
                    });
                })
            };

            html! {
                <>
                    {plan_details(&plan)}
                    <PlanForm
                        goal={Some(plan.goal)}
                        activity_level={Some(plan.activity_level)}
                        submit_label="Atualizar plano"
                        busy={*busy}
                        on_submit={on_update}
                    />
                </>
            }
        }
        None if session.is_loading_plan() => html! {
            <p class="plan-loading">{"Carregando plano..."}</p>
        },
        None if !person.role.is_professional() => html! {
            <div class="plan-empty">
                <p>{"Você ainda não tem um plano. Crie o seu:"}</p>
                <PlanForm
                    goal={None::<Goal>}
                    activity_level={None::<ActivityLevel>}
                    submit_label="Criar plano"
                    busy={*busy}
                    on_submit={on_create}
                />
            </div>
        },
        None => html! {
            <p class="plan-empty">{"Nenhum plano vinculado a este perfil."}</p>
        },
    };

    html! {
        <section class="plan-panel">
            <h2>{"Meu plano"}</h2>
            {body}
            if let Some(message) = (*error).clone() {
                <p class="form-error">{message}</p>
            }
        </section>
    }
}
