use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; font-family: system-ui, sans-serif; color: #111827;">
            <h1 style="font-size: 3rem; margin-bottom: 1rem;">{"404"}</h1>
            <p style="color: #4b5563; margin-bottom: 2rem;">{"This page leveled down."}</p>
            <Link<Route> to={Route::Landing} classes="download-button primary">
                {"Back to Habit"}
            </Link<Route>>
        </div>
    }
}
