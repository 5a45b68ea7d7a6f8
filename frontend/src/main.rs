use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod carousel;
    pub mod download_button;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod analytics;
    #[cfg(test)]
    pub mod test_support;
}

use config::AppConfig;
use pages::landing::Landing;
use pages::not_found::NotFound;
use utils::analytics::EventReporter;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
    pub reporter: EventReporter,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let reporter = props.reporter.clone();
    let switch = move |route: Route| -> Html {
        match route {
            Route::Landing => html! {
                <Landing config={config.clone()} reporter={reporter.clone()} />
            },
            Route::NotFound => html! { <NotFound /> },
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = AppConfig::load();
    if let Err(e) = config.validate() {
        log::error!("Invalid page configuration: {}", e);
    }
    let reporter = EventReporter::new(&config.analytics_url);
    log::info!("Habit landing v{}, reporting to {}", config.version, reporter.endpoint());

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        reporter,
    })
    .render();
}
