mod api;
mod components;
mod config_file;
mod pages;
mod router;

use crate::config_file::AppConfig;
use crate::router::AppRouter;
use gloo::console::log;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <AppRouter config={props.config.clone()} />
    }
}

fn main() {
    let config = AppConfig::from_env();
    log!(format!("serving from base path {:?}", config.base_path));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
