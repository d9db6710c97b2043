// frontend_marasty/src/router.rs
use crate::config_file::AppConfig;
use crate::pages::about::About;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppRouterProps {
    pub config: AppConfig,
}

#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let base_path = props.config.base_path.clone();
    let render = move |route: Route| switch(route, &base_path);

    html! {
        <BrowserRouter basename={props.config.router_basename()}>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}

fn switch(route: Route, base_path: &str) -> Html {
    match route {
        Route::Home | Route::About => html! { <About base_path={base_path.to_owned()} /> },
        Route::NotFound => html! { <h1>{ "404 - Stránka nenalezena" }</h1> },
    }
}
