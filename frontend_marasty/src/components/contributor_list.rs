// frontend_marasty/src/components/contributor_list.rs
use std::cell::Cell;
use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::contributors::{
    load_contributors, AssetSource, Contributor, ContributorError, HttpAssetSource,
};

/// Lives as long as the component that created it. A load that resolves after
/// `tear_down` must not touch component state.
#[derive(Clone, Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn tear_down(&self) {
        self.mounted.set(false);
    }
}

/// What happened to one load once it settled.
#[derive(Debug)]
pub enum LoadOutcome {
    Stored(usize),
    Dropped,
    Failed(ContributorError),
}

/// Runs one load and hands the list to `on_loaded` only while `guard` is live.
pub async fn load_into<S, F>(
    source: &S,
    base_path: &str,
    guard: &MountGuard,
    on_loaded: F,
) -> LoadOutcome
where
    S: AssetSource,
    F: FnOnce(Vec<Contributor>),
{
    match load_contributors(source, base_path).await {
        Ok(list) if guard.is_mounted() => {
            let count = list.len();
            on_loaded(list);
            LoadOutcome::Stored(count)
        }
        Ok(_) => LoadOutcome::Dropped,
        Err(err) => LoadOutcome::Failed(err),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContributorListProps {
    #[prop_or_default]
    pub base_path: String,
}

#[function_component(ContributorList)]
pub fn contributor_list(props: &ContributorListProps) -> Html {
    let contributors = use_state(Vec::<Contributor>::new);

    /* -- one load per mount ------------------------------------------- */
    {
        let contributors = contributors.clone();
        let base_path = props.base_path.clone();
        use_effect_with((), move |_| {
            let guard = MountGuard::new();
            let live = guard.clone();

            spawn_local(async move {
                let outcome = load_into(&HttpAssetSource, &base_path, &live, |list| {
                    contributors.set(list)
                })
                .await;

                match outcome {
                    LoadOutcome::Stored(count) => log!(format!("loaded {count} contributors")),
                    LoadOutcome::Dropped => log!("contributors arrived after unmount, dropping them"),
                    LoadOutcome::Failed(err) => {
                        error!(format!("Failed to load contributors: {err}"))
                    }
                }
            });

            move || guard.tear_down()
        });
    }

    html! {
        <ContributorGrid contributors={(*contributors).clone()} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ContributorGridProps {
    pub contributors: Vec<Contributor>,
}

/// Avatar grid. Renders nothing at all for an empty list.
#[function_component(ContributorGrid)]
pub fn contributor_grid(props: &ContributorGridProps) -> Html {
    if props.contributors.is_empty() {
        return html! {};
    }

    html! {
        <div class="contributors mt-16">
            <h2 class="mb-6 text-xl font-semibold opacity-80">{ "Přispěvatelé" }</h2>
            <div class="flex flex-wrap justify-center gap-4">
                { for props.contributors.iter().map(contributor_link) }
            </div>
        </div>
    }
}

// Unkeyed, logins may repeat in the source data.
fn contributor_link(contributor: &Contributor) -> Html {
    html! {
        <a
            class="contributor-link group relative"
            href={contributor.html_url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            title={contributor.tooltip()}
        >
            <img
                src={contributor.avatar_url.clone()}
                alt={contributor.login.clone()}
                class="w-12 h-12 rounded-full transition-all duration-300 group-hover:scale-110 shadow-sm"
            />
            <div class="contributor-handle absolute -bottom-8 left-1/2 -translate-x-1/2 text-xs py-1 px-2 rounded opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none whitespace-nowrap z-10">
                { contributor.login.clone() }
            </div>
        </a>
    }
}
