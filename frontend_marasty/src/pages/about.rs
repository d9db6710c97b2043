// frontend_marasty/src/pages/about.rs
use yew::prelude::*;
use crate::components::{
    call_to_action::{CallToActionLink, ISSUES_URL, PULLS_URL},
    contributor_list::ContributorList,
};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or_default]
    pub base_path: String,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let link_class = "text-[var(--subject-primary)] hover:underline font-medium";

    html! {
        <div class="quiz-container py-24 text-center max-w-3xl mx-auto">
            <h1 class="mb-8 text-4xl font-extrabold tracking-tight">{ "O Projektu" }</h1>

            <p class="mb-10 text-xl leading-relaxed">
                { "Toto repo se snaží shromažďovat otázky z předmětů na FIT ČVUT. Cílem je zabránit tomu, \
                   co se děje na fitwiki (20 různých souborů s otázkami, různé formáty, neaktuální data, atd.) \
                   a vytvořit jednotný zdroj pro otázky." }
                <br /><br />
                { "Proto pokud najdete jakoukoliv chybu, nahlaste ji prosím přes " }
                <a href={ISSUES_URL} class={link_class} target="_blank" rel="noopener noreferrer">{ "GitHub Issues" }</a>
                { " nebo ještě lépe, přispějte opravou sami přes " }
                <a href={PULLS_URL} class={link_class} target="_blank" rel="noopener noreferrer">{ "GitHub Pull Requests" }</a>
                { "." }
            </p>

            <div class="flex justify-center items-center mb-16">
                <CallToActionLink />
            </div>

            <ContributorList base_path={props.base_path.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(base_path: &'static str) -> String {
        ServerRenderer::<About>::with_props(move || AboutProps {
            base_path: base_path.to_owned(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn composes_copy_and_call_to_action() {
        let html = render("").await;

        assert!(html.contains("O Projektu"));
        assert!(html.contains(r#"href="https://github.com/skopevoj/cvut-marasty/issues""#));
        assert!(html.contains(r#"href="https://github.com/skopevoj/cvut-marasty/pulls""#));
        assert!(html.contains("star-button"));
    }

    #[tokio::test]
    async fn contributor_section_absent_before_load() {
        let html = render("/x").await;

        assert!(!html.contains("Přispěvatelé"));
        assert!(!html.contains("contributor-link"));
    }
}
