// frontend_marasty/src/components/call_to_action.rs
use yew::prelude::*;

pub const REPO_URL: &str = "https://github.com/skopevoj/cvut-marasty";
pub const ISSUES_URL: &str = "https://github.com/skopevoj/cvut-marasty/issues";
pub const PULLS_URL: &str = "https://github.com/skopevoj/cvut-marasty/pulls";

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.286 3.967a1 1 0 00.95.69h4.175c.969 0 1.371 1.24.588 1.81l-3.38 2.455a1 1 0 00-.364 1.118l1.287 3.966c.3.922-.755 1.688-1.54 1.118l-3.38-2.454a1 1 0 00-1.175 0l-3.38 2.454c-.784.57-1.838-.196-1.54-1.118l1.287-3.966a1 1 0 00-.364-1.118L2.05 9.394c-.783-.57-.38-1.81.588-1.81h4.175a1 1 0 00.95-.69l1.286-3.967z";
const ARROW_CURVE: &str = "M56 270.5C56 256.429 79.5553 218.859 120.902 197.186C162.249 175.512 194.07 164.5 242.113 164.5C274.142 164.5 306.771 175.395 340 197.186";
const ARROW_HEAD: &str = "M325.63 129C337.877 172.588 344 195.072 344 196.45C344 198.518 308.436 212.998 292 235";

/// "Star the project" button with a decorative arrow pointing at it.
#[function_component(CallToActionLink)]
pub fn call_to_action_link() -> Html {
    html! {
        <div class="relative inline-flex items-center group/container">
            <a
                href={REPO_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="star-button relative inline-flex items-center gap-3 px-6 py-3 rounded-full font-medium transition-all duration-300 border border-yellow-600/30 hover:border-yellow-600 hover:scale-[1.02] active:scale-95 shadow-sm"
                aria-label="Star marasty on GitHub"
            >
                <div class="absolute inset-0 rounded-full opacity-0 group-hover:opacity-10 blur-xl transition-opacity duration-500" />
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    fill="currentColor"
                    viewBox="0 0 20 20"
                    class="w-5 h-5 text-yellow-400 star-glow"
                >
                    <path d={STAR_PATH} />
                </svg>
                <span>{ "Podpořte projekt hvězdou" }</span>
            </a>

            <div class="absolute left-full ml-6 hidden md:block w-20 h-20 opacity-30 pointer-events-none">
                <svg viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg" class="w-full h-full">
                    <path
                        d={ARROW_CURVE}
                        stroke="currentColor"
                        stroke-opacity="0.9"
                        stroke-width="16"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-dasharray="16 32"
                    />
                    <path
                        d={ARROW_HEAD}
                        stroke="currentColor"
                        stroke-opacity="0.9"
                        stroke-width="16"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </div>
        </div>
    }
}
