use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site::SiteConfig;
use crate::Route;

/// Landing banner. "View Projects" scrolls to the grid when it is on the
/// current page and falls back to the projects route otherwise.
#[function_component]
pub fn Hero() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");
    let navigator = use_navigator().expect("navigator should be available");

    let on_view_projects = Callback::from(move |_e: MouseEvent| {
        let grid = window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector("#projects").ok().flatten());

        match grid {
            Some(element) => element.scroll_into_view(),
            None => navigator.push(&Route::Projects),
        }
    });

    html! {
        <section id="home" class="container py-5">
            <span class="badge rounded-pill text-bg-light mb-3">
                <i class="bi bi-code-slash me-1"></i>
                {"Welcome to my portfolio"}
            </span>
            <h1 class="display-4 fw-bold">
                {format!("Hi, I'm {}", config.developer.name)}
            </h1>
            <h2 class="h3 text-muted">{config.developer.headline}</h2>
            <p class="lead col-md-8 px-0">{config.developer.tagline}</p>
            <div class="d-flex gap-3 pt-2">
                <button type="button" class="btn btn-dark rounded-pill px-4"
                    onclick={on_view_projects}>
                    {"View Projects"}
                    <i class="bi bi-arrow-right ms-2"></i>
                </button>
                <a class="btn btn-outline-secondary rounded-pill px-4"
                    href={format!("https://github.com/{}", config.social.github)}
                    target="_blank" rel="noopener noreferrer">
                    <i class="bi bi-github me-2"></i>
                    {"View on Github"}
                </a>
            </div>
        </section>
    }
}
