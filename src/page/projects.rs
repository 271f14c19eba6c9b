use std::rc::Rc;

use yew::prelude::*;

use crate::component::*;
use crate::config::site::SiteConfig;

const ITEMS_PER_PAGE: usize = 12;

#[function_component]
pub fn ProjectsPage() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <>
            <Title title={format!("Projects - {}", config.developer.name)} />
            <section class="container py-5">
                <div class="d-flex flex-column flex-md-row justify-content-between align-items-md-start gap-3 mb-4">
                    <div>
                        <span class="badge rounded-pill text-bg-light mb-2">
                            <i class="bi bi-github me-1"></i>
                            {"GitHub Projects"}
                        </span>
                        <h2>{"Open Source Projects"}</h2>
                        <p class="text-muted">
                            {"A collection of my public repositories on GitHub, showcasing \
                              projects in full-stack development, web technologies, and \
                              open source contributions."}
                        </p>
                    </div>
                    <a class="btn btn-dark rounded-pill px-4"
                        href={format!("https://github.com/{}", config.social.github)}
                        target="_blank" rel="noopener noreferrer">
                        {"View GitHub"}
                        <i class="bi bi-arrow-right ms-2"></i>
                    </a>
                </div>
                <ProjectsGrid owner={config.social.github} per_page={ITEMS_PER_PAGE} show_stats=true />
            </section>
        </>
    }
}
