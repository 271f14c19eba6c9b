use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::component::*;
use crate::config::site::SiteConfig;
use crate::Route;

const ITEMS_PER_PAGE: usize = 6;

#[function_component]
pub fn HomePage() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <>
            <Title title={format!("{} - Portfolio", config.developer.name)} />
            <Hero />
            <Skills />
            <Experience />
            <Showcase />
            <section id="projects" class="container py-5">
                <div class="text-center mb-4">
                    <span class="badge rounded-pill text-bg-light mb-2">
                        <i class="bi bi-github me-1"></i>
                        {"Latest Github Projects"}
                    </span>
                    <h2>{"Open Source Projects"}</h2>
                    <p class="text-muted">{"Check out my public portfolio projects on Github"}</p>
                </div>
                <ProjectsGrid owner={config.social.github} per_page={ITEMS_PER_PAGE} />
                <div class="text-center mt-4">
                    <Link<Route> classes={classes!("btn", "btn-dark", "rounded-pill", "px-4")}
                        to={Route::Projects}>
                        {"View All Projects"}
                        <i class="bi bi-arrow-right ms-2"></i>
                    </Link<Route>>
                </div>
            </section>
        </>
    }
}
