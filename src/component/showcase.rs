use std::rc::Rc;

use yew::prelude::*;

use crate::config::site::SiteConfig;

/// Curated project entries from the site configuration, independent of the
/// fetched repository grid.
#[function_component]
pub fn Showcase() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <section id="showcase" class="container py-5">
            <h2 class="text-center mb-4">{"Featured Projects"}</h2>
            <div class="d-flex flex-column gap-4">
                {
                    config.showcase.iter().enumerate().map(|(index, project)| html! {
                        <div class="card">
                            <div class="card-body">
                                <div class="d-flex justify-content-between align-items-start">
                                    <h5 class="card-title">{project.title}</h5>
                                    <span class="text-muted font-monospace small">
                                        {format!("#{:02}", index + 1)}
                                    </span>
                                </div>
                                <p class="card-text">{project.description}</p>
                                <div class="mb-3">
                                    {
                                        project.technologies.iter().map(|tech| html! {
                                            <span class="badge rounded-pill text-bg-light me-1">{*tech}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <div class="d-flex gap-2">
                                    <a class="btn btn-sm btn-outline-secondary" href={project.github}
                                        target="_blank" rel="noopener noreferrer">
                                        <i class="bi bi-github me-1"></i>
                                        {"Source"}
                                    </a>
                                    {
                                        if let Some(demo) = project.demo {
                                            html! {
                                                <a class="btn btn-sm btn-outline-secondary" href={demo}
                                                    target="_blank" rel="noopener noreferrer">
                                                    <i class="bi bi-box-arrow-up-right me-1"></i>
                                                    {"Live Demo"}
                                                </a>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
