use std::rc::Rc;

use yew::prelude::*;

use crate::component::*;
use crate::config::site::SiteConfig;

#[function_component]
pub fn ContactPage() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <>
            <Title title={format!("Contact - {}", config.developer.name)} />
            <section class="container py-5 text-center">
                <h1 class="mb-3">{"Get In Touch"}</h1>
                <p class="text-muted col-md-8 mx-auto">
                    {"I'm always open to discussing new projects, creative ideas, \
                      or opportunities to be part of your visions."}
                </p>
                <div class="row g-4 justify-content-center mt-3">
                    {
                        config.contact.iter().map(|contact| {
                            let body = html! {
                                <div class="card-body py-4">
                                    <i class={classes!(contact.icon, "fs-3")}></i>
                                    <p class="small text-muted mb-1 mt-2">{contact.label}</p>
                                    <p class="fw-medium mb-0">{contact.value}</p>
                                </div>
                            };
                            html! {
                                <div class="col-md-4">
                                    {
                                        match contact.link {
                                            Some(link) => html! {
                                                <a class="card h-100 text-decoration-none" href={link}
                                                    target="_blank" rel="noopener noreferrer">
                                                    {body}
                                                </a>
                                            },
                                            None => html! {
                                                <div class="card h-100">
                                                    {body}
                                                </div>
                                            },
                                        }
                                    }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>
        </>
    }
}
