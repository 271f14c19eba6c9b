use std::rc::Rc;

use yew::prelude::*;

use crate::config::site::SiteConfig;

#[function_component]
pub fn Footer() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <footer class="border-top py-5 mt-5">
            <div class="container text-center">
                <h4>{"Get In Touch"}</h4>
                <p class="text-muted">
                    {"I'm always open to discussing new projects, creative ideas, \
                      or opportunities to be part of your visions."}
                </p>
                <div class="d-flex flex-wrap justify-content-center gap-3">
                    {
                        config.contact.iter().map(|contact| {
                            let chip = html! {
                                <>
                                    <i class={classes!(contact.icon, "me-2")}></i>
                                    {contact.value}
                                </>
                            };
                            match contact.link {
                                Some(link) => html! {
                                    <a class="btn btn-outline-secondary rounded-pill" href={link}
                                        target="_blank" rel="noopener noreferrer">
                                        {chip}
                                    </a>
                                },
                                None => html! {
                                    <span class="btn btn-outline-secondary rounded-pill disabled">
                                        {chip}
                                    </span>
                                },
                            }
                        }).collect::<Html>()
                    }
                </div>
                <p class="text-muted small mt-4 mb-0">
                    {format!("© {}", config.developer.name)}
                </p>
            </div>
        </footer>
    }
}
