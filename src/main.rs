pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod model;
pub(crate) mod page;

use std::rc::Rc;

use crate::component::{Footer, Header};
use crate::config::site::SiteConfig;
use crate::page::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo((), |_| SiteConfig::default());

    html! {
        <BrowserRouter>
            <ContextProvider<Rc<SiteConfig>> context={config}>
                <Header />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </ContextProvider<Rc<SiteConfig>>>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
