use yew::prelude::*;
use yew_router::prelude::*;

use crate::component::*;
use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <>
            <Title title="Page not found" />
            <section class="container py-5 text-center">
                <h1 class="display-1 fw-bold">{"404"}</h1>
                <p class="text-muted">{"This page does not exist."}</p>
                <Link<Route> classes={classes!("btn", "btn-dark", "rounded-pill", "px-4")}
                    to={Route::Home}>
                    {"Back to Home"}
                </Link<Route>>
            </section>
        </>
    }
}
