use std::rc::Rc;

use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::site::SiteConfig;
use crate::Route;

const SCROLL_ELEVATION_THRESHOLD: f64 = 20.0;

fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > SCROLL_ELEVATION_THRESHOLD
}

/// Fixed top navigation. Transparent at the top of the page, elevated once
/// the viewport scrolls past the threshold; below the md breakpoint the nav
/// collapses into a toggled overlay.
#[function_component]
pub fn Header() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");
    let elevated = use_state_eq(|| false);
    let menu_open = use_state(|| false);
    let route = use_route::<Route>();
    let navigator = use_navigator().expect("navigator should be available");

    {
        let elevated = elevated.clone();
        use_effect_with((), move |_| {
            let window = window().expect("window should be exist");
            let listener = {
                let window = window.clone();
                Closure::<dyn FnMut()>::new(move || {
                    elevated.set(is_elevated(window.scroll_y().unwrap_or(0.0)));
                })
            };
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .expect("failed to attach scroll listener");

            move || {
                _ = window
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(false))
    };

    let header_class = classes!(
        "site-header",
        "navbar",
        "navbar-expand-md",
        (*elevated).then_some("site-header-elevated"),
    );

    html! {
        <>
            <header class={header_class}>
                <div class="container">
                    <Link<Route> classes={classes!("navbar-brand", "fw-bold")} to={Route::Home}>
                        {config.developer.name}
                    </Link<Route>>

                    <ul class="navbar-nav flex-row d-none d-md-flex">
                        {
                            config.nav_items.iter().map(|item| {
                                let mut link_class = classes!("nav-link", "px-3");
                                if route == Some(item.route) {
                                    link_class.push("active");
                                }
                                html! {
                                    <li class="nav-item">
                                        <Link<Route> classes={link_class} to={item.route}>
                                            {item.label}
                                        </Link<Route>>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>

                    <button type="button" class="navbar-toggler d-md-none border-0"
                        aria-label="Toggle menu" onclick={toggle_menu}>
                        <i class={if *menu_open { "bi bi-x-lg" } else { "bi bi-list" }}></i>
                    </button>
                </div>
            </header>

            {
                if *menu_open {
                    html! {
                        <>
                            <div class="mobile-nav-backdrop d-md-none" onclick={close_menu}></div>
                            <nav class="mobile-nav-panel d-md-none">
                                {
                                    config.nav_items.iter().map(|item| {
                                        let go = {
                                            let menu_open = menu_open.clone();
                                            let navigator = navigator.clone();
                                            let route = item.route;
                                            Callback::from(move |_e: MouseEvent| {
                                                menu_open.set(false);
                                                navigator.push(&route);
                                            })
                                        };
                                        let mut link_class = classes!("nav-link", "py-3", "border-bottom");
                                        if route == Some(item.route) {
                                            link_class.push("active");
                                        }
                                        html! {
                                            <a class={link_class} href="javascript:;" onclick={go}>
                                                {item.label}
                                            </a>
                                        }
                                    }).collect::<Html>()
                                }
                            </nav>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_elevation_threshold() {
        assert!(!is_elevated(0.0));
        assert!(!is_elevated(20.0));
        assert!(is_elevated(20.5));
        assert!(is_elevated(400.0));
    }
}
