use std::rc::Rc;

use yew::prelude::*;

use crate::config::site::SiteConfig;

/// Cross-shaped placement: the first entry anchors the center and later ones
/// fan out left, right, top, bottom.
fn cross_position(index: usize, total: usize) -> &'static str {
    if total == 1 {
        return "center";
    }
    if total == 2 {
        return if index == 0 { "top" } else { "bottom" };
    }
    match index {
        0 => "center",
        1 => "left",
        2 => "right",
        3 => "top",
        _ => "bottom",
    }
}

#[function_component]
pub fn Experience() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    if config.experiences.is_empty() {
        return html! {};
    }

    let total = config.experiences.len();

    html! {
        <section id="experience" class="container py-5">
            <h2 class="text-center mb-4">{"Experience"}</h2>
            <div class="row justify-content-center g-4">
                {
                    config.experiences.iter().enumerate().map(|(index, entry)| html! {
                        <div class={classes!("col-lg-8", format!("experience-{}", cross_position(index, total)))}>
                            <div class="card">
                                <div class="card-body">
                                    <h5 class="card-title">
                                        <i class="bi bi-briefcase me-2"></i>
                                        {entry.position}
                                    </h5>
                                    <h6 class="card-subtitle text-muted mb-2">{entry.company}</h6>
                                    <p class="small text-muted mb-2">
                                        <i class="bi bi-calendar3 me-1"></i>
                                        {entry.period}
                                        <i class="bi bi-geo-alt ms-3 me-1"></i>
                                        {entry.location}
                                    </p>
                                    <p class="card-text">{entry.description}</p>
                                    <ul class="small">
                                        {
                                            entry.responsibilities.iter().map(|item| html! {
                                                <li>{*item}</li>
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                    <div>
                                        {
                                            entry.technologies.iter().map(|tech| html! {
                                                <span class="badge rounded-pill text-bg-light me-1 mb-1">{*tech}</span>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_cross_position_single_entry() {
        assert_eq!(cross_position(0, 1), "center");
    }

    #[test]
    pub fn test_cross_position_two_entries() {
        assert_eq!(cross_position(0, 2), "top");
        assert_eq!(cross_position(1, 2), "bottom");
    }

    #[test]
    pub fn test_cross_position_many_entries() {
        assert_eq!(cross_position(0, 5), "center");
        assert_eq!(cross_position(1, 5), "left");
        assert_eq!(cross_position(2, 5), "right");
        assert_eq!(cross_position(3, 5), "top");
        assert_eq!(cross_position(4, 5), "bottom");
        assert_eq!(cross_position(7, 8), "bottom");
    }
}
