use std::rc::Rc;

use yew::prelude::*;

use crate::config::site::{SiteConfig, Skill, SkillLevel};

/// Fixed proficiency-bar widths per level.
fn level_percentage(level: SkillLevel) -> u32 {
    match level {
        SkillLevel::Expert => 95,
        SkillLevel::Advanced => 85,
        SkillLevel::Intermediate => 70,
        SkillLevel::Beginner => 50,
    }
}

#[function_component]
pub fn Skills() -> Html {
    let config = use_context::<Rc<SiteConfig>>().expect("site config should be provided");

    html! {
        <section id="skills" class="container py-5">
            <h2 class="text-center mb-2">{"Skills & Expertise"}</h2>
            <p class="text-center text-muted mb-4">
                {"What I work with, and how comfortable I am with it"}
            </p>
            <div class="row g-4">
                {
                    config.skills.iter().map(|category| html! {
                        <div class="col-md-4">
                            <div class="card h-100">
                                <div class="card-body">
                                    <h5 class="card-title">
                                        <i class={classes!(category.icon, "me-2")}></i>
                                        {category.title}
                                    </h5>
                                    <p class="card-text small text-muted">{category.description}</p>
                                    {
                                        category.skills.iter().map(|skill| html! {
                                            <SkillBar skill={skill.clone()} />
                                        }).collect::<Html>()
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

#[derive(PartialEq, Properties)]
struct SkillBarProps {
    skill: Skill,
}

#[function_component]
fn SkillBar(props: &SkillBarProps) -> Html {
    let percentage = level_percentage(props.skill.level);

    html! {
        <div class="mb-3">
            <div class="d-flex justify-content-between align-items-center mb-1">
                <span class="small">{props.skill.name}</span>
                {
                    if props.skill.hot {
                        html! {
                            <span class="badge text-bg-warning">
                                <i class="bi bi-stars me-1"></i>
                                {"Hot"}
                            </span>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="progress" style="height: 0.4rem;">
                <div class="progress-bar" style={format!("width: {percentage}%;")}></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_level_percentage() {
        assert_eq!(level_percentage(SkillLevel::Expert), 95);
        assert_eq!(level_percentage(SkillLevel::Advanced), 85);
        assert_eq!(level_percentage(SkillLevel::Intermediate), 70);
        assert_eq!(level_percentage(SkillLevel::Beginner), 50);
    }
}
