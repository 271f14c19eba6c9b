use anyhow::{anyhow, Result};
use gloo_timers::callback::Interval;
use log::error;
use yew::prelude::*;

use crate::model::{
    github::RepoSummary,
    projects::{language_color, repos_url, show_load_more, visible_projects, CardSize, ProjectView},
    FetchState,
};

/// Upstream changes are picked up every five minutes; nothing revalidates on
/// window focus.
const REVALIDATE_INTERVAL_MS: u32 = 300_000;

/// Paginated grid over the owner's public repositories.
///
/// One fetch per URL may be on the wire at a time: a trigger for the URL
/// already in flight is coalesced, and a response whose URL no longer matches
/// the guard has been superseded and is dropped.
pub struct ProjectsGrid {
    // dropping this stops the revalidation ticks
    _revalidate_interval: Interval,

    repos: FetchState<Vec<RepoSummary>>,
    page: usize,
    loading_more: bool,
    in_flight: Option<String>,
}

#[derive(PartialEq, Properties)]
pub struct ProjectsGridProps {
    pub owner: AttrValue,
    pub per_page: usize,
    /// Render a shown-repository count above the grid.
    #[prop_or_default]
    pub show_stats: bool,
}

pub enum ProjectsGridMsg {
    LoadMore,
    Revalidate,
    Loaded {
        url: String,
        result: Result<Vec<RepoSummary>, String>,
    },
}

impl Component for ProjectsGrid {
    type Message = ProjectsGridMsg;
    type Properties = ProjectsGridProps;

    fn create(ctx: &Context<Self>) -> Self {
        let revalidate_interval = {
            let link = ctx.link().clone();
            Interval::new(REVALIDATE_INTERVAL_MS, move || {
                link.send_message(ProjectsGridMsg::Revalidate);
            })
        };

        let mut grid = Self {
            _revalidate_interval: revalidate_interval,
            repos: FetchState::Idle,
            page: 1,
            loading_more: false,
            in_flight: None,
        };
        grid.request_repos(ctx);
        grid
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.request_repos(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProjectsGridMsg::LoadMore => {
                if self.loading_more {
                    return false;
                }
                self.page += 1;
                self.loading_more = true;
                self.request_repos(ctx);
                true
            }
            ProjectsGridMsg::Revalidate => {
                self.request_repos(ctx);
                false
            }
            ProjectsGridMsg::Loaded { url, result } => {
                if self.in_flight.as_deref() != Some(url.as_str()) {
                    // superseded by a later request
                    return false;
                }
                self.in_flight = None;
                self.loading_more = false;
                self.repos = match result {
                    Ok(repos) => FetchState::Success(repos.into()),
                    Err(err) => {
                        error!("load github repositories error: {err}");
                        FetchState::Error(err)
                    }
                };
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let per_page = ctx.props().per_page;

        let body = match &self.repos {
            FetchState::Idle | FetchState::Loading => html! {
                <div class="project-grid">
                    {
                        (0..per_page).map(|index| html! {
                            <ProjectPlaceholder index={index} />
                        }).collect::<Html>()
                    }
                </div>
            },
            FetchState::Error(_) => html! {
                <p class="text-center text-muted">
                    {"Failed to load projects. Please try again later."}
                </p>
            },
            FetchState::Success(repos) => {
                let projects = visible_projects(repos, self.page, per_page);

                let stats = if ctx.props().show_stats {
                    html! {
                        <p class="text-muted">
                            <strong>{projects.len()}{"+"}</strong>
                            {" public repositories"}
                        </p>
                    }
                } else {
                    html! {}
                };

                let load_more = if show_load_more(repos.len(), projects.len()) {
                    let on_load_more = {
                        let link = ctx.link().clone();
                        Callback::from(move |_e: MouseEvent| {
                            link.send_message(ProjectsGridMsg::LoadMore);
                        })
                    };

                    html! {
                        <div class="text-center mt-4">
                            <button type="button" class="btn btn-outline-secondary rounded-pill"
                                disabled={self.loading_more} onclick={on_load_more}>
                                {
                                    if self.loading_more {
                                        html! {
                                            <>
                                                <div class="spinner-border spinner-border-sm me-2" role="status">
                                                    <span class="visually-hidden">{"Loading"}</span>
                                                </div>
                                                {"Loading..."}
                                            </>
                                        }
                                    } else {
                                        html! { {"Load More Projects"} }
                                    }
                                }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                };

                html! {
                    <>
                        {stats}
                        <div class="project-grid">
                            {
                                projects.iter().map(|project| html! {
                                    <ProjectCard key={project.repo.id} project={project.clone()} />
                                }).collect::<Html>()
                            }
                        </div>
                        {load_more}
                    </>
                }
            }
        };

        html! {
            <div class="project-grid-wrap">
                {body}
            </div>
        }
    }
}

impl ProjectsGrid {
    fn request_repos(&mut self, ctx: &Context<Self>) {
        let url = repos_url(
            ctx.props().owner.as_str(),
            ctx.props().per_page * self.page,
        );
        if self.in_flight.as_deref() == Some(url.as_str()) {
            // that key is already on the wire
            return;
        }

        if matches!(self.repos, FetchState::Idle) {
            self.repos = FetchState::Loading;
        }
        self.in_flight = Some(url.clone());

        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = Self::fetch_repos_imp(&url)
                .await
                .map_err(|err| err.to_string());
            link.send_message(ProjectsGridMsg::Loaded { url, result });
        });
    }

    async fn fetch_repos_imp(url: &str) -> Result<Vec<RepoSummary>> {
        let response = gloo_net::http::Request::get(url).send().await?;
        if !(200..300).contains(&response.status()) {
            return Err(anyhow!(
                "repository listing failed with status {}",
                response.status()
            ));
        }

        Ok(response.json().await?)
    }
}

#[derive(PartialEq, Properties)]
pub struct ProjectCardProps {
    pub project: ProjectView,
}

#[function_component]
pub fn ProjectCard(props: &ProjectCardProps) -> Html {
    let repo = &props.project.repo;
    let size = props.project.size;

    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| "No description provided".to_string());

    let topic_limit = size.topic_limit();
    let hidden_topics = repo.topics.len().saturating_sub(topic_limit);

    html! {
        <a class={classes!("text-decoration-none", size.css_class())}
            href={repo.html_url.clone()} target="_blank" rel="noopener noreferrer">
            <div class="card h-100">
                <div class="card-body d-flex flex-column">
                    <h6 class="card-title text-truncate">
                        <i class="bi bi-github me-2"></i>
                        {repo.name.clone()}
                    </h6>
                    <p class="card-text small text-muted flex-grow-1">{description}</p>
                    {
                        if repo.topics.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="mb-2">
                                    {
                                        repo.topics.iter().take(topic_limit).map(|topic| html! {
                                            <span class="badge rounded-pill text-bg-light me-1">{topic.clone()}</span>
                                        }).collect::<Html>()
                                    }
                                    {
                                        if hidden_topics > 0 {
                                            html! { <small class="text-muted">{format!("+{hidden_topics}")}</small> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }
                    }
                    <div class="d-flex align-items-center gap-3 small text-muted">
                        {
                            if let Some(language) = &repo.language {
                                html! {
                                    <span>
                                        <span class="project-language-dot me-1"
                                            style={format!("background-color: {};", language_color(language))}>
                                        </span>
                                        {language.clone()}
                                    </span>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <span><i class="bi bi-star me-1"></i>{repo.stargazers_count}</span>
                        <span><i class="bi bi-diagram-2 me-1"></i>{repo.forks_count}</span>
                    </div>
                </div>
            </div>
        </a>
    }
}

#[derive(PartialEq, Properties)]
struct ProjectPlaceholderProps {
    index: usize,
}

#[function_component]
fn ProjectPlaceholder(props: &ProjectPlaceholderProps) -> Html {
    let size = CardSize::for_index(props.index);

    html! {
        <div class={classes!(size.css_class())}>
            <div class="card h-100">
                <div class="card-body">
                    <h6 class="placeholder-glow">
                        <span class="placeholder col-6"></span>
                    </h6>
                    <p class="card-text placeholder-glow">
                        <span class="placeholder col-7"></span>
                        <span class="placeholder col-4"></span>
                        <span class="placeholder col-5"></span>
                    </p>
                </div>
            </div>
        </div>
    }
}
