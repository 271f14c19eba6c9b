use serde::Deserialize;

/// One entry of the GitHub `/users/{owner}/repos` listing. Only the fields
/// the grid renders; the API superset is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub fork: bool,
    pub private: bool,
}
