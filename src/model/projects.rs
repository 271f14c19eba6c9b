//! Pure view-model for the repository grid: filter, sort, truncate and tag.

use crate::model::github::RepoSummary;

/// Cosmetic span a card occupies in the grid, assigned by position only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Wide,
    Tall,
    Normal,
}

const SIZE_PATTERN: [CardSize; 6] = [
    CardSize::Wide,
    CardSize::Tall,
    CardSize::Normal,
    CardSize::Normal,
    CardSize::Normal,
    CardSize::Normal,
];

impl CardSize {
    pub fn for_index(index: usize) -> Self {
        SIZE_PATTERN[index % SIZE_PATTERN.len()]
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CardSize::Wide => "cell-wide",
            CardSize::Tall => "cell-tall",
            CardSize::Normal => "cell-normal",
        }
    }

    /// Tall cards have room for one more topic chip.
    pub fn topic_limit(&self) -> usize {
        match self {
            CardSize::Tall => 3,
            CardSize::Wide | CardSize::Normal => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    pub repo: RepoSummary,
    pub size: CardSize,
}

/// Filters out forks and private entries, sorts by stars descending and cuts
/// the list down to the current page window. Ties keep the input order, so
/// the API's `sort=updated` ordering decides between equally starred repos.
pub fn visible_projects(raw: &[RepoSummary], page: usize, per_page: usize) -> Vec<ProjectView> {
    let mut kept: Vec<&RepoSummary> = raw
        .iter()
        .filter(|repo| !repo.fork && !repo.private)
        .collect();
    kept.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    kept.truncate(page * per_page);

    kept.into_iter()
        .enumerate()
        .map(|(index, repo)| ProjectView {
            repo: repo.clone(),
            size: CardSize::for_index(index),
        })
        .collect()
}

/// The control shows whenever the raw fetched list is longer than what is
/// displayed, regardless of how many entries the server could still page in.
pub fn show_load_more(raw_len: usize, shown_len: usize) -> bool {
    raw_len > shown_len
}

pub fn repos_url(owner: &str, per_page: usize) -> String {
    format!("https://api.github.com/users/{owner}/repos?sort=updated&per_page={per_page}")
}

pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#2b7489",
        "Python" => "#3572A5",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Java" => "#b07219",
        "C#" => "#178600",
        "PHP" => "#4F5D95",
        "Ruby" => "#701516",
        "Go" => "#00ADD8",
        "Swift" => "#ffac45",
        "Kotlin" => "#F18E33",
        "Rust" => "#dea584",
        _ => "#ccc",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn repo(id: u64, stars: u32, fork: bool, private: bool) -> RepoSummary {
        RepoSummary {
            id,
            name: format!("repo-{id}"),
            description: None,
            html_url: format!("https://github.com/someone/repo-{id}"),
            language: None,
            stargazers_count: stars,
            forks_count: 0,
            topics: Vec::new(),
            fork,
            private,
        }
    }

    #[test]
    pub fn test_filter_excludes_forks_and_private() {
        let raw = vec![
            repo(1, 10, false, false),
            repo(2, 50, true, false),
            repo(3, 40, false, true),
            repo(4, 5, false, false),
        ];

        let shown = visible_projects(&raw, 1, 6);

        assert_eq!(
            shown.iter().map(|p| p.repo.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
    }

    #[test]
    pub fn test_sorted_by_stars_descending() {
        let raw = vec![
            repo(1, 3, false, false),
            repo(2, 17, false, false),
            repo(3, 9, false, false),
            repo(4, 11, false, false),
        ];

        let shown = visible_projects(&raw, 1, 6);

        for pair in shown.windows(2) {
            assert!(pair[0].repo.stargazers_count >= pair[1].repo.stargazers_count);
        }
        assert_eq!(
            shown.iter().map(|p| p.repo.id).collect::<Vec<_>>(),
            vec![2, 4, 3, 1]
        );
    }

    #[test]
    pub fn test_equal_stars_keep_input_order() {
        let raw = vec![
            repo(1, 7, false, false),
            repo(2, 7, false, false),
            repo(3, 7, false, false),
        ];

        let shown = visible_projects(&raw, 1, 6);

        assert_eq!(
            shown.iter().map(|p| p.repo.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    pub fn test_truncates_to_page_window() {
        let raw: Vec<_> = (0..20).map(|i| repo(i, i as u32, false, false)).collect();

        assert_eq!(visible_projects(&raw, 1, 6).len(), 6);
        assert_eq!(visible_projects(&raw, 2, 6).len(), 12);
        assert_eq!(visible_projects(&raw, 4, 6).len(), 20);
    }

    #[test]
    pub fn test_empty_input_yields_empty_output() {
        assert!(visible_projects(&[], 1, 6).is_empty());
    }

    #[test]
    pub fn test_transform_is_idempotent() {
        let raw = vec![
            repo(1, 3, false, false),
            repo(2, 17, true, false),
            repo(3, 9, false, false),
            repo(4, 11, false, true),
            repo(5, 2, false, false),
        ];

        assert_eq!(visible_projects(&raw, 1, 6), visible_projects(&raw, 1, 6));
    }

    #[test]
    pub fn test_size_tags_follow_cycle() {
        let raw: Vec<_> = (0..8).map(|i| repo(i, 100 - i as u32, false, false)).collect();

        let shown = visible_projects(&raw, 2, 6);

        assert_eq!(shown.len(), 8);
        for (index, project) in shown.iter().enumerate() {
            assert_eq!(project.size, SIZE_PATTERN[index % 6]);
        }
        assert_eq!(shown[0].size, CardSize::Wide);
        assert_eq!(shown[1].size, CardSize::Tall);
        assert_eq!(shown[6].size, CardSize::Wide);
        assert_eq!(shown[7].size, CardSize::Tall);
    }

    // The worked scenario from the load-more visibility rule: 8 fetched, 2
    // forks and 1 private leave 5 visible, so the control stays visible on
    // both page sizes because the raw count never drops.
    #[test]
    pub fn test_load_more_scenario() {
        let raw = vec![
            repo(1, 30, false, false),
            repo(2, 25, true, false),
            repo(3, 20, false, false),
            repo(4, 15, false, true),
            repo(5, 12, false, false),
            repo(6, 8, true, false),
            repo(7, 4, false, false),
            repo(8, 1, false, false),
        ];

        let page_one = visible_projects(&raw, 1, 6);
        assert_eq!(page_one.len(), 5);
        assert!(show_load_more(raw.len(), page_one.len()));

        let page_two = visible_projects(&raw, 2, 6);
        assert_eq!(page_two.len(), 5);
        assert!(show_load_more(raw.len(), page_two.len()));
    }

    #[test]
    pub fn test_show_load_more_boundary() {
        assert!(!show_load_more(5, 5));
        assert!(!show_load_more(4, 5));
        assert!(show_load_more(6, 5));
    }

    #[test]
    pub fn test_repos_url() {
        assert_eq!(
            repos_url("aslahkp01", 12),
            "https://api.github.com/users/aslahkp01/repos?sort=updated&per_page=12"
        );
    }

    #[test]
    pub fn test_language_color_fallback() {
        assert_eq!(language_color("Rust"), "#dea584");
        assert_eq!(language_color("JavaScript"), "#f1e05a");
        assert_eq!(language_color("Brainfuck"), "#ccc");
    }

    #[test]
    pub fn test_topic_limit_by_size() {
        assert_eq!(CardSize::Tall.topic_limit(), 3);
        assert_eq!(CardSize::Wide.topic_limit(), 2);
        assert_eq!(CardSize::Normal.topic_limit(), 2);
    }
}
