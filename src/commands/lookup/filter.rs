use crate::infra::github::Repository;

/// Case-insensitive substring match. An empty term matches everything.
pub fn matches(term: &str, candidate: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    candidate.to_lowercase().contains(&term.to_lowercase())
}

/// Repositories whose name matches `term`, keeping their relative order.
pub fn filter_repositories<'a>(term: &str, repos: &'a [Repository]) -> Vec<&'a Repository> {
    repos.iter().filter(|r| matches(term, &r.name)).collect()
}
