use crate::structs::NavEntry;

/// A menu with at most one entry flagged as the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMenu {
    pub entries: Vec<NavEntry>,
    pub active: Option<usize>,
}

impl ResolvedMenu {
    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NavEntry, bool)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e, self.is_active(i)))
    }
}

/// Roots the path, collapses trailing slashes and maps `/` to the landing page.
pub fn normalize_path(path: &str, landing_path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return landing_path.to_owned();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Match {
    Exact,
    Suffix,
}

fn match_kind(current: &str, candidate: &str) -> Option<Match> {
    if current == candidate {
        return Some(Match::Exact);
    }
    let current = segments(current);
    let candidate = segments(candidate);
    if !candidate.is_empty() && current.len() > candidate.len() && current.ends_with(&candidate) {
        Some(Match::Suffix)
    } else {
        None
    }
}

/// Whether `candidate` names the page at `current`, either exactly or as the
/// trailing path segments of a page served under a nested mount point.
/// Both arguments must already be normalized.
pub fn path_matches(current: &str, candidate: &str) -> bool {
    match_kind(current, candidate).is_some()
}

pub fn resolve(current_path: &str, menu: &[NavEntry], landing_path: &str) -> ResolvedMenu {
    let current = normalize_path(current_path, landing_path);
    let active = menu
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            match_kind(&current, &normalize_path(&e.path, landing_path)).map(|m| (m, i))
        })
        .min()
        .map(|(_, i)| i);
    ResolvedMenu {
        entries: menu.to_vec(),
        active,
    }
}
