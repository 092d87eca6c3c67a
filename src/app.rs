//! Dashboard state: the PR list, the current selection, and the sidebar.

use anyhow::Result;
use std::collections::HashMap;

use crate::config::PrlConfig;
use crate::github::{self, PrSnapshot, PrSummary};
use crate::sidebar::Sidebar;

pub struct App {
    pub repo_root: String,
    pub prs: Vec<PrSummary>,
    pub selected: usize,
    pub sidebar: Sidebar,
    pub config: PrlConfig,
    pub should_quit: bool,
    /// Transient message shown in the bottom bar (fetch errors, refresh info)
    pub status_message: Option<String>,

    /// Snapshots already fetched this session, keyed by PR number
    snapshots: HashMap<u64, PrSnapshot>,
}

impl App {
    pub fn new(repo_root: String, config: PrlConfig) -> Result<Self> {
        let prs = github::fetch_pr_list(&repo_root)?;
        let mut sidebar = Sidebar::new();
        if config.preview.open {
            sidebar.open();
        }
        Ok(App {
            repo_root,
            prs,
            selected: 0,
            sidebar,
            config,
            should_quit: false,
            status_message: None,
            snapshots: HashMap::new(),
        })
    }

    pub fn selected_pr(&self) -> Option<&PrSummary> {
        self.prs.get(self.selected)
    }

    // ── Selection ──

    pub fn next_pr(&mut self) {
        if !self.prs.is_empty() && self.selected + 1 < self.prs.len() {
            self.selected += 1;
        }
    }

    pub fn prev_pr(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Push the current selection into the sidebar, fetching the snapshot
    /// on first visit. A fetch failure clears the sidebar selection and
    /// surfaces a status message; it never crashes the loop.
    pub fn sync_sidebar(&mut self) {
        let Some(number) = self.selected_pr().map(|pr| pr.number) else {
            self.sidebar.set_selection(None);
            return;
        };
        if self.sidebar.selected_number() == Some(number) {
            return;
        }
        if let Some(snap) = self.snapshots.get(&number) {
            self.sidebar.set_selection(Some(snap.clone()));
            return;
        }
        match github::fetch_pr_snapshot(&self.repo_root, number) {
            Ok(snap) => {
                self.snapshots.insert(number, snap.clone());
                self.sidebar.set_selection(Some(snap));
            }
            Err(err) => {
                self.sidebar.set_selection(None);
                self.notify(format!("Could not load PR #{number}: {err:#}"));
            }
        }
    }

    /// Re-fetch the PR list and drop every cached snapshot. The selection
    /// is cleared first so the sidebar recomposes from fresh data.
    pub fn refresh(&mut self) {
        match github::fetch_pr_list(&self.repo_root) {
            Ok(prs) => {
                self.prs = prs;
                self.selected = self.selected.min(self.prs.len().saturating_sub(1));
                self.snapshots.clear();
                self.sidebar.set_selection(None);
                self.sync_sidebar();
                self.notify(format!("Refreshed: {} open PRs", self.prs.len()));
            }
            Err(err) => self.notify(format!("Refresh failed: {err:#}")),
        }
    }

    pub fn notify(&mut self, msg: String) {
        self.status_message = Some(msg);
    }

    pub fn clear_notification(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_prs(count: u64) -> App {
        App {
            repo_root: ".".to_string(),
            prs: (1..=count)
                .map(|n| PrSummary {
                    number: n,
                    title: format!("PR {n}"),
                    author: "alice".to_string(),
                    head_ref: format!("branch-{n}"),
                })
                .collect(),
            selected: 0,
            sidebar: Sidebar::new(),
            config: PrlConfig::default(),
            should_quit: false,
            status_message: None,
            snapshots: HashMap::new(),
        }
    }

    #[test]
    fn next_stops_at_last_pr() {
        let mut app = app_with_prs(2);
        app.next_pr();
        app.next_pr();
        app.next_pr();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn prev_stops_at_first_pr() {
        let mut app = app_with_prs(2);
        app.prev_pr();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn navigation_on_empty_list_is_safe() {
        let mut app = app_with_prs(0);
        app.next_pr();
        app.prev_pr();
        assert_eq!(app.selected, 0);
        assert!(app.selected_pr().is_none());
    }

    #[test]
    fn sync_with_empty_list_clears_sidebar() {
        let mut app = app_with_prs(0);
        app.sidebar.open();
        app.sync_sidebar();
        assert_eq!(app.sidebar.selected_number(), None);
    }

    #[test]
    fn sync_uses_cached_snapshot() {
        use crate::sidebar::status::{Mergeability, PrState};

        let mut app = app_with_prs(1);
        app.snapshots.insert(
            1,
            PrSnapshot {
                number: 1,
                title: "PR 1".to_string(),
                body: String::new(),
                author: "alice".to_string(),
                base_ref: "main".to_string(),
                head_ref: "branch-1".to_string(),
                state: PrState::Open,
                mergeable: Mergeability::Unknown,
                checks: Vec::new(),
                activity: Vec::new(),
            },
        );
        app.sync_sidebar();
        assert_eq!(app.sidebar.selected_number(), Some(1));
    }
}
