//! Pull-request data fetched through the `gh` CLI.
//!
//! All network access lives here. The rest of the app consumes the parsed
//! snapshot types; raw status/conclusion/state strings are converted to
//! closed enums at this boundary.

use anyhow::{Context, Result};
use std::process::Command;

use crate::sidebar::status::{CheckConclusion, CheckRun, CheckStatus, Mergeability, PrState};

/// One row of the PR list pane.
#[derive(Debug, Clone)]
pub struct PrSummary {
    pub number: u64,
    pub title: String,
    pub author: String,
    pub head_ref: String,
}

/// Full detail for one selected pull request. The PR number doubles as the
/// selection identity for the sidebar.
#[derive(Debug, Clone)]
pub struct PrSnapshot {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub base_ref: String,
    pub head_ref: String,
    pub state: PrState,
    pub mergeable: Mergeability,
    pub checks: Vec<CheckRun>,
    pub activity: Vec<ActivityEntry>,
}

/// One timeline entry (issue comment) on a pull request.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub author: String,
    pub created_at: String,
    pub body: String,
}

/// Check if `gh` CLI is installed and authenticated.
pub fn ensure_gh_installed() -> Result<()> {
    let output = Command::new("gh")
        .args(["--version"])
        .output()
        .context("GitHub CLI (gh) is not installed. Install it: https://cli.github.com")?;

    if !output.status.success() {
        anyhow::bail!("GitHub CLI (gh) is not working properly");
    }

    let auth = Command::new("gh")
        .args(["auth", "status"])
        .output()
        .context("Failed to check gh auth status")?;

    if !auth.status.success() {
        anyhow::bail!("Not authenticated. Run: gh auth login");
    }

    Ok(())
}

/// List open PRs for the repo in `repo_root`.
pub fn fetch_pr_list(repo_root: &str) -> Result<Vec<PrSummary>> {
    let output = Command::new("gh")
        .args(["pr", "list", "--json", "number,title,author,headRefName"])
        .current_dir(repo_root)
        .output()
        .context("Failed to run gh pr list")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("gh pr list failed: {}", stderr.trim());
    }

    Ok(parse_pr_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Fetch the full snapshot for one PR.
pub fn fetch_pr_snapshot(repo_root: &str, number: u64) -> Result<PrSnapshot> {
    let output = Command::new("gh")
        .args([
            "pr",
            "view",
            &number.to_string(),
            "--json",
            "number,title,body,author,baseRefName,headRefName,state,mergeable,statusCheckRollup,comments",
        ])
        .current_dir(repo_root)
        .output()
        .context("Failed to run gh pr view")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("gh pr view #{} failed: {}", number, stderr.trim());
    }

    parse_pr_snapshot(&String::from_utf8_lossy(&output.stdout))
}

fn parse_pr_list(json_str: &str) -> Vec<PrSummary> {
    let arr: Vec<serde_json::Value> = serde_json::from_str(json_str).unwrap_or_default();
    arr.iter()
        .filter_map(|pr| {
            Some(PrSummary {
                number: pr["number"].as_u64()?,
                title: pr["title"].as_str()?.to_string(),
                author: pr["author"]["login"].as_str().unwrap_or("").to_string(),
                head_ref: pr["headRefName"].as_str().unwrap_or("").to_string(),
            })
        })
        .collect()
}

fn parse_pr_snapshot(json_str: &str) -> Result<PrSnapshot> {
    let pr: serde_json::Value =
        serde_json::from_str(json_str).context("Invalid JSON from gh pr view")?;

    let number = pr["number"]
        .as_u64()
        .context("gh pr view payload missing number")?;

    let checks = pr["statusCheckRollup"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .map(|c| {
                    // CheckRun entries carry `name`, StatusContext entries `context`
                    let name = c["name"]
                        .as_str()
                        .or_else(|| c["context"].as_str())
                        .unwrap_or("unnamed check");
                    CheckRun {
                        name: name.to_string(),
                        status: CheckStatus::parse(c["status"].as_str().unwrap_or("")),
                        conclusion: c["conclusion"]
                            .as_str()
                            .filter(|s| !s.is_empty())
                            .map(CheckConclusion::parse),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let activity = pr["comments"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|c| {
                    let body = c["body"].as_str()?;
                    Some(ActivityEntry {
                        author: c["author"]["login"].as_str().unwrap_or("").to_string(),
                        // Keep the date part of the ISO timestamp
                        created_at: c["createdAt"]
                            .as_str()
                            .map(|t| t.chars().take(10).collect())
                            .unwrap_or_default(),
                        body: body.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(PrSnapshot {
        number,
        title: pr["title"].as_str().unwrap_or("").to_string(),
        body: pr["body"].as_str().unwrap_or("").to_string(),
        author: pr["author"]["login"].as_str().unwrap_or("").to_string(),
        base_ref: pr["baseRefName"].as_str().unwrap_or("").to_string(),
        head_ref: pr["headRefName"].as_str().unwrap_or("").to_string(),
        state: PrState::parse(pr["state"].as_str().unwrap_or("")),
        mergeable: Mergeability::parse(pr["mergeable"].as_str().unwrap_or("")),
        checks,
        activity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_payload() {
        let json = r#"[
            {"number": 7, "title": "Fix the thing", "author": {"login": "alice"}, "headRefName": "fix-thing"},
            {"number": 9, "title": "Add feature", "author": {"login": "bob"}, "headRefName": "feature"}
        ]"#;
        let list = parse_pr_list(json);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].number, 7);
        assert_eq!(list[0].author, "alice");
        assert_eq!(list[1].head_ref, "feature");
    }

    #[test]
    fn parse_list_skips_malformed_entries() {
        let json = r#"[{"title": "no number"}, {"number": 3, "title": "ok"}]"#;
        let list = parse_pr_list(json);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].number, 3);
    }

    #[test]
    fn parse_list_invalid_json_is_empty() {
        assert!(parse_pr_list("not json").is_empty());
    }

    #[test]
    fn parse_snapshot_payload() {
        // Simulated `gh pr view --json ...` output
        let json = r#"{
            "number": 42,
            "title": "Improve parser",
            "body": "Some description",
            "author": {"login": "carol"},
            "baseRefName": "main",
            "headRefName": "parser-improvements",
            "state": "OPEN",
            "mergeable": "MERGEABLE",
            "statusCheckRollup": [
                {"name": "build", "status": "COMPLETED", "conclusion": "SUCCESS"},
                {"context": "ci/lint", "status": "IN_PROGRESS", "conclusion": ""}
            ],
            "comments": [
                {"author": {"login": "dave"}, "createdAt": "2025-03-01T12:00:00Z", "body": "LGTM"}
            ]
        }"#;
        let snap = parse_pr_snapshot(json).unwrap();
        assert_eq!(snap.number, 42);
        assert_eq!(snap.base_ref, "main");
        assert_eq!(snap.state, PrState::Open);
        assert_eq!(snap.mergeable, Mergeability::Mergeable);
        assert_eq!(snap.checks.len(), 2);
        assert_eq!(snap.checks[0].conclusion, Some(CheckConclusion::Success));
        assert_eq!(snap.checks[1].name, "ci/lint");
        assert_eq!(snap.checks[1].status, CheckStatus::InProgress);
        assert_eq!(snap.checks[1].conclusion, None);
        assert_eq!(snap.activity.len(), 1);
        assert_eq!(snap.activity[0].created_at, "2025-03-01");
    }

    #[test]
    fn parse_snapshot_missing_number_fails() {
        assert!(parse_pr_snapshot(r#"{"title": "x"}"#).is_err());
    }

    #[test]
    fn parse_snapshot_null_rollup_is_empty_checks() {
        let json = r#"{"number": 1, "title": "t", "statusCheckRollup": null}"#;
        let snap = parse_pr_snapshot(json).unwrap();
        assert!(snap.checks.is_empty());
        assert!(snap.activity.is_empty());
    }
}
