//! Check status classification and rollup aggregation.
//!
//! The GitHub API reports check runs as raw strings. They are parsed into
//! closed enums at the fetch boundary so every downstream match is
//! exhaustive; anything the API adds later lands in `Unknown`.

/// Lifecycle status of a single check run, as reported by `gh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pending,
    Queued,
    InProgress,
    Waiting,
    Completed,
    Unknown,
}

impl CheckStatus {
    /// Parse the uppercase API form. Exact match; unrecognized → Unknown.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PENDING" => CheckStatus::Pending,
            "QUEUED" => CheckStatus::Queued,
            "IN_PROGRESS" => CheckStatus::InProgress,
            "WAITING" => CheckStatus::Waiting,
            "COMPLETED" => CheckStatus::Completed,
            _ => CheckStatus::Unknown,
        }
    }

    /// True while the check has not reached a terminal state.
    pub fn is_waiting(&self) -> bool {
        match self {
            CheckStatus::Pending
            | CheckStatus::Queued
            | CheckStatus::InProgress
            | CheckStatus::Waiting => true,
            CheckStatus::Completed | CheckStatus::Unknown => false,
        }
    }
}

/// Outcome of a terminal check run. Only meaningful once the status is
/// terminal; `gh` omits it for in-flight checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckConclusion {
    Success,
    Failure,
    TimedOut,
    StartupFailure,
    Cancelled,
    Skipped,
    Neutral,
    Unknown,
}

impl CheckConclusion {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "SUCCESS" => CheckConclusion::Success,
            "FAILURE" => CheckConclusion::Failure,
            "TIMED_OUT" => CheckConclusion::TimedOut,
            "STARTUP_FAILURE" => CheckConclusion::StartupFailure,
            "CANCELLED" => CheckConclusion::Cancelled,
            "SKIPPED" => CheckConclusion::Skipped,
            "NEUTRAL" => CheckConclusion::Neutral,
            _ => CheckConclusion::Unknown,
        }
    }

    /// Hard failures only. Cancelled/skipped/neutral do not count.
    pub fn is_failure(&self) -> bool {
        match self {
            CheckConclusion::Failure
            | CheckConclusion::TimedOut
            | CheckConclusion::StartupFailure => true,
            CheckConclusion::Success
            | CheckConclusion::Cancelled
            | CheckConclusion::Skipped
            | CheckConclusion::Neutral
            | CheckConclusion::Unknown => false,
        }
    }
}

/// One CI check run attached to a pull request.
#[derive(Debug, Clone)]
pub struct CheckRun {
    pub name: String,
    pub status: CheckStatus,
    pub conclusion: Option<CheckConclusion>,
}

/// Aggregated outcome across all check runs of a PR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollupState {
    Failure,
    Pending,
    Success,
}

/// Fold a check sequence into one rollup state.
///
/// Precedence is Failure > Pending > Success: one hard failure must never
/// be masked by other checks still pending. No checks configured counts
/// as success.
pub fn rollup(checks: &[CheckRun]) -> RollupState {
    if checks.is_empty() {
        return RollupState::Success;
    }
    if checks
        .iter()
        .any(|c| c.conclusion.is_some_and(|con| con.is_failure()))
    {
        return RollupState::Failure;
    }
    if checks.iter().any(|c| c.status.is_waiting()) {
        return RollupState::Pending;
    }
    RollupState::Success
}

/// Overall state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrState {
    Open,
    Closed,
    Merged,
}

impl PrState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CLOSED" => PrState::Closed,
            "MERGED" => PrState::Merged,
            // gh only emits OPEN/CLOSED/MERGED; treat anything else as open
            // so the PR stays visible rather than silently mislabeled.
            _ => PrState::Open,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrState::Open => "Open",
            PrState::Closed => "Closed",
            PrState::Merged => "Merged",
        }
    }
}

/// Whether the PR can merge cleanly into its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mergeability {
    Mergeable,
    Conflicting,
    Unknown,
}

impl Mergeability {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "MERGEABLE" => Mergeability::Mergeable,
            "CONFLICTING" => Mergeability::Conflicting,
            _ => Mergeability::Unknown,
        }
    }
}
