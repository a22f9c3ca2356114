//! Run outcome types.

use serde::Serialize;

use crate::requirements::InstallReport;
use crate::ui::RunSummary;

/// What counts as a successful run when packages were missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessPolicy {
    /// At least one missing package got installed.
    #[default]
    AnySuccess,
    /// Every missing package got installed.
    AllSucceed,
}

impl SuccessPolicy {
    /// Whether a run with these counts succeeded.
    ///
    /// A run with nothing missing always succeeds.
    pub fn is_satisfied(self, missing: usize, successes: usize) -> bool {
        if missing == 0 {
            return true;
        }
        match self {
            Self::AnySuccess => successes > 0,
            Self::AllSucceed => successes == missing,
        }
    }
}

/// Presence check results, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub present: Vec<String>,
    pub missing: Vec<String>,
}

impl CheckReport {
    /// Number of packages checked.
    pub fn checked(&self) -> usize {
        self.present.len() + self.missing.len()
    }

    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The aggregate outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Packages that were already importable.
    pub present: Vec<String>,
    /// Packages that were missing, in manifest order.
    pub missing: Vec<String>,
    pub successes: usize,
    pub failures: usize,
    pub policy: SuccessPolicy,
    /// Overall outcome under `policy`.
    pub success: bool,
    /// One report per missing package.
    pub installs: Vec<InstallReport>,
}

impl RunResult {
    /// Tally install reports against a check.
    pub fn new(check: CheckReport, installs: Vec<InstallReport>, policy: SuccessPolicy) -> Self {
        let successes = installs.iter().filter(|r| r.succeeded()).count();
        let failures = installs.len() - successes;
        let success = policy.is_satisfied(check.missing.len(), successes);
        Self {
            present: check.present,
            missing: check.missing,
            successes,
            failures,
            policy,
            success,
            installs,
        }
    }

    /// The run's boolean outcome.
    pub fn overall_success(&self) -> bool {
        self.success
    }

    /// Counts for the summary block.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.missing.len(),
            succeeded: self.successes,
            failed: self.failures,
            success: self.success,
        }
    }
}
