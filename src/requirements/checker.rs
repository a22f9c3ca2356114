//! Presence checking.
//!
//! The `PresenceChecker` asks the interpreter whether a package can be
//! imported, without importing it. The query runs in a child process:
//! `importlib.util.find_spec` locates the module and the script exits 0
//! when it was found. Anything that prevents a clean answer counts as
//! "not present" so the run can go on and try an install.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use super::alias::AliasTable;
use super::context::ExecContext;
use crate::shell::Invocation;

/// Exits 0 when the module named by argv[1] is importable, 1 when it is not,
/// and 2 when the lookup itself raised.
const FIND_SPEC_SCRIPT: &str = "\
import importlib.util, sys
try:
    spec = importlib.util.find_spec(sys.argv[1])
except Exception:
    sys.exit(2)
sys.exit(0 if spec is not None else 1)
";

/// Dotted Python module path (`yaml`, `PIL`, `google.protobuf`).
static MODULE_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("MODULE_PATH_REGEX must compile")
});

/// Whether `name` is a dotted module path. Used to validate configured aliases.
pub fn is_valid_module_path(name: &str) -> bool {
    MODULE_PATH_REGEX.is_match(name)
}

/// Checks whether packages are importable in the target interpreter.
pub struct PresenceChecker<'a> {
    python: &'a str,
    aliases: &'a AliasTable,
    timeout: Duration,
    ctx: &'a ExecContext<'a>,
}

impl<'a> PresenceChecker<'a> {
    /// Create a checker probing through `python`.
    pub fn new(
        python: &'a str,
        aliases: &'a AliasTable,
        timeout: Duration,
        ctx: &'a ExecContext<'a>,
    ) -> Self {
        Self {
            python,
            aliases,
            timeout,
            ctx,
        }
    }

    /// The identifier probed for `package`.
    pub fn probe_name<'b>(&'b self, package: &'b str) -> &'b str {
        self.aliases.resolve(package)
    }

    /// The invocation that probes for `probe_name`.
    pub fn probe_invocation(&self, probe_name: &str) -> Invocation {
        Invocation::new(
            self.python,
            vec![
                "-c".to_string(),
                FIND_SPEC_SCRIPT.to_string(),
                probe_name.to_string(),
            ],
        )
        .with_timeout(self.timeout)
    }

    /// Whether `package` is already importable.
    ///
    /// Never fails. A launch failure, a timeout, or a lookup error (for
    /// names `find_spec` rejects) all report `false`.
    pub fn is_present(&self, package: &str) -> bool {
        let probe = self.probe_name(package);

        match (self.ctx.run_command)(&self.probe_invocation(probe)) {
            Ok(result) if result.success => {
                tracing::debug!("{} found (probed as '{}')", package, probe);
                true
            }
            Ok(result) => {
                if result.exit_code == Some(2) {
                    tracing::debug!(
                        "lookup for '{}' raised: {}",
                        probe,
                        result.stderr.trim()
                    );
                } else {
                    tracing::debug!("{} not found (probed as '{}')", package, probe);
                }
                false
            }
            Err(e) => {
                tracing::debug!("presence check for {} failed: {}", package, e);
                false
            }
        }
    }
}
