//! Common helpers shared across commands.

use crate::config::DEFAULT_SALARY_CAP;
use crate::error::Result;
use crate::SALARY_CAP_ENV_VAR;

/// Resolve the salary cap: explicit flag, then the `DFS_HOOPS_SALARY_CAP`
/// env var, then the default. An unparseable env value is an error rather
/// than a silent fallback.
pub fn resolve_salary_cap(cap: Option<u32>) -> Result<u32> {
    match cap {
        Some(cap) => Ok(cap),
        None => match std::env::var(SALARY_CAP_ENV_VAR) {
            Ok(raw) => Ok(raw.parse()?),
            Err(_) => Ok(DEFAULT_SALARY_CAP),
        },
    }
}
