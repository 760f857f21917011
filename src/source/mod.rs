pub mod file;

use crate::error::Result;
use crate::types::snapshot::{
    ActivitySnapshot, FocusSnapshot, IssueSnapshot, Period, TeamSnapshot, WorkloadSnapshot,
};

pub use file::{load_snapshots, SnapshotSet};

// `account: None` asks for the team-level aggregate.
pub trait SnapshotProvider: Send + Sync {
    fn issues(&self) -> Result<IssueSnapshot>;
    fn workload(&self, account: Option<&str>) -> Result<WorkloadSnapshot>;
    fn focus(&self, account: Option<&str>, period: Period) -> Result<FocusSnapshot>;
    fn activity(&self, account: Option<&str>) -> Result<ActivitySnapshot>;
    fn team(&self) -> Result<TeamSnapshot>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::WellnessError;

    pub(crate) struct Offline;

    fn offline<T>() -> Result<T> {
        Err(WellnessError::SnapshotUnavailable(
            "issue tracker offline".to_string(),
        ))
    }

    impl SnapshotProvider for Offline {
        fn issues(&self) -> Result<IssueSnapshot> {
            offline()
        }

        fn workload(&self, _account: Option<&str>) -> Result<WorkloadSnapshot> {
            offline()
        }

        fn focus(&self, _account: Option<&str>, _period: Period) -> Result<FocusSnapshot> {
            offline()
        }

        fn activity(&self, _account: Option<&str>) -> Result<ActivitySnapshot> {
            offline()
        }

        fn team(&self) -> Result<TeamSnapshot> {
            offline()
        }
    }
}
