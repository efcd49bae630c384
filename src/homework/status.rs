//! Review statuses and the verdict table.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownStatusError;

/// Review outcome reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

/// Status value to verdict sentence. Process-wide and read-only.
pub const VERDICTS: [(HomeworkStatus, &str); 3] = [
    (
        HomeworkStatus::Approved,
        "Работа проверена: ревьюеру всё понравилось. Ура!",
    ),
    (
        HomeworkStatus::Reviewing,
        "Работа взята на проверку ревьюером.",
    ),
    (
        HomeworkStatus::Rejected,
        "Работа проверена: у ревьюера есть замечания.",
    ),
];

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Verdict sentence from [`VERDICTS`].
    pub fn verdict(self) -> &'static str {
        VERDICTS
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, verdict)| *verdict)
            .unwrap_or_default()
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatusError {
                status: s.to_string(),
            })
    }
}
