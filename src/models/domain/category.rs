use std::{fmt, str::FromStr};

use serde::{
    de::{
        value::{Error as ValueError, StrDeserializer},
        IntoDeserializer,
    },
    Deserialize, Serialize,
};

use crate::errors::AppError;

/// The bottleneck a completed diagnostic points at.
///
/// Declaration order is significant: it is the tie-break ranking used by
/// [`calculate_result`](crate::services::scoring::calculate_result).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ResultCategory {
    #[serde(rename = "Process Bottleneck", alias = "Process", alias = "process")]
    Process,
    #[serde(rename = "Role & Ownership Bottleneck", alias = "Role", alias = "role")]
    Role,
    #[serde(
        rename = "Performance Visibility Bottleneck",
        alias = "Visibility",
        alias = "visibility"
    )]
    Visibility,
}

impl ResultCategory {
    pub const ALL: [ResultCategory; 3] = [
        ResultCategory::Process,
        ResultCategory::Role,
        ResultCategory::Visibility,
    ];

    /// Position in the fixed ranking; also the index into tally arrays.
    pub fn rank(self) -> usize {
        match self {
            ResultCategory::Process => 0,
            ResultCategory::Role => 1,
            ResultCategory::Visibility => 2,
        }
    }

    /// Title shown to the user and sent to the assistant verbatim.
    pub fn title(self) -> &'static str {
        match self {
            ResultCategory::Process => "Process Bottleneck",
            ResultCategory::Role => "Role & Ownership Bottleneck",
            ResultCategory::Visibility => "Performance Visibility Bottleneck",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResultCategory::Process => "Your department likely suffers from inefficient workflows or friction at key hand-off points. The talent is there, but the system is slowing them down.",
            ResultCategory::Role => "Your team faces ambiguity in ownership. When 'everyone' is responsible, no one is. This leads to decision fatigue and bottlenecks at leadership levels.",
            ResultCategory::Visibility => "You are operating with blind spots. Without real-time insight into performance metrics, you are reacting to fires rather than preventing them.",
        }
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ResultCategory {
    type Err = AppError;

    /// Accepts exactly the labels the JSON representation accepts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let deserializer: StrDeserializer<'_, ValueError> = s.into_deserializer();
        ResultCategory::deserialize(deserializer)
            .map_err(|_| AppError::InvalidRequest(format!("Unknown result category '{}'", s)))
    }
}
