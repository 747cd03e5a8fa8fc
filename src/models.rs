use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of `GET /stats`. Every field is optional; the backend reports
/// failures through `error` instead of the counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatsPayload {
    #[serde(default)]
    pub individuals_count: Option<u64>,
    #[serde(default)]
    pub entities_count: Option<u64>,
    #[serde(default)]
    pub programs_count: Option<u64>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl StatsPayload {
    /// `error` counts only when it is truthy: `null`, `false`, `0` and `""`
    /// are ignored.
    pub fn has_error(&self) -> bool {
        match &self.error {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Body of `GET /health`. Only `api_status` is read; any other field the
/// backend sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HealthPayload {
    #[serde(default)]
    pub api_status: Option<Value>,
}

impl HealthPayload {
    pub const UNREACHABLE: &'static str = "unreachable";

    pub fn is_unreachable(&self) -> bool {
        matches!(&self.api_status, Some(Value::String(s)) if s == Self::UNREACHABLE)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            Self::Info => "#d1fae5",
            Self::Error => "#fee2e2",
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            Self::Info => "#059669",
            Self::Error => "#dc2626",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a single toast once it is attached. There is no path back
/// from a later phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPhase {
    Visible,
    Fading,
    Removed,
}

impl fmt::Display for NotificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Visible => "visible",
            Self::Fading => "fading",
            Self::Removed => "removed",
        };
        f.write_str(label)
    }
}
