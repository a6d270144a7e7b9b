//! Plan model returned by the plan-generation service.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A generated learning plan.
///
/// Every collection may be absent, `null` or empty; all mean "nothing to
/// show".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Goal echoed back by the service
    #[serde(default, deserialize_with = "null_as_default")]
    pub goal: String,

    /// Assumptions the service made about the learner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<String>,

    /// Topics in the order they should be studied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritized_path: Option<Vec<PathItem>>,

    /// Week-by-week schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<WeekPlan>>,
}

impl Plan {
    /// Assumptions, if present and not empty.
    pub fn assumptions(&self) -> Option<&str> {
        self.assumptions
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Prioritized path items; empty when absent.
    pub fn path_items(&self) -> &[PathItem] {
        self.prioritized_path.as_deref().unwrap_or_default()
    }

    /// Roadmap weeks; empty when absent.
    pub fn weeks(&self) -> &[WeekPlan] {
        self.roadmap.as_deref().unwrap_or_default()
    }

    /// Number of weeks to advertise, falling back to the requested duration
    /// when the roadmap is absent or empty.
    pub fn week_count(&self, requested_weeks: u32) -> usize {
        match self.weeks().len() {
            0 => requested_weeks as usize,
            n => n,
        }
    }
}

/// One entry of the prioritized learning path.
///
/// `order` is a display marker only; items are shown in array order. It is
/// kept as a plain JSON number, so `1` and `1.0` both read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PathItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub core: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
}

/// A single week of the roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub week: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub focus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<Activity>,
}

/// A learning activity scheduled within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Activity {
    /// Free-form tag such as "learn", "practice" or "project"
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

/// External material backing an activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}
