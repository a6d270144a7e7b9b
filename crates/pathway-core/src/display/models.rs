//! Display implementations for plan models.
//!
//! Each model renders as a markdown fragment; [`super::PlanView`] stitches
//! them into the full plan document.

use std::fmt;

use super::text::Text;
use crate::models::{Activity, PathItem, Resource, WeekPlan};

impl fmt::Display for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. **{}**", self.order, Text::inline(&self.topic))?;
        if self.core {
            write!(f, " `Core`")?;
        }
        writeln!(f)?;
        if !self.reason.is_empty() {
            writeln!(f, "   {}", Text::inline(&self.reason))?;
        }
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} ({})]({})",
            Text::inline(&self.title),
            Text::inline(&self.kind),
            self.link
        )
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- `{}` {}",
            Text::inline(&self.kind),
            Text::inline(&self.description)
        )?;
        if let Some(resource) = &self.resource {
            write!(f, " {resource}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for WeekPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "##### Week {}", self.week)?;
        // Zero is a real estimate and still shows
        if let Some(hours) = self.estimated_hours {
            write!(f, " ({hours} hrs)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "**{}**", Text::inline(&self.focus))?;
        if !self.activities.is_empty() {
            writeln!(f)?;
            for activity in &self.activities {
                write!(f, "{activity}")?;
            }
        }
        writeln!(f)
    }
}
