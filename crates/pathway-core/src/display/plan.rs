//! Full plan document.

use std::fmt;

use super::text::Text;
use crate::models::Plan;

/// Wrapper type for displaying a received plan.
///
/// Optional sections are written only when present and non-empty; the header
/// with the goal and week badge is always written.
///
/// # Examples
///
/// ```rust
/// use pathway_core::{display::PlanView, models::Plan};
///
/// let plan = Plan {
///     goal: "Learn Rust".to_string(),
///     ..Plan::default()
/// };
///
/// let output = PlanView::new(&plan, 4).to_string();
/// assert!(output.contains("### Learn Rust"));
/// assert!(output.contains("4 week roadmap"));
/// assert!(!output.contains("Prioritized Learning Path"));
/// ```
pub struct PlanView<'a> {
    plan: &'a Plan,
    requested_weeks: u32,
}

impl<'a> PlanView<'a> {
    /// Create a view of `plan`, falling back to `requested_weeks` for the
    /// badge when the roadmap is empty.
    pub fn new(plan: &'a Plan, requested_weeks: u32) -> Self {
        Self {
            plan,
            requested_weeks,
        }
    }
}

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;

        writeln!(f, "### {}", Text::inline(&plan.goal))?;
        writeln!(f)?;
        writeln!(f, "*{} week roadmap*", plan.week_count(self.requested_weeks))?;

        if let Some(assumptions) = plan.assumptions() {
            writeln!(f)?;
            writeln!(f, "#### Assumptions")?;
            writeln!(f)?;
            writeln!(f, "{}", Text::block(assumptions))?;
        }

        let items = plan.path_items();
        if !items.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Prioritized Learning Path")?;
            writeln!(f)?;
            for item in items {
                write!(f, "{item}")?;
            }
        }

        let weeks = plan.weeks();
        if !weeks.is_empty() {
            writeln!(f)?;
            writeln!(f, "#### Week-by-Week Roadmap")?;
            writeln!(f)?;
            for week in weeks {
                write!(f, "{week}")?;
            }
        }

        Ok(())
    }
}
