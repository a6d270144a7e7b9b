//! Command-line argument definitions using clap.
//!
//! Argument structures stay in the CLI crate and convert into core types via
//! `From`, so `pathway-core` carries no clap dependency:
//!
//! ```text
//! User Input → CLI Args (clap) → LearnerProfile → Orchestrator
//! ```
//!
//! Numeric ranges are enforced here as input-level affordances; the core
//! validates again when the profile is submitted.

use clap::{Args as ClapArgs, Parser, Subcommand};
use pathway_core::models::{
    LearnerProfile, DEFAULT_DURATION_WEEKS, DEFAULT_GOAL, DEFAULT_HOURS_PER_WEEK,
};

/// Personalized learning plan assistant
///
/// Pathway collects a learner profile (goal, current skills, background and
/// time budget), asks a plan-generation service for a focused 4 to 6 week
/// roadmap and renders the result in the terminal.
#[derive(Parser)]
#[command(version, about, name = "pathway")]
pub struct Args {
    /// Plan-generation endpoint. Defaults to
    /// http://localhost:5000/api/plan/generate
    #[arg(long, global = true, env = "PATHWAY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pathway CLI
///
/// Without a command, the interactive form is started.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan from command-line flags
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Fill in the learner profile interactively
    #[command(alias = "f")]
    Form,
}

/// Generate a learning plan in one shot
///
/// Exits with status 1 when the plan could not be generated.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Learning goal
    #[arg(long, default_value = DEFAULT_GOAL)]
    pub goal: String,

    /// Current skills in this domain
    #[arg(long, help = "Current skills, e.g. \"Basic HTML/CSS, some JavaScript\"")]
    pub current_skills: String,

    /// Background (education, related experience)
    #[arg(long, help = "Background, e.g. \"BSCS 5th semester, some OOP in C++\"")]
    pub background: String,

    /// Hours available per week
    #[arg(
        long,
        default_value_t = DEFAULT_HOURS_PER_WEEK,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub hours_per_week: u32,

    /// Roadmap length in weeks (4, 5 or 6)
    #[arg(
        long,
        default_value_t = DEFAULT_DURATION_WEEKS,
        value_parser = clap::value_parser!(u32).range(4..=6)
    )]
    pub duration_weeks: u32,
}

impl From<GenerateArgs> for LearnerProfile {
    fn from(val: GenerateArgs) -> Self {
        let mut profile = LearnerProfile::new();
        profile.set_goal(val.goal);
        profile.set_current_skills(val.current_skills);
        profile.set_background(val.background);
        profile.set_hours_per_week(val.hours_per_week);
        profile.set_duration_weeks(val.duration_weeks);
        profile
    }
}
