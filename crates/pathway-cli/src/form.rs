//! Interactive learner profile form.
//!
//! Each field is prompted with its current value pre-filled, and re-asked
//! until the input satisfies the field's constraint, so an invalid profile is
//! never submitted from here.

use anyhow::{anyhow, Result};
use pathway_core::models::{LearnerProfile, DURATION_CHOICES, HOURS_PER_WEEK_RANGE};
use rustyline::{error::ReadlineError, DefaultEditor};

/// Source of edited input lines.
pub trait LineSource {
    /// Read one line with `initial` pre-filled. `None` means the user closed
    /// the input (Ctrl-D or Ctrl-C).
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>>;

    /// Report a rejected value before the field is asked again.
    fn reject(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

/// Line editor backed by rustyline.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| anyhow!("Failed to initialize readline: {e}"))?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        match self.editor.readline_with_initial(prompt, (initial, "")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow!("Readline error: {err}")),
        }
    }
}

/// Walks the user through every field of `profile`, updating it in place.
///
/// Returns `false` if the user closed the input before finishing.
pub fn fill_profile(input: &mut impl LineSource, profile: &mut LearnerProfile) -> Result<bool> {
    let Some(goal) = ask_text(input, "Learning goal: ", profile.goal())? else {
        return Ok(false);
    };
    profile.set_goal(goal);

    let Some(skills) = ask_text(input, "Current skills in this domain: ", profile.current_skills())?
    else {
        return Ok(false);
    };
    profile.set_current_skills(skills);

    let Some(background) = ask_text(
        input,
        "Background (education, related experience): ",
        profile.background(),
    )?
    else {
        return Ok(false);
    };
    profile.set_background(background);

    let hours = ask_number(
        input,
        "Hours per week (1-60): ",
        profile.hours_per_week(),
        |n| HOURS_PER_WEEK_RANGE.contains(&n),
        "Enter a whole number of hours between 1 and 60",
    )?;
    let Some(hours) = hours else {
        return Ok(false);
    };
    profile.set_hours_per_week(hours);

    let weeks = ask_number(
        input,
        "Duration in weeks (4, 5 or 6): ",
        profile.duration_weeks(),
        |n| DURATION_CHOICES.contains(&n),
        "Choose 4, 5 or 6 weeks",
    )?;
    let Some(weeks) = weeks else {
        return Ok(false);
    };
    profile.set_duration_weeks(weeks);

    Ok(true)
}

/// Asks a yes/no question, defaulting to yes. `false` on closed input.
pub fn confirm(input: &mut impl LineSource, prompt: &str) -> Result<bool> {
    loop {
        let Some(answer) = input.read_line(prompt, "")? else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => input.reject("Answer y or n"),
        }
    }
}

fn ask_text(input: &mut impl LineSource, prompt: &str, current: &str) -> Result<Option<String>> {
    loop {
        let Some(line) = input.read_line(prompt, current)? else {
            return Ok(None);
        };
        let value = line.trim();
        if !value.is_empty() {
            return Ok(Some(value.to_string()));
        }
        input.reject("This field is required");
    }
}

fn ask_number(
    input: &mut impl LineSource,
    prompt: &str,
    current: u32,
    accept: impl Fn(u32) -> bool,
    hint: &str,
) -> Result<Option<u32>> {
    let current = current.to_string();
    loop {
        let Some(line) = input.read_line(prompt, &current)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(value) if accept(value) => return Ok(Some(value)),
            _ => input.reject(hint),
        }
    }
}
