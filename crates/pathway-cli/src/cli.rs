//! Command handlers tying the form, the orchestrator and the renderer
//! together.

use std::process::ExitCode;

use anyhow::Result;
use log::{debug, info};
use pathway_core::{
    display::{AppView, ErrorAlert},
    LearnerProfile, Orchestrator, PathwayError, PlanService, RequestState,
};

use crate::{
    form::{self, LineSource},
    renderer::TerminalRenderer,
};

/// A CLI session owning the request lifecycle and the output.
pub struct Cli<S> {
    orchestrator: Orchestrator<S>,
    renderer: TerminalRenderer,
}

impl<S: PlanService> Cli<S> {
    pub fn new(orchestrator: Orchestrator<S>, renderer: TerminalRenderer) -> Self {
        Self {
            orchestrator,
            renderer,
        }
    }

    /// Submit one profile and render the outcome.
    pub async fn generate(&mut self, profile: &LearnerProfile) -> Result<ExitCode> {
        self.submit(profile).await?;

        Ok(match self.orchestrator.state() {
            RequestState::Success { .. } => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        })
    }

    /// Run the interactive form until the user stops submitting.
    ///
    /// The profile is kept between submissions so each round starts from the
    /// previous answers.
    pub async fn run_form(&mut self, input: &mut impl LineSource) -> Result<()> {
        let mut profile = LearnerProfile::new();
        self.render_page(&profile)?;

        loop {
            if !form::fill_profile(input, &mut profile)? {
                debug!("Form input closed");
                break;
            }

            self.submit(&profile).await?;

            if !form::confirm(input, "Edit your profile and generate another plan? [Y/n] ")? {
                break;
            }
        }

        info!("Form session finished");
        Ok(())
    }

    /// One submission cycle: the pending page, the request, the settled page.
    async fn submit(&mut self, profile: &LearnerProfile) -> Result<()> {
        let submission = match self.orchestrator.begin(profile) {
            Ok(submission) => submission,
            Err(err @ PathwayError::InvalidInput { .. }) => {
                return self.renderer.render(&ErrorAlert(&err.to_string()).to_string());
            }
            Err(err) => return Err(err.into()),
        };

        self.render_page(profile)?;
        self.orchestrator.resolve(submission).await;

        self.render_page(profile)
    }

    fn render_page(&self, profile: &LearnerProfile) -> Result<()> {
        let page = AppView::new(profile, self.orchestrator.state()).to_string();
        self.renderer.render(&page)
    }
}
