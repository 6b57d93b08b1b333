use anyhow::{Result, bail};
use tracing::warn;

use labroster_client::LaunchOutcome;

use crate::browser::open_url;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_dashboard_launch, present_dashboard_status};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn status(ctx: &ExecutionContext) -> Result<()> {
    let course = ctx.course()?;
    let launcher = ctx.dashboard_launcher(course.clone())?;
    let runtime = ctx.runtime()?;

    let available = runtime.block_on(launcher.is_available());

    ConsoleRenderer::new(ctx.format).render(&present_dashboard_status(&course, available))
}

pub fn launch(ctx: &ExecutionContext, open: bool) -> Result<()> {
    let course = ctx.course()?;
    let launcher = ctx.dashboard_launcher(course.clone())?;
    let runtime = ctx.runtime()?;

    if !runtime.block_on(launcher.is_available()) {
        bail!("the instructor dashboard is not available for {course}");
    }

    let outcome = runtime.block_on(launcher.launch(None));

    let mut opened = false;
    if let (true, Some(LaunchOutcome::Ready { url })) = (open, &outcome) {
        match open_url(url) {
            Ok(()) => opened = true,
            Err(e) => warn!(error = %e, "could not open a browser"),
        }
    }

    let renderer = ConsoleRenderer::new(ctx.format);
    renderer.render(&present_dashboard_launch(&course, outcome.as_ref(), opened))?;

    if matches!(outcome, Some(LaunchOutcome::Failed { .. })) {
        bail!("dashboard launch failed");
    }
    Ok(())
}
