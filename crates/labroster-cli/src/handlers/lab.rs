use anyhow::{Context, Result};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_lab_details;
use crate::presentation::view_models::{CommandResultViewModel, DetailsContent};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::screens::lab_details::{DetailsState, FETCH_ERROR_MESSAGE, no_details_message};

pub fn handle(
    ctx: &ExecutionContext,
    lab_instance_id: &str,
    name: Option<&str>,
    raw: bool,
) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let name = name.unwrap_or(lab_instance_id);
    let details = runtime
        .block_on(api.lab_details(lab_instance_id))
        .context(FETCH_ERROR_MESSAGE)?;

    let state = match details {
        Some(details) => DetailsState::Loaded(details),
        None => DetailsState::Empty(no_details_message(name)),
    };

    let mut vm = present_lab_details(name, lab_instance_id, &state);
    if let DetailsContent::Card(card) = &mut vm.content {
        if !raw {
            card.raw = None;
        }
    }

    ConsoleRenderer::new(ctx.format).render(&CommandResultViewModel::new(vm))
}
