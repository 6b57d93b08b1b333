use anyhow::{Result, bail};

use labroster_client::{Applied, PagedView};
use labroster_types::{LabSummaryEntry, Pagination};

use crate::context::ExecutionContext;
use crate::presentation::presenters::present_lab_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, student: &str, page: u32) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let mut view: PagedView<LabSummaryEntry> =
        PagedView::starting_at(Pagination::starting_at(page)?);
    let applied = runtime.block_on(view.fetch_page(
        page,
        |p| api.lab_page(student, p),
        LabSummaryEntry::from_raw,
    ));

    if let Applied::Failed { message } = applied {
        bail!(message);
    }

    let mut result = CommandResultViewModel::new(present_lab_list(student, &view));
    if view.current_page() < view.pagination().page_count() {
        result = result.with_suggestion(Guidance::new("Next page").with_command(format!(
            "labroster labs list --student {student} --page {}",
            view.current_page() + 1
        )));
    }
    if let Some(first) = view.rows().first() {
        result = result.with_suggestion(Guidance::new("Show lab details").with_command(format!(
            "labroster lab show {} --name \"{}\"",
            first.lab_instance_id, first.lab_profile_name
        )));
    }

    ConsoleRenderer::new(ctx.format).render(&result)
}
