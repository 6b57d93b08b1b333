use anyhow::{Result, bail};

use labroster_client::{Applied, PagedView};
use labroster_types::{Filter, FilterField, Pagination, RosterEntry};

use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::filter_form::EMPTY_VALUE_MESSAGE;
use crate::presentation::presenters::present_roster_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};

impl FilterArgs {
    pub fn to_filter(&self) -> Result<Filter> {
        let term = match (&self.name, &self.email) {
            (Some(name), _) => Some((FilterField::LearnerName, name)),
            (None, Some(email)) => Some((FilterField::LearnerEmail, email)),
            (None, None) => None,
        };

        match term {
            None => Ok(Filter::none()),
            Some((_, value)) if value.trim().is_empty() => bail!(EMPTY_VALUE_MESSAGE),
            Some((field, value)) => Ok(Filter::by(field, value.trim())),
        }
    }
}

pub fn handle(ctx: &ExecutionContext, page: u32, filter: Filter) -> Result<()> {
    let course = ctx.course()?;
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let mut view: PagedView<RosterEntry> = PagedView::starting_at(Pagination::starting_at(page)?);
    let applied = runtime.block_on(view.fetch_page(
        page,
        |p| api.roster_page(&course, p, &filter),
        |entry| entry,
    ));

    if let Applied::Failed { message } = applied {
        bail!(message);
    }

    let list = present_roster_list(&course, &view, &filter);
    let mut result = CommandResultViewModel::new(list);
    let shown = view.rows().len();
    if shown > 0 {
        result = result.with_badge(StatusBadge::success(format!(
            "{shown} learner{}",
            if shown == 1 { "" } else { "s" }
        )));
    }
    if view.current_page() < view.pagination().page_count() {
        result = result.with_suggestion(
            Guidance::new("Next page")
                .with_command(format!("labroster roster list --page {}", view.current_page() + 1)),
        );
    }
    if let Some(first) = view.rows().first() {
        result = result.with_suggestion(
            Guidance::new("Show a learner's labs")
                .with_command(format!("labroster labs list --student {}", first.anonymous_id)),
        );
    }

    ConsoleRenderer::new(ctx.format).render(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_to_filter() {
        let none = FilterArgs::default();
        assert!(none.to_filter().unwrap().is_empty());

        let email = FilterArgs {
            name: None,
            email: Some(" ada@example.com ".to_string()),
        };
        assert_eq!(
            email.to_filter().unwrap(),
            Filter::by(FilterField::LearnerEmail, "ada@example.com")
        );

        let blank = FilterArgs {
            name: Some("   ".to_string()),
            email: None,
        };
        assert_eq!(
            blank.to_filter().unwrap_err().to_string(),
            EMPTY_VALUE_MESSAGE
        );
    }
}
