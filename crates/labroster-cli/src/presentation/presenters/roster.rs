use labroster_client::PagedView;
use labroster_types::{CourseKey, Filter, RosterEntry};

use crate::presentation::view_models::{
    DashboardPanelViewModel, FilterBarViewModel, PageViewModel, ROSTER_COLUMNS,
    ROSTER_EMPTY_MESSAGE, RosterListViewModel, RosterRowViewModel, TableViewModel,
};
use crate::screens::{DashboardPanel, RosterFocus, RosterScreen};

pub fn page_of<Row>(view: &PagedView<Row>) -> PageViewModel {
    PageViewModel {
        current: view.pagination().current_page(),
        count: view.pagination().page_count(),
    }
}

pub fn describe_filter(filter: &Filter) -> Option<String> {
    filter
        .term()
        .map(|(field, value)| format!("{} = {}", field.label(), value))
}

fn row(entry: &RosterEntry) -> RosterRowViewModel {
    RosterRowViewModel {
        username: entry.display_name.clone(),
        email: entry.email.clone(),
        anonymous_id: entry.anonymous_id.clone(),
    }
}

pub fn present_roster_list(
    course: &CourseKey,
    view: &PagedView<RosterEntry>,
    filter: &Filter,
) -> RosterListViewModel {
    RosterListViewModel {
        course: course.to_string(),
        page: page_of(view),
        filter: describe_filter(filter),
        entries: view.rows().iter().map(row).collect(),
        error: view.error().map(str::to_string),
    }
}

pub fn present_roster_table(screen: &RosterScreen) -> TableViewModel {
    let view = screen.table();
    TableViewModel {
        columns: ROSTER_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: view
            .rows()
            .iter()
            .map(|entry| vec![entry.display_name.clone(), entry.email.clone()])
            .collect(),
        selected: (!view.rows().is_empty()).then_some(screen.cursor()),
        loading: view.is_loading(),
        empty_message: ROSTER_EMPTY_MESSAGE.to_string(),
        // Roster failures are reported next to the filter field.
        error: None,
        page: page_of(view),
    }
}

pub fn present_filter_bar(screen: &RosterScreen) -> FilterBarViewModel {
    let form = screen.form();
    FilterBarViewModel {
        field_label: form.field().label().to_string(),
        value: form.value().to_string(),
        focused: screen.focus() == RosterFocus::Filter,
        can_submit: form.can_submit(),
        message: form
            .validation_error()
            .map(str::to_string)
            .or_else(|| screen.table().error().map(str::to_string)),
        active_filter: describe_filter(screen.applied_filter()),
    }
}

pub fn present_dashboard_panel(panel: &DashboardPanel) -> DashboardPanelViewModel {
    DashboardPanelViewModel {
        title: "Class Roster".to_string(),
        visible: panel.visible,
        launching: panel.launching,
        error: panel
            .error
            .as_ref()
            .map(|(course_key, message)| launch_error_text(course_key, message)),
        last_url: panel.last_url.clone(),
    }
}

pub fn launch_error_text(course_key: &str, message: &str) -> String {
    if message.is_empty() {
        format!("Could not launch the dashboard for {course_key}.")
    } else {
        format!("Could not launch the dashboard for {course_key}: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labroster_types::FilterField;

    #[test]
    fn test_describe_filter() {
        assert_eq!(describe_filter(&Filter::none()), None);
        assert_eq!(
            describe_filter(&Filter::by(FilterField::LearnerEmail, "ada@example.com")),
            Some("Email = ada@example.com".to_string())
        );
    }

    #[test]
    fn test_empty_roster_table_has_no_selection() {
        let screen = RosterScreen::new(CourseKey::parse("course-v1:Org+CS101+2024").unwrap());
        let table = present_roster_table(&screen);

        assert!(table.rows.is_empty());
        assert_eq!(table.selected, None);
        assert_eq!(table.empty_message, "No users found.");
        assert_eq!(table.columns, vec!["Username", "Email"]);
    }
}
