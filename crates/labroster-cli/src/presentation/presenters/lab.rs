use labroster_client::PagedView;
use labroster_types::{LabSummaryEntry, SelectedStudent};

use super::roster::page_of;
use crate::presentation::view_models::{
    LAB_COLUMNS, LAB_EMPTY_MESSAGE, LabListViewModel, LabRowViewModel, TableViewModel,
};
use crate::screens::LabSummaryScreen;

pub fn present_lab_row(entry: &LabSummaryEntry) -> LabRowViewModel {
    LabRowViewModel {
        lab_name: entry.lab_profile_name.clone(),
        lab_instance_id: entry.lab_instance_id.clone(),
        launches: entry.launch_count.to_string(),
        score: entry.exam_score_label(),
        percentage: entry.exam_percentage_label(),
        passed: entry.exam_passed.to_string(),
        start_time: entry.start_time.clone(),
        end_time: entry.end_time.clone(),
    }
}

pub fn present_lab_list(student: &str, view: &PagedView<LabSummaryEntry>) -> LabListViewModel {
    LabListViewModel {
        student: student.to_string(),
        page: page_of(view),
        entries: view.rows().iter().map(present_lab_row).collect(),
        error: view.error().map(str::to_string),
    }
}

pub fn lab_summary_title(student: &SelectedStudent) -> String {
    format!("{} Lab Summary", student.username)
}

pub fn present_lab_table(screen: &LabSummaryScreen) -> TableViewModel {
    let view = screen.table();
    TableViewModel {
        columns: LAB_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: view
            .rows()
            .iter()
            .map(|entry| present_lab_row(entry).cells())
            .collect(),
        selected: (!view.rows().is_empty()).then_some(screen.cursor()),
        loading: view.is_loading(),
        empty_message: LAB_EMPTY_MESSAGE.to_string(),
        error: view.error().map(str::to_string),
        page: page_of(view),
    }
}
