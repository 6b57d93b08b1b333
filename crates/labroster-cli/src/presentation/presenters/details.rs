use labroster_types::LabDetails;

use crate::presentation::view_models::{
    DetailsCardViewModel, DetailsContent, GaugeViewModel, LabDetailsViewModel,
};
use crate::screens::LabDetailsScreen;
use crate::screens::lab_details::DetailsState;

pub fn details_title(lab_profile_name: &str) -> String {
    format!("{lab_profile_name} Summary")
}

pub fn present_details_card(details: &LabDetails, include_raw: bool) -> DetailsCardViewModel {
    let card = details.card();
    let progress = details.progress();

    let fields = [
        ("LAB PROFILE NAME", card.lab_profile_name),
        ("USER FIRST NAME", card.user_first_name),
        ("USER LAST NAME", card.user_last_name),
        ("START TIME", card.start_time),
        ("END TIME", card.end_time),
        ("STATE", card.state),
        ("COMPLETION STATUS", card.completion_status),
        ("TOTAL RUN TIME", card.total_run_time),
        ("EXAM PASSED", card.exam_passed),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value))
    .collect();

    DetailsCardViewModel {
        fields,
        num_tasks: progress.num_tasks,
        num_completed_tasks: progress.num_completed_tasks,
        gauges: vec![
            GaugeViewModel {
                label: "COMPLETED TASKS".to_string(),
                value: progress.num_completed_tasks,
                max: progress.num_tasks,
                ratio: progress.task_ratio(),
            },
            GaugeViewModel {
                label: "SCORE".to_string(),
                value: progress.exam_score,
                max: progress.exam_max_possible_score,
                ratio: progress.score_ratio(),
            },
        ],
        raw: include_raw.then(|| details.raw().clone()),
    }
}

pub fn present_lab_details(
    lab_profile_name: &str,
    lab_instance_id: &str,
    state: &DetailsState,
) -> LabDetailsViewModel {
    let content = match state {
        DetailsState::Loading => DetailsContent::Loading,
        DetailsState::Loaded(details) => {
            DetailsContent::Card(Box::new(present_details_card(details, true)))
        }
        DetailsState::Empty(text) => DetailsContent::Message {
            text: text.clone(),
            is_error: false,
        },
        DetailsState::Failed(text) => DetailsContent::Message {
            text: text.clone(),
            is_error: true,
        },
    };

    LabDetailsViewModel {
        title: details_title(lab_profile_name),
        lab_instance_id: lab_instance_id.to_string(),
        content,
    }
}

pub fn present_details_screen(screen: &LabDetailsScreen) -> LabDetailsViewModel {
    present_lab_details(
        &screen.lab().lab_profile_name,
        &screen.lab().lab_instance_id,
        screen.state(),
    )
}
