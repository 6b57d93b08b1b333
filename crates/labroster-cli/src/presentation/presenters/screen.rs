use crate::app::App;
use crate::presentation::view_models::{
    BreadcrumbViewModel, ScreenBodyViewModel, StatusBarViewModel, StatusLevel, TuiScreenViewModel,
};
use crate::router::Screen;
use crate::screens::RosterFocus;

use super::details::present_details_screen;
use super::lab::{lab_summary_title, present_lab_table};
use super::roster::{present_dashboard_panel, present_filter_bar, present_roster_table};

pub fn present_screen(app: &App) -> TuiScreenViewModel {
    let router = app.router();
    let screen = router.screen();

    let breadcrumb = BreadcrumbViewModel {
        trail: trail(screen),
        route: router.route_path(),
    };

    let body = match (screen, app.summary(), app.details()) {
        (Screen::LabSummary { student }, Some(summary), _) => ScreenBodyViewModel::LabSummary {
            title: lab_summary_title(student),
            table: present_lab_table(summary),
        },
        (Screen::LabDetails { .. }, _, Some(details)) => ScreenBodyViewModel::LabDetails {
            details: Box::new(present_details_screen(details)),
            show_json: details.show_json(),
            json_scroll: details.json_scroll(),
        },
        _ => {
            let roster = app.roster();
            ScreenBodyViewModel::Roster {
                dashboard: present_dashboard_panel(roster.dashboard()),
                filter: present_filter_bar(roster),
                table: present_roster_table(roster),
            }
        }
    };

    let (message, level) = match app.status() {
        Some(status) => (status.text.clone(), status.level),
        None => (String::new(), StatusLevel::Info),
    };

    TuiScreenViewModel {
        breadcrumb,
        body,
        status_bar: StatusBarViewModel {
            message,
            level,
            keys: key_hints(app),
        },
    }
}

fn trail(screen: &Screen) -> Vec<String> {
    let mut trail = vec![Screen::Roster.title().to_string()];
    match screen {
        Screen::Roster => {}
        Screen::LabSummary { student } => {
            trail.push(student.username.clone());
        }
        Screen::LabDetails { lab, student } => {
            trail.push(student.username.clone());
            trail.push(lab.lab_profile_name.clone());
        }
    }
    trail
}

fn key_hints(app: &App) -> Vec<(String, String)> {
    let hints: &[(&str, &str)] = match app.router().screen() {
        Screen::Roster if app.roster().focus() == RosterFocus::Filter => &[
            ("Enter", "search"),
            ("Tab", "field"),
            ("C-r", "reset"),
            ("Esc", "table"),
        ],
        Screen::Roster if app.roster().dashboard().visible => &[
            ("↑↓", "select"),
            ("←→", "page"),
            ("Enter", "labs"),
            ("/", "filter"),
            ("x", "reset"),
            ("d", "dashboard"),
            ("q", "quit"),
        ],
        Screen::Roster => &[
            ("↑↓", "select"),
            ("←→", "page"),
            ("Enter", "labs"),
            ("/", "filter"),
            ("x", "reset"),
            ("q", "quit"),
        ],
        Screen::LabSummary { .. } => &[
            ("↑↓", "select"),
            ("←→", "page"),
            ("Enter", "details"),
            ("b", "roster"),
            ("q", "quit"),
        ],
        Screen::LabDetails { .. } => &[
            ("b", "summary"),
            ("R", "roster"),
            ("v", "json"),
            ("r", "reload"),
            ("q", "quit"),
        ],
    };

    hints
        .iter()
        .map(|(key, action)| (key.to_string(), action.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use labroster_types::{CourseKey, PageEnvelope, RosterEntry};

    use crate::app::AppEvent;
    use crate::screens::Effect;

    #[test]
    fn test_breadcrumb_follows_navigation() {
        let mut app = App::new(CourseKey::parse("course-v1:Org+CS101+2024").unwrap());
        let Some(Effect::FetchRoster { ticket, .. }) = app.start().first().cloned() else {
            panic!("expected roster fetch");
        };
        app.handle_event(AppEvent::RosterLoaded {
            ticket,
            result: Ok(PageEnvelope {
                results: vec![RosterEntry {
                    display_name: "ada".to_string(),
                    email: "ada@example.com".to_string(),
                    anonymous_id: "anon-1".to_string(),
                }],
                count: 1,
                next: None,
                prev: None,
            }),
        });

        let vm = present_screen(&app);
        assert_eq!(vm.breadcrumb.trail, vec!["Class Roster"]);
        assert!(matches!(vm.body, ScreenBodyViewModel::Roster { .. }));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let vm = present_screen(&app);
        assert_eq!(vm.breadcrumb.trail, vec!["Class Roster", "ada"]);
        assert_eq!(
            vm.breadcrumb.route,
            "/courses/course-v1:Org+CS101+2024/lab-summary/anon-1"
        );
        match vm.body {
            ScreenBodyViewModel::LabSummary { title, table } => {
                assert_eq!(title, "ada Lab Summary");
                assert!(table.loading);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }
}
