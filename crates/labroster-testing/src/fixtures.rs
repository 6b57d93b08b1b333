//! Backend response bodies and ready-made mocks.
//!
//! Paths match the routes the client calls; bodies use the wire field names.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

pub const ENROLLMENTS_PATH: &str = "/pearson-core/api/v1/course-enrollments";
pub const STUDENTS_PATH: &str = "/students/";
pub const LAB_SEARCH_PATH: &str = "/events/api/v1/labinstancesearch/";
pub const LAB_DETAILS_PATH: &str = "/events/api/v1/details/";
pub const DASHBOARD_LAUNCH_PATH: &str = "/skillable_plugin/course-tab/api/v1/instructor-dashboard-launch/";
pub const CCX_CHECK_PATH: &str = "/skillable_plugin/course-tab/api/v1/is-ccx-course/";

/// A roster page from `(name, email, anonymous id)` triples.
pub fn roster_page(learners: &[(&str, &str, &str)], count: u64, next: Option<&str>) -> Value {
    let results: Vec<Value> = learners
        .iter()
        .map(|(name, email, id)| {
            json!({
                "learner_name": name,
                "learner_email": email,
                "learner_anonymous_id": id,
            })
        })
        .collect();
    json!({
        "results": results,
        "count": count,
        "next": next,
        "previous": null,
    })
}

pub fn lab_instance(id: u64, name: &str, launches: u64, score: f64, max: f64, passed: bool) -> Value {
    json!({
        "lab_profile_name": name,
        "lab_instance_id": id,
        "lab_instances_count": launches,
        "exam_score": score,
        "exam_max_possible_score": max,
        "exam_passed": passed,
        "start_time": null,
        "end_time": null,
    })
}

pub fn lab_page(instances: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "count": instances.len(),
        "results": instances,
        "next": next,
        "previous": null,
    })
}

pub fn lab_details(name: &str, completed: u64, tasks: u64, score: u64, max: u64) -> Value {
    json!({
        "LabProfileName": name,
        "UserFirstName": "Ada",
        "UserLastName": "Lovelace",
        "State": "Off",
        "CompletionStatus": "Complete",
        "TotalRunTime": "01:02:03",
        "NumTasks": tasks,
        "NumCompletedTasks": completed,
        "ExamScore": score,
        "ExamMaxPossibleScore": max,
        "exam_passed": score * 2 >= max,
    })
}

pub fn course_roster_mock(page: u32, body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(ENROLLMENTS_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

pub fn class_roster_mock(class_id: &str, page: u32, body: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path(STUDENTS_PATH))
        .and(query_param("class_id", class_id))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

pub fn roster_error_mock(status: u16, body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(ENROLLMENTS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
}

pub fn lab_page_mock(user_id: &str, page: u32, body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(LAB_SEARCH_PATH))
        .and(query_param("page", page.to_string()))
        .and(body_json(json!({ "userid": user_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

pub fn lab_details_mock(lab_instance_id: u64, body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(LAB_DETAILS_PATH))
        .and(body_json(json!({ "labinstanceid": lab_instance_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

pub fn ccx_check_mock(is_ccx: bool) -> Mock {
    Mock::given(method("POST"))
        .and(path(CCX_CHECK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "is_ccx_course": is_ccx })))
}

pub fn dashboard_launch_mock(body: Value) -> Mock {
    Mock::given(method("POST"))
        .and(path(DASHBOARD_LAUNCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}
