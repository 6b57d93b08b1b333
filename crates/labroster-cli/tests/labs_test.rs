use labroster_testing::TestWorld;
use labroster_testing::assertions::{assert_entry_count, entry_field};
use labroster_testing::fixtures::{lab_instance, lab_page, lab_page_mock};

#[test]
fn test_labs_list_formats_summary_columns() {
    let world = TestWorld::new();
    world.mount(lab_page_mock(
        "anon-1",
        1,
        lab_page(
            vec![
                lab_instance(48213, "Routing Basics", 3, 8.0, 10.0, true),
                lab_instance(48214, "Switching", 0, 0.0, 0.0, false),
            ],
            None,
        ),
    ));

    let json = world
        .run_json(&["labs", "list", "--student", "anon-1"])
        .unwrap();

    assert_entry_count(&json, 2).unwrap();
    assert_eq!(json["content"]["student"], "anon-1");
    assert_eq!(
        entry_field(&json, "lab_instance_id").unwrap(),
        vec!["48213", "48214"]
    );
    // A missing or zero launch count still counts the instance itself.
    assert_eq!(entry_field(&json, "launches").unwrap(), vec!["3", "1"]);
    assert_eq!(entry_field(&json, "score").unwrap(), vec!["8", "0"]);
    assert_eq!(entry_field(&json, "percentage").unwrap(), vec!["8%", "N/A"]);
    assert_eq!(entry_field(&json, "passed").unwrap(), vec!["Yes", "No"]);
    assert_eq!(entry_field(&json, "start_time").unwrap(), vec!["N/A", "N/A"]);
}

#[test]
fn test_labs_list_empty() {
    let world = TestWorld::new();
    world.mount(lab_page_mock("anon-9", 1, lab_page(Vec::new(), None)));

    let result = world
        .run(&["labs", "list", "--student", "anon-9"])
        .unwrap();

    assert!(result.success(), "labs list failed: {}", result.stderr);
    assert!(result.stdout.contains("No Labs found."));
    assert!(result.stdout.contains("Page 1 of 1"));
}

#[test]
fn test_labs_list_backend_failure() {
    let world = TestWorld::new();

    let result = world
        .run(&["labs", "list", "--student", "anon-1"])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("Error: "));
}
