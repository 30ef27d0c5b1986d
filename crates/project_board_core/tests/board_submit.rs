use project_board_core::{
    BoardConfig, BoardError, FormField, Project, ProjectBoard, ProjectStatus, RecordingNotifier,
    StateError, SubmitError, INVALID_INPUT_MESSAGE,
};

fn board() -> ProjectBoard {
    ProjectBoard::new(&BoardConfig::default()).expect("default board")
}

#[test]
fn valid_submission_adds_active_project_and_clears_fields() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();

    let id = board
        .submit_fields("Build API", "Implement REST endpoints", "3", &mut notifier)
        .expect("valid submission");

    let active = board.active_projects();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, id);
    assert_eq!(active[0].title, "Build API");
    assert_eq!(active[0].people, 3.0);
    assert_eq!(active[0].status, ProjectStatus::Active);
    assert!(board.finished_projects().is_empty());

    for field in FormField::ALL {
        assert_eq!(board.input().field_value(field), "");
    }
    assert!(notifier.is_empty());

    let page = board.render_page().expect("render page");
    assert!(page.contains("<h2>Build API</h2>"));
}

#[test]
fn short_description_is_rejected_and_fields_are_kept() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();

    let err = board
        .submit_fields("Build API", "hi", "3", &mut notifier)
        .expect_err("short description must be rejected");

    assert_eq!(
        err,
        SubmitError::InvalidInput {
            field: FormField::Description
        }
    );
    assert!(board.projects().is_empty());
    assert!(board.active_projects().is_empty());
    assert_eq!(board.input().field_value(FormField::Title), "Build API");
    assert_eq!(board.input().field_value(FormField::Description), "hi");
    assert_eq!(board.input().field_value(FormField::People), "3");
    assert_eq!(notifier.alerts(), vec![INVALID_INPUT_MESSAGE.to_string()]);
}

#[test]
fn people_outside_range_or_not_numeric_is_rejected() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();

    for people in ["0", "6", "", "many"] {
        let err = board
            .submit_fields("Build API", "Implement REST endpoints", people, &mut notifier)
            .expect_err("people outside 1..=5 must be rejected");
        assert_eq!(
            err,
            SubmitError::InvalidInput {
                field: FormField::People
            }
        );
    }
    assert_eq!(notifier.len(), 4);
    assert!(board.projects().is_empty());
}

#[test]
fn rejected_form_shows_retained_values() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();
    board
        .submit_fields("Keep me", "no", "2", &mut notifier)
        .expect_err("short description must be rejected");

    let host = board.host();
    let host = host.borrow();
    let form = host.element("user-input").expect("form mounted");
    assert!(form.contains(r#"value="Keep me""#));
    assert!(form.contains(">no</textarea>"));
}

#[test]
fn snapshot_round_trips_into_a_fresh_board() {
    let mut source = board();
    let mut notifier = RecordingNotifier::new();
    source
        .submit_fields("Build API", "Implement REST endpoints", "3", &mut notifier)
        .expect("first submission");
    source
        .submit_fields("Write docs", "Document every endpoint", "1", &mut notifier)
        .expect("second submission");
    let snapshot = source.snapshot_json().expect("serialize snapshot");

    let mut target = board();
    let imported = target
        .import_snapshot_json(&snapshot)
        .expect("import snapshot");
    assert_eq!(imported, 2);
    assert_eq!(target.projects(), source.projects());
    assert_eq!(target.active_projects().len(), 2);
}

#[test]
fn boards_do_not_share_state() {
    let mut first = board();
    let second = board();
    let mut notifier = RecordingNotifier::new();
    first
        .submit_fields("Build API", "Implement REST endpoints", "3", &mut notifier)
        .expect("valid submission");

    assert_eq!(first.projects().len(), 1);
    assert!(second.projects().is_empty());
}

#[test]
fn snapshot_with_known_id_is_rejected_without_partial_import() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();
    let existing = board
        .submit_fields("Existing", "Already on the board", "2", &mut notifier)
        .expect("seed submission");

    let fresh = Project::new("Fresh", "Only in the snapshot", 1.0);
    let known = board.projects()[0].clone();
    let snapshot = serde_json::to_string(&vec![fresh.clone(), known]).expect("serialize");

    let err = board
        .import_snapshot_json(&snapshot)
        .expect_err("known id must reject the whole snapshot");
    assert_eq!(err, BoardError::State(StateError::DuplicateId(existing)));
    assert_eq!(board.projects().len(), 1);
    assert_eq!(board.active_projects().len(), 1);

    {
        let host = board.host();
        let host = host.borrow();
        let list = host.element("active-projects").expect("active list mounted");
        assert!(!list.contains("Fresh"));
    }

    let repeated = serde_json::to_string(&vec![fresh.clone(), fresh]).expect("serialize");
    assert!(board.import_snapshot_json(&repeated).is_err());
    assert_eq!(board.projects().len(), 1);
}

#[test]
fn description_length_counts_utf16_units() {
    let mut board = board();
    let mut notifier = RecordingNotifier::new();
    board
        .submit_fields("Emoji", "😀😀😀", "2", &mut notifier)
        .expect("three emoji are six units long");
    assert_eq!(board.projects().len(), 1);
    assert!(notifier.is_empty());
}
