use project_board_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").expect("valid uuid");
    let project = Project::with_id(id, "Build API", "Implement REST endpoints", 3.0);

    let json = serde_json::to_value(&project).expect("serialize project");
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Build API");
    assert_eq!(json["description"], "Implement REST endpoints");
    assert_eq!(json["people"], 3.0);
    assert_eq!(json["status"], "active");

    let decoded: Project = serde_json::from_value(json).expect("deserialize project");
    assert_eq!(decoded, project);
}

#[test]
fn finished_status_round_trips_as_snake_case() {
    let json = serde_json::to_value(ProjectStatus::Finished).expect("serialize status");
    assert_eq!(json, "finished");
}
