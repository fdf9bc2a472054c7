use super::*;

#[test]
fn test_request_defaults_to_simulated_mode() {
    let req: AutomationRequest = serde_json::from_str(r#"{"configId": "cfg-1"}"#).unwrap();
    assert_eq!(req.config_id, "cfg-1");
    assert!(!req.use_real_automation);
}

#[test]
fn test_request_serializes_camel_case() {
    let req = AutomationRequest::new("cfg-2").with_real_automation(true);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["configId"], "cfg-2");
    assert_eq!(json["useRealAutomation"], true);
}

#[test]
fn test_result_keeps_extra_fields() {
    let json = r#"{"applicationsSubmitted": 3, "skipped": 2, "jobs": ["a", "b"]}"#;
    let result: AutomationResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.applications_submitted, 3);
    assert_eq!(result.extra["skipped"], 2);

    let back = serde_json::to_value(&result).unwrap();
    assert_eq!(back["applicationsSubmitted"], 3);
    assert_eq!(back["jobs"][1], "b");
}

#[test]
fn test_result_requires_submitted_count() {
    let result: Result<AutomationResult, _> = serde_json::from_str(r#"{"skipped": 1}"#);
    assert!(result.is_err());
}

#[test]
fn test_result_with_field() {
    let result = AutomationResult::new(1).with_field("mode", Value::from("simulated"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["mode"], "simulated");
}
