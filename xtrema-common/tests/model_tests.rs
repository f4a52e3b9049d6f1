// File: xtrema-common/tests/model_tests.rs

use xtrema_common::models::{Screen, UserProfile, WasteAnalysis, WasteCategory, WasteType};

#[test]
fn screen_parses_case_insensitively() {
    assert_eq!("Report".parse::<Screen>().unwrap(), Screen::Report);
    assert_eq!(" points ".parse::<Screen>().unwrap(), Screen::Points);
    assert!("dashboard".parse::<Screen>().is_err());
}

#[test]
fn screen_serializes_like_the_view_enum() {
    let json = serde_json::to_string(&Screen::Schedule).unwrap();
    assert_eq!(json, "\"SCHEDULE\"");
}

#[test]
fn waste_type_accepts_code_or_label() {
    assert_eq!("e-waste".parse::<WasteType>().unwrap(), WasteType::EWaste);
    assert_eq!("Organic / Wet".parse::<WasteType>().unwrap(), WasteType::Wet);
    assert_eq!(WasteType::default(), WasteType::Mixed);
    assert!("compost".parse::<WasteType>().is_err());
}

#[test]
fn analysis_entries_follow_display_order() {
    let analysis = WasteAnalysis::new(45.0, 10.0, 20.0, 15.0, 10.0);
    let labels: Vec<_> = analysis.entries().map(|(c, _)| c.label()).collect();
    assert_eq!(labels, ["Plastic", "Glass", "Cardboard", "Metal", "Trash"]);
    assert_eq!(analysis.value(WasteCategory::Metal), 15.0);
    assert_eq!(analysis.dominant(), WasteCategory::Plastic);
}

#[test]
fn default_profile_matches_demo_account() {
    let user = UserProfile::default();
    assert_eq!(user.name, "xtrema ui dev");
    assert_eq!(user.email, "abc@xtrema.com");
    assert_eq!(user.points, 1000);
}
