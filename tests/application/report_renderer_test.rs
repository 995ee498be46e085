use medivoice::application::services::{render_report, ReportHeader};
use medivoice::domain::ClinicalSection;

fn header() -> ReportHeader {
    ReportHeader {
        patient_name: "Jane Doe".to_string(),
        patient_id: "PAT-1".to_string(),
        visit_date: "2026-02-05".to_string(),
    }
}

#[test]
fn given_treatment_plan_when_rendering_then_numbered_list_with_one_item_per_sentence() {
    let sections = vec![ClinicalSection::new(
        "PLAN_OF_TREATMENT",
        &["Rest. Hydrate. Follow up."],
    )];

    let html = render_report(&sections, &header());

    assert!(html.contains("<ol class='numbered-list'>"));
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains("<li>Rest</li>"));
    assert!(html.contains("<li>Hydrate</li>"));
    assert!(html.contains("<li>Follow up</li>"));
}

#[test]
fn given_any_other_section_when_rendering_then_bulleted_list_with_one_item_per_sentence() {
    let sections = vec![ClinicalSection::new(
        "ASSESSMENT",
        &["Rest. Hydrate. Follow up."],
    )];

    let html = render_report(&sections, &header());

    assert!(html.contains("<ul class='bullet-list'>"));
    assert!(!html.contains("<ol"));
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn given_dash_separated_items_when_rendering_bullets_then_dashes_split_items() {
    let sections = vec![ClinicalSection::new(
        "MEDICATIONS",
        &["Ibuprofen 200mg - twice daily - with food"],
    )];

    let html = render_report(&sections, &header());

    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains("<li>Ibuprofen 200mg</li>"));
    assert!(html.contains("<li>twice daily</li>"));
    assert!(html.contains("<li>with food</li>"));
}

#[test]
fn given_empty_section_when_rendering_then_section_is_omitted() {
    let sections = vec![
        ClinicalSection::new("CHIEF_COMPLAINT", &["Cough."]),
        ClinicalSection::new("FAMILY_HISTORY", &["   ", ""]),
        ClinicalSection::new("SOCIAL_HISTORY", &[]),
    ];

    let html = render_report(&sections, &header());

    assert!(html.contains("Chief Complaint"));
    assert!(!html.contains("Family History"));
    assert!(!html.contains("Social History"));
}

#[test]
fn given_header_fields_when_rendering_then_they_appear_in_the_document() {
    let sections = vec![ClinicalSection::new("ASSESSMENT", &["Stable."])];

    let html = render_report(&sections, &header());

    assert!(html.contains("Jane Doe"));
    assert!(html.contains("PAT-1"));
    assert!(html.contains("2026-02-05"));
}

#[test]
fn given_unknown_section_when_rendering_then_humanized_title_is_used() {
    let sections = vec![ClinicalSection::new("VITAL_SIGNS", &["BP 120/80."])];

    let html = render_report(&sections, &header());

    assert!(html.contains("Vital Signs"));
}

#[test]
fn given_identical_inputs_when_rendering_twice_then_output_is_identical() {
    let sections = vec![
        ClinicalSection::new("CHIEF_COMPLAINT", &["Cough.", "Fever."]),
        ClinicalSection::new("PLAN_OF_TREATMENT", &["Rest. Hydrate."]),
    ];

    assert_eq!(
        render_report(&sections, &header()),
        render_report(&sections, &header())
    );
}
