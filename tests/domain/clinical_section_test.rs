use medivoice::domain::{ClinicalNote, ClinicalSection, SectionName};

#[test]
fn given_scribe_output_when_parsing_then_sections_and_fragments_survive() {
    let document = br#"{
        "ClinicalDocumentation": {
            "Sections": [
                {
                    "SectionName": "CHIEF_COMPLAINT",
                    "Summary": [
                        {"SummarizedSegment": "Persistent cough."},
                        {"SummarizedSegment": "Mild fever."}
                    ]
                },
                {
                    "SectionName": "PLAN_OF_TREATMENT",
                    "Summary": [{"SummarizedSegment": "Rest. Hydrate."}]
                }
            ]
        }
    }"#;

    let note = ClinicalNote::from_json(document).unwrap();

    assert_eq!(note.sections().len(), 2);
    assert_eq!(note.sections()[0].name.as_str(), "CHIEF_COMPLAINT");
    assert_eq!(note.sections()[0].text(), "Persistent cough. Mild fever.");
    assert!(note.sections()[1].name.is_treatment_plan());
}

#[test]
fn given_document_without_sections_when_parsing_then_empty_list() {
    let note = ClinicalNote::from_json(br#"{"ClinicalDocumentation": {}}"#).unwrap();

    assert!(note.sections().is_empty());
}

#[test]
fn given_document_without_documentation_when_parsing_then_error() {
    assert!(ClinicalNote::from_json(br#"{"Transcript": []}"#).is_err());
}

#[test]
fn given_known_section_names_when_titling_then_fixed_titles_are_used() {
    assert_eq!(SectionName::new("CHIEF_COMPLAINT").title(), "Chief Complaint");
    assert_eq!(SectionName::new("ASSESSMENT").title(), "Assessment & Diagnosis");
    assert_eq!(SectionName::new("PLAN_OF_TREATMENT").title(), "Treatment Plan");
    assert_eq!(SectionName::new("REVIEW_OF_SYSTEMS").title(), "Review of Systems");
}

#[test]
fn given_unknown_section_name_when_titling_then_humanized_fallback() {
    assert_eq!(SectionName::new("VITAL_SIGNS").title(), "Vital Signs");
    assert_eq!(SectionName::new("ALLERGIES").title(), "Allergies");
}

#[test]
fn given_whitespace_fragments_when_joining_then_text_is_empty() {
    let section = ClinicalSection::new("ASSESSMENT", &["  ", ""]);

    assert!(section.text().is_empty());
}
