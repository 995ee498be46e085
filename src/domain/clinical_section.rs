use std::fmt;

use serde::Deserialize;

/// Name of a clinical documentation section as produced by the scribe
/// service. Known names have fixed display titles; anything else falls back
/// to a humanized form of the raw name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct SectionName(String);

impl SectionName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_treatment_plan(&self) -> bool {
        self.0 == "PLAN_OF_TREATMENT"
    }

    pub fn title(&self) -> String {
        match self.0.as_str() {
            "CHIEF_COMPLAINT" => "Chief Complaint".to_string(),
            "HISTORY_OF_PRESENT_ILLNESS" => "History of Present Illness".to_string(),
            "PHYSICAL_EXAMINATION" => "Physical Examination".to_string(),
            "ASSESSMENT" => "Assessment & Diagnosis".to_string(),
            "PLAN_OF_TREATMENT" => "Treatment Plan".to_string(),
            "MEDICATIONS" => "Medications".to_string(),
            "FAMILY_HISTORY" => "Family History".to_string(),
            "SOCIAL_HISTORY" => "Social History".to_string(),
            "REVIEW_OF_SYSTEMS" => "Review of Systems".to_string(),
            other => humanize(other),
        }
    }
}

/// `SOME_SECTION_NAME` -> `Some Section Name`.
fn humanize(raw: &str) -> String {
    raw.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<String> for SectionName {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryFragment {
    #[serde(rename = "SummarizedSegment", default)]
    pub text: String,
}

/// One named block of summarized text in the scribe output document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClinicalSection {
    #[serde(rename = "SectionName", default = "SectionName::unnamed")]
    pub name: SectionName,
    #[serde(rename = "Summary", default)]
    pub summary: Vec<SummaryFragment>,
}

impl SectionName {
    fn unnamed() -> Self {
        Self(String::new())
    }
}

impl ClinicalSection {
    pub fn new(name: impl Into<String>, fragments: &[&str]) -> Self {
        Self {
            name: SectionName::new(name),
            summary: fragments
                .iter()
                .map(|f| SummaryFragment {
                    text: (*f).to_string(),
                })
                .collect(),
        }
    }

    /// All fragments joined with a space, trimmed. Empty when the section
    /// carries no usable text.
    pub fn text(&self) -> String {
        self.summary
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

/// Scribe output document (`summary.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct ClinicalNote {
    #[serde(rename = "ClinicalDocumentation")]
    documentation: ClinicalDocumentation,
}

#[derive(Debug, Clone, Deserialize)]
struct ClinicalDocumentation {
    #[serde(rename = "Sections", default)]
    sections: Vec<ClinicalSection>,
}

impl ClinicalNote {
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn sections(&self) -> &[ClinicalSection] {
        &self.documentation.sections
    }
}
