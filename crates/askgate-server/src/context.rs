//! Grounding prompt assembly.
//!
//! Renders a capped prefix of the dataset into labeled blocks, one per
//! record, then appends the question and the answering instruction. When no
//! records are available a distinct no-data template is used so the model
//! still gets the question.

use crate::dataset::ConferenceRecord;

/// Placeholder rendered for any missing record field, keeping the block
/// format stable regardless of upstream data quality.
const FIELD_FALLBACK: &str = "not available";

type FieldAccessor = fn(&ConferenceRecord) -> Option<&str>;

/// Field set rendered per record, in order. Parameterized as a table so
/// dataset variants only swap labels/accessors, not the pipeline.
const RECORD_FIELDS: &[(&str, FieldAccessor)] = &[
    ("Acronym", |r| r.acronym.as_deref()),
    ("Name", |r| r.name.as_deref()),
    ("Location", |r| r.location.as_deref()),
    ("Submission deadline", |r| r.deadline.as_deref()),
    ("Start date", |r| r.start_date.as_deref()),
    ("Topics", |r| r.topics.as_deref()),
    ("Link", |r| r.url.as_deref()),
];

/// Builds grounding prompts from fetched records and the user's question.
pub struct ContextBuilder {
    /// Max records embedded per prompt.
    cap: usize,
}

impl ContextBuilder {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Render the grounding prompt. Records beyond the cap are dropped;
    /// order is preserved; the question is appended verbatim.
    pub fn build(&self, records: &[ConferenceRecord], question: &str) -> String {
        if records.is_empty() {
            return format!("No conference data is available. Question: {question}");
        }

        let mut prompt =
            String::from("Use the following conference listings to answer the question:\n\n");

        for (i, record) in records.iter().take(self.cap).enumerate() {
            prompt.push_str(&format!("Conference {}:\n", i + 1));
            for (label, accessor) in RECORD_FIELDS {
                let value = accessor(record).unwrap_or(FIELD_FALLBACK);
                prompt.push_str(&format!("{label}: {value}\n"));
            }
            prompt.push('\n');
        }

        prompt.push_str(&format!(
            "Question: {question}\n\
             Answer using only the context above, and say explicitly when the \
             information is not available."
        ));
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(acronym: &str) -> ConferenceRecord {
        ConferenceRecord {
            acronym: Some(acronym.to_string()),
            name: Some(format!("{acronym} Conference")),
            location: Some("Hanoi".to_string()),
            deadline: Some("2026-10-01".to_string()),
            start_date: Some("2027-03-01".to_string()),
            topics: Some("software engineering".to_string()),
            url: Some("https://example.org".to_string()),
        }
    }

    #[test]
    fn test_empty_records_use_no_data_template() {
        let builder = ContextBuilder::new(10);
        let prompt = builder.build(&[], "When is the deadline?");
        assert_eq!(
            prompt,
            "No conference data is available. Question: When is the deadline?"
        );
    }

    #[test]
    fn test_blocks_rendered_in_input_order() {
        let builder = ContextBuilder::new(10);
        let records = vec![record("AAA"), record("BBB"), record("CCC")];
        let prompt = builder.build(&records, "Q");

        assert_eq!(prompt.matches("Conference ").count(), 3);
        let a = prompt.find("Acronym: AAA").unwrap();
        let b = prompt.find("Acronym: BBB").unwrap();
        let c = prompt.find("Acronym: CCC").unwrap();
        assert!(a < b && b < c);
        assert!(prompt.ends_with("say explicitly when the information is not available."));
        assert!(prompt.contains("Question: Q\n"));
    }

    #[test]
    fn test_cap_limits_record_blocks() {
        let builder = ContextBuilder::new(2);
        let records = vec![record("AAA"), record("BBB"), record("CCC")];
        let prompt = builder.build(&records, "Q");

        assert_eq!(prompt.matches("Conference ").count(), 2);
        assert!(prompt.contains("Acronym: BBB"));
        assert!(!prompt.contains("Acronym: CCC"));
    }

    #[test]
    fn test_missing_fields_render_fallback() {
        let builder = ContextBuilder::new(10);
        let records = vec![ConferenceRecord {
            name: Some("Lone Conf".to_string()),
            ..Default::default()
        }];
        let prompt = builder.build(&records, "Q");

        assert!(prompt.contains("Name: Lone Conf"));
        assert!(prompt.contains("Acronym: not available"));
        assert!(prompt.contains("Submission deadline: not available"));
        assert!(prompt.contains("Link: not available"));
        // Every field label appears even when the record is nearly empty
        for (label, _) in RECORD_FIELDS {
            assert!(prompt.contains(&format!("{label}: ")), "missing {label}");
        }
    }
}
