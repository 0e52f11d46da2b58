//! Step definitions — which draft fields each wizard screen governs.

use std::collections::HashMap;

use crate::error::FlowError;
use crate::schema::{EntitySchema, applicant_draft, employer_profile};

/// Static descriptor of one wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    /// Position in the flow, 1-based and contiguous.
    pub ordinal: u32,
    /// Human label shown in the step indicator.
    pub label: &'static str,
    /// The subset of draft fields this step collects and validates.
    pub fields: &'static [&'static str],
}

/// A complete wizard: an entity schema plus the ordered steps that cover it.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    pub name: &'static str,
    pub schema: EntitySchema,
    steps: Vec<StepDefinition>,
}

impl FlowDefinition {
    /// Build a flow, checking the structural invariants: ordinals are
    /// contiguous from 1 and the steps cover every schema field exactly once.
    pub fn new(
        name: &'static str,
        schema: EntitySchema,
        steps: Vec<StepDefinition>,
    ) -> Result<Self, FlowError> {
        if steps.is_empty() {
            return Err(FlowError::Empty {
                flow: name.to_string(),
            });
        }
        for (position, step) in steps.iter().enumerate() {
            let expected = position as u32 + 1;
            if step.ordinal != expected {
                return Err(FlowError::NonContiguousOrdinals {
                    flow: name.to_string(),
                    position,
                    found: step.ordinal,
                });
            }
        }

        let mut owner: HashMap<&str, u32> = HashMap::new();
        for step in &steps {
            for field in step.fields {
                if schema.field(field).is_none() {
                    return Err(FlowError::UnknownField {
                        flow: name.to_string(),
                        ordinal: step.ordinal,
                        field: field.to_string(),
                    });
                }
                if let Some(first) = owner.insert(field, step.ordinal) {
                    return Err(FlowError::DuplicateField {
                        flow: name.to_string(),
                        field: field.to_string(),
                        first,
                        second: step.ordinal,
                    });
                }
            }
        }
        for field in schema.field_names() {
            if !owner.contains_key(field) {
                return Err(FlowError::UncoveredField {
                    flow: name.to_string(),
                    field: field.to_string(),
                });
            }
        }

        Ok(Self {
            name,
            schema,
            steps,
        })
    }

    pub fn total_steps(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Look up a step by ordinal; `None` outside `[1, N]`.
    pub fn step(&self, ordinal: u32) -> Option<&StepDefinition> {
        if ordinal == 0 {
            return None;
        }
        self.steps.get(ordinal as usize - 1)
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }
}

/// The five-step applicant wizard.
pub fn applicant_flow() -> Result<FlowDefinition, FlowError> {
    FlowDefinition::new(
        "applicant",
        applicant_draft(),
        vec![
            StepDefinition {
                ordinal: 1,
                label: "Who you are",
                fields: &["full_name", "phone", "city", "age"],
            },
            StepDefinition {
                ordinal: 2,
                label: "Your career",
                fields: &[
                    "experience_years",
                    "current_position",
                    "desired_position",
                    "education",
                    "rank",
                ],
            },
            StepDefinition {
                ordinal: 3,
                label: "Your specialization",
                fields: &["cuisines", "certificates", "skills"],
            },
            StepDefinition {
                ordinal: 4,
                label: "Your conditions",
                fields: &["venue_formats", "salary_from", "salary_to"],
            },
            StepDefinition {
                ordinal: 5,
                label: "Finishing touches",
                fields: &["goals", "about", "self_rating"],
            },
        ],
    )
}

/// The three-step employer wizard.
pub fn employer_flow() -> Result<FlowDefinition, FlowError> {
    FlowDefinition::new(
        "employer",
        employer_profile(),
        vec![
            StepDefinition {
                ordinal: 1,
                label: "Your venue",
                fields: &["company_name", "city", "venue_format"],
            },
            StepDefinition {
                ordinal: 2,
                label: "How to reach you",
                fields: &["phone", "website"],
            },
            StepDefinition {
                ordinal: 3,
                label: "Tell applicants more",
                fields: &["description"],
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldRule};

    fn two_field_schema() -> EntitySchema {
        EntitySchema {
            name: "test",
            fields: vec![
                FieldRule::required("a", FieldKind::Text { min_len: 1, max_len: None }),
                FieldRule::required("b", FieldKind::Text { min_len: 1, max_len: None }),
            ],
        }
    }

    #[test]
    fn builtin_flows_are_well_formed() {
        let applicant = applicant_flow().unwrap();
        assert_eq!(applicant.total_steps(), 5);
        let employer = employer_flow().unwrap();
        assert_eq!(employer.total_steps(), 3);
    }

    #[test]
    fn rejects_empty_flow() {
        let err = FlowDefinition::new("test", two_field_schema(), vec![]).unwrap_err();
        assert!(matches!(err, FlowError::Empty { .. }));
    }

    #[test]
    fn rejects_non_contiguous_ordinals() {
        let err = FlowDefinition::new(
            "test",
            two_field_schema(),
            vec![
                StepDefinition { ordinal: 1, label: "one", fields: &["a"] },
                StepDefinition { ordinal: 3, label: "three", fields: &["b"] },
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FlowError::NonContiguousOrdinals { position: 1, found: 3, .. }
        ));
    }

    #[test]
    fn rejects_uncovered_field() {
        let err = FlowDefinition::new(
            "test",
            two_field_schema(),
            vec![StepDefinition { ordinal: 1, label: "one", fields: &["a"] }],
        )
        .unwrap_err();
        match err {
            FlowError::UncoveredField { field, .. } => assert_eq!(field, "b"),
            other => panic!("expected UncoveredField, got {other:?}"),
        }
    }

    #[test]
    fn rejects_field_claimed_twice() {
        let err = FlowDefinition::new(
            "test",
            two_field_schema(),
            vec![
                StepDefinition { ordinal: 1, label: "one", fields: &["a", "b"] },
                StepDefinition { ordinal: 2, label: "two", fields: &["a"] },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, FlowError::DuplicateField { first: 1, second: 2, .. }));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = FlowDefinition::new(
            "test",
            two_field_schema(),
            vec![StepDefinition { ordinal: 1, label: "one", fields: &["a", "b", "zzz"] }],
        )
        .unwrap_err();
        assert!(matches!(err, FlowError::UnknownField { ordinal: 1, .. }));
    }

    #[test]
    fn step_lookup_is_one_based() {
        let flow = applicant_flow().unwrap();
        assert!(flow.step(0).is_none());
        assert_eq!(flow.step(1).unwrap().label, "Who you are");
        assert_eq!(flow.step(5).unwrap().label, "Finishing touches");
        assert!(flow.step(6).is_none());
    }
}
