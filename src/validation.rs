use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// A single declarative check applied to an optional string attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not whitespace-only.
    Presence,
    /// At least this many characters; a missing value counts as empty.
    MinLength(usize),
}

impl Rule {
    fn check(self, value: Option<&str>) -> Option<String> {
        match self {
            Rule::Presence => {
                let blank = value.map(|v| v.trim().is_empty()).unwrap_or(true);
                blank.then(|| "can't be blank".to_string())
            }
            Rule::MinLength(min) => {
                let length = value.map(|v| v.chars().count()).unwrap_or(0);
                (length < min).then(|| {
                    let unit = if min == 1 { "character" } else { "characters" };
                    format!("is too short (minimum is {min} {unit})")
                })
            }
        }
    }
}

/// Field name to ordered violation messages. Serializes as a plain map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Messages prefixed with the humanized field name, e.g.
    /// `Contents can't be blank`.
    pub fn full_messages(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|(field, messages)| {
                let name = humanize(field);
                messages
                    .iter()
                    .map(move |message| format!("{name} {message}"))
            })
            .collect()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Runs every rule against `value`; nothing short-circuits.
pub fn validate_field(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    rules: &[Rule],
) {
    for rule in rules {
        if let Some(message) = rule.check(value) {
            errors.add(field, message);
        }
    }
}

fn humanize(field: &str) -> String {
    let field = field.strip_suffix("_id").unwrap_or(field);
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
