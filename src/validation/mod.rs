//! Field validation
//!
//! Mapping never fails, so validation is a separate pass: every form declares
//! its required fields and the formats of its optional ones. The resulting
//! [`ValidationReport`] is either logged or turned into an error depending on
//! the [`ValidationPolicy`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{catalog, SchemaType};
use crate::forms::FormState;

mod rules;


// ============================================================================
// Policy
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log issues and generate anyway
    #[default]
    Lenient,
    /// Refuse to generate while issues remain
    Strict,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("Unknown validation policy: {}", other)),
        }
    }
}

// ============================================================================
// Field checks
// ============================================================================

/// Expected format of a form field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Absolute URL
    Url,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM` or `HH:MM:SS`
    Time,
    Number,
    Integer,
    /// `Monday` .. `Sunday`
    Weekday,
}

/// Outcome of checking one raw field value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldCheck {
    Valid(String),
    Missing,
    Malformed { value: String, reason: String },
}

impl FieldCheck {
    /// Check a raw input against its kind. Blank input is `Missing`.
    pub fn check(raw: &str, kind: FieldKind) -> Self {
        let value = raw.trim();
        if value.is_empty() {
            return Self::Missing;
        }
        match Self::reason(value, kind) {
            None => Self::Valid(value.to_string()),
            Some(reason) => Self::Malformed {
                value: value.to_string(),
                reason,
            },
        }
    }

    fn reason(value: &str, kind: FieldKind) -> Option<String> {
        match kind {
            FieldKind::Text => None,
            FieldKind::Url => url::Url::parse(value)
                .err()
                .map(|e| format!("is not an absolute URL ({})", e)),
            FieldKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .err()
                .map(|_| "is not a date (YYYY-MM-DD)".to_string()),
            FieldKind::Time => {
                let parsed = NaiveTime::parse_from_str(value, "%H:%M")
                    .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"));
                parsed.err().map(|_| "is not a time (HH:MM)".to_string())
            }
            FieldKind::Number => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => None,
                _ => Some("is not a number".to_string()),
            },
            FieldKind::Integer => value
                .parse::<i64>()
                .err()
                .map(|_| "is not a whole number".to_string()),
            FieldKind::Weekday => {
                if catalog::is_weekday(value) {
                    None
                } else {
                    Some("is not a day of the week".to_string())
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

// ============================================================================
// Field paths
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Property(String),
    Index(usize),
}

/// Location of a field inside the form state, e.g. `event.tickets[2].url`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root(name: &str) -> Self {
        Self {
            segments: vec![PathSegment::Property(name.to_string())],
        }
    }

    pub fn property(&self, name: &str) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Property(name.to_string()));
        path
    }

    pub fn index(&self, idx: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Index(idx));
        path
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Property(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Property(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Malformed { value: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: FieldPath,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Missing => write!(f, "{}: required field is empty", self.path),
            IssueKind::Malformed { value, reason } => {
                write!(f, "{}: '{}' {}", self.path, value, reason)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issue recorded for a path, if any
    pub fn issue_at(&self, path: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.path.to_string() == path)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Collects issues while a form's rules run
#[derive(Debug, Default)]
pub struct FormValidator {
    issues: Vec<ValidationIssue>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present and well-formed
    pub fn require(&mut self, path: FieldPath, raw: &str, kind: FieldKind) {
        match FieldCheck::check(raw, kind) {
            FieldCheck::Valid(_) => {}
            FieldCheck::Missing => self.issues.push(ValidationIssue {
                path,
                kind: IssueKind::Missing,
            }),
            FieldCheck::Malformed { value, reason } => self.issues.push(ValidationIssue {
                path,
                kind: IssueKind::Malformed { value, reason },
            }),
        }
    }

    /// The field may be blank; if set it must be well-formed
    pub fn optional(&mut self, path: FieldPath, raw: &str, kind: FieldKind) {
        if let FieldCheck::Malformed { value, reason } = FieldCheck::check(raw, kind) {
            self.issues.push(ValidationIssue {
                path,
                kind: IssueKind::Malformed { value, reason },
            });
        }
    }

    /// Record a missing group, e.g. a section with no usable row
    pub fn missing(&mut self, path: FieldPath) {
        self.issues.push(ValidationIssue {
            path,
            kind: IssueKind::Missing,
        });
    }

    pub fn malformed(&mut self, path: FieldPath, value: &str, reason: &str) {
        self.issues.push(ValidationIssue {
            path,
            kind: IssueKind::Malformed {
                value: value.trim().to_string(),
                reason: reason.to_string(),
            },
        });
    }

    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            issues: self.issues,
        }
    }
}

/// Validate the form of one schema type
pub fn validate(state: &FormState, schema_type: SchemaType) -> ValidationReport {
    let mut v = FormValidator::new();
    match schema_type {
        SchemaType::Article => rules::article(&state.article, &mut v),
        SchemaType::Breadcrumb => rules::breadcrumb(&state.breadcrumb, &mut v),
        SchemaType::Event => rules::event(&state.event, &mut v),
        SchemaType::Faq => rules::faq(&state.faq, &mut v),
        SchemaType::HowTo => rules::howto(&state.howto, &mut v),
        SchemaType::JobPosting => rules::job_posting(&state.job_posting, &mut v),
        SchemaType::LocalBusiness => rules::local_business(&state.local_business, &mut v),
        SchemaType::Person => rules::person(&state.person, &mut v),
        SchemaType::Video => rules::video(&state.video, &mut v),
        SchemaType::Website => rules::website(&state.website, &mut v),
        SchemaType::Recipe => rules::recipe(&state.recipe, &mut v),
    }
    v.finish()
}
