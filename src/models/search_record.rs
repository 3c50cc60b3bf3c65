use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Employee,
    Project,
    Report,
}

impl RecordKind {
    /// Lowercase label, also the text matched by the search engine.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Employee => "employee",
            RecordKind::Project => "project",
            RecordKind::Report => "report",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RecordKind::Employee => "👤",
            RecordKind::Project => "📁",
            RecordKind::Report => "📊",
        }
    }

    /// Parse a label handed over by the presentation layer.
    /// Anything outside the three known kinds is a contract violation.
    pub fn from_label(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Ok(RecordKind::Employee),
            "project" => Ok(RecordKind::Project),
            "report" => Ok(RecordKind::Report),
            other => Err(AppError::ContractViolation(format!(
                "unmapped search result kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record identifier: employees and projects use numbers, reports use keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u32),
    Key(String),
}

impl RecordId {
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<u32>() {
            Ok(n) => RecordId::Num(n),
            Err(_) => RecordId::Key(s.trim().to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Key(k) => f.write_str(k),
        }
    }
}

/// One indexable entity exposed to the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    kind: RecordKind,
    name: String,
    department: Option<String>,
    id: RecordId,
}

/// Raw on-disk shape, validated through `SearchRecord::new`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: RecordKind,
    name: String,
    #[serde(default)]
    department: Option<String>,
    id: RecordId,
}

impl SearchRecord {
    /// Build a record. The name must not be blank; a blank department is
    /// stored as absent.
    pub fn new(
        kind: RecordKind,
        name: impl Into<String>,
        department: Option<String>,
        id: RecordId,
    ) -> AppResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(format!(
                "{} record {} has an empty name",
                kind, id
            )));
        }

        let department = department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            kind,
            name,
            department,
            id,
        })
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Parse and validate a JSON array of records.
    pub fn list_from_json(json: &str) -> AppResult<Vec<Self>> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        raw.into_iter()
            .map(|r| Self::new(r.kind, r.name, r.department, r.id))
            .collect()
    }
}
