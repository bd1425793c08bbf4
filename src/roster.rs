// registrar/src/roster.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::{fs, path::Path};
use tracing::debug;

use crate::error::ValidationError;
use crate::model::Student;

/// One enrollment as it appears in the JSON file.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct EnrollmentRecord {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "CourseName")]
    course_name: String,
}

impl From<&Student> for EnrollmentRecord {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name().to_string(),
            last_name: student.last_name().to_string(),
            course_name: student.course_name().to_string(),
        }
    }
}

impl TryFrom<EnrollmentRecord> for Student {
    type Error = ValidationError;

    fn try_from(record: EnrollmentRecord) -> Result<Self, Self::Error> {
        Student::new(record.first_name, record.last_name, record.course_name)
    }
}

/// Ordered roster of students. Insertion order is significant and
/// duplicate names/courses are allowed.
#[derive(Default, Clone, Debug)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Reads the roster from a JSON array file. A missing file is an
    /// empty roster; a file that exists but cannot be read, parsed, or
    /// validated is an error for the caller to report.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no enrollment file, starting empty");
            return Ok(Self::default());
        }
        let data =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let records: Vec<EnrollmentRecord> =
            serde_json::from_str(&data).context("parse enrollments json")?;
        let mut students = Vec::with_capacity(records.len());
        for record in records {
            students.push(Student::try_from(record).context("invalid enrollment record")?);
        }
        debug!(count = students.len(), "loaded roster");
        Ok(Self { students })
    }

    /// Serializes the roster back to the same JSON shape, overwriting
    /// the file. The file uses 4-space indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let records: Vec<EnrollmentRecord> =
            self.students.iter().map(EnrollmentRecord::from).collect();
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .context("serialize enrollments json")?;
        fs::write(path, buf).with_context(|| format!("write {}", path.display()))?;
        debug!(count = self.students.len(), path = %path.display(), "saved roster");
        Ok(())
    }

    pub fn register(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
