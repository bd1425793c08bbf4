// registrar/src/model.rs

use std::fmt;

use crate::error::ValidationError;

/// A person with a validated, non-empty first and last name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut person = Self { first_name: String::new(), last_name: String::new() };
        person.set_first_name(first_name)?;
        person.set_last_name(last_name)?;
        Ok(person)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyField { field: "First name" });
        }
        self.first_name = value.to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyField { field: "Last name" });
        }
        self.last_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [First Name: {}, Last Name: {}]",
            self.first_name, self.last_name
        )
    }
}

/// A person enrolled in one course. Composition instead of inheritance;
/// the course name carries the same non-empty invariant as the names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let person = Person::new(first_name, last_name)?;
        let mut student = Self { person, course_name: String::new() };
        student.set_course_name(course_name)?;
        Ok(student)
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.person.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyField { field: "Course name" });
        }
        self.course_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student [First Name: {}, Last Name: {}, Course Name: {}]",
            self.person.first_name(),
            self.person.last_name(),
            self.course_name
        )
    }
}
