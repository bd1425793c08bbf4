// registrar/src/console.rs

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::{InvalidChoice, ValidationError};
use crate::model::Student;
use crate::roster::Roster;

pub const MENU: &str = "---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Display,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, InvalidChoice> {
        match input.trim() {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::Display),
            "3" => Ok(Self::Save),
            "4" => Ok(Self::Exit),
            _ => Err(InvalidChoice),
        }
    }
}

fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

/// Line-based console. Generic over reader and writer so tests can
/// drive it with in-memory buffers; the binary wires stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompts and reads one trimmed line. `None` means the input is
    /// closed (end of file).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Reads a menu choice. Out-of-range input is reported here and
    /// yields `None` so the caller redisplays the menu; a closed input
    /// behaves like choosing Exit.
    pub fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        let Some(line) = self.read_line("Enter your menu choice number: ")? else {
            return Ok(Some(MenuChoice::Exit));
        };
        match MenuChoice::parse(&line) {
            Ok(choice) => Ok(Some(choice)),
            Err(err) => {
                // No technical detail for a plain out-of-range choice.
                self.report_error(&err.to_string(), None)?;
                Ok(None)
            }
        }
    }

    /// Prompts for one student. Validation failures are reported and
    /// yield `None`, leaving the roster for the caller untouched.
    pub fn read_student(&mut self) -> Result<Option<Student>> {
        match self.prompt_student()? {
            Ok(student) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "You have registered {} {} for {}.",
                    student.first_name(),
                    student.last_name(),
                    student.course_name()
                )?;
                Ok(Some(student))
            }
            Err(err) => {
                let detail = anyhow::Error::new(err);
                self.report_error(
                    "One of the values was the incorrect type of data!",
                    Some(&detail),
                )?;
                Ok(None)
            }
        }
    }

    fn prompt_student(&mut self) -> Result<Result<Student, ValidationError>> {
        let first = self
            .read_line("Enter the student's first name: ")?
            .unwrap_or_default();
        if !is_alphabetic(&first) {
            return Ok(Err(ValidationError::NotAlphabetic { field: "first name" }));
        }
        let last = self
            .read_line("Enter the student's last name: ")?
            .unwrap_or_default();
        if !is_alphabetic(&last) {
            return Ok(Err(ValidationError::NotAlphabetic { field: "last name" }));
        }
        // Course names may contain digits and spaces; only the
        // non-empty invariant applies.
        let course = self
            .read_line("Please enter the name of the course: ")?
            .unwrap_or_default();
        Ok(Student::new(first, last, course))
    }

    pub fn show_roster(&mut self, roster: &Roster) -> Result<()> {
        writeln!(self.output, "{}", "-".repeat(50))?;
        for student in roster.students() {
            writeln!(
                self.output,
                "Student {} {} is enrolled in {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )?;
        }
        writeln!(self.output, "{}", "-".repeat(50))?;
        Ok(())
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Uniform two-part error output: a user-facing description, then
    /// the technical detail when one is worth showing.
    pub fn report_error(&mut self, message: &str, detail: Option<&anyhow::Error>) -> Result<()> {
        writeln!(self.output, "{message}")?;
        writeln!(self.output)?;
        if let Some(err) = detail {
            writeln!(self.output, "-- Technical Error Message --")?;
            writeln!(self.output, "{err:#}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn choice_parser_accepts_exactly_one_through_four() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::Register);
        assert_eq!(MenuChoice::parse(" 4 ").unwrap(), MenuChoice::Exit);
        assert!(MenuChoice::parse("5").is_err());
        assert!(MenuChoice::parse("one").is_err());
        assert!(MenuChoice::parse("").is_err());
    }

    #[test]
    fn out_of_range_choice_is_reported_and_yields_none() {
        let mut c = console("7\n");
        assert_eq!(c.read_choice().unwrap(), None);
        let out = output(c);
        assert!(out.contains("Please, choose only 1, 2, 3, or 4"));
        assert!(!out.contains("-- Technical Error Message --"));
    }

    #[test]
    fn closed_input_reads_as_exit() {
        let mut c = console("");
        assert_eq!(c.read_choice().unwrap(), Some(MenuChoice::Exit));
    }

    #[test]
    fn read_student_accepts_valid_entry_and_confirms() {
        let mut c = console("Ann\nLee\nAlgorithms\n");
        let student = c.read_student().unwrap().unwrap();
        assert_eq!(student.first_name(), "Ann");
        assert_eq!(student.course_name(), "Algorithms");
        let out = output(c);
        assert!(out.contains("You have registered Ann Lee for Algorithms."));
    }

    #[test]
    fn first_name_with_digits_is_rejected() {
        let mut c = console("John3\n");
        assert!(c.read_student().unwrap().is_none());
        let out = output(c);
        assert!(out.contains("One of the values was the incorrect type of data!"));
        assert!(out.contains("The first name should not contain numbers."));
    }

    #[test]
    fn course_name_may_contain_digits() {
        let mut c = console("Ann\nLee\nPython 101\n");
        let student = c.read_student().unwrap().unwrap();
        assert_eq!(student.course_name(), "Python 101");
    }

    #[test]
    fn roster_display_brackets_records_with_rules() {
        let mut roster = Roster::default();
        roster.register(Student::new("Ann", "Lee", "Algorithms").unwrap());
        let mut c = console("");
        c.show_roster(&roster).unwrap();
        let out = output(c);
        assert!(out.contains(&"-".repeat(50)));
        assert!(out.contains("Student Ann Lee is enrolled in Algorithms"));
    }
}
