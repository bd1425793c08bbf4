// registrar/src/app.rs

use anyhow::Result;
use std::{
    io::{BufRead, Write},
    path::Path,
};
use tracing::{info, warn};

use crate::console::{Console, MenuChoice};
use crate::roster::Roster;

/// Loads the roster, then runs the menu loop until Exit. Every error
/// is reported on the console and control returns to the menu; nothing
/// here terminates the program early. The roster is only persisted
/// when the user picks Save, so unsaved changes are dropped on Exit.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, data_path: &Path) -> Result<()> {
    let mut roster = match Roster::load(data_path) {
        Ok(roster) => roster,
        Err(err) => {
            warn!(path = %data_path.display(), "load failed: {err:#}");
            console.report_error(
                "Error: There was a problem with reading the file.",
                Some(&err),
            )?;
            Roster::default()
        }
    };
    info!(count = roster.len(), path = %data_path.display(), "roster ready");

    loop {
        console.show_menu()?;
        let Some(choice) = console.read_choice()? else {
            continue;
        };
        match choice {
            MenuChoice::Register => {
                if let Some(student) = console.read_student()? {
                    info!(
                        first = student.first_name(),
                        last = student.last_name(),
                        course = student.course_name(),
                        "registered"
                    );
                    roster.register(student);
                }
            }
            MenuChoice::Display => console.show_roster(&roster)?,
            MenuChoice::Save => match roster.save(data_path) {
                Ok(()) => console.say("Data successfully saved to file.")?,
                Err(err) => {
                    warn!(path = %data_path.display(), "save failed: {err:#}");
                    console.report_error(
                        "Error: There was a problem with writing to the file.\n\
                         Please check that the file is not open by another program.",
                        Some(&err),
                    )?;
                }
            },
            MenuChoice::Exit => break,
        }
    }

    console.say("Program Ended")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};

    fn run_script(script: &str, data_path: &Path) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(&mut console, data_path).unwrap();
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn register_display_save_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        let out = run_script("1\nAnn\nLee\nAlgorithms\n2\n3\n4\n", &path);
        assert!(out.contains("You have registered Ann Lee for Algorithms."));
        assert!(out.contains("Student Ann Lee is enrolled in Algorithms"));
        assert!(out.contains("Data successfully saved to file."));
        assert!(out.contains("Program Ended"));

        let reloaded = Roster::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.students()[0].first_name(), "Ann");
        assert_eq!(reloaded.students()[0].last_name(), "Lee");
        assert_eq!(reloaded.students()[0].course_name(), "Algorithms");
    }

    #[test]
    fn invalid_choice_redisplays_menu_without_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        let out = run_script("9\n3\n4\n", &path);
        assert!(out.contains("Please, choose only 1, 2, 3, or 4"));
        // Menu shown once at start, again after the rejected choice,
        // again after Save.
        assert_eq!(out.matches("---- Course Registration Program ----").count(), 3);
        assert!(Roster::load(&path).unwrap().is_empty());
    }

    #[test]
    fn rejected_registration_leaves_roster_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        let out = run_script("1\nJohn3\n3\n4\n", &path);
        assert!(out.contains("The first name should not contain numbers."));
        assert!(Roster::load(&path).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported_and_loop_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");
        fs::write(&path, "{ not json").unwrap();

        let out = run_script("2\n4\n", &path);
        assert!(out.contains("Error: There was a problem with reading the file."));
        assert!(out.contains("-- Technical Error Message --"));
        assert!(!out.contains("is enrolled in"));
    }

    #[test]
    fn exit_without_save_discards_registrations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        run_script("1\nAnn\nLee\nAlgorithms\n4\n", &path);
        assert!(!path.exists());
    }

    #[test]
    fn closed_input_ends_the_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Enrollments.json");

        let out = run_script("", &path);
        assert!(out.contains("Program Ended"));
    }
}
