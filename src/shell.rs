//! Menu-driven interactive front end over a [`Gradebook`].
//!
//! The shell reads from any [`BufRead`] and writes to any [`Write`], so it
//! runs the same against a terminal or an in-memory buffer.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::error::GradebookError;
use crate::gradebook::Gradebook;
use crate::output::{render_report, render_top_performers};

/// Word that ends grade entry for a student.
pub const DONE: &str = "done";

const MENU: &str = "Enter the number on the left to perform the action on the right:\n\
                    1. Add a new student\n\
                    2. Add grades for a student\n\
                    3. Show report (all students)\n\
                    4. Find top performers\n\
                    5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddStudent,
    AddGrades,
    Report,
    TopPerformers,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddStudent),
            2 => Ok(MenuChoice::AddGrades),
            3 => Ok(MenuChoice::Report),
            4 => Ok(MenuChoice::TopPerformers),
            5 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Whether the menu loop should keep going.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    book: Gradebook,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_gradebook(Gradebook::new(), input, output)
    }

    pub fn with_gradebook(book: Gradebook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    pub fn gradebook(&self) -> &Gradebook {
        &self.book
    }

    pub fn into_gradebook(self) -> Gradebook {
        self.book
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Hello! This is a student grade analyzer.")?;
        writeln!(self.output, "{MENU}")?;

        loop {
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match line.parse::<u32>() {
                Ok(n) => MenuChoice::try_from(n),
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number")?;
                    continue;
                }
            };

            let flow = match choice {
                Ok(MenuChoice::AddStudent) => self.add_student()?,
                Ok(MenuChoice::AddGrades) => self.add_grades()?,
                Ok(MenuChoice::Report) => self.show_report()?,
                Ok(MenuChoice::TopPerformers) => self.show_top_performers()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Quit
                }
                Err(n) => {
                    debug!(choice = n, "Unknown menu choice");
                    writeln!(self.output, "Please choose a valid option")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        info!(students = self.book.len(), "Shell finished");
        Ok(())
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn add_student(&mut self) -> Result<Flow> {
        writeln!(self.output, "Please enter the student's name")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        match self.book.add_student(&name) {
            Ok(_) => writeln!(self.output, "Student added successfully!")?,
            Err(GradebookError::EmptyName) => {
                writeln!(self.output, "Please enter anything as a name!")?
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Flow::Continue)
    }

    fn add_grades(&mut self) -> Result<Flow> {
        if self.book.is_empty() {
            writeln!(self.output, "There are no students on the list")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Please enter the student's name")?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        if self.book.find(&name).is_none() {
            writeln!(
                self.output,
                "A student with such a name isn't found on the list"
            )?;
            return Ok(Flow::Continue);
        }

        loop {
            writeln!(
                self.output,
                "Enter a grade (an integer from 0 to 100) or \"{DONE}\" to finish"
            )?;
            let Some(entry) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            if entry.eq_ignore_ascii_case(DONE) {
                break;
            }

            let recorded = entry
                .parse::<i64>()
                .ok()
                .map(|grade| self.book.record_grade(&name, grade));
            match recorded {
                Some(Ok(())) => {}
                Some(Err(GradebookError::InvalidGrade(_))) | None => {
                    writeln!(self.output, "Enter an integer from 0 to 100")?
                }
                Some(Err(e)) => writeln!(self.output, "{e}")?,
            }
        }

        if let Some(student) = self.book.find(&name) {
            writeln!(
                self.output,
                "Finished successfully, {}'s grades are: {:?}",
                student.name(),
                student.grades()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn show_report(&mut self) -> Result<Flow> {
        match self.book.class_report() {
            Ok(report) => write!(self.output, "{}", render_report(&report))?,
            Err(e) => writeln!(self.output, "{}", describe(&e))?,
        }
        Ok(Flow::Continue)
    }

    fn show_top_performers(&mut self) -> Result<Flow> {
        match self.book.top_performers() {
            Ok(top) => write!(self.output, "{}", render_top_performers(&top))?,
            Err(e) => writeln!(self.output, "{}", describe(&e))?,
        }
        Ok(Flow::Continue)
    }
}

/// User-facing wording for the "nothing to report" errors.
fn describe(err: &GradebookError) -> String {
    match err {
        GradebookError::EmptyGradebook => "There are no students on the list".to_string(),
        GradebookError::NoGradedStudents => "There are no grades on the list".to_string(),
        other => other.to_string(),
    }
}
