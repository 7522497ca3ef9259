use std::io::{BufRead, Write};

use crate::config::RunMode;
use crate::error::{AppError, ParseError};
use crate::model::{Dataset, ScoreMatrix};
use crate::report::rule;

pub const MAX_ATTEMPTS: usize = 3;
pub const MAX_COUNT: usize = 1000;

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    max_attempts: usize,
    buf: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: MAX_ATTEMPTS,
            buf: String::new(),
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn print(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn choose_mode(&mut self) -> Result<RunMode, AppError> {
        writeln!(self.writer, "\n Welcome to Student Marks Analysis System")?;
        writeln!(self.writer, "\nChoose mode:")?;
        writeln!(self.writer, "1. Demo Mode (pre-loaded data)")?;
        writeln!(self.writer, "2. Interactive Mode (enter your own data)")?;

        let answer = match self.read_answer("\nEnter choice (1 or 2): ", "mode") {
            Ok(answer) => answer,
            Err(AppError::Parse(ParseError::UnexpectedEof { .. })) => String::new(),
            Err(err) => return Err(err),
        };
        match parse_mode_choice(&answer) {
            Some(mode) => Ok(mode),
            None => {
                tracing::warn!(choice = %answer, "invalid mode choice, running demo mode");
                writeln!(self.writer, "Invalid choice! Running demo mode...")?;
                Ok(RunMode::Demo)
            }
        }
    }

    pub fn read_dataset(&mut self) -> Result<Dataset, AppError> {
        writeln!(self.writer, "\n🎓 INTERACTIVE MODE")?;
        writeln!(self.writer, "{}", rule('-'))?;

        let n_students = self.ask("How many students? ", "student count", |s| {
            parse_count("student count", s)
        })?;
        let n_subjects = self.ask("How many subjects? ", "subject count", |s| {
            parse_count("subject count", s)
        })?;

        writeln!(self.writer, "\nEnter subject names:")?;
        let mut subjects = Vec::with_capacity(n_subjects);
        for j in 0..n_subjects {
            let field = format!("subject {}", j + 1);
            let prompt = format!("  Subject {}: ", j + 1);
            let name = self.ask(&prompt, &field, |s| parse_name(&field, s, &[]))?;
            subjects.push(name);
        }

        writeln!(self.writer, "\nEnter student data:")?;
        let mut students: Vec<String> = Vec::with_capacity(n_students);
        let mut values = Vec::with_capacity(n_students * n_subjects);
        for i in 0..n_students {
            let field = format!("student {}", i + 1);
            let prompt = format!("\nStudent {} name: ", i + 1);
            let name = self.ask(&prompt, &field, |s| parse_name(&field, s, &students))?;

            writeln!(self.writer, "Enter marks for {}:", name)?;
            for subject in &subjects {
                let field = format!("{name}/{subject}");
                let prompt = format!("  {subject}: ");
                let score = self.ask(&prompt, &field, |s| parse_score(&field, s))?;
                values.push(score);
            }
            students.push(name);
        }

        let matrix = ScoreMatrix::from_flat(values, n_students, n_subjects)?;
        tracing::info!(
            students = n_students,
            subjects = n_subjects,
            "interactive data entry complete"
        );
        Ok(Dataset::new(matrix, students, subjects)?)
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        field: &str,
        validate: impl Fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, AppError> {
        let mut attempt = 1usize;
        loop {
            let answer = self.read_answer(prompt, field)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= self.max_attempts => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(attempt, max_attempts = self.max_attempts, "{err}");
                    writeln!(self.writer, "  Invalid input: {err}. Please try again.")?;
                    attempt += 1;
                }
            }
        }
    }

    fn read_answer(&mut self, prompt: &str, field: &str) -> Result<String, AppError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(ParseError::UnexpectedEof {
                field: field.to_string(),
            }
            .into());
        }
        Ok(self.buf.trim().to_string())
    }
}

pub fn parse_mode_choice(answer: &str) -> Option<RunMode> {
    match answer.trim() {
        "1" => Some(RunMode::Demo),
        "2" => Some(RunMode::Interactive),
        _ => None,
    }
}

pub fn parse_count(field: &str, raw: &str) -> Result<usize, ParseError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_COUNT).contains(&n) => Ok(n),
        _ => Err(ParseError::InvalidCount {
            field: field.to_string(),
            value: raw.to_string(),
            max: MAX_COUNT,
        }),
    }
}

pub fn parse_score(field: &str, raw: &str) -> Result<f64, ParseError> {
    let value = raw.trim().parse::<f64>().map_err(|_| ParseError::NotANumber {
        field: field.to_string(),
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::InvalidScore {
            field: field.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(value)
}

pub fn parse_name(field: &str, raw: &str, taken: &[String]) -> Result<String, ParseError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ParseError::InvalidName {
            field: field.to_string(),
            reason: "name is empty".to_string(),
        });
    }
    if taken.iter().any(|t| t == name) {
        return Err(ParseError::InvalidName {
            field: field.to_string(),
            reason: format!("{name:?} is already used"),
        });
    }
    Ok(name.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/interactive.rs"]
mod tests;
