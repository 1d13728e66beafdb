use std::io::{BufRead, Write};

use crate::error::InitError;
use crate::schema::schema_model::FlatField;
use crate::suggest::suggestion::Suggestion;

/// Line-oriented prompt over any reader/writer pair (stdin/stdout in the binary).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show the message and suggestion, then read one line.
    ///
    /// An empty line takes the suggestion when there is one. End of input is an
    /// error, never an empty answer.
    pub fn prompt(
        &mut self,
        identifier: &str,
        message: &str,
        suggestion: Option<&Suggestion>,
    ) -> Result<String, InitError> {
        let read_error = |source| InitError::InputRead {
            identifier: identifier.to_string(),
            source,
        };

        writeln!(self.output, "{}", message).map_err(read_error)?;
        if let Some(s) = suggestion {
            writeln!(self.output, "\u{1f4a1} press enter to use \"{}\" ({})", s.value, s.label)
                .map_err(read_error)?;
        }
        self.output.flush().map_err(read_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(read_error)?;
        if read == 0 {
            return Err(InitError::InputClosed {
                identifier: identifier.to_string(),
            });
        }

        let input = strip_line_ending(&line);
        match suggestion {
            Some(s) if input.is_empty() => Ok(s.value.clone()),
            _ => Ok(input.to_string()),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Message shown for a field: its description when it has one.
pub fn field_message(field: &FlatField<'_>) -> String {
    match &field.field.description {
        Some(description) => format!(
            "Please type value for {}: {}",
            field.identifier, description
        ),
        None => format!("Please enter {}", field.identifier),
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
