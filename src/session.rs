use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::error::{Error, Result, ValidationError};
use crate::puzzle::{Puzzle, Solution, Solver};

const PROMPT: &str = r#"Enter Spelling Bee letters and press Enter to "Bee up your life""#;
const NO_WORDS: &str = "No words found for the letters provided";
const CLEAR_HINT: &str = "Press Enter to clear, or type new letters";

/// Where the session is in its submit/clear cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    AwaitingInput,
    ShowingResults,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end for the solver
pub struct Session<'d> {
    solver: Solver<'d>,
    output_format: OutputFormat,
    state: ViewState,
}

impl<'d> Session<'d> {
    pub fn new(solver: Solver<'d>, output_format: OutputFormat) -> Self {
        Self {
            solver,
            output_format,
            state: ViewState::AwaitingInput,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Read lines until `quit` or end of input
    pub fn run<R, W>(&mut self, mut input: R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.write_prompt(output)?;

        loop {
            if self.output_format == OutputFormat::Text {
                write!(output, "> ")?;
            }
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_line(&line, output)? == Flow::Quit {
                break;
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let command = line.trim();

        match command.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            "clear" => {
                self.clear(output)?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        match self.state {
            ViewState::AwaitingInput => {
                if !command.is_empty() {
                    self.submit(command, output)?;
                }
            }
            ViewState::ShowingResults => {
                self.clear(output)?;
                if !command.is_empty() {
                    self.submit(command, output)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn clear<W: Write>(&mut self, output: &mut W) -> Result<()> {
        self.state = ViewState::AwaitingInput;
        self.write_prompt(output)
    }

    fn submit<W: Write>(&mut self, command: &str, output: &mut W) -> Result<()> {
        let puzzle = match Puzzle::parse(command) {
            Ok(puzzle) => puzzle,
            Err(Error::Validation(e)) => {
                warn!("Rejected puzzle input '{}': {}", command, e);
                return self.write_rejection(&e, output);
            }
            Err(e) => return Err(e),
        };

        let solution = self.solver.solve(&puzzle);
        info!(
            "Solved {} with required letter '{}': {} words",
            puzzle,
            puzzle.required(),
            solution.count()
        );

        self.write_solution(&puzzle, &solution, output)?;
        self.state = ViewState::ShowingResults;
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        if self.output_format == OutputFormat::Text {
            writeln!(output, "{PROMPT}")?;
        }
        Ok(())
    }

    fn write_rejection<W: Write>(&self, error: &ValidationError, output: &mut W) -> Result<()> {
        match self.output_format {
            OutputFormat::Text => write!(output, "{}", render_diagnostic(error))?,
            OutputFormat::Json => {
                let body = serde_json::json!({ "error": error.to_string() });
                writeln!(output, "{}", serde_json::to_string(&body)?)?;
            }
        }
        Ok(())
    }

    fn write_solution<W: Write>(
        &self,
        puzzle: &Puzzle,
        solution: &Solution<'_>,
        output: &mut W,
    ) -> Result<()> {
        match self.output_format {
            OutputFormat::Text => {
                writeln!(output, "{puzzle}")?;
                if solution.is_empty() {
                    writeln!(output, "{NO_WORDS}")?;
                } else {
                    writeln!(output, "Found {} words:", solution.count())?;
                    writeln!(output)?;
                    for word in solution.words() {
                        writeln!(output, "{word}")?;
                    }
                }
                writeln!(output)?;
                writeln!(output, "{CLEAR_HINT}")?;
            }
            OutputFormat::Json => {
                writeln!(output, "{}", serde_json::to_string(solution)?)?;
            }
        }
        Ok(())
    }
}

/// Full miette rendering, source snippet and labels included, without colors
fn render_diagnostic(error: &ValidationError) -> String {
    let mut rendered = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    if handler.render_report(&mut rendered, error).is_err() {
        return format!("{error}\n");
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Dictionary;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["bee", "bead", "dab", "cab", ""])
    }

    fn run_session(dictionary: &Dictionary, format: OutputFormat, input: &str) -> String {
        let mut session = Session::new(Solver::new(dictionary), format);
        let mut output = Vec::new();
        session.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_state_transitions() {
        let dictionary = dictionary();
        let mut session = Session::new(Solver::new(&dictionary), OutputFormat::Text);
        let mut output = Vec::new();

        assert_eq!(session.state(), ViewState::AwaitingInput);

        // Blank line while waiting does nothing
        session.handle_line("\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::AwaitingInput);

        // Invalid input keeps waiting
        session.handle_line("abc\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::AwaitingInput);

        session.handle_line("xyBeadz\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::ShowingResults);

        // Enter clears
        session.handle_line("\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::AwaitingInput);

        // New letters while showing results clear and solve again
        session.handle_line("xyBeadz\n", &mut output).unwrap();
        session.handle_line("xyzbead\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::ShowingResults);

        session.handle_line("clear\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::AwaitingInput);

        // Bad letters while showing results clear the results and keep waiting
        session.handle_line("xyBeadz\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::ShowingResults);
        let before = output.len();
        session.handle_line("xy1eadz\n", &mut output).unwrap();
        assert_eq!(session.state(), ViewState::AwaitingInput);

        let rendered = String::from_utf8_lossy(&output[before..]).into_owned();
        assert!(rendered.starts_with(PROMPT));
        assert!(rendered.contains("'1' is not a letter"));
        assert!(!rendered.contains("Found"));

        assert_eq!(session.handle_line("quit\n", &mut output).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_text_output() {
        let dictionary = dictionary();
        // Required letter is 'b'
        let output = run_session(&dictionary, OutputFormat::Text, "ea xbdyz\n");

        assert!(output.starts_with(PROMPT));
        assert!(output.contains("E A X [B] D Y Z"));
        assert!(output.contains("Found 3 words:\n\nbee\nbead\ndab\n"));
        assert!(!output.contains("cab"));
        assert!(output.contains(CLEAR_HINT));
    }

    #[test]
    fn test_no_words_found() {
        let dictionary = dictionary();
        let output = run_session(&dictionary, OutputFormat::Text, "abcqfgh\nq\n");

        assert!(output.contains(NO_WORDS));
    }

    #[test]
    fn test_rejected_input_is_reported() {
        let dictionary = dictionary();
        let output = run_session(&dictionary, OutputFormat::Text, "ab1defg\nabc\n");

        assert!(output.contains("'1' is not a letter"));
        // Source snippet with the offending character labelled
        assert!(output.contains("ab1defg"));
        assert!(output.contains("── not a letter"));
        assert!(output.contains("only the letters a-z are allowed"));
        assert!(output.contains("Expected 7 letters, found 3"));
        assert!(!output.contains("Found"));
    }

    #[test]
    fn test_json_output() {
        let dictionary = dictionary();
        let output = run_session(&dictionary, OutputFormat::Json, "eaxbdyz\n\nab\n");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"count":3,"words":["bee","bead","dab"]}"#,
                r#"{"error":"Expected 7 letters, found 2"}"#,
            ]
        );
    }
}
