//! Interactive shunting session
//!
//! Reads one command per line, applies it to the yard and writes the
//! transcript. A departure is shown between two renders of the yard: as the
//! move left it, then with the train gone. The session ends on `quit`, at end of input, or once the last
//! locomotive has departed.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, instrument};

use crate::application::report;
use crate::config::Settings;
use crate::domain::{Command, Railyard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub prompt: String,
    /// Print locomotive and destination counts after each command
    pub show_counts: bool,
    /// Repeat each command after the prompt (for scripted input)
    pub echo: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: Settings::DEFAULT_PROMPT.to_string(),
            show_counts: true,
            echo: false,
        }
    }
}

impl From<&Settings> for SessionOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            prompt: settings.prompt.clone(),
            show_counts: settings.show_counts,
            echo: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read, `quit` included
    pub commands: usize,
    pub rejected: usize,
    pub departures: usize,
    pub quit: bool,
}

pub struct Session<'a> {
    yard: &'a mut Railyard,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(yard: &'a mut Railyard, options: SessionOptions) -> Self {
        Self { yard, options }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        writeln!(output, "{}", report::render_yard(&*self.yard))?;
        self.write_counts(output)?;

        while self.yard.should_continue() {
            writeln!(output, "{}", self.options.prompt)?;
            let Some(line) = lines.next().transpose()? else {
                debug!("end of input");
                break;
            };
            if self.options.echo {
                writeln!(output, "{}", line.trim())?;
            }
            summary.commands += 1;

            let command = match Command::parse(&line) {
                Ok(Command::Quit) => {
                    writeln!(output, "{}", report::QUIT_LINE)?;
                    summary.quit = true;
                    break;
                }
                Ok(Command::Move(command)) => command,
                Err(e) => {
                    summary.rejected += 1;
                    writeln!(output, "{}\n", report::error_line(&e))?;
                    writeln!(output, "{}", report::render_yard(&*self.yard))?;
                    self.write_counts(output)?;
                    continue;
                }
            };

            match self.yard.apply(&command) {
                Ok(outcome) => {
                    writeln!(output, "\n{}\n", report::move_line(&outcome))?;
                    if let Some(departure) = outcome.departure {
                        summary.departures += 1;
                        let after_move = self.yard.snapshot().with_train(&departure);
                        writeln!(output, "{}", report::render_snapshot(&after_move))?;
                        writeln!(output, "{}\n", report::departure_line(&departure))?;
                        if outcome.yard_exhausted {
                            writeln!(output, "{}\n", report::EXHAUSTED_LINE)?;
                        }
                    }
                    writeln!(output, "{}", report::render_yard(&*self.yard))?;
                }
                Err(e) => {
                    summary.rejected += 1;
                    writeln!(output, "{}\n", report::error_line(&e))?;
                    writeln!(output, "{}", report::render_yard(&*self.yard))?;
                }
            }
            self.write_counts(output)?;
        }

        info!(
            commands = summary.commands,
            rejected = summary.rejected,
            departures = summary.departures,
            "session finished"
        );
        Ok(summary)
    }

    fn write_counts<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if self.options.show_counts {
            writeln!(output, "{}", report::summary(&*self.yard))?;
        }
        writeln!(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Layout;

    fn yard(text: &str) -> Railyard {
        Railyard::from_layout(&Layout::parse(text).unwrap())
    }

    fn run(yard: &mut Railyard, input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = Session::new(yard, SessionOptions::default())
            .run(input.as_bytes(), &mut out)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_runs_until_last_locomotive_departs() {
        let mut y = yard("-11T-\n------\n");
        let (summary, out) = run(&mut y, "move 1 1 2\nmove 0 1 2\n");

        assert_eq!(summary.commands, 1);
        assert_eq!(summary.departures, 1);
        assert!(!summary.quit);
        assert!(out.contains("The locomotive on track 1 moved 1 cars to track 2."));
        assert!(out.contains("departs for destination 1."));
        assert!(out.contains("2 : ---1T-\n*** ALERT***"));
        assert!(out.contains(report::EXHAUSTED_LINE));
        assert!(out.ends_with("Locomotive count: 0\nDestination count: 1\n\n"));
    }

    #[test]
    fn test_session_quit() {
        let mut y = yard("-AT-\n----\n");
        let (summary, out) = run(&mut y, "quit\nmove 0 1 2\n");
        assert!(summary.quit);
        assert_eq!(summary.commands, 1);
        assert!(out.ends_with("Quitting!\n"));
        assert_eq!(y.track(1).unwrap().len(), 2);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let mut y = yard("-AT-\n----\n");
        let (summary, out) = run(&mut y, "jump\nmove 5 1 2\n");
        assert_eq!(summary.commands, 2);
        assert_eq!(summary.rejected, 2);
        assert!(out.contains("ERROR: The only valid command formats are"));
        assert!(out.contains("ERROR: Cannot move 5 cars from track 1 because it doesn't have that many cars."));
    }

    #[test]
    fn test_session_without_counts() {
        let mut y = yard("-AT-\n");
        let mut out = Vec::new();
        let options = SessionOptions {
            show_counts: false,
            ..SessionOptions::default()
        };
        Session::new(&mut y, options).run(&b""[..], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Locomotive count"));
        assert!(out.starts_with("1 : -AT-\n"));
    }
}
