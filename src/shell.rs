//! Interactive dashboard session.
//!
//! A line-oriented stand-in for the dashboard page: the header status,
//! the login toggle, the keyword slots, the analyze button and the
//! snapshot picker each map to a command. Errors are printed as notices
//! and the loop keeps going.

use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::report::{self, Format};
use crate::selector::Selection;
use crate::store::SnapshotRepository;
use crate::task::{self, AnalysisScheduler};

const HELP: &str = "\
commands:
  login | logout | toggle     simulate signing in and out
  status                      show login state and remaining searches
  analyze <kw>[, <kw>...]     analyze up to the configured number of keywords
  snapshots                   list archived snapshots
  show [current|<n>]          display a result as tables
  html [current|<n>]          display a result as html fragments
  json [current|<n>]          display a result as json
  help                        this text
  quit                        leave the session
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R> {
    dashboard: Dashboard<R>,
    scheduler: AnalysisScheduler,
    slots: usize,
    currency: String,
}

impl<R: SnapshotRepository> Shell<R> {
    pub fn new(dashboard: Dashboard<R>, config: &Config) -> Self {
        Shell {
            dashboard,
            scheduler: AnalysisScheduler::new(config.analysis_delay),
            slots: config.keyword_slots,
            currency: config.currency.clone(),
        }
    }

    pub fn dashboard(&self) -> &Dashboard<R> {
        &self.dashboard
    }

    pub async fn run<B: BufRead, W: Write>(&mut self, input: B, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.dashboard.session().status_line())?;
        writeln!(out, "type 'help' for commands")?;

        // blocking reads are fine here: each analysis is awaited to
        // completion before the next line is read, so no task is in flight
        // while the loop waits on input
        for line in input.lines() {
            let line = line?;
            if self.execute(&line, out).await? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "login" => {
                if !self.dashboard.session().is_logged_in() {
                    self.dashboard.session_mut().login();
                }
                writeln!(out, "{}", self.dashboard.session().status_line())?;
            }
            "logout" => {
                if self.dashboard.session().is_logged_in() {
                    self.dashboard.session_mut().logout();
                }
                writeln!(out, "{}", self.dashboard.session().status_line())?;
            }
            "toggle" => {
                self.dashboard.session_mut().toggle();
                writeln!(out, "{}", self.dashboard.session().status_line())?;
            }
            "status" => writeln!(out, "{}", self.dashboard.session().status_line())?,
            "analyze" => self.analyze(rest, out).await?,
            "snapshots" | "list" => {
                write!(out, "{}", report::render_entries(&self.dashboard.snapshots()))?;
            }
            "show" => self.show(rest, Format::Table, out)?,
            "html" => self.show(rest, Format::Html, out)?,
            "json" => self.show(rest, Format::Json, out)?,
            "help" => write!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(out, "unknown command '{other}', type 'help'")?,
        }

        Ok(Flow::Continue)
    }

    async fn analyze<W: Write>(&mut self, rest: &str, out: &mut W) -> io::Result<()> {
        let mut inputs: Vec<String> = rest.split(',').map(str::to_string).collect();
        if inputs.len() > self.slots {
            writeln!(
                out,
                "notice: only {} keyword slots, ignoring {} extra",
                self.slots,
                inputs.len() - self.slots
            )?;
            inputs.truncate(self.slots);
        }

        if let Err(e) = self.dashboard.check_analysis(&inputs) {
            return notice(out, &e);
        }

        writeln!(out, "analyzing...")?;
        match task::run_analysis(&mut self.dashboard, &mut self.scheduler, &inputs).await {
            Ok(snapshot) => {
                write!(out, "{}", report::render(&snapshot, Format::Table, &self.currency))?;
                writeln!(out, "\n{}", self.dashboard.session().status_line())
            }
            Err(e) => notice(out, &e),
        }
    }

    fn show<W: Write>(&self, rest: &str, format: Format, out: &mut W) -> io::Result<()> {
        let selection: Selection = match rest.parse() {
            Ok(selection) => selection,
            Err(e) => return writeln!(out, "notice: {e}"),
        };

        match self.dashboard.select(selection) {
            Ok(Some(snapshot)) => {
                writeln!(out, "{}", report::render(&snapshot, format, &self.currency))
            }
            Ok(None) => writeln!(out, "nothing analyzed yet in this session"),
            Err(e) => notice(out, &e),
        }
    }
}

fn notice<W: Write>(out: &mut W, error: &DashboardError) -> io::Result<()> {
    tracing::debug!("action blocked: {error:?}");
    writeln!(out, "notice: {error}")
}
