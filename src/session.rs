//! The `triage>` command interpreter.
//!
//! A [`Session`] turns text lines into [`Command`]s and runs them against one
//! [`TriageQueue`]. User mistakes are reported on the output and never end
//! the session; only `quit` (or end of input) does.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use colored::Colorize;
use log::{info, warn};

use crate::command::Command;
use crate::config::Config;
use crate::queue::TriageQueue;

const WELCOME: &str = "Welcome to the hospital triage system.\n\
Enter your commands below to use the priority queueing system.\n\
Use command \"help\" for a list of commands";

const GOODBYE: &str = "Exiting...";

const HELP: &str = "\
add <priority-code> <patient-name>
            Adds the patient to the triage system.
            <priority-code> must be one of the 4 accepted priority codes:
                1. immediate 2. emergency 3. urgent 4. minimal
            <patient-name>: patient's full legal name (may contain spaces)
change <arrival-number> <priority-code>
            Changes the patient's priority code within the queue, but not
            their arrival number.
next        Announces the patient to be seen next. Takes into account the
            type of emergency and the patient's arrival order.
peek        Displays the patient that is next in line, but keeps in queue
list        Displays the list of all patients that are still waiting
            in the order they are held in the queue.
save <file> Saves the queue as the commands that rebuild it
load <file> Reads the file and executes the command on each line
help        Displays this menu
quit        Exits the program";

const LIST_HEADER: &str = "  Arrival #   Priority Code   Patient Name\n\
+-----------+---------------+--------------+";

/// Whether the caller should keep feeding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    queue: TriageQueue,
    out: W,
    config: Config,
    load_depth: usize,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, config: Config) -> Self {
        Session {
            queue: TriageQueue::new(),
            out,
            config,
            load_depth: 0,
        }
    }

    pub fn queue(&self) -> &TriageQueue {
        &self.queue
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&self) -> String {
        if self.config.color {
            self.config.prompt.bold().to_string()
        } else {
            self.config.prompt.clone()
        }
    }

    fn report(&mut self, message: &str) -> io::Result<()> {
        let line = format!("Error: {message}");
        if self.config.color {
            writeln!(self.out, "{}", line.red())
        } else {
            writeln!(self.out, "{line}")
        }
    }

    /// Runs one line of input.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(err) => {
                self.report(&err.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Add { priority, name } => {
                self.queue.admit(name.as_str(), priority);
                writeln!(self.out, " Patient {name} added to the priority system")?;
            }
            Command::Change { arrival, priority } => {
                let message = self.queue.change_priority(arrival, priority);
                writeln!(self.out, "{message}")?;
            }
            Command::Peek => {
                if self.queue.is_empty() {
                    writeln!(self.out, "Queue is empty.")?;
                } else {
                    writeln!(
                        self.out,
                        "Highest priority patient to be called next: {}",
                        self.queue.peek()
                    )?;
                }
            }
            Command::Next => {
                if self.queue.is_empty() {
                    writeln!(self.out, "Queue is empty.")?;
                } else {
                    let entry = self.queue.remove_top();
                    writeln!(self.out, "This patient will now be seen: {}", entry.name())?;
                }
            }
            Command::List => self.list()?,
            Command::Load(path) => self.load(&path)?,
            Command::Save(path) => self.save(&path)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.out, "# patients waiting: {}", self.queue.size())?;
        writeln!(self.out, "{LIST_HEADER}")?;
        for line in self.queue.listing() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Replays a file of commands. A `quit` inside the file ends the file,
    /// not the session.
    pub fn load(&mut self, path: &Path) -> io::Result<()> {
        if self.load_depth >= self.config.max_load_depth {
            warn!("refusing to load {}: nesting limit reached", path.display());
            return self.report(&format!(
                "load nested deeper than {} files.",
                self.config.max_load_depth
            ));
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!("could not open {}: {err}", path.display());
                return self.report("could not open file.");
            }
        };
        info!("loading commands from {}", path.display());

        self.load_depth += 1;
        let result = self.replay(BufReader::new(file));
        self.load_depth -= 1;
        result
    }

    /// Reads one line without its terminator. `Ok(None)` at end of input;
    /// `Ok(Some(None))` for a line that is not UTF-8.
    fn read_line(input: &mut impl BufRead) -> io::Result<Option<Option<String>>> {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8(buf).ok()))
    }

    fn replay(&mut self, mut reader: impl BufRead) -> io::Result<()> {
        loop {
            let line = match Self::read_line(&mut reader) {
                Ok(Some(Some(line))) => line,
                Ok(Some(None)) => {
                    self.report("line is not valid UTF-8.")?;
                    continue;
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("stopped reading script: {err}");
                    return self.report("could not read file.");
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.config.echo_script {
                let prompt = self.prompt();
                writeln!(self.out, "{prompt}{line}")?;
            }
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn save(&mut self, path: &Path) -> io::Result<()> {
        match fs::write(path, self.queue.export_commands()) {
            Ok(()) => {
                info!("saved {} patients to {}", self.queue.size(), path.display());
                writeln!(self.out, "File saved successfully.")
            }
            Err(err) => {
                warn!("could not save to {}: {err}", path.display());
                self.report("Unable to open the file.")
            }
        }
    }

    /// Interactive loop: banner, then one prompt per line until `quit` or end
    /// of input.
    pub fn run(&mut self, mut input: impl BufRead) -> io::Result<()> {
        writeln!(self.out, "{WELCOME}")?;
        loop {
            let prompt = self.prompt();
            write!(self.out, "\n{prompt}")?;
            self.out.flush()?;

            match Self::read_line(&mut input)? {
                None => {
                    writeln!(self.out)?;
                    break;
                }
                Some(None) => self.report("line is not valid UTF-8.")?,
                Some(Some(line)) => {
                    if self.execute(&line)? == Flow::Quit {
                        break;
                    }
                }
            }
        }
        writeln!(self.out, "{GOODBYE}")
    }
}
