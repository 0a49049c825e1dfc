//! Interactive loop driving the library.
//!
//! Generic over its input and output so that a whole session can be scripted.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::Config;
use crate::employee::{load_employees, EmployeeReport};
use crate::error::{Result, SelectionError};
use crate::registry::{parse_ordinal, search_registry, sort_registry};
use crate::sequence::generate_with;
use crate::sorts;
use crate::timing::{time_search, time_sort};

const ACTIONS: [(Action, &str); 4] = [
    (Action::SortOne, "A specific sorting algorithm"),
    (Action::SortAll, "All sorting algorithms"),
    (Action::Search, "Linear, binary and library search"),
    (Action::Employees, "Employee report"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SortOne,
    SortAll,
    Search,
    Employees,
}

/// Which element of the generated sequence the search benchmarks look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCase {
    /// First element
    Best,
    /// Middle element
    Average,
    /// Last element
    Worst,
}

impl SearchCase {
    pub const ALL: [SearchCase; 3] = [SearchCase::Best, SearchCase::Average, SearchCase::Worst];

    pub fn label(self) -> &'static str {
        match self {
            SearchCase::Best => "Best Case",
            SearchCase::Average => "Average Case",
            SearchCase::Worst => "Worst Case",
        }
    }

    /// Position of the target in a sequence of `len > 0` elements.
    pub fn target_index(self, len: usize) -> usize {
        match self {
            SearchCase::Best => 0,
            SearchCase::Average => len / 2,
            SearchCase::Worst => len - 1,
        }
    }
}

enum Flow {
    Continue,
    /// Input ended.
    Quit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    config: Config,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            input,
            output,
            config,
            rng,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs iterations until the user declines to continue or the input ends.
    ///
    /// Invalid choices and arguments are reported and only abort the current iteration. Every
    /// other error ends the loop and is returned.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Sorting Application!")?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_recoverable() => {
                    info!(%err, "iteration aborted");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }

            if !self.confirm_continue()? {
                break;
            }
        }

        writeln!(self.output, "Exiting the application. Goodbye!")?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        writeln!(self.output)?;
        writeln!(self.output, "Do you want to run:")?;
        for (i, (_, label)) in ACTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {label}", i + 1)?;
        }

        let Some(answer) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Quit);
        };
        let (action, _) = ACTIONS[parse_ordinal(&answer, ACTIONS.len())? - 1];
        info!(?action, "menu selection");

        match action {
            Action::SortOne => self.sort_one(),
            Action::SortAll => self.sort_all(),
            Action::Search => self.search(),
            Action::Employees => self.employees(),
        }
    }

    fn sort_one(&mut self) -> Result<Flow> {
        let Some(mut seq) = self.read_sequence()? else {
            return Ok(Flow::Quit);
        };

        let registry = sort_registry();
        writeln!(self.output)?;
        writeln!(self.output, "Select a sorting algorithm:")?;
        for (i, name) in registry.names().enumerate() {
            writeln!(self.output, "{}. {name}", i + 1)?;
        }

        let Some(answer) = self.prompt(&format!("Enter your choice (1-{}): ", registry.len()))?
        else {
            return Ok(Flow::Quit);
        };
        let (name, strategy) = registry.choice(&answer)?;

        writeln!(self.output)?;
        writeln!(self.output, "Running {name}...")?;
        let timing = time_sort(strategy, &mut seq)?;
        writeln!(self.output, "{timing}")?;

        Ok(Flow::Continue)
    }

    fn sort_all(&mut self) -> Result<Flow> {
        let Some(seq) = self.read_sequence()? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.output)?;
        writeln!(self.output, "Running all sorting algorithms...")?;

        // Every strategy gets its own copy of the same input.
        for (_, strategy) in sort_registry().iter() {
            let mut copy = seq.clone();
            let timing = time_sort(strategy, &mut copy)?;
            writeln!(self.output, "{timing}")?;
        }

        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let seq = generate_with(&mut self.rng, self.config.search_size)?;

        writeln!(self.output)?;
        writeln!(self.output, "Choose a case to test:")?;
        for (i, case) in SearchCase::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, case.label())?;
        }

        let Some(answer) = self.prompt("Enter your choice (1/2/3): ")? else {
            return Ok(Flow::Quit);
        };
        let case = SearchCase::ALL[parse_ordinal(&answer, SearchCase::ALL.len())? - 1];

        let target_index = case.target_index(seq.len());
        let target = seq[target_index];
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{} target (index {target_index}): {target}",
            case.label()
        )?;

        let mut sorted = seq.clone();
        sorts::quick::sort(&mut sorted);

        for (name, strategy) in search_registry().iter() {
            let input = if strategy.requires_sorted() {
                &sorted
            } else {
                &seq
            };

            writeln!(self.output)?;
            writeln!(self.output, "Running {name}...")?;
            let timing = time_search(strategy, input, target)?;
            writeln!(self.output, "{timing}")?;
        }

        Ok(Flow::Continue)
    }

    fn employees(&mut self) -> Result<Flow> {
        let path = &self.config.employees;

        let roster = match load_employees(path) {
            Ok(roster) => roster,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                writeln!(self.output, "File not found: {}", path.display())?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err.into()),
        };

        if roster.skipped > 0 {
            writeln!(
                self.output,
                "Skipped {} malformed record(s).",
                roster.skipped
            )?;
        }
        writeln!(self.output, "{}", EmployeeReport::new(&roster.employees))?;

        Ok(Flow::Continue)
    }

    /// Reads a size, generates a sequence of it and echoes it if short enough.
    fn read_sequence(&mut self) -> Result<Option<Vec<i32>>> {
        let Some(answer) = self.prompt("Enter the size of the array (greater than 0): ")? else {
            return Ok(None);
        };
        let size = answer
            .parse::<usize>()
            .map_err(|_| SelectionError::InvalidSize(answer.clone()))?;

        let seq = generate_with(&mut self.rng, size)?;

        if seq.len() <= self.config.print_limit {
            let joined = seq
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output)?;
            writeln!(self.output, "Original Array: {joined}")?;
        }

        Ok(Some(seq))
    }

    fn confirm_continue(&mut self) -> Result<bool> {
        writeln!(self.output)?;
        let Some(answer) = self.prompt("Do you want to perform another operation? (yes/no): ")?
        else {
            return Ok(false);
        };

        let answer = answer.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    /// Prints `text` and reads one trimmed line, `None` once the input has ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }
}
