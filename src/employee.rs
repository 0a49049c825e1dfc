//! Employee records read from a `name | department | years` text file, and the report built
//! from them.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::error::RecordError;

const FIELD_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub years_of_experience: i32,
}

impl Employee {
    /// Parses one `name | department | years` line. Whitespace around fields is ignored, fields
    /// past the third are ignored too.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields = line.split(FIELD_SEPARATOR).map(str::trim).collect::<Vec<_>>();

        let [name, department, years, ..] = fields.as_slice() else {
            return Err(RecordError::TooFewFields {
                line: line.to_owned(),
            });
        };

        let years_of_experience = years.parse().map_err(|_| RecordError::InvalidYears {
            line: line.to_owned(),
            value: (*years).to_owned(),
        })?;

        Ok(Self {
            name: (*name).to_owned(),
            department: (*department).to_owned(),
            years_of_experience,
        })
    }
}

impl FromStr for Employee {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Records loaded from a file, minus the lines that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub skipped: usize,
}

/// Parses every line of `text`. Malformed lines are logged and skipped.
pub fn parse_employees(text: &str) -> Roster {
    let mut roster = Roster::default();

    for (line_no, line) in text.lines().enumerate() {
        match Employee::parse(line) {
            Ok(employee) => roster.employees.push(employee),
            Err(err) => {
                warn!(line = line_no + 1, %err, "skipping employee record");
                roster.skipped += 1;
            }
        }
    }

    roster
}

pub fn load_employees(path: impl AsRef<Path>) -> std::io::Result<Roster> {
    let text = fs::read_to_string(path)?;
    Ok(parse_employees(&text))
}

/// Filter, map and fold over a set of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeReport {
    /// Names containing `"an"`, case-sensitive.
    pub filtered_names: Vec<String>,
    pub names: Vec<String>,
    pub total_experience: i64,
}

impl EmployeeReport {
    pub fn new(employees: &[Employee]) -> Self {
        let filtered_names = employees
            .iter()
            .filter(|employee| employee.name.contains("an"))
            .map(|employee| employee.name.clone())
            .collect();

        let names = employees
            .iter()
            .map(|employee| employee.name.clone())
            .collect();

        let total_experience = employees.iter().fold(0i64, |sum, employee| {
            sum + i64::from(employee.years_of_experience)
        });

        Self {
            filtered_names,
            names,
            total_experience,
        }
    }
}

impl fmt::Display for EmployeeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Filtered Names:")?;
        for name in &self.filtered_names {
            writeln!(f, "{name}")?;
        }

        writeln!(f)?;
        writeln!(f, "List of Names:")?;
        for name in &self.names {
            writeln!(f, "{name}")?;
        }

        writeln!(f)?;
        write!(f, "Total Years of Experience: {}", self.total_experience)
    }
}
