//! Interactive menu session.
//!
//! Prompts for the context-switch cost and quantum (unless preset), then
//! repeatedly offers the three algorithms until the user exits or input
//! ends. Invalid entries are reported and re-prompted.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::models::{Process, SchedulerConfig};
use crate::report::Report;
use crate::scheduler::{Algorithm, ScheduleMetrics};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Run an algorithm.
    Run(Algorithm),
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Parses a menu line (`1`..`4`).
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(Self::Run(Algorithm::Fcfs)),
            2 => Some(Self::Run(Algorithm::Srt)),
            3 => Some(Self::Run(Algorithm::RoundRobin)),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nChoose the scheduling algorithm or exit:
1. FCFS (First-Come, First-Served)
2. SRT (Shortest Remaining Time)
3. Round Robin
4. Exit
> ";

/// Interactive session over arbitrary input and output streams.
pub struct Session<R, W> {
    processes: Vec<Process>,
    context_switch: Option<i64>,
    quantum: Option<i64>,
    timeline: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that will prompt for parameters.
    pub fn new(processes: Vec<Process>, input: R, output: W) -> Self {
        Self {
            processes,
            context_switch: None,
            quantum: None,
            timeline: false,
            input,
            output,
        }
    }

    /// Uses preset parameters instead of prompting.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.context_switch = Some(config.context_switch);
        self.quantum = Some(config.quantum);
        self
    }

    /// Presets the context-switch cost; only the quantum is prompted for.
    pub fn with_context_switch(mut self, context_switch: i64) -> Self {
        self.context_switch = Some(context_switch);
        self
    }

    /// Presets the quantum; only the context-switch cost is prompted for.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Includes the slice timeline in each report.
    pub fn with_timeline(mut self, timeline: bool) -> Self {
        self.timeline = timeline;
        self
    }

    /// Runs the session to completion.
    pub fn run(&mut self) -> io::Result<()> {
        let Some(config) = self.prompt_config()? else {
            return Ok(());
        };

        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Run(algorithm)) => self.run_algorithm(algorithm, &config)?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
                None => {
                    debug!(input = line.trim(), "invalid menu choice");
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }
    }

    fn run_algorithm(&mut self, algorithm: Algorithm, config: &SchedulerConfig) -> io::Result<()> {
        let result = algorithm.run(config, &self.processes).and_then(|schedule| {
            let metrics = ScheduleMetrics::calculate(&schedule, config)?;
            Ok((schedule, metrics))
        });
        match result {
            Ok((schedule, metrics)) => {
                let report = Report::new(algorithm, config, &schedule, &metrics)
                    .with_timeline(self.timeline);
                write!(self.output, "{report}")
            }
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// Prompts for whichever parameters were not preset. `None` on end of
    /// input.
    fn prompt_config(&mut self) -> io::Result<Option<SchedulerConfig>> {
        let context_switch = match self.context_switch {
            Some(value) => value,
            None => match self.prompt_number("\nEnter Context Switch Time (ms): ", 0)? {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        let quantum = match self.quantum {
            Some(value) => value,
            None => match self.prompt_number("Enter Time Quantum for Round Robin (ms): ", 1)? {
                Some(value) => value,
                None => return Ok(None),
            },
        };
        Ok(Some(SchedulerConfig::new(context_switch, quantum)))
    }

    /// Prompts until an integer `>= min` is entered. `None` on end of input.
    fn prompt_number(&mut self, prompt: &str, min: i64) -> io::Result<Option<i64>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) if value >= min => return Ok(Some(value)),
                _ => writeln!(
                    self.output,
                    "Invalid value '{}'. Enter an integer >= {min}.",
                    line.trim()
                )?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
