//! The interactive menu loop.
//!
//! Menu, prompts and input complaints are plain text. Command results are
//! written as text or as one JSON object per line, depending on
//! [`OutputFormat`]. Results share the prompt stream unless a separate one is
//! attached with [`Session::with_prompts`], which JSON output needs to keep
//! every result line parseable.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use undigraph::{GraphError, GraphSnapshot, SearchOutcome, UndirectedGraph, STANDARD_EDGES};

use crate::input::{Input, Tokens};

const MENU: &str = "\nMenu:
1. Add an edge
2. Remove an edge
3. Print the graph
4. Perform DFS (Depth-First Search)
5. Perform BFS (Breadth-First Search)
6. Add a default set of edges (for testing)
7. Exit
";

const EDGE_PROMPT: &str = "Enter the vertices (src dest): ";
const START_PROMPT: &str = "Enter the starting vertex: ";
const TARGET_PROMPT: &str = "Enter the destination vertex: ";

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console messages.
    Text,
    /// One JSON object per result line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddEdge,
    RemoveEdge,
    Print,
    Dfs,
    Bfs,
    StandardEdges,
    Exit,
}

impl MenuAction {
    fn from_choice(choice: u32) -> Option<Self> {
        Some(match choice {
            1 => Self::AddEdge,
            2 => Self::RemoveEdge,
            3 => Self::Print,
            4 => Self::Dfs,
            5 => Self::Bfs,
            6 => Self::StandardEdges,
            7 => Self::Exit,
            _ => return None,
        })
    }
}

/// A command result, rendered according to the session's format.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Report {
    EdgeAdded { a: usize, b: usize },
    EdgeRemoved { a: usize, b: usize, removed: bool },
    Graph(GraphSnapshot),
    Search(SearchOutcome),
    StandardEdges { edges: usize },
    Error { message: String },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeAdded { a, b } => write!(f, "Edge {a}-{b} added."),
            Self::EdgeRemoved { a, b, removed: true } => write!(f, "Edge {a}-{b} removed."),
            Self::EdgeRemoved { a, b, removed: false } => {
                write!(f, "No edge between {a} and {b}.")
            }
            Self::Graph(snapshot) => write!(f, "{snapshot}"),
            Self::Search(outcome) => write!(f, "{outcome}"),
            Self::StandardEdges { .. } => f.write_str("Default set of edges added."),
            Self::Error { message } => write!(f, "Error: {message}"),
        }
    }
}

impl From<GraphError> for Report {
    fn from(err: GraphError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}

/// One interactive session over a graph.
pub struct Session<R, W, P = io::Sink> {
    tokens: Tokens<R>,
    out: W,
    prompts: Option<P>,
    graph: UndirectedGraph,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, graph: UndirectedGraph, format: OutputFormat) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            prompts: None,
            graph,
            format,
        }
    }
}

impl<R: BufRead, W: Write, P: Write> Session<R, W, P> {
    /// Writes menu, prompts and input complaints to `prompts`, leaving the
    /// result stream with results only.
    pub fn with_prompts<Q: Write>(self, prompts: Q) -> Session<R, W, Q> {
        Session {
            tokens: self.tokens,
            out: self.out,
            prompts: Some(prompts),
            graph: self.graph,
            format: self.format,
        }
    }

    #[cfg(test)]
    pub fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    #[cfg(test)]
    pub fn into_streams(self) -> (W, Option<P>) {
        (self.out, self.prompts)
    }

    fn chatter(&mut self) -> &mut dyn Write {
        match self.prompts.as_mut() {
            Some(prompts) => prompts as &mut dyn Write,
            None => &mut self.out,
        }
    }

    /// Runs the menu until the user exits or input is exhausted.
    ///
    /// Only I/O failures end the session with an error. Malformed input and
    /// rejected graph operations are reported and the menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.chatter().write_all(MENU.as_bytes())?;
            self.prompt("Choose an action: ")?;

            let choice = match self.tokens.read::<u32>()? {
                Input::Value(choice) => choice,
                Input::Invalid => {
                    self.reject_input()?;
                    continue;
                }
                Input::Eof => break,
            };
            let Some(action) = MenuAction::from_choice(choice) else {
                writeln!(self.chatter(), "Invalid choice!")?;
                continue;
            };
            tracing::debug!(?action, "menu action");

            let result = match action {
                MenuAction::AddEdge | MenuAction::RemoveEdge => {
                    let (a, b) = match self.read_pair(EDGE_PROMPT, None)? {
                        Input::Value(pair) => pair,
                        Input::Invalid => continue,
                        Input::Eof => break,
                    };
                    if action == MenuAction::AddEdge {
                        self.graph
                            .add_edge(a, b)
                            .map(|()| Report::EdgeAdded { a, b })
                    } else {
                        self.graph
                            .remove_edge(a, b)
                            .map(|removed| Report::EdgeRemoved { a, b, removed })
                    }
                }
                MenuAction::Dfs | MenuAction::Bfs => {
                    let (start, target) = match self.read_pair(START_PROMPT, Some(TARGET_PROMPT))? {
                        Input::Value(pair) => pair,
                        Input::Invalid => continue,
                        Input::Eof => break,
                    };
                    let outcome = if action == MenuAction::Dfs {
                        self.graph.dfs(start, target)
                    } else {
                        self.graph.bfs(start, target)
                    };
                    outcome.map(Report::Search)
                }
                MenuAction::Print => Ok(Report::Graph(self.graph.snapshot())),
                MenuAction::StandardEdges => self
                    .graph
                    .add_standard_edges()
                    .map(|()| Report::StandardEdges {
                        edges: STANDARD_EDGES.len(),
                    }),
                MenuAction::Exit => {
                    writeln!(self.chatter(), "Program terminated.")?;
                    return Ok(());
                }
            };

            let report = result.unwrap_or_else(|err| {
                tracing::warn!(%err, ?action, "graph operation rejected");
                Report::from(err)
            });
            self.emit(&report)?;
        }

        tracing::info!("input closed, leaving session");
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        let prompts = self.chatter();
        prompts.write_all(text.as_bytes())?;
        prompts.flush()?;
        Ok(())
    }

    fn reject_input(&mut self) -> Result<()> {
        writeln!(self.chatter(), "Invalid input! Please try again.")?;
        Ok(())
    }

    /// Reads two vertex ids, showing `second` before the second one if given.
    fn read_pair(&mut self, first: &str, second: Option<&str>) -> Result<Input<(usize, usize)>> {
        self.prompt(first)?;
        let a = match self.tokens.read::<usize>()? {
            Input::Value(a) => a,
            Input::Invalid => {
                self.reject_input()?;
                return Ok(Input::Invalid);
            }
            Input::Eof => return Ok(Input::Eof),
        };
        if let Some(second) = second {
            self.prompt(second)?;
        }
        match self.tokens.read::<usize>()? {
            Input::Value(b) => Ok(Input::Value((a, b))),
            Input::Invalid => {
                self.reject_input()?;
                Ok(Input::Invalid)
            }
            Input::Eof => Ok(Input::Eof),
        }
    }

    fn emit(&mut self, report: &Report) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = report.to_string();
                if text.ends_with('\n') {
                    self.out.write_all(text.as_bytes())?;
                } else {
                    writeln!(self.out, "{text}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
