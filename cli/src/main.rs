//! Command-line driver for the matching solver
//!
//! Reads a graph description from standard input as whitespace-separated
//! tokens: the node count `n`, the edge count `m`, then `m` endpoint pairs in
//! `[0, n)`. Writes one line per input edge, in input order, naming its
//! endpoints and whether it belongs to the maximum matching, followed by a
//! size summary. `--json` switches the output to the JSON report form; any
//! other argument is ignored.

use std::io::{self, Read, Write};

use log::debug;
use thiserror::Error;

use blossom_core::{find_maximum_matching, Graph, GraphError, MatchingReport};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("expected {what}, found end of input")]
    MissingToken { what: &'static str },

    #[error("invalid {what} {token:?}: {source}")]
    InvalidToken {
        what: &'static str,
        token: String,
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

fn next_value<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, CliError> {
    let token = tokens.next().ok_or(CliError::MissingToken { what })?;
    token.parse().map_err(|source| CliError::InvalidToken {
        what,
        token: token.to_owned(),
        source,
    })
}

fn parse_graph(input: &str) -> Result<Graph, CliError> {
    let mut tokens = input.split_whitespace();
    let n = next_value(&mut tokens, "node count")?;
    let m = next_value(&mut tokens, "edge count")?;

    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let u = next_value(&mut tokens, "edge endpoint")?;
        let v = next_value(&mut tokens, "edge endpoint")?;
        edges.push((u, v));
    }
    Ok(Graph::new(n, &edges)?)
}

fn render_text(report: &MatchingReport) -> String {
    let mut out = String::new();
    for edge in &report.edges {
        let state = if edge.matched { "matched" } else { "unmatched" };
        out.push_str(&format!("{} {} {}\n", edge.source, edge.target, state));
    }
    out.push_str(&format!("matching size {}\n", report.size));
    out
}

fn run() -> Result<(), CliError> {
    let as_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let mut graph = parse_graph(&input)?;

    let result = find_maximum_matching(&mut graph);
    debug!(
        "matching size {} after {} search invocations",
        result.size, result.statistics.invocations
    );

    let report = graph.report();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if as_json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        out.write_all(render_text(&report).as_bytes())?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_input() {
        let graph = parse_graph("3 2\n0 1\n1 2\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.endpoints(1), (1, 2));
    }

    #[test]
    fn test_parse_accepts_arbitrary_whitespace() {
        let graph = parse_graph("  2\t1 0   1 ").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_rejects_truncated_input() {
        assert!(matches!(
            parse_graph("3 2 0 1"),
            Err(CliError::MissingToken {
                what: "edge endpoint"
            })
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric_token() {
        assert!(matches!(
            parse_graph("x"),
            Err(CliError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_endpoint() {
        assert!(matches!(
            parse_graph("2 1 0 5"),
            Err(CliError::Graph(GraphError::EndpointOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_text_report_format() {
        let mut graph = parse_graph("2 1 0 1").unwrap();
        find_maximum_matching(&mut graph);
        let text = render_text(&graph.report());
        assert_eq!(text, "0 1 matched\nmatching size 1\n");
    }

    #[test]
    fn test_end_to_end_pendant_cycle() {
        let mut graph = parse_graph("6 6  0 1  1 2  2 3  3 4  4 0  4 5").unwrap();
        let result = find_maximum_matching(&mut graph);
        assert_eq!(result.size, 3);
        let text = render_text(&graph.report());
        assert!(text.contains("4 5 matched"));
        assert!(text.ends_with("matching size 3\n"));
    }
}
