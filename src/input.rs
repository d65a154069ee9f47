//! Parser for the textual route-query format.
//!
//! A document carries three sections: a vertex-to-square table between the
//! last `Square ID` header and the `# Edges` header, an edge list between
//! the last `Distance` header and the `# Source` header, and `S,<id>` /
//! `D,<id>` marker lines naming the endpoints. Blank lines are skipped.

use std::collections::HashMap;

/// Parse failures for the route-query format
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Missing section delimited by {start:?} and {end:?}")]
    MissingSection {
        start: &'static str,
        end: &'static str,
    },

    #[error("Malformed row {line:?}: expected {expected}")]
    MalformedRow {
        line: String,
        expected: &'static str,
    },

    #[error("Invalid number in {line:?}")]
    InvalidNumber { line: String },

    #[error("Missing {0} marker")]
    MissingMarker(&'static str),
}

/// A fully parsed route query
#[derive(Debug, Clone)]
pub struct RouteDocument {
    /// Edge triples (src, dest, raw distance), in document order
    pub edges: Vec<(usize, usize, i64)>,

    /// Vertex id -> square id
    pub squares: HashMap<usize, usize>,

    /// Source vertex
    pub source: usize,

    /// Destination vertex
    pub destination: usize,
}

/// Parses a complete route-query document
pub fn parse_document(data: &str) -> Result<RouteDocument, ParseError> {
    let squares = parse_squares(data)?;
    let edges = parse_edges(data)?;
    let source = parse_marker(data, "S")?;
    let destination = parse_marker(data, "D")?;

    Ok(RouteDocument {
        edges,
        squares,
        source,
        destination,
    })
}

/// Text between the last occurrence of `start` and the next `end`
fn section<'a>(
    data: &'a str,
    start: &'static str,
    end: &'static str,
) -> Result<&'a str, ParseError> {
    let (_, tail) = data
        .rsplit_once(start)
        .ok_or(ParseError::MissingSection { start, end })?;
    let (body, _) = tail
        .split_once(end)
        .ok_or(ParseError::MissingSection { start, end })?;
    Ok(body)
}

fn parse_squares(data: &str) -> Result<HashMap<usize, usize>, ParseError> {
    let body = section(data, "Square ID", "# Edges")?;

    let mut squares = HashMap::new();
    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (vertex, square) = line.split_once(',').ok_or_else(|| ParseError::MalformedRow {
            line: line.to_string(),
            expected: "vertex_id,square_id",
        })?;
        squares.insert(parse_number(vertex, line)?, parse_number(square, line)?);
    }

    Ok(squares)
}

fn parse_edges(data: &str) -> Result<Vec<(usize, usize, i64)>, ParseError> {
    let body = section(data, "Distance", "# Source")?;

    let mut edges = Vec::new();
    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let mut fields = line.split(',');
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(src), Some(dest), Some(distance), None) => {
                let distance = distance
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber {
                        line: line.to_string(),
                    })?;
                edges.push((parse_number(src, line)?, parse_number(dest, line)?, distance));
            }
            _ => {
                return Err(ParseError::MalformedRow {
                    line: line.to_string(),
                    expected: "from,to,distance",
                })
            }
        }
    }

    Ok(edges)
}

/// First line of the form `<marker>,<vertex id>` anywhere in the document
fn parse_marker(data: &str, marker: &'static str) -> Result<usize, ParseError> {
    for line in data.lines().map(str::trim) {
        if let Some(value) = line
            .strip_prefix(marker)
            .and_then(|rest| rest.strip_prefix(','))
        {
            return parse_number(value, line);
        }
    }

    Err(ParseError::MissingMarker(marker))
}

fn parse_number(field: &str, line: &str) -> Result<usize, ParseError> {
    field.trim().parse().map_err(|_| ParseError::InvalidNumber {
        line: line.to_string(),
    })
}
