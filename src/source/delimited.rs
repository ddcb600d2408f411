use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::source::GraphSource;
use crate::{Graph, Kilometers, RoadCategory, Segment, SourceError, Speed};

#[derive(Debug, Clone, Copy)]
pub struct CsvConfig {
    /// Field delimiter, there is no escaping of the delimiter within fields.
    pub delimiter: u8,
    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            comment: Some(b'#'),
        }
    }
}

/// Loads graphs from delimited text files, one road segment per line:
/// `source;destination;distance_km;speed_kmh;road[;category]`.
///
/// The graph identified by `id` is read from `<root>/<id>.csv` unless a file has been registered
/// for it with [`CsvSource::with_graph`].
#[derive(Debug, Clone)]
pub struct CsvSource {
    root: PathBuf,
    files: HashMap<String, PathBuf>,
    config: CsvConfig,
}

impl CsvSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: HashMap::new(),
            config: CsvConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the graph identified by `graph_id` from the given file.
    pub fn with_graph(mut self, graph_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.files.insert(graph_id.into(), path.into());
        self
    }

    fn graph_path(&self, graph_id: &str) -> Option<PathBuf> {
        if let Some(path) = self.files.get(graph_id) {
            return Some(path.clone());
        }

        // the identifier must name a file directly inside the root directory
        let is_file_name = !graph_id.is_empty()
            && graph_id != "."
            && graph_id != ".."
            && !graph_id.contains(['/', '\\', '\0']);

        is_file_name.then(|| self.root.join(format!("{graph_id}.csv")))
    }
}

impl GraphSource for CsvSource {
    fn load(&self, graph_id: &str) -> Result<Graph, SourceError> {
        let not_found = || SourceError::GraphNotFound(graph_id.to_owned());
        let path = self.graph_path(graph_id).ok_or_else(not_found)?;

        debug!("Loading graph {graph_id:?} from {}", path.display());

        let file = File::open(&path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => not_found(),
            kind => SourceError::Io {
                graph: graph_id.to_owned(),
                kind,
            },
        })?;

        read_graph(graph_id, file, &self.config)
    }
}

/// Reads a whole graph from delimited text.
/// Any invalid line fails the whole graph.
pub fn read_graph(
    graph_id: &str,
    reader: impl Read,
    config: &CsvConfig,
) -> Result<Graph, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .comment(config.comment)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();

    for record in reader.records() {
        let record = record.map_err(|error| record_error(graph_id, &error))?;
        let line = record.position().map_or(0, |p| p.line());
        let segment = parse_segment(&record).map_err(|reason| SourceError::Parse { line, reason })?;
        graph.extend([segment]);
    }

    debug!(
        "Loaded graph {graph_id:?}: {} nodes, {} roads",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Reads a graph file, the file name is used as graph identifier in errors.
pub fn read_graph_file(path: impl AsRef<Path>, config: &CsvConfig) -> Result<Graph, SourceError> {
    let path = path.as_ref();
    let graph_id = path.display().to_string();
    let file = File::open(path).map_err(|error| SourceError::Io {
        graph: graph_id.clone(),
        kind: error.kind(),
    })?;
    read_graph(&graph_id, file, config)
}

fn record_error(graph_id: &str, error: &csv::Error) -> SourceError {
    match error.kind() {
        csv::ErrorKind::Io(error) => SourceError::Io {
            graph: graph_id.to_owned(),
            kind: error.kind(),
        },
        _ => SourceError::Parse {
            line: error.position().map_or(0, |p| p.line()),
            reason: error.to_string(),
        },
    }
}

fn parse_segment(record: &StringRecord) -> Result<Segment, String> {
    if !matches!(record.len(), 5 | 6) {
        return Err(format!("expected 5 or 6 fields, found {}", record.len()));
    }

    let source = parse_name("source", &record[0])?;
    let destination = parse_name("destination", &record[1])?;

    let distance = record[2]
        .parse::<u32>()
        .map(Kilometers::new)
        .map_err(|error| format!("invalid distance {:?}: {error}", &record[2]))?;

    let speed = record[3]
        .parse::<f64>()
        .map_err(|error| format!("invalid speed {:?}: {error}", &record[3]))
        .and_then(|kmh| Speed::from_kmh(kmh).map_err(|error| error.to_string()))?;

    let road = parse_name("road", &record[4])?;

    let category = match record.get(5) {
        Some(category) => category
            .parse::<RoadCategory>()
            .map_err(|_| format!("unknown road category {category:?}"))?,
        None => road_category(&road),
    };

    Ok(Segment {
        source: source.into(),
        destination: destination.into(),
        distance,
        speed,
        road,
        category,
    })
}

fn parse_name(field: &str, value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("empty {field} name"))
    } else {
        Ok(value.to_owned())
    }
}

/// Gets the category of a road from its number when the data doesn't state it:
/// highways are numbered `A<digits>` (`A9`, `A75`).
pub fn road_category(road: &str) -> RoadCategory {
    let is_highway = road
        .strip_prefix('A')
        .is_some_and(|number| !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()));

    if is_highway {
        RoadCategory::Highway
    } else {
        RoadCategory::Road
    }
}
