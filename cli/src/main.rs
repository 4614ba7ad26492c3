use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hyperpath::graph::{self, io::read_digraph};
use hyperpath::{Digraph, Outcast, SapEngine, SapResult, WordNet, WordNetConfig};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hyperpath")]
#[command(about = "Shortest ancestral path queries over hypernym graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer `v w` vertex pairs read from stdin against a digraph file
    Sap {
        /// Plain-text digraph: V, E, then E `from to` pairs
        digraph: PathBuf,

        /// Print one JSON object per query
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Report whether a digraph file is acyclic and rooted
    Validate {
        /// Plain-text digraph: V, E, then E `from to` pairs
        digraph: PathBuf,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Distance and common ancestor of two words
    Distance {
        #[command(flatten)]
        lexicon: LexiconArgs,

        noun_a: String,
        noun_b: String,
    },
    /// Print the outcast of each word-list file
    Outcast {
        #[command(flatten)]
        lexicon: LexiconArgs,

        /// Files of whitespace separated words
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct LexiconArgs {
    /// JSON lexicon configuration; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Synset source (`id,synonyms,gloss`)
    #[arg(long)]
    synsets: Option<PathBuf>,

    /// Hypernym source (`id,h1,h2,...`)
    #[arg(long)]
    hypernyms: Option<PathBuf>,

    /// Refuse lexicons whose hypernym graph is not a rooted DAG
    #[arg(long, default_value_t = false)]
    require_rooted: bool,
}

impl LexiconArgs {
    fn load(self) -> Result<WordNet> {
        let mut config = match &self.config {
            Some(path) => WordNetConfig::from_path(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => WordNetConfig::default(),
        };
        if self.synsets.is_some() {
            config.synsets = self.synsets;
        }
        if self.hypernyms.is_some() {
            config.hypernyms = self.hypernyms;
        }
        config.require_rooted |= self.require_rooted;

        WordNet::from_config(&config).context("Failed to load lexicon")
    }
}

#[derive(Serialize)]
struct QueryLine {
    v: usize,
    w: usize,
    #[serde(flatten)]
    result: SapResult,
}

#[derive(Serialize)]
struct ValidationReport {
    vertices: usize,
    edges: usize,
    acyclic: bool,
    rooted: bool,
    root: Option<usize>,
}

static INIT: Once = Once::new();

/// Installs the log subscriber; `HYPERPATH_LOG` selects levels, e.g.
/// `HYPERPATH_LOG=hyperpath=debug`.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("HYPERPATH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("hyperpath=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(filter)
            .init();
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sap { digraph, json } => {
            let graph = load_digraph(&digraph)?;
            let stdin = io::stdin();
            run_sap(&graph, stdin.lock(), &mut io::stdout().lock(), json)?;
        }
        Commands::Validate { digraph, json } => {
            let graph = load_digraph(&digraph)?;
            print_validation(&graph, json)?;
        }
        Commands::Distance {
            lexicon,
            noun_a,
            noun_b,
        } => {
            let wordnet = lexicon.load()?;
            let distance = wordnet.distance(&noun_a, &noun_b)?;
            let ancestor = wordnet.sap(&noun_a, &noun_b)?;
            match (distance, ancestor) {
                (Some(d), Some(a)) => println!("distance = {d}, ancestor = {a}"),
                _ => println!("distance = -1, ancestor = none"),
            }
        }
        Commands::Outcast { lexicon, files } => {
            let wordnet = lexicon.load()?;
            let outcast = Outcast::new(&wordnet);
            for file in files {
                let text = fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read {}", file.display()))?;
                let nouns: Vec<&str> = text.split_whitespace().collect();
                let word = outcast
                    .outcast(&nouns)
                    .with_context(|| format!("No outcast for {}", file.display()))?;
                println!("{}: {}", file.display(), word);
            }
        }
    }

    Ok(())
}

fn load_digraph(path: &Path) -> Result<Digraph> {
    debug!(path = %path.display(), "loading digraph");
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_digraph(BufReader::new(file))
        .with_context(|| format!("Failed to parse digraph {}", path.display()))
}

fn run_sap(graph: &Digraph, input: impl BufRead, out: &mut impl Write, json: bool) -> Result<()> {
    let sap = SapEngine::new(graph);

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let [v, w] = fields.as_slice() else {
            bail!("line {}: expected two vertex ids, found {:?}", idx + 1, line);
        };

        let v = parse_vertex(v, graph).with_context(|| format!("line {}", idx + 1))?;
        let w = parse_vertex(w, graph).with_context(|| format!("line {}", idx + 1))?;
        let result = sap.query(v, w)?;

        if json {
            writeln!(out, "{}", serde_json::to_string(&QueryLine { v, w, result })?)?;
        } else {
            writeln!(
                out,
                "length = {}, ancestor = {}",
                result.length_or_sentinel(),
                result.ancestor_or_sentinel()
            )?;
        }
    }

    Ok(())
}

fn parse_vertex(field: &str, graph: &Digraph) -> Result<usize> {
    let raw: i64 = field
        .parse()
        .with_context(|| format!("expected a vertex id, found {field:?}"))?;
    Ok(graph::checked_vertex(raw, graph.vertex_count())?)
}

fn print_validation(graph: &Digraph, json: bool) -> Result<()> {
    let root = graph::find_root(graph);
    let report = ValidationReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        acyclic: graph::is_acyclic(graph),
        rooted: root.is_some(),
        root,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("vertices = {}, edges = {}", report.vertices, report.edges);
        println!("acyclic = {}", report.acyclic);
        match report.root {
            Some(root) => println!("rooted = true (root = {root})"),
            None => println!("rooted = false"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Digraph {
        Digraph::from_edges(4, &[(0, 1), (1, 2), (3, 2)]).unwrap()
    }

    #[test]
    fn sap_prints_sentinels_for_unrelated_pairs() {
        let g = Digraph::from_edges(2, &[]).unwrap();
        let mut out = Vec::new();
        run_sap(&g, "0 1\n\n1 1\n".as_bytes(), &mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "length = -1, ancestor = -1\nlength = 0, ancestor = 1\n"
        );
    }

    #[test]
    fn sap_json_lines() {
        let mut out = Vec::new();
        run_sap(&graph(), "0 3\n".as_bytes(), &mut out, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"v\":0,\"w\":3,\"length\":3,\"ancestor\":2}\n"
        );
    }

    #[test]
    fn sap_rejects_negative_and_malformed_ids() {
        let mut out = Vec::new();
        assert!(run_sap(&graph(), "-1 0\n".as_bytes(), &mut out, false).is_err());
        assert!(run_sap(&graph(), "0\n".as_bytes(), &mut out, false).is_err());
        assert!(run_sap(&graph(), "0 x\n".as_bytes(), &mut out, false).is_err());
        assert!(out.is_empty());
    }
}
