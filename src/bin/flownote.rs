//! CLI: Build a flow graph from a notation file and print its canonical text.
//!
//! Usage: `flownote [OPTIONS] <path-to-flow-file>`
//! Example: flownote tests/fixtures/pipeline.flow
//!
//! The input dialect is auto-detected (numbered-node DSL first, arrow-chain
//! shorthand as the fallback). Output is the canonical re-export of the built
//! graph, or the node/edge model as JSON with `--json`.
//!
//! Set RUST_LOG=flownote=debug for parse and build events.

use clap::Parser;
use flownote::FlowDocument;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a flow graph from a notation file and print its canonical text.
#[derive(Parser, Debug)]
#[command(name = "flownote")]
struct Args {
  /// Print the node/edge model as pretty JSON instead of canonical text.
  #[arg(long)]
  json: bool,

  /// Suppress the canonical text dump; print counts only.
  #[arg(long)]
  quiet: bool,

  /// Path to the flow notation file
  #[arg(value_name = "path-to-flow-file")]
  flow_path: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let text = match fs::read_to_string(&args.flow_path) {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.flow_path.display(), e);
      process::exit(1);
    }
  };

  let mut doc = FlowDocument::new();
  let notes = doc.rebuild_from_text(&text);
  info!(
    nodes = doc.nodes().len(),
    edges = doc.edges().len(),
    notes = notes.len(),
    "graph built"
  );

  if args.json {
    match serde_json::to_string_pretty(doc.model()) {
      Ok(s) => println!("{}", s),
      Err(e) => {
        eprintln!("Error serializing model: {}", e);
        process::exit(1);
      }
    }
    return;
  }

  println!("Nodes: {}", doc.nodes().len());
  println!("Edges: {}", doc.edges().len());
  for note in &notes {
    println!("  Note: {:?}", note);
  }
  if !args.quiet {
    let exported = doc.export_text();
    if !exported.is_empty() {
      println!("{}", exported);
    }
  }
}
