//! graph-walk: build or generate a graph, then traverse it both ways.
//!
//! Runs the full pipeline on one graph: print the adjacency matrix,
//! BFS visit order over the matrix and over the derived adjacency list,
//! then the DFS all-pairs distance table over both representations.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use graph_walk_core::{bfs_list, bfs_matrix, dfs_list, dfs_matrix, AdjMatrix, VertexId};

mod input;
mod render;

#[derive(Parser)]
#[command(name = "graph-walk", version, about = "Graph traversal over adjacency matrix and list")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random undirected graph and traverse it.
    Gen {
        /// Number of vertices (1-100).
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
        vertices: u64,

        /// Edge probability per vertex pair, in [0.0, 1.0].
        #[arg(long, value_parser = input::parse_density)]
        density: f64,

        /// RNG seed for reproducible graphs. Omit for a random graph.
        #[arg(long)]
        seed: Option<u64>,

        /// Start vertex for BFS.
        #[arg(long, default_value_t = 0)]
        start: VertexId,
    },

    /// Read an adjacency matrix (0/1 rows, one per line) and traverse it.
    Manual {
        /// Start vertex for BFS.
        #[arg(long, default_value_t = 0)]
        start: VertexId,

        /// Matrix file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (matrix, start) = match cli.command {
        Command::Gen {
            vertices,
            density,
            seed,
            start,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let matrix = AdjMatrix::generate(vertices as usize, density, &mut rng)?;
            (matrix, start)
        }
        Command::Manual { start, file } => {
            let matrix = match file {
                Some(path) => input::parse_matrix(BufReader::new(File::open(path)?))?,
                None => input::parse_matrix(io::stdin().lock())?,
            };
            (matrix, start)
        }
    };

    if !matrix.is_symmetric() {
        warn!("adjacency matrix is not symmetric; treating the graph as directed");
    }

    println!("Adjacency matrix:");
    print!("{}", render::matrix_table(&matrix));
    println!();

    let list = matrix.to_list();

    let order = bfs_matrix(&matrix, start)?;
    println!("{}", render::order_line("BFS (matrix)", start, &order));
    let order = bfs_list(&list, start)?;
    println!("{}", render::order_line("BFS (list)", start, &order));
    println!();

    print!("{}", render::distance_table("DFS (matrix)", &dfs_matrix(&matrix)));
    println!();
    print!("{}", render::distance_table("DFS (list)", &dfs_list(&list)));

    Ok(())
}
