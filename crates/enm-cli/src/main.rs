//! hitcommute CLI entry point.
//!
//! Computes random-walk hitting and commute times over a PPIN elastic
//! network and writes them as plain-text matrices:
//!
//! ```text
//! OUTPUTS/hit_df.txt        H, one row per line
//! OUTPUTS/commute_df.txt    C, one row per line
//! OUTPUTS/pinv_df.txt       Γ⁺ (with --save-pinv)
//! OUTPUTS/nodes.txt         row/column labels (edge-list input)
//! OUTPUTS/run_summary.json  spectrum statistics
//! ```

mod config;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use enm_core::EnmError;
use enm_physics::{
    build_commute_times, build_hitting_times, load_matrix, save_matrix, EdgeList, HitCommute,
    Kirchhoff,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use config::CliConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which matrices to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Only {
    /// Hitting times only
    Hit,
    /// Commute times only
    Commute,
}

#[derive(Parser, Debug)]
#[command(name = "hitcommute")]
#[command(version = VERSION)]
#[command(about = "Hitting and commute times of a PPIN Gaussian network model", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["kirchhoff", "network"])))]
struct Args {
    /// Kirchhoff matrix file (whitespace-separated rows)
    ///
    /// Example: --kirchhoff kirchhoff.txt
    #[arg(short, long)]
    kirchhoff: Option<PathBuf>,

    /// Interaction network edge list (`a<TAB>b[<TAB>weight]`)
    ///
    /// Example: --network test_PPIN.txt
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// TOML configuration file ([engine] and [output] sections)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides output.dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Compute only one of the two matrices
    #[arg(long, value_enum)]
    only: Option<Only>,

    /// Fail when the spectral gap above the zero threshold is ambiguous
    #[arg(long, default_value = "false")]
    strict: bool,

    /// Also write the Kirchhoff pseudoinverse
    #[arg(long, default_value = "false")]
    save_pinv: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Load the Kirchhoff matrix and, for edge lists, the node labels.
fn load_input(args: &Args, engine: &HitCommute) -> Result<(Kirchhoff, Option<Vec<String>>)> {
    if let Some(path) = &args.kirchhoff {
        let matrix = load_matrix(path)
            .with_context(|| format!("Failed to read Kirchhoff matrix {}", path.display()))?;
        let kirchhoff = engine.kirchhoff(matrix)?;
        return Ok((kirchhoff, None));
    }

    let path = args
        .network
        .as_ref()
        .context("either --kirchhoff or --network is required")?;
    let network = EdgeList::from_file(path)
        .with_context(|| format!("Failed to read network {}", path.display()))?;
    log::info!(
        "Network {}: {} proteins, {} interactions",
        path.display(),
        network.n_nodes(),
        network.edges.len()
    );
    let kirchhoff = network.to_kirchhoff()?;
    Ok((kirchhoff, Some(network.names)))
}

fn write_output(dir: &Path, name: &str, matrix: &nalgebra::DMatrix<f64>) -> Result<()> {
    let path = dir.join(name);
    save_matrix(&path, matrix).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {} ({}x{})", path.display(), matrix.nrows(), matrix.ncols());
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    if args.strict {
        config.engine.strict = true;
    }
    if args.save_pinv {
        config.output.save_pinv = true;
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    config.validate()?;

    let engine = HitCommute::new(config.engine)?;
    let (kirchhoff, labels) = load_input(args, &engine)?;

    let start = Instant::now();
    let pinv = engine.pseudoinverse(&kirchhoff)?;
    let spectrum = *pinv.summary();
    log::info!(
        "Pseudoinverse: N={}, λmax={:.4e}, algebraic connectivity={:?}",
        spectrum.n_nodes,
        spectrum.max_eigenvalue,
        spectrum.algebraic_connectivity
    );

    let out_dir = &config.output.dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    if args.only != Some(Only::Commute) {
        let hitting = build_hitting_times(pinv.matrix(), &kirchhoff.degrees());
        write_output(out_dir, "hit_df.txt", &hitting)?;
    }
    if args.only != Some(Only::Hit) {
        let commute = build_commute_times(pinv.matrix(), kirchhoff.volume());
        write_output(out_dir, "commute_df.txt", &commute)?;
    }
    if config.output.save_pinv {
        write_output(out_dir, "pinv_df.txt", pinv.matrix())?;
    }
    if let Some(labels) = &labels {
        let path = out_dir.join("nodes.txt");
        std::fs::write(&path, labels.join("\n") + "\n")
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if config.output.summary {
        let summary = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": VERSION,
            "input": args.kirchhoff.as_ref().or(args.network.as_ref()).map(|p| p.display().to_string()),
            "volume": kirchhoff.volume(),
            "spectrum": spectrum,
            "config": config.engine,
            "elapsed_ms": elapsed_ms,
        });
        let path = out_dir.join("run_summary.json");
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        file.write_all(format!("{}\n", serde_json::to_string_pretty(&summary)?).as_bytes())?;
    }

    log::info!("Hitting time and commute time calculation finished in {:.1} ms", elapsed_ms);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("hitcommute {} - Starting", VERSION);

    if let Err(err) = run(&args) {
        if let Some(enm) = err.downcast_ref::<EnmError>() {
            log::error!("{}", enm.user_message());
        }
        return Err(err);
    }
    Ok(())
}
