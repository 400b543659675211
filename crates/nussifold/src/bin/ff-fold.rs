use std::io::Write;
use log::{info, warn};
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use rayon::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

use nussifold::input_parsers::ruler;
use nussifold::input_parsers::read_sequence;
use nussifold::input_parsers::read_records_input;
use nussifold::folding_parsers::FoldingArguments;
use nussifold::folding_parsers::RenderArguments;
use nussifold::report::fold_record;
use nussifold::report::FoldResult;
use nussifold::render::StructureRenderer;


#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Fold this sequence instead of reading INPUT.
    #[arg(short, long, value_name = "SEQ")]
    pub sequence: Option<String>,

    /// Print a JSON array of results instead of text.
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "ff-fold")]
#[command(author, version, about = "Maximum base-pair folding of RNA sequences")]
pub struct Cli {
    #[command(flatten)]
    pub fold: FoldInput,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub folding: FoldingArguments,

    #[command(flatten, next_help_heading = "Rendering")]
    pub render: RenderArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn print_result(res: &FoldResult) {
    if let Some(h) = &res.header {
        println!("{}", h.yellow())
    }
    println!("Index of pairs: {}", res.pairs);
    println!("The Pairs: {}", res.nucleotide_pairs());
    info!("{}", ruler(res.sequence.len().saturating_sub(1)).magenta());
    println!("{}\n{} {}", res.sequence, res.structure(), format!("{:>4}", res.max_pairs).green());
    info!("{}", ruler(res.sequence.len().saturating_sub(1)).magenta());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.fold.verbose);

    let mode = cli.folding.sequence_mode();
    let tie = cli.folding.tie_break();
    let records = match &cli.fold.sequence {
        Some(seq) => vec![read_sequence(seq, mode)?],
        None => read_records_input(&cli.fold.input, mode)?,
    };
    info!("Folding {} sequence(s).", records.len());

    let pb = if records.len() > 1 {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<FoldResult> = records
        .into_par_iter()
        .map_init(
            || pb.clone(),
            |pb, record| {
                let res = fold_record(record, tie);
                pb.inc(1);
                res
            },
        ).collect();
    pb.finish_and_clear();

    if cli.fold.json {
        let reports: Vec<_> = results.iter().map(FoldResult::to_report).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for res in &results {
            print_result(res);
        }
    }

    let plot = cli.render.circle_plot();
    let external = cli.render.external_renderer();
    let renderers: Vec<&dyn StructureRenderer> = [
        plot.as_ref().map(|r| r as &dyn StructureRenderer),
        external.as_ref().map(|r| r as &dyn StructureRenderer),
    ].into_iter().flatten().collect();

    for (idx, res) in results.iter().enumerate() {
        let name = res.file_stem(idx);
        for renderer in &renderers {
            // best effort
            if let Err(e) = renderer.render(&name, &res.sequence, &res.pairs) {
                warn!("{} {}", "WARNING:".red(), e);
            }
        }
    }

    Ok(())
}
