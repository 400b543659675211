use std::path::PathBuf;

use clap::Args;
use clap::ValueEnum;
use log::debug;
use ff_folding::TieBreak;

use crate::input_parsers::SequenceMode;
use crate::render::CirclePlot;
use crate::render::ExternalRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Pair with the lowest compatible position.
    First,
    /// Pair with the highest compatible position.
    Last,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::First,
            TieBreakArg::Last => TieBreak::Last,
        }
    }
}

/// Sequence normalization and traceback parameters.
#[derive(Debug, Args)]
pub struct FoldingArguments {
    /// Convert unsupported symbols to 'N' (never paired) instead of failing.
    #[arg(long)]
    pub lossy: bool,

    /// Partner choice when several pairings are optimal.
    #[arg(long, value_enum, default_value_t = TieBreakArg::First)]
    pub tie_break: TieBreakArg,
}

impl FoldingArguments {
    pub fn sequence_mode(&self) -> SequenceMode {
        if self.lossy { SequenceMode::Lenient } else { SequenceMode::Strict }
    }

    pub fn tie_break(&self) -> TieBreak {
        debug!("Tie-break: {:?}", self.tie_break);
        TieBreak::from(self.tie_break)
    }
}

/// Structure drawing parameters.
#[derive(Debug, Args)]
pub struct RenderArguments {
    /// Draw every structure as a circle plot (SVG).
    #[arg(long)]
    pub plot: bool,

    /// File name prefix of the circle plots.
    #[arg(long, value_name = "PREFIX", default_value = "nf_")]
    pub plot_prefix: String,

    /// External program called as `PROGRAM [ARGS...] SEQUENCE INDEX_CSV`.
    #[arg(long, value_name = "PROGRAM")]
    pub render_cmd: Option<PathBuf>,

    /// Extra leading argument for the external program (repeatable).
    #[arg(long = "render-arg", value_name = "ARG", requires = "render_cmd")]
    pub render_args: Vec<String>,
}

impl RenderArguments {
    pub fn circle_plot(&self) -> Option<CirclePlot> {
        self.plot.then(|| CirclePlot::new(&self.plot_prefix))
    }

    pub fn external_renderer(&self) -> Option<ExternalRenderer> {
        self.render_cmd.as_ref().map(|program| {
            debug!("External renderer: {:?} {:?}", program, self.render_args);
            ExternalRenderer::new(program, self.render_args.clone())
        })
    }
}
