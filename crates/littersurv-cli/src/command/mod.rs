use clap::{Parser, Subcommand};

use self::{
    correlation::CorrelationArg, group_compare::GroupCompareArg, similarity::SimilarityArg,
};

mod correlation;
mod group_compare;
mod similarity;

/// Default binary waste indicator columns of the transect survey.
pub(crate) const DEFAULT_INDICATORS: [&str; 6] = [
    "Organic",
    "Plastic",
    "Paper",
    "Hazardous",
    "Glass/Metal",
    "Burning Evidence",
];

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Jaccard similarity and Phi coefficient matrices per partition
    Similarity(#[clap(flatten)] SimilarityArg),
    /// Mann-Whitney U comparisons split by a binary indicator
    GroupCompare(#[clap(flatten)] GroupCompareArg),
    /// Spearman correlation inquiries and correlation heatmaps
    Correlation(#[clap(flatten)] CorrelationArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Similarity(arg) => similarity::run(&arg)?,
        Mode::GroupCompare(arg) => group_compare::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
    }
    Ok(())
}
