use std::path::PathBuf;

use color_eyre::eyre::Result;
use game_tree_search::SearchOptions;
use itertools::Itertools;

use crate::tree::TreeFile;

#[derive(clap::Args, Debug)]
pub(crate) struct Solve {
    /// JSON file describing the game tree
    #[clap(value_parser)]
    file: PathBuf,

    /// Run plain minimax instead of alpha-beta
    #[clap(long)]
    no_prune: bool,

    /// Print the part of the tree the search explored
    #[clap(long)]
    tree: bool,

    /// Stop expanding nodes at this depth. Overrides the limit in the file
    #[clap(short, long, value_parser)]
    depth_limit: Option<usize>,
}

impl Solve {
    pub(crate) fn run(self) -> Result<()> {
        let file = TreeFile::load(&self.file)?;
        let options = SearchOptions {
            prune: !self.no_prune,
            record_tree: self.tree,
        };

        let result = file.search(options, self.depth_limit)?;
        let stats = result.stats;

        println!("Value: {}", result.value);
        println!(
            "Move: {}",
            result.action.as_deref().unwrap_or("none, the root is cut off")
        );
        println!("Line: {}", result.line.iter().join(" -> "));
        println!(
            "Visited {} of {} nodes ({} expanded, {} evaluated), reaching depth {}",
            stats.nodes_visited(),
            file.root.size(),
            stats.nodes_expanded,
            stats.leaves_evaluated,
            stats.max_depth,
        );
        if options.prune {
            println!(
                "Pruning cutoffs: {} alpha, {} beta",
                stats.alpha_cutoffs, stats.beta_cutoffs
            );
        }

        if let Some(tree) = result.tree {
            println!();
            println!("{}", tree.to_text_tree());
        }

        Ok(())
    }
}
