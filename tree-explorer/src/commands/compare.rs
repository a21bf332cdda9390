use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::tree::TreeFile;

#[derive(clap::Args, Debug)]
pub(crate) struct Compare {
    /// JSON file describing the game tree
    #[clap(value_parser)]
    file: PathBuf,

    /// Stop expanding nodes at this depth. Overrides the limit in the file
    #[clap(short, long, value_parser)]
    depth_limit: Option<usize>,
}

impl Compare {
    pub(crate) fn run(self) -> Result<()> {
        let file = TreeFile::load(&self.file)?;
        let comparison = file.compare(self.depth_limit)?;
        let (full, pruned) = (&comparison.full, &comparison.pruned);

        println!("Value: {}", full.value);
        println!("{:<12}{:>10}{:>10}{:>10}", "", "visited", "expanded", "cutoffs");
        for (name, result) in [("minimax", full), ("alpha-beta", pruned)] {
            println!(
                "{:<12}{:>10}{:>10}{:>10}",
                name,
                result.stats.nodes_visited(),
                result.stats.nodes_expanded,
                result.stats.pruning_cutoffs(),
            );
        }

        if comparison.moves_differ() {
            println!(
                "Moves differ between the searches ({:?} and {:?}), they tie on value",
                full.action, pruned.action
            );
        }

        Ok(())
    }
}
