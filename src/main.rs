//! Command-line entry point for the synview viewer generator.

use std::path::Path;

use synview::error::SynviewError;
use synview::mutations;
use synview::options::Options;
use synview::risk::AggregationScorer;
use synview::sequence::ALPHA_SYNUCLEIN;
use synview::structure;
use synview::viewer::{self, ViewerPage};

/// Path of the options file read when present.
const OPTIONS_PATH: &str = "synview.toml";

/// Path the generated viewer page is written to.
const OUTPUT_PATH: &str = "synview.html";

fn run(structure_input: &str, threshold: Option<f64>) -> Result<(), SynviewError> {
    let options_path = Path::new(OPTIONS_PATH);
    let mut options = if options_path.exists() {
        Options::load(options_path)?
    } else {
        Options::default()
    };
    if let Some(t) = threshold {
        options.risk.threshold = t;
    }

    let structure_path = structure::resolve_structure_path(structure_input)?;
    let pdb_data = std::fs::read_to_string(&structure_path)?;

    let scorer = AggregationScorer::standard();
    let scores = scorer.compute_risk_scores(ALPHA_SYNUCLEIN);
    let regions = scorer
        .find_high_risk_regions(ALPHA_SYNUCLEIN, options.risk.threshold);
    for region in &regions {
        // Log 1-indexed residue numbers, matching the viewer annotations.
        log::info!(
            "high-risk region: residues {}-{} ({} residues)",
            region.start + 1,
            region.end + 1,
            region.span()
        );
    }

    let mut annotations = Vec::new();
    if options.risk.overlay {
        annotations.extend(viewer::risk_annotations(&scores));
    }
    if options.viewer.highlight_mutations {
        let selected: Vec<_> = options
            .viewer
            .mutations
            .iter()
            .filter_map(|name| mutations::find(name).copied())
            .collect();
        annotations.extend(viewer::mutation_annotations(&selected));
    }

    let page = ViewerPage {
        pdb_data,
        style: options.viewer.style,
        color_scheme: options.viewer.color_scheme,
        annotations,
    };
    std::fs::write(OUTPUT_PATH, page.render())?;
    log::info!("wrote viewer page to {OUTPUT_PATH}");

    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let structure_input = args
        .next()
        .unwrap_or_else(|| Options::default().viewer.structure);

    let threshold = match args.next().map(|a| a.parse::<f64>()) {
        None => None,
        Some(Ok(t)) => Some(t),
        Some(Err(_)) => {
            log::error!("Usage: synview [PDB_ID or path] [threshold]");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&structure_input, threshold) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
