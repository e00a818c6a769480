use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kcompare::compare::compare;
use kcompare::config::CompareConfig;
use kcompare::dataset::slice_catalog;
use kcompare::io;
use kcompare::io::cli::Cli;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CompareConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };
    args.apply_overrides(&mut config);
    config.validate()?;

    info!("[MAIN] Successfully parsed CompareConfig: {config:?}");

    let catalog = io::read_catalog(&args.input_file)?;
    info!(
        "[MAIN] Catalog '{}' has {} items",
        catalog.name,
        catalog.products.len()
    );

    let products = slice_catalog(&catalog.products, config.dataset_fraction);
    info!(
        "[MAIN] Using {} items ({:.0}% of the catalog)",
        products.len(),
        config.dataset_fraction * 100.0
    );

    let output = compare(&catalog.name, products, &config)?;

    if let Some(solution_folder) = &args.solution_folder {
        if !solution_folder.exists() {
            fs::create_dir_all(solution_folder).with_context(|| {
                format!("could not create solution folder: {solution_folder:?}")
            })?;
        }
        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .context("input file has no name")?;
        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
