// Homestead Explorer - bin/homestead_tools.rs
//
// Companion command-line tools for the census-tract property GeoJSON:
//   reduce    strip feature properties down to a keep list
//   missing   count features with an absent or blank field
//   outreach  estimate outreach cost and benefit for one tract, optionally
//             exporting the selected object ids as CSV

use clap::{Parser, Subcommand};
use homestead_explorer::core::export::default_file_name;
use homestead_explorer::core::geojson::{count_missing, features, reduce_properties};
use homestead_explorer::core::outreach::{
    format_usd, select_eligible, threshold_in_range, OutreachEstimate,
};
use homestead_explorer::core::tract::TractCharacteristics;
use homestead_explorer::platform::{config, fs};
use homestead_explorer::util::{constants, error::Result, logging};
use std::path::PathBuf;

/// Homestead Explorer tract data tools.
#[derive(Parser, Debug)]
#[command(name = "homestead-tools", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keep only the listed properties on every feature.
    Reduce {
        /// Source FeatureCollection.
        input: PathBuf,

        /// Destination file (overwritten).
        output: PathBuf,

        /// TOML file with `fields = [...]`; defaults to the built-in list.
        #[arg(short = 'k', long = "keep-list")]
        keep_list: Option<PathBuf>,
    },

    /// Count features whose property is missing, null, or blank.
    Missing {
        /// FeatureCollection to audit.
        input: PathBuf,

        /// Property to check.
        #[arg(short = 'f', long = "field", default_value = constants::DEFAULT_AUDIT_FIELD)]
        field: String,
    },

    /// Estimate outreach cost and benefit for one census tract.
    Outreach {
        /// FeatureCollection with GEOID, _pred1 and objectid properties.
        input: PathBuf,

        /// Census tract GEOID.
        #[arg(short = 't', long = "tract")]
        tract: String,

        /// Eligibility model threshold (0.5 to 1.0).
        #[arg(long = "threshold", default_value_t = constants::THRESHOLD_DEFAULT)]
        threshold: f64,

        /// Export the selected object ids as CSV. Without a path the file is
        /// `tract_{GEOID}_{threshold}.csv` in the working directory.
        #[arg(long = "export", value_name = "PATH", num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Reduce {
            input,
            output,
            keep_list,
        } => {
            let keep = config::load_keep_list(keep_list.as_deref())?;
            let mut collection = fs::load_collection(&input)?;
            let stats = reduce_properties(&mut collection, &keep);
            fs::save_collection(&output, &collection)?;
            tracing::info!(
                input = %input.display(),
                output = %output.display(),
                features = stats.features,
                removed = stats.properties_removed,
                "Reduced collection"
            );
            println!(
                "Saved cleaned GeoJSON to {} ({} features, {} properties removed)",
                output.display(),
                stats.features,
                stats.properties_removed
            );
        }

        Command::Missing { input, field } => {
            let collection = fs::load_collection(&input)?;
            let missing = count_missing(&collection, &field);
            let total = features(&collection).map_or(0, Vec::len);
            println!("Number of features with missing or empty '{field}': {missing} of {total}");
        }

        Command::Outreach {
            input,
            tract,
            threshold,
            export,
        } => {
            let collection = fs::load_collection(&input)?;
            let selected = select_eligible(&collection, &tract, threshold);
            let est = OutreachEstimate::for_properties(selected.len());
            tracing::debug!(tract = %tract, threshold, selected = selected.len(), "Outreach estimated");

            println!("Census Tract: {tract}");
            println!("Threshold: {threshold}");
            println!("Number of Selected Properties: {}", est.properties);
            println!();
            println!("Census Tract Characteristics");
            match TractCharacteristics::from_collection(&collection, &tract) {
                Some(characteristics) => {
                    for (label, value) in characteristics.rows() {
                        println!("  {label:<28}{value:>24}");
                    }
                }
                None => println!("  No properties found in tract {tract}"),
            }
            println!();
            println!("Estimated Outreach Cost");
            println!("  {:<28}{:>16}", "Door Knocking", format_usd(est.door_knocking_cost));
            println!("  {:<28}{:>16}", "Direct Mailing", format_usd(est.direct_mailing_cost));
            println!();
            println!("Estimated Potential Benefits");
            println!("  {:<28}{:>16}", "Direct Homeowner Savings", format_usd(est.direct_savings));
            println!("  {:<28}{:>16}", "Broader Indirect Benefits", format_usd(est.indirect_benefits));
            println!("  {:<28}{:>16}", "Total", format_usd(est.total_benefits));
            println!("  *Assuming {} Post-Outreach Uptake*", OutreachEstimate::uptake_note());

            if let Some(path) = export {
                println!();
                if selected.is_empty() {
                    println!("No properties meet the current threshold in this tract.");
                } else {
                    let path =
                        path.unwrap_or_else(|| PathBuf::from(default_file_name(&tract, threshold)));
                    let count = fs::export_object_ids(&path, &selected)?;
                    println!("Exported {count} object ids to {}", path.display());
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Command::Outreach { threshold, .. } = &cli.command {
        if !threshold_in_range(*threshold) {
            eprintln!(
                "Error: threshold {threshold} is outside {:.1}..={:.1}",
                constants::THRESHOLD_MIN,
                constants::THRESHOLD_MAX
            );
            std::process::exit(2);
        }
    }

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
