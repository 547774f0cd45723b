use clap::{Parser, Subcommand};
use firmware_catalog::manifest::{self, ManifestStatus};
use firmware_catalog::naming::parse_firmware_name;
use firmware_catalog::types::FirmwareRecord;
use firmware_catalog::{config, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firmware-catalog")]
#[command(about = "Generate the firmware manifest for a directory of firmware images")]
#[command(long_about = "\
Generate the firmware manifest for a directory of firmware images

Filenames are the data source. Each one must follow:

  <dongle>_<chip>_[<role>_]<desc>_<version>_<baud>[_<extra>].<bin|gbl|hex>

  donglee_mg21_zigbee_stable_6.10.3_115200.gbl
  donglep_cc2652p_zigbeerouter_stable_20240703_115200.hex
  sonoff_esp32_stable_1.0.0_921600.bin            (no role)

Names that do not match are reported and left out of the manifest.
The manifest (FIRMWARE_LIST.json) is written into the firmware directory.

Run 'firmware-catalog gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Firmware directory
    #[arg(long, default_value = "firmware-build", global = true)]
    source: PathBuf,

    /// Catalog config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the firmware directory and write the manifest
    Generate,
    /// Scan without writing; fail if the manifest on disk is stale
    Check,
    /// Parse filenames and show the resulting records
    Parse {
        /// Filenames to parse
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate => {
            let catalog_config = config::load_config(cli.config.as_deref())?;
            let catalog = scan::scan(&cli.source, &catalog_config)?;
            output::print_scan_output(&catalog, &cli.source);
            manifest::write_manifest(&cli.source, &catalog_config.output_file, &catalog.manifest)?;
            println!("{}", output::format_generated(&catalog_config.output_file));
        }
        Command::Check => {
            let catalog_config = config::load_config(cli.config.as_deref())?;
            let catalog = scan::scan(&cli.source, &catalog_config)?;
            output::print_scan_output(&catalog, &cli.source);
            let manifest_path = cli.source.join(&catalog_config.output_file);
            let status = manifest::manifest_status(&manifest_path, &catalog.manifest)?;
            println!("{}", output::format_check_status(status, &manifest_path));
            if status != ManifestStatus::UpToDate {
                std::process::exit(1);
            }
        }
        Command::Parse { names } => {
            for name in &names {
                let record = parse_firmware_name(name)
                    .map(|parsed| FirmwareRecord::from_parsed(name, parsed));
                for line in output::format_parse_output(name, record.as_ref()) {
                    println!("{}", line);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
