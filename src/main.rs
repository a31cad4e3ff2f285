use clap::{Parser, Subcommand};
use sku_forge::cli;
use sku_forge::error::ListingResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sku-forge")]
#[command(about = "Turn a vendor color × size matrix into a marketplace bulk-upload workbook.")]
#[command(long_about = "SKU Forge - phone case matrix to marketplace upload

Reads a vendor matrix workbook (colors across, sizes down), expands it into
one parent listing plus one child per color/size pair, and writes those
records into the marketplace template's 'Template' sheet.

COMMANDS:
  convert   - Build the upload workbook (and a flat SKU dump)
  preview   - Show the records a matrix expands to
  profiles  - List or print the built-in listing profiles

EXAMPLES:
  sku-forge convert --profile multi
  sku-forge convert --profile city --input city_source.xlsx --template amazon_template.xlsx
  sku-forge preview --profile my_line.yaml --input matrix.xlsx --json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Build the marketplace upload workbook.

Writes generated_amazon_upload_<input>.xlsx and, unless --no-debug is given,
generated_skus_<input>.xlsx into the output directory. Nothing is written
when the matrix or template cannot be read.

PROFILES:
  multi  - factory grid input (colors, factory codes, sizes), with dimensions
  city   - simple grid input (colors header, sizes)
  Any path ending in .yaml/.yml is loaded as a custom profile.")]
    /// Build the upload workbook from a vendor matrix
    Convert {
        /// Built-in profile name or path to a profile YAML file
        #[arg(short, long, env = "SKU_FORGE_PROFILE")]
        profile: String,

        /// Vendor matrix workbook (defaults to the profile's input_file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Marketplace template workbook
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Directory for the generated workbooks
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Skip the flat SKU dump workbook
        #[arg(long)]
        no_debug: bool,
    },

    /// Show the records a matrix expands to
    Preview {
        /// Built-in profile name or path to a profile YAML file
        #[arg(short, long, env = "SKU_FORGE_PROFILE")]
        profile: String,

        /// Vendor matrix workbook (defaults to the profile's input_file)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List built-in profiles
    Profiles {
        /// Print the YAML of one built-in profile
        #[arg(long)]
        show: Option<String>,
    },
}

fn main() -> ListingResult<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            profile,
            input,
            template,
            output_dir,
            no_debug,
        } => cli::convert(profile, input, template, output_dir, no_debug),

        Commands::Preview {
            profile,
            input,
            json,
        } => cli::preview(profile, input, json),

        Commands::Profiles { show } => cli::profiles(show),
    }
}
