use clap::Parser;
use std::{fs, io, io::Read};
use stylevalue::assets::{parse_assets, resolve_assets, AssetMap};
use stylevalue::controls::unit_select::build_options;
use stylevalue::printer::PrinterOptions;
use stylevalue::values::StyleValue;

#[derive(Parser, Debug)]
#[clap(author, about, long_about = None)]
struct CliArgs {
  /// Style value JSON file, or `-` to read from stdin
  input_file: String,
  /// Destination file for the output
  #[clap(short, long)]
  output_file: Option<String>,
  /// Minify the output
  #[clap(short, long)]
  minify: bool,
  /// JSON file mapping asset ids to `{"path": ...}` objects
  #[clap(long)]
  assets: Option<String>,
  /// Prefix for asset paths
  #[clap(long, default_value = "")]
  asset_base_url: String,
  /// Print the unit options for the value of this property as JSON instead of CSS
  #[clap(long, conflicts_with = "minify")]
  unit_options: Option<String>,
  /// Label of the unitless unit option
  #[clap(long, default_value = "number")]
  unitless_label: String,
}

fn read_input(path: &str) -> io::Result<String> {
  if path == "-" {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
  } else {
    fs::read_to_string(path)
  }
}

pub fn main() -> Result<(), std::io::Error> {
  env_logger::init();
  let cli_args = CliArgs::parse();
  let source = read_input(&cli_args.input_file)?;

  let value = match StyleValue::from_json(&source) {
    Ok(value) => value,
    Err(e) => {
      eprintln!("{}", e);
      std::process::exit(1);
    }
  };

  let res = if let Some(property) = &cli_args.unit_options {
    let options = build_options(property, &value, &cli_args.unitless_label);
    serde_json::to_string(&options)?
  } else {
    let assets = match &cli_args.assets {
      Some(path) => match parse_assets(&fs::read_to_string(path)?) {
        Ok(assets) => assets,
        Err(e) => {
          eprintln!("{}", e);
          std::process::exit(1);
        }
      },
      None => AssetMap::new(),
    };

    let resolve = resolve_assets(&assets, &cli_args.asset_base_url);
    stylevalue::to_value_with_options(
      &value,
      PrinterOptions {
        minify: cli_args.minify,
        transform: Some(&resolve),
      },
    )
  };

  if let Some(output_file) = &cli_args.output_file {
    fs::write(output_file, res.as_bytes())?;
  } else {
    println!("{}", res);
  }

  Ok(())
}
