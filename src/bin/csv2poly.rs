use std::path::PathBuf;

use csv2poly::{save_poly, PolyError, OUTPUT_FILE};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "csv2poly",
    about = "Convert a GIS CSV vertex export into a centered .poly file (written to out.poly)",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// The CSV file (one header line, x and y in the first two columns)
    #[structopt(parse(from_os_str))]
    csv_file: PathBuf,

    /// Factor applied to both coordinates of every point
    scale: f64,

    /// Be more verbose
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,

    /// Be verbose and print debug info
    #[structopt(short = "d", long = "debug")]
    debug: bool,
}

pub fn main() {
    let opt = Opt::from_args();

    csv2poly::init_logger(opt.verbose, opt.debug).expect("The logger cannot be initialized.");

    let result = csv2poly::csv_to_poly(&opt.csv_file, opt.scale).and_then(|points| {
        log::info!("Save poly file {}...", OUTPUT_FILE);
        save_poly(OUTPUT_FILE, &points).map_err(PolyError::from)
    });

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
