use std::path::PathBuf;

use csv2poly::{save_poly, PolyError, OUTPUT_FILE};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "scale-poly",
    about = "Rescale a .poly file and optionally center it on its centroid (written to out.poly)",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// The .poly file
    #[structopt(parse(from_os_str))]
    poly_file: PathBuf,

    /// Factor applied to both coordinates of every point
    scale: f64,

    /// Any other third argument is accepted and means no centering
    #[structopt(hidden = true, conflicts_with = "center")]
    extra: Option<String>,

    /// Center the points on their centroid
    #[structopt(short = "c", long = "center")]
    center: bool,

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

    if let Some(extra) = &opt.extra {
        log::warn!("Ignoring argument '{}', points will not be centered.", extra);
    }

    let result = csv2poly::scale_poly(&opt.poly_file, opt.scale, opt.center).and_then(|points| {
        log::info!("Save poly file {}...", OUTPUT_FILE);
        save_poly(OUTPUT_FILE, &points).map_err(PolyError::from)
    });

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
