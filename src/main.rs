//! `rectmsh` command line interface
//!
//! Writes `rect_<nx>x<ny>.msh` for a structured quad mesh of a rectangle.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use rectmsh::{RectMesh, Rectangle, Resolution};

/// long options that are also accepted with a single leading dash
const SHORT_DASH_LONGS: [&str; 6] = ["nx", "ny", "lx", "ly", "x0", "y0"];

/// Make a quad based gmsh mesh of a rectangle
#[derive(Parser, Debug)]
#[command(name = "rectmsh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Make a quad based gmsh mesh of a rectangle", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// number of cells along x
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    nx: u64,

    /// number of cells along y
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    ny: u64,

    /// domain width
    #[arg(long, default_value_t = 1.0)]
    lx: f64,

    /// domain height
    #[arg(long, default_value_t = 1.0)]
    ly: f64,

    /// x coordinate of the lower left corner
    #[arg(long, default_value_t = 0.0)]
    x0: f64,

    /// y coordinate of the lower left corner
    #[arg(long, default_value_t = 0.0)]
    y0: f64,

    /// directory the mesh file is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl Args {
    fn parse_compat() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    fn domain(&self) -> Rectangle {
        Rectangle::new(self.lx, self.ly, self.x0, self.y0)
    }

    fn resolution(&self) -> Result<Resolution, rectmsh::Error> {
        let cells = |n: u64| usize::try_from(n).unwrap_or(usize::MAX);
        Resolution::new(cells(self.nx), cells(self.ny))
    }
}

/// rewrite `-nx 4` and `-nx=4` into their `--nx` form
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|text| {
                let flag = text.strip_prefix('-')?;
                if flag.starts_with('-') {
                    return None;
                }

                let name = flag.split('=').next()?;
                SHORT_DASH_LONGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", text)))
            });

            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse_compat();
    log::debug!("{:?}", args);

    let resolution = args.resolution()?;
    let mesh = RectMesh::generate(&args.domain(), &resolution);

    rectmsh::write_to_dir(&mesh, &resolution, &args.output_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let args = std::iter::once("rectmsh")
            .chain(args.iter().copied())
            .map(OsString::from);
        Args::try_parse_from(normalize_args(args))
    }

    #[test]
    fn single_dash_flags() {
        let args = parse(&["-nx", "4", "-ny=2", "-lx", "2.5", "-y0", "-1"]).unwrap();
        assert_eq!(args.nx, 4);
        assert_eq!(args.ny, 2);
        assert_eq!(args.lx, 2.5);
        assert_eq!(args.ly, 1.0);
        assert_eq!(args.x0, 0.0);
        assert_eq!(args.y0, -1.0);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn double_dash_flags() {
        let args = parse(&["--nx", "3", "--ny", "5", "--x0", "-0.5", "-o", "out"]).unwrap();
        assert_eq!((args.nx, args.ny), (3, 5));
        assert_eq!(args.x0, -0.5);
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn cell_counts_required() {
        assert!(parse(&["-nx", "2"]).is_err());
        assert!(parse(&["-ny", "2"]).is_err());
    }

    #[test]
    fn zero_cells_rejected() {
        assert!(parse(&["-nx", "0", "-ny", "2"]).is_err());
        assert!(parse(&["-nx", "two", "-ny", "2"]).is_err());
    }

    #[test]
    fn oversized_cell_counts_fail_resolution() {
        let args = parse(&["-nx", "18446744073709551615", "-ny", "2"]).unwrap();
        assert!(matches!(
            args.resolution(),
            Err(rectmsh::Error::InvalidResolution { .. })
        ));
    }

    #[test]
    fn negative_values_are_not_rewritten() {
        let normalized = normalize_args(["-1.5", "-o", "--nx"].map(OsString::from));
        assert_eq!(normalized, ["-1.5", "-o", "--nx"].map(OsString::from).to_vec());
    }

    #[test]
    fn domain_from_args() {
        let args = parse(&["-nx", "2", "-ny", "2", "-lx", "3", "-x0", "1"]).unwrap();
        assert_eq!(args.domain(), Rectangle::new(3., 1., 1., 0.));
        assert_eq!(args.resolution().unwrap().node_counts(), (3, 3));
    }
}
