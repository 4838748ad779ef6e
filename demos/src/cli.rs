//! Argument handling and the score-and-print driver for the `floorplan`
//! binary.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use floorplan_core::{Layout, PlanError};
use floorplan_paths::{Scorer, laws};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::generate::LayoutGen;

pub const USAGE: &str = "\
usage: floorplan [--codes] [--check] LAYOUT.json
       floorplan [--codes] [--check] --random ROWS COLS [SEED]

  --codes   print -2/-1/0/distance codes instead of G/L/0/distance
  --check   verify the distance laws and report violations";

/// Where the layout comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Random {
        rows: usize,
        cols: usize,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub codes: bool,
    pub check: bool,
}

/// Errors surfaced by the command-line tool.
#[derive(Debug)]
pub enum DemoError {
    /// Bad command-line arguments.
    Usage(String),
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Plan(PlanError),
    Output(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "failed to parse layout {}: {source}", path.display())
            }
            Self::Plan(e) => write!(f, "invalid layout: {e}"),
            Self::Output(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Plan(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<PlanError> for DemoError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Options, DemoError>
where
    I: IntoIterator<Item = String>,
{
    let mut codes = false;
    let mut check = false;
    let mut positional = Vec::new();
    let mut random = false;

    for arg in args {
        match arg.as_str() {
            "--codes" => codes = true,
            "--check" => check = true,
            "--random" => random = true,
            "-h" | "--help" => return Err(DemoError::Usage(String::new())),
            s if s.starts_with("--") => {
                return Err(DemoError::Usage(format!("unknown option {s}")));
            }
            _ => positional.push(arg),
        }
    }

    let source = if random {
        let number = |i: usize, what: &str| -> Result<Option<u64>, DemoError> {
            positional
                .get(i)
                .map(|s| {
                    s.parse::<u64>()
                        .map_err(|_| DemoError::Usage(format!("{what} must be a number, got {s:?}")))
                })
                .transpose()
        };
        let (Some(rows), Some(cols)) = (number(0, "ROWS")?, number(1, "COLS")?) else {
            return Err(DemoError::Usage("--random needs ROWS and COLS".to_owned()));
        };
        if positional.len() > 3 {
            return Err(DemoError::Usage("too many arguments".to_owned()));
        }
        Source::Random {
            rows: usize::try_from(rows)
                .map_err(|_| DemoError::Usage("ROWS is too large".to_owned()))?,
            cols: usize::try_from(cols)
                .map_err(|_| DemoError::Usage("COLS is too large".to_owned()))?,
            seed: number(2, "SEED")?,
        }
    } else {
        match positional.as_slice() {
            [path] => Source::File(PathBuf::from(path)),
            [] => return Err(DemoError::Usage("missing LAYOUT.json".to_owned())),
            _ => return Err(DemoError::Usage("too many arguments".to_owned())),
        }
    };

    Ok(Options {
        source,
        codes,
        check,
    })
}

/// Read a JSON layout file.
pub fn load_layout(path: &Path) -> Result<Layout, DemoError> {
    let json = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| DemoError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Build, score and print the selected layout to `out`.
///
/// Returns the number of law violations found (always 0 unless `--check`
/// was given).
pub fn run(opts: &Options, out: &mut impl Write) -> Result<usize, DemoError> {
    let layout = match &opts.source {
        Source::File(path) => load_layout(path)?,
        Source::Random { rows, cols, seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            log::info!("generating random layout with seed {seed}");
            LayoutGen::new(StdRng::seed_from_u64(seed)).generate(*rows, *cols)
        }
    };
    let plan = layout.build()?;
    log::info!(
        "scoring {} floor plan with {} guards and {} locked rooms",
        plan.bounds(),
        layout.guards.len(),
        layout.locked.len()
    );

    let map = Scorer::new().score(&plan);
    if opts.codes {
        for row in map.to_codes() {
            let line: Vec<String> = row.iter().map(i64::to_string).collect();
            writeln!(out, "{}", line.join(" ")).map_err(DemoError::Output)?;
        }
    } else {
        write!(out, "{map}").map_err(DemoError::Output)?;
    }

    if !opts.check {
        return Ok(0);
    }
    let violations = laws::check(&plan, &map);
    for v in &violations {
        log::error!("{v}");
    }
    if violations.is_empty() {
        log::info!("all distance laws hold");
    }
    Ok(violations.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn parse_file() {
        let opts = parse_args(args(&["--codes", "plan.json"])).unwrap();
        assert_eq!(opts.source, Source::File(PathBuf::from("plan.json")));
        assert!(opts.codes);
        assert!(!opts.check);
    }

    #[test]
    fn parse_random() {
        let opts = parse_args(args(&["--random", "4", "6", "9", "--check"])).unwrap();
        assert_eq!(
            opts.source,
            Source::Random {
                rows: 4,
                cols: 6,
                seed: Some(9)
            }
        );
        assert!(opts.check);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_args(args(&[])), Err(DemoError::Usage(_))));
        assert!(matches!(parse_args(args(&["a", "b"])), Err(DemoError::Usage(_))));
        assert!(matches!(parse_args(args(&["--random", "4"])), Err(DemoError::Usage(_))));
        assert!(matches!(
            parse_args(args(&["--random", "x", "4"])),
            Err(DemoError::Usage(_))
        ));
        assert!(matches!(parse_args(args(&["--fast", "p"])), Err(DemoError::Usage(_))));
    }

    #[test]
    fn run_random_is_reproducible() {
        let opts = parse_args(args(&["--random", "8", "8", "1", "--check"])).unwrap();
        let mut a = Vec::new();
        let mut b = Vec::new();
        assert_eq!(run(&opts, &mut a).unwrap(), 0);
        assert_eq!(run(&opts, &mut b).unwrap(), 0);
        assert_eq!(a, b);
        assert_eq!(String::from_utf8(a).unwrap().lines().count(), 8);
    }

    #[test]
    fn run_from_file() {
        let path = std::env::temp_dir().join(format!("floorplan-demo-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"rows": 3, "cols": 3, "guards": [{"row": 1, "col": 1}]}"#,
        )
        .unwrap();
        let opts = Options {
            source: Source::File(path.clone()),
            codes: true,
            check: false,
        };
        let mut out = Vec::new();
        run(&opts, &mut out).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(String::from_utf8(out).unwrap(), "2 1 2\n1 -2 1\n2 1 2\n");
    }

    #[test]
    fn run_reports_plan_errors() {
        let opts = Options {
            source: Source::Random {
                rows: 0,
                cols: 3,
                seed: Some(1),
            },
            codes: false,
            check: false,
        };
        let err = run(&opts, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, DemoError::Plan(PlanError::InvalidDimensions { .. })));
    }

    #[test]
    fn bundled_gallery_layout() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("layouts/gallery.json");
        let opts = Options {
            source: Source::File(path),
            codes: false,
            check: true,
        };
        let mut out = Vec::new();
        assert_eq!(run(&opts, &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 1 2 3 2 3 4 5 6 7");
        assert_eq!(lines[8], "L L L L L L L L L L");
        assert_eq!(lines[9], "0 0 0 0 0 0 0 0 0 0");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_layout(Path::new("/nonexistent/floorplan.json")).unwrap_err();
        assert!(matches!(err, DemoError::Io { .. }));
    }
}
