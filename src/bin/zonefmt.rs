//! Formats zone files.

use clap::Parser;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};
use zonefmt::logging::init_logging;
use zonefmt::zonefile::error::Error;
use zonefmt::{format_zone, Priorities};

//------------ Args ----------------------------------------------------------

#[derive(Parser, Debug)]
#[command(version, about)]
/// Sorts and aligns the records of DNS zone files
struct Args {
    /// Custom sorting preferences, unspecified entries are scored 100
    #[arg(
        short,
        long,
        value_name = "TYPE=SCORE,...",
        default_value = "SOA=0,NS=10,MX=20"
    )]
    sort: Priorities,

    /// Write back into origin file instead of stdout
    #[arg(short, long)]
    write_file: bool,

    /// The zone files to format
    #[arg(required = true, value_name = "ZONEFILE")]
    zonefiles: Vec<PathBuf>,
}

//------------ main ----------------------------------------------------------

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    for path in &args.zonefiles {
        if let Err(err) = format_file(path, &args.sort, args.write_file) {
            error!(path = %path.display(), "{}", err);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

/// Formats a single zone file.
///
/// The formatted zone is complete before anything is written, so a failure
/// leaves the source file untouched.
fn format_file(
    path: &Path,
    priorities: &Priorities,
    write_file: bool,
) -> Result<(), Failure> {
    debug!(path = %path.display(), "formatting zone file");
    let mut file = File::open(path).map_err(Failure::Open)?;
    let formatted =
        format_zone(&mut file, priorities).map_err(Failure::Format)?;
    drop(file);

    if write_file {
        fs::write(path, formatted).map_err(Failure::Write)
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(formatted.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(Failure::Write)
    }
}

//------------ Failure -------------------------------------------------------

/// Processing a zone file failed.
#[derive(Debug)]
enum Failure {
    Open(io::Error),
    Format(Error),
    Write(io::Error),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Failure::Open(err) => {
                write!(f, "Unable to open zone file for read: {}", err)
            }
            Failure::Format(err) => {
                write!(f, "Unable to format zone file: {}", err)
            }
            Failure::Write(err) => {
                write!(f, "Unable to write formatted zone: {}", err)
            }
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args =
            Args::try_parse_from(["zonefmt", "-w", "-s", "A=5", "a.zone"])
                .unwrap();
        assert!(args.write_file);
        assert_eq!(args.sort.priority("A"), 5);
        assert_eq!(args.sort.priority("SOA"), 0);
        assert_eq!(args.zonefiles, [PathBuf::from("a.zone")]);

        let args = Args::try_parse_from(["zonefmt", "a.zone", "b.zone"])
            .unwrap();
        assert!(!args.write_file);
        assert_eq!(args.sort, Priorities::default());
        assert_eq!(args.zonefiles.len(), 2);
    }

    #[test]
    fn bad_args() {
        assert!(Args::try_parse_from(["zonefmt"]).is_err());
        assert!(Args::try_parse_from(["zonefmt", "-s", "A", "a.zone"])
            .is_err());
    }

    /// Returns a path in the temp directory unique to this test process.
    fn temp_zone(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "zonefmt-{}-{}.zone",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn write_file_replaces_content() {
        let path = temp_zone("good");
        fs::write(
            &path,
            "$ORIGIN example.com.\n$TTL 1h\nwww IN A 10.0.0.1\n@ IN NS ns1\n",
        )
        .unwrap();

        let res = format_file(&path, &Priorities::default(), true);
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(res.is_ok());
        assert_eq!(
            content,
            "example.com.      3600 IN NS    ns1\n\
             www.example.com.  3600 IN A     10.0.0.1\n"
        );
    }

    #[test]
    fn failed_format_leaves_file_alone() {
        let path = temp_zone("bad-ttl");
        let src = b"www IN A 10.0.0.1\n$TTL soon\n";
        fs::write(&path, src).unwrap();

        let res = format_file(&path, &Priorities::default(), true);
        let content = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(matches!(res, Err(Failure::Format(_))));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Unable to format zone file: 2: invalid $TTL: \
             invalid number in duration"
        );
        assert_eq!(content, src);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = temp_zone("missing");
        let res = format_file(&path, &Priorities::default(), true);
        assert!(matches!(res, Err(Failure::Open(_))));
        assert!(!path.exists());
    }
}
