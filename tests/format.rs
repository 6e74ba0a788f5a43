use std::fs::File;
use std::path::PathBuf;

use rstest::rstest;
use zonefmt::{format_zone, Priorities};

//----------- TestCase -------------------------------------------------------

/// A zonefile and the expected result of formatting it.
#[derive(serde::Deserialize)]
struct TestCase {
    /// Priority overrides, if any.
    #[serde(default)]
    priorities: Option<String>,

    /// The zonefile to format.
    zonefile: String,

    /// The expected output.
    result: String,
}

impl TestCase {
    fn load(path: &PathBuf) -> Self {
        let file = File::open(path).unwrap();
        serde_yaml::from_reader(file).unwrap()
    }

    fn priorities(&self) -> Priorities {
        match self.priorities.as_ref() {
            Some(overrides) => overrides.parse().unwrap(),
            None => Priorities::default(),
        }
    }
}

//----------- Tests ----------------------------------------------------------

/// Test cases defined by the .yaml files in test-data/zonefmt.
///
/// Note: Adding or removing .yaml files on disk won't be detected until the
/// test is re-compiled.
#[rstest]
fn format_cases(#[files("test-data/zonefmt/*.yaml")] path: PathBuf) {
    let case = TestCase::load(&path);
    let priorities = case.priorities();

    let formatted =
        format_zone(&mut case.zonefile.as_bytes(), &priorities).unwrap();
    assert_eq!(formatted, case.result, "{}", path.display());

    // Formatted output must come out of another round unchanged.
    let again = format_zone(&mut formatted.as_bytes(), &priorities).unwrap();
    assert_eq!(again, formatted, "{}", path.display());
}

#[test]
fn bad_ttl_produces_no_output() {
    let src = "$ORIGIN example.com.\n\
               www IN A 192.0.2.1\n\
               $TTL tomorrow\n\
               mail IN A 192.0.2.2\n";
    let err = format_zone(&mut src.as_bytes(), &Priorities::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "3: invalid $TTL: invalid number in duration"
    );
}

#[test]
fn files_are_independent() {
    let priorities = Priorities::default();
    let first = format_zone(
        &mut "$ORIGIN example.com.\n$TTL 1h\nwww IN A 192.0.2.1\n".as_bytes(),
        &priorities,
    )
    .unwrap();
    let second =
        format_zone(&mut "www IN A 192.0.2.1\n".as_bytes(), &priorities)
            .unwrap();
    assert_eq!(first, "www.example.com.  3600 IN A     192.0.2.1\n");
    assert_eq!(second, "www.     0 IN A     192.0.2.1\n");
}

#[test]
fn invalid_utf8_is_an_error() {
    let src: &[u8] = b"www IN A \xff\n";
    assert!(format_zone(&mut &src[..], &Priorities::default()).is_err());
}
