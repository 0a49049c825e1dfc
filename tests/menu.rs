use std::io::{Cursor, Write};
use std::path::PathBuf;

use sort_search_rs::config::Config;
use sort_search_rs::menu::{Menu, SearchCase};

fn config() -> Config {
    Config {
        employees: PathBuf::from("does/not/exist/Employee.txt"),
        search_size: 1_000,
        print_limit: 100,
        seed: Some(0x5eed),
    }
}

fn run_session(config: Config, input: &str) -> String {
    let mut menu = Menu::new(Cursor::new(input.to_owned()), Vec::new(), config);
    menu.run().unwrap();
    String::from_utf8(menu.into_output()).unwrap()
}

#[test]
fn search_case_targets() {
    assert_eq!(SearchCase::Best.target_index(10), 0);
    assert_eq!(SearchCase::Average.target_index(10), 5);
    assert_eq!(SearchCase::Worst.target_index(10), 9);
    assert_eq!(SearchCase::Worst.target_index(1), 0);
}

#[test]
fn ends_on_empty_input() {
    let out = run_session(config(), "");

    assert!(out.starts_with("Welcome to the Sorting Application!"));
    assert!(out.ends_with("Exiting the application. Goodbye!\n"));
}

#[test]
fn run_one_sort() {
    let out = run_session(config(), "1\n5\n4\nno\n");

    assert!(out.contains("Original Array: "), "{out}");
    assert!(out.contains("6. library_sort"), "{out}");
    assert!(out.contains("Running merge_sort..."), "{out}");
    assert!(out.contains("merge_sort took "), "{out}");
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn run_all_sorts() {
    let out = run_session(config(), "2\n50\nn\n");

    for name in [
        "insertion_sort",
        "selection_sort",
        "bubble_sort",
        "merge_sort",
        "quick_sort",
        "library_sort",
    ] {
        assert!(out.contains(&format!("{name} took ")), "{name} missing: {out}");
    }
}

#[test]
fn long_sequences_are_not_echoed() {
    let out = run_session(config(), "2\n101\nno\n");
    assert!(!out.contains("Original Array: "), "{out}");
}

#[test]
fn run_searches() {
    for case in ["1", "2", "3"] {
        let out = run_session(config(), &format!("3\n{case}\nno\n"));

        for name in ["linear_search", "binary_search", "library_search"] {
            assert!(
                out.contains(&format!("{name}: search completed in ")),
                "{name} missing: {out}"
            );
        }
        // The target is taken from the sequence, every search has to find it.
        assert!(!out.contains("Result index: -1"), "{out}");
    }
}

#[test]
fn invalid_choice_continues() {
    let out = run_session(config(), "9\nyes\n1\n3\n7\nY\n1\nabc\nno\n");

    assert!(
        out.contains("invalid choice 9, expected a number between 1 and 4"),
        "{out}"
    );
    assert!(
        out.contains("invalid choice 7, expected a number between 1 and 6"),
        "{out}"
    );
    assert!(out.contains("invalid array size `abc`"), "{out}");
    assert_eq!(out.matches("Do you want to run:").count(), 3);
}

#[test]
fn zero_size_is_rejected() {
    let out = run_session(config(), "1\n0\nno\n");
    assert!(out.contains("size must be greater than 0, got 0"), "{out}");
}

#[test]
fn huge_size_is_rejected() {
    let out = run_session(config(), "1\n18446744073709551615\nyes\n2\n3\nno\n");

    assert!(
        out.contains("a sequence of length 18446744073709551615 is too large to randomize"),
        "{out}"
    );
    assert!(out.contains("Running all sorting algorithms..."), "{out}");
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn huge_search_size_is_rejected() {
    let config = Config {
        search_size: usize::MAX,
        ..config()
    };
    let out = run_session(config, "3\nno\n");

    assert!(out.contains("too large to randomize"), "{out}");
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn missing_employee_file() {
    let out = run_session(config(), "4\nno\n");
    assert!(
        out.contains("File not found: does/not/exist/Employee.txt"),
        "{out}"
    );
}

#[test]
fn employee_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Anna | Sales | 5").unwrap();
    writeln!(file, "Bob|Eng").unwrap();
    writeln!(file, "Daniel | Engineering | 10").unwrap();

    let config = Config {
        employees: file.path().to_path_buf(),
        ..config()
    };
    let out = run_session(config, "4\nno\n");

    assert!(out.contains("Skipped 1 malformed record(s)."), "{out}");
    assert!(out.contains("Filtered Names:\nDaniel\n"), "{out}");
    assert!(out.contains("Total Years of Experience: 15"), "{out}");
}
