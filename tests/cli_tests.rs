use std::io::Write;

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

const CATALOG: &str = "\
CSC 116,Intro to Programming - Java,001,3,jdyoung2,MW,910,1100
CSC 216,Software Development Fundamentals,001,3,sesmith5,MW,1330,1445
CSC 226,Discrete Mathematics for Computer Scientists,001,3,tmbarnes,M,1330,1445
CSC 230,C and Software Tools,601,3,dbsturgi,A
";

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(CATALOG.as_bytes()).expect("write catalog");
    file
}

#[allow(deprecated)]
fn run_cli(args: &[&str], script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env_remove("SCHEDULE_PLANNER_CATALOG")
        .env_remove("SCHEDULE_PLANNER_TITLE")
        .args(args)
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_adds_course_from_catalog() {
    let catalog = catalog_file();
    let path = catalog.path().to_string_lossy().to_string();
    run_cli(&[path.as_str()], "add CSC 216 001\nshow\nquit\n")
        .success()
        .stdout(str_contains("Added CSC 216 001 to the schedule."))
        .stdout(str_contains("MW 1:30PM-2:45PM"));
}

#[test]
fn cli_reports_conflicts_and_duplicates() {
    let catalog = catalog_file();
    let path = catalog.path().to_string_lossy().to_string();
    run_cli(
        &[path.as_str()],
        "add CSC 216 001\nadd CSC 226 001\nadd CSC 216 001\nadd CSC 999 001\nquit\n",
    )
    .success()
    .stdout(str_contains(
        "Error: The course cannot be added due to a conflict.",
    ))
    .stdout(str_contains("Error: You are already enrolled in CSC 216"))
    .stdout(str_contains("CSC 999 001 is not in the catalog."));
}

#[test]
fn cli_events_title_and_remove() {
    run_cli(
        &[],
        "event Exercise|MWF|900|1000|Cardio Days\nevent Breakfast|TF|1000|1130|\nevent Nap|MXF|1300|1400\ntitle Fall Plan\nremove 0\nremove 5\nquit\n",
    )
    .success()
    .stdout(str_contains("Added event Exercise."))
    .stdout(str_contains(
        "Error: The event cannot be added due to a conflict.",
    ))
    .stdout(str_contains("Error: Invalid meeting days and times."))
    .stdout(str_contains("Schedule title set to 'Fall Plan'."))
    .stdout(str_contains("Removed activity 0."))
    .stdout(str_contains("No activity at position 5."));
}

#[test]
fn cli_export_writes_schedule_file() {
    let catalog = catalog_file();
    let path = catalog.path().to_string_lossy().to_string();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("schedule.txt");
    let script = format!(
        "add CSC 230 601\nevent Exercise|SU|900|1000|Gym\nexport {}\nquit\n",
        out.display()
    );
    run_cli(&[path.as_str()], &script)
        .success()
        .stdout(str_contains("Schedule exported to"));

    let written = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "CSC 230,C and Software Tools,601,3,dbsturgi,A",
            "Exercise,SU,900,1000,Gym",
        ]
    );
}

#[test]
fn cli_missing_catalog_starts_empty() {
    run_cli(&["/nonexistent/catalog.txt"], "catalog\nload /nonexistent/other.txt\nfrobnicate\nquit\n")
        .success()
        .stdout(str_contains(
            "Error: Cannot find file. (/nonexistent/catalog.txt)",
        ))
        .stdout(str_contains(
            "Error: Cannot find file. (/nonexistent/other.txt)",
        ))
        .stdout(str_contains("Unknown command 'frobnicate'"));
}

#[test]
fn cli_export_failure_names_the_destination() {
    run_cli(&[], "export /nonexistent/dir/schedule.txt\nquit\n")
        .success()
        .stdout(str_contains(
            "Error: The file cannot be saved. (/nonexistent/dir/schedule.txt)",
        ));
}
