use super::*;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record};
use quickcheck::QuickCheck;

#[test]
fn normalize_path_cases() {
    let cases: &[(&str, &str)] = &[
        ("a/./b", "a/b"),
        ("a/../b", "b"),
        ("../../a", "../../a"),
        ("/a/../../b", "/../b"),
        ("/a/b/../c", "/a/c"),
        ("a/b/../../..", ".."),
        ("../a/../b", "../b"),
        ("./a", "a"),
        ("a/.", "a"),
        (".", ""),
        ("..", ".."),
        ("/", "/"),
        ("/..", "/.."),
        ("", ""),
        ("a/b/", "a/b/"),
        ("a//b", "a//b"),
        ("a//../b", "a/b"),
        (r"C:\Game\..\Content\.\wall.png", "C:/Content/wall.png"),
        (r"..\..\a", "../../a"),
    ];

    for (input, expected) in cases {
        assert_eq!(normalize_path(input), *expected, "normalize_path({input:?})");
    }
}

#[test]
fn remove_relative_parts_edits_in_place() {
    let mut path = String::from(r"/data\cache/./../logs");
    remove_relative_parts(&mut path);
    assert_eq!(path, "/data/logs");
}

#[test]
fn unresolved_parents_keep_their_count() {
    for depth in 1..6 {
        let input = format!("{}a", "../".repeat(depth));
        assert_eq!(normalize_path(&input), input, "depth {depth}");
    }
}

/// Build a path out of a small alphabet that exercises every branch.
fn path_from_codes(codes: &[u8], rooted: bool) -> String {
    const SEGMENTS: &[&str] = &["a", "b", "..", ".", "", "c.d", r"x\y"];

    let body: Vec<&str> = codes
        .iter()
        .map(|&c| SEGMENTS[usize::from(c) % SEGMENTS.len()])
        .collect();
    let body = body.join("/");
    if rooted { format!("/{body}") } else { body }
}

#[test]
fn normalize_path_is_idempotent_quickcheck() {
    fn prop(codes: Vec<u8>, rooted: bool) -> bool {
        let once = normalize_path(&path_from_codes(&codes, rooted));
        normalize_path(&once) == once
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(Vec<u8>, bool) -> bool);
}

#[test]
fn normalize_path_is_idempotent_on_arbitrary_text_quickcheck() {
    fn prop(path: String) -> bool {
        let once = normalize_path(&path);
        normalize_path(&once) == once
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn output_keeps_only_leading_parents_quickcheck() {
    fn prop(codes: Vec<u8>, rooted: bool) -> bool {
        let out = normalize_path(&path_from_codes(&codes, rooted));
        let body = out.strip_prefix('/').unwrap_or(&out);
        let segments: Vec<&str> = body.split('/').collect();

        // Parents may only appear as a leading run.
        let parents = segments.iter().take_while(|s| **s == "..").count();
        let keeps_root = !rooted || out.starts_with('/');
        keeps_root && !segments.contains(&".") && !segments[parents..].contains(&"..")
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(Vec<u8>, bool) -> bool);
}

struct TargetLog(Mutex<Vec<String>>);

impl Log for TargetLog {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut targets) = self.0.lock() {
            targets.push(format!("{} {}", record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

#[test]
fn trace_uses_crate_log_target() {
    static LOG: OnceLock<TargetLog> = OnceLock::new();
    let log = LOG.get_or_init(|| TargetLog(Mutex::new(Vec::new())));
    log::set_logger(log).expect("no other logger in this test binary");
    log::set_max_level(LevelFilter::Trace);

    assert_eq!(normalize_path("x/../traced"), "traced");

    let lines = log.0.lock().unwrap();
    assert!(
        lines
            .iter()
            .any(|line| line.starts_with("strutil::path ") && line.contains("traced")),
        "captured: {lines:?}"
    );
}
