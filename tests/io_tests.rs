use fixedset::io::{process_queries, read_input, write_answers};
use fixedset::FixedSetConfig;

fn run(input: &str) -> String {
    let (keys, queries) = read_input(input.as_bytes()).unwrap();
    let answers = process_queries(&keys, &queries, &FixedSetConfig::default().with_seed(9)).unwrap();
    let mut out = Vec::new();
    write_answers(&mut out, &answers).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_sample_round() {
    assert_eq!(run("4\n1 2 3 4\n4\n1 5 3 100\n"), "Yes\nNo\nYes\nNo\n");
}

#[test]
fn test_no_keys() {
    assert_eq!(run("0\n3\n0 1 -1\n"), "No\nNo\nNo\n");
}

#[test]
fn test_no_queries() {
    assert_eq!(run("3\n7 8 9\n0\n"), "");
}

#[test]
fn test_negative_keys_and_free_layout() {
    assert_eq!(run("3 -7 0 -1000000000 5 -7 7 0 1 -1000000000"), "Yes\nNo\nYes\nNo\nYes\n");
}
