use std::process::{Command, Output};

fn run_hashhunt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hashhunt"))
        .args(args)
        .output()
        .expect("Failed to execute hashhunt")
}

#[test]
fn test_finds_single_digit_prefix() {
    let output = run_hashhunt(&["-p", "0", "-a", "2", "-t", "4"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        stdout
    );

    assert!(stdout.contains("hashhunt v"), "Should print the banner");
    assert!(stdout.contains("Hunting prefix: 0"));
    assert!(stdout.contains("SHA256: 0"), "Should print the matching digest");
    assert!(stdout.contains("From data block (hex encoded): "));
    assert!(stdout.contains("Processed "));
}

#[test]
fn test_reported_block_hashes_to_reported_digest() {
    let output = run_hashhunt(&["-p", "ab", "-a", "md5", "--seed", "5"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let digest = stdout
        .lines()
        .find_map(|l| l.strip_prefix("MD5: "))
        .expect("digest line");
    let block = stdout
        .lines()
        .find_map(|l| l.strip_prefix("From data block (hex encoded): "))
        .expect("data block line");

    let bytes = hex::decode(block).expect("block is hex");
    assert_eq!(bytes.len(), 16);
    assert_eq!(hashhunt::HashKind::Md5.hasher().digest_hex(&bytes), digest);
    assert!(digest.starts_with("ab"));
}

#[test]
fn test_uppercase_prefix_is_normalized() {
    let output = run_hashhunt(&["-p", "F", "-a", "sha1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hunting prefix: f"));
    assert!(stdout.contains("SHA1: f"));
}

#[test]
fn test_unknown_algorithm_id() {
    let output = run_hashhunt(&["-p", "0", "-a", "99"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown hash algorithm id 99"), "stderr: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Processed"), "No search should run");
}

#[test]
fn test_prefix_longer_than_digest() {
    let prefix = "a".repeat(33);
    let output = run_hashhunt(&["-p", &prefix, "-a", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("prefix is 33 hex digits but MD5 digests only have 32"));
}

#[test]
fn test_invalid_prefix() {
    let output = run_hashhunt(&["-p", "xyz"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid hex digit 'x'"));
}

#[test]
fn test_zero_threads() {
    let output = run_hashhunt(&["-p", "0", "-t", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("worker count must be at least 1"));
}

#[test]
fn test_missing_prefix() {
    let output = run_hashhunt(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_timeout_without_match() {
    let prefix = "0".repeat(64);
    let output = run_hashhunt(&["-p", &prefix, "-t", "2", "--timeout", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No match before deadline."));
    assert!(stdout.contains("Result: timed out"));
}

#[test]
fn test_list_algorithms() {
    let output = run_hashhunt(&["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available hash algorithms:"));
    assert!(stdout.contains(" 2: SHA256"));
    assert!(stdout.contains(" 9: SHA3-512"));
    assert!(stdout.contains("10: WHIRLPOOL"));
}

#[test]
fn test_huge_timeout_is_accepted() {
    let output = run_hashhunt(&["-p", "0", "-t", "2", "--timeout", "18446744073709551615"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SHA256: 0"));
}
