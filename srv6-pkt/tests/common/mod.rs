use std::{fs, path::PathBuf};

// Tests run with the crate root as the working directory.
fn example_path(fname: &str) -> PathBuf {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests");
    path.push("packet_examples");
    path.push(fname);
    path
}

/// Load a hex-encoded header from `tests/packet_examples`.
pub fn file_to_packet(fname: &str) -> Vec<u8> {
    let content = fs::read_to_string(example_path(fname)).unwrap();
    let content = content.trim();
    assert!(content.len() % 2 == 0, "odd number of hex digits in {}", fname);

    (0..content.len())
        .step_by(2)
        .map(|idx| u8::from_str_radix(&content[idx..idx + 2], 16).unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
