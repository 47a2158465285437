use std::fs;
use std::path::{Path, PathBuf};

/// Scratch vault under tests/output/<case>/, wiped and recreated per run.
/// Each test uses its own case name so parallel tests never collide.
pub fn scratch_vault(case: &str) -> PathBuf {
    let dir = PathBuf::from("tests/output").join(case);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch vault");
    dir
}

pub fn write_note(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write note");
}

pub fn read_canvas(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).expect("read canvas file");
    serde_json::from_str(&text).expect("canvas file is valid JSON")
}

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
