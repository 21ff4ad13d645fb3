use chrono::FixedOffset;
use std::process::Command;
fn main() {
    let git_hash = Command::new("git")
        .args(&["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| String::from("unknown"));
    let date = chrono::offset::Local::now()
        .with_timezone(&FixedOffset::east(7 * 60 * 60))
        .format("%Y:%m:%d-%T");
    println!("cargo:rustc-env=BUILD_VERSION={}-{}", date, git_hash);
}
