//! Embeds a build number and timestamp into the binary.

use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=src");

    let build = fs::read_to_string("build_number.txt")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
        + 1;
    fs::write("build_number.txt", build.to_string()).expect("write build_number.txt");

    println!("cargo:rustc-env=BREWSHEET_BUILD_NUMBER={}", build);
    println!(
        "cargo:rustc-env=BREWSHEET_BUILD_TIMESTAMP={}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
}
