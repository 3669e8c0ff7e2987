fn main() {
    // Stamp the build time; the footer derives the copyright year from it
    // so the static site never needs a runtime clock.
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
