//! ---
//! fms_section: "01-release-versioning"
//! fms_subsection: "module"
//! fms_type: "source"
//! fms_scope: "code"
//! fms_description: "Release version metadata shared across the workspace."
//! fms_version: "v0.1.0-alpha1"
//! fms_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // No fail_on_error: builds outside a git checkout keep working and
    // report placeholder values for the git fields.
    EmitBuilder::builder()
        .all_build()
        .all_cargo()
        .all_git()
        .emit()?;

    // vergen stopped emitting the cargo profile in v8; forward it ourselves
    // under the same key the metadata module expects.
    println!(
        "cargo:rustc-env=VERGEN_CARGO_PROFILE={}",
        std::env::var("PROFILE")?
    );

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../VERSION");
    Ok(())
}
