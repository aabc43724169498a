use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace `config.toml` next to the built binary,
/// where `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR = target/<profile>/build/backend-xxx/out
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    let dest_config = target_dir.join("config.toml");
    fs::copy(&source_config, &dest_config)
        .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}
