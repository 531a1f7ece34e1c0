//! Compiles a three-entry project spec and prints the resulting configs.
//!
//! Run with `cargo run -p esnext-build --example basic -- --prod`.

use esnext_build::{compile, Argv, EntrySpec, GlobalSpec, MemorySourceTree, ProjectLayout};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prod = std::env::args().any(|arg| arg == "--prod");

    let mut spec = GlobalSpec::default()
        .with_entry("bundle", EntrySpec::new("index.js"))
        .with_entry("ts-bundle", EntrySpec::new("test.ts"))
        .with_entry(
            "styles",
            EntrySpec::new("styles/styles.scss").css_modules(true),
        )
        .with_alias("Data", "data")
        .with_alias("Styles", "styles")
        .with_alias("Types", "types");
    if prod {
        spec = spec.with_argv(Argv::production());
    }

    let layout = ProjectLayout::from_current_dir()?;
    let tree = MemorySourceTree::new().with_file("index.html");
    let configs = compile(&spec, &layout, &tree)?;

    for config in &configs {
        println!("{}", serde_json::to_string_pretty(config)?);
    }

    Ok(())
}
