//! Sprout's main application entry point.
//! Parses arguments, loads the component tree and runs the generator.

use sprout::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    generator::Generator,
    registry::TypeRegistry,
    renderer::LiteralRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the component tree and template overrides
/// 2. Builds the type registry
/// 3. Wipes the output directory and generates the tree
fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_deref(), std::env::current_dir()?)?;
    let app_prefix = args.app_prefix.unwrap_or(config.app_prefix);

    let registry = TypeRegistry::default().with_overrides(config.templates);
    let renderer = LiteralRenderer::new();
    let generator = Generator::new(&registry, &renderer, &args.templates, app_prefix);

    let report = generator.generate(&config.components, &args.output_dir)?;

    for file in &report.files {
        println!("Generated: '{}'", file.display());
    }
    println!(
        "Generated {} files in {} directories under {}.",
        report.files.len(),
        report.directories.len(),
        args.output_dir.display()
    );
    Ok(())
}
