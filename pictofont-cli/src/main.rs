//! `Pictofont` CLI — build icon fonts and stylesheets from a catalog.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use pictofont_css::{render_stylesheet, StyleOptions};
use pictofont_fonts::{
    build_glyph_table, load_catalog, render_font_document, BuildOptions, CodepointAllocator,
    ColorIndex, FontInfo,
};
use pictofont_graphics::LayoutPolicy;

#[derive(Parser)]
#[command(version, about = "Pictofont \u{2014} icon font builder")]
struct Cli {
    /// Icon catalog: a JSON array of {slug, hex, path} records
    catalog: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Font family name
    #[arg(long, default_value = "Pictofont")]
    name: String,

    /// CSS class prefix
    #[arg(long, default_value = "pf")]
    prefix: String,

    /// Comma-separated slugs to include (default: all)
    #[arg(long, value_name = "SLUGS")]
    only: Option<String>,

    /// Reuse codepoint slots of filtered-out icons instead of
    /// reserving them (codepoints become filter-dependent)
    #[arg(long)]
    no_preserve_slots: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(&cli.catalog)
        .map_err(|e| format!("cannot read {}: {e}", cli.catalog.display()))?;
    let icons = load_catalog(&json)?;

    let mut options = match &cli.only {
        Some(list) => BuildOptions::with_filter_list(list),
        None => BuildOptions::default(),
    };
    options.preserve_slots = !cli.no_preserve_slots;

    let info = FontInfo {
        family: cli.name.clone(),
    };
    let svg_dir = cli.output.join("svg");
    fs::create_dir_all(&svg_dir)?;

    // Per-policy builds are independent: each gets a fresh allocator
    // over the same catalog, so codepoints agree across policies. The
    // color index is taken from the first (canonical) run.
    let mut color_index = None;
    for policy in LayoutPolicy::ALL {
        let mut allocator = CodepointAllocator::new();
        let table = build_glyph_table(&icons, policy, &options, &mut allocator)?;
        if color_index.is_none() {
            color_index = Some(ColorIndex::from_table(&table, &icons));
        }

        let document = render_font_document(&table, &info);
        let path = svg_dir.join(format!("{}-{}.svg", cli.name, policy.name()));
        fs::write(&path, document)?;
        info!("wrote {}", path.display());
    }

    let index = color_index.unwrap_or_default();
    let css = render_stylesheet(
        &index,
        &StyleOptions {
            family: cli.name.clone(),
            prefix: cli.prefix.clone(),
        },
    );
    let css_path = cli.output.join(format!("{}.css", cli.name.to_lowercase()));
    fs::write(&css_path, css)?;
    info!("wrote {}", css_path.display());

    Ok(())
}
