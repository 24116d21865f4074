//! Expand a templated UI description file and print the resolved XML.
//!
//! ```sh
//! cargo run --example preprocess -- app.glade -e linux -e header-bar \
//!     -i /usr/share/app/icons=./icons
//! ```
use clap::Parser;
use glaze::TemplateEngine;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Expand templating tags in a glade-style UI description")]
struct Args {
    /// Input file with <if>/<copyobject> templating tags.
    input: PathBuf,

    /// Condition names to enable (repeatable).
    #[arg(short, long)]
    enable: Vec<String>,

    /// Icon path remap as PREFIX=REPLACEMENT (repeatable, first match wins).
    #[arg(short, long)]
    icons: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = TemplateEngine::new();
    engine.enable_conditions(&args.enable);
    for rule in &args.icons {
        let (prefix, replacement) = rule
            .split_once('=')
            .ok_or("icon remap must be PREFIX=REPLACEMENT")?;
        engine.replace_icon_path(prefix, replacement);
    }

    let source = std::fs::read_to_string(&args.input)?;
    print!("{}", engine.build(&source)?);
    Ok(())
}
