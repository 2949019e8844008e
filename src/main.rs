use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use iconforge::{Template, ICON_SIZES};

/// Generate the browser-extension PNG icon set (16, 48 and 128 px)
#[derive(Parser)]
#[command(name = "iconforge", version, about)]
struct Cli {
    /// Icon template drawn by the procedural fallback
    #[arg(long, value_enum, default_value = "robot")]
    template: TemplateArg,

    /// SVG source; when given, external converters are tried before the
    /// procedural template
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TemplateArg {
    Robot,
    SyncCard,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Robot => Template::Robot,
            TemplateArg::SyncCard => Template::SyncCard,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let sources = iconforge::default_sources(cli.template.into(), cli.svg.as_deref());
    let out_dir = Path::new("icons");

    let results = match iconforge::generate_all(&sources, &ICON_SIZES, out_dir) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Cannot prepare {}: {}", out_dir.display(), e);
            return ExitCode::FAILURE;
        }
    };

    // One failed size fails the run, but the remaining sizes were still
    // attempted above.
    let mut failed = false;
    for (size, outcome) in results {
        match outcome {
            Ok(path) => println!("Wrote {} ({}x{})", path.display(), size, size),
            Err(e) => {
                failed = true;
                eprintln!("icon{}.png failed: {}", size, e);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
