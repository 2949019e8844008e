//! IconForge
//!
//! A small icon generator for browser-extension packaging. It produces the
//! standard `icons/icon{16,48,128}.png` set either by rasterizing an SVG
//! source through an external converter (`rsvg-convert`, then `inkscape`)
//! or, when no converter is available, by drawing a canned logo directly
//! onto an RGBA canvas from primitive shapes.
//!
//! # Features
//!
//! - **Procedural templates**: two fixed compositions (`robot`,
//!   `sync-card`) that render deterministically at any size
//! - **Ordered source chain**: converter backends are tried in sequence
//!   and fall through to the procedural template, never failing the batch
//!   just because a tool is missing
//! - **Per-size isolation**: one failed size does not stop the others
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use iconforge::{Template, ICON_SIZES};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = iconforge::default_sources(Template::Robot, None);
//! for (size, outcome) in iconforge::generate_all(&sources, &ICON_SIZES, Path::new("icons"))? {
//!     let path = outcome?;
//!     println!("Wrote {} ({}x{})", path.display(), size, size);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

// Procedural renderer: canvas, primitives, templates
pub mod rendering;
pub use rendering::{Canvas, Template};

// External vector-to-raster converter backends
pub mod convert;

/// The icon sizes a browser-extension manifest expects
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Core trait for anything that can produce an icon canvas.
///
/// Implemented by the external converter backends in [`convert`] and by
/// [`Template`] itself (the procedural path). Sources are tried in order by
/// [`render_with_sources`]; a source signals "skip me" by returning
/// [`Error::ToolUnavailable`] or [`Error::DecodeError`].
pub trait IconSource {
    /// Short name used in log and error output
    fn name(&self) -> &str;

    /// Produce an RGBA canvas of exactly `size` x `size` pixels
    fn render(&self, size: u32) -> Result<Canvas>;
}

/// Try each source in order until one produces a canvas.
///
/// Recoverable failures (`ToolUnavailable`, `DecodeError`) log a warning
/// and move on to the next source; anything else aborts immediately. An
/// exhausted chain is [`Error::NoSource`].
pub fn render_with_sources(sources: &[Box<dyn IconSource>], size: u32) -> Result<Canvas> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    for source in sources {
        match source.render(size) {
            Ok(canvas) => {
                log::debug!("{} produced the {}px canvas", source.name(), size);
                return Ok(canvas);
            }
            Err(e @ (Error::ToolUnavailable(_) | Error::DecodeError(_))) => {
                log::warn!("{} skipped: {}", source.name(), e);
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::NoSource(size))
}

/// The standard source chain: external converters first when an SVG source
/// is given, the procedural template always last.
pub fn default_sources(template: Template, svg: Option<&Path>) -> Vec<Box<dyn IconSource>> {
    let mut sources: Vec<Box<dyn IconSource>> = Vec::new();
    if let Some(svg) = svg {
        sources.push(Box::new(convert::RsvgConvert::new(svg)));
        sources.push(Box::new(convert::Inkscape::new(svg)));
    }
    sources.push(Box::new(template));
    sources
}

/// Deterministic output path for one size: `<dir>/icon<size>.png`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon{}.png", size))
}

/// Render one size through the chain and write it under `dir`.
pub fn generate_icon(
    sources: &[Box<dyn IconSource>],
    size: u32,
    dir: &Path,
) -> Result<PathBuf> {
    let canvas = render_with_sources(sources, size)?;
    let path = icon_path(dir, size);
    canvas.write_png(&path)?;
    Ok(path)
}

/// Generate every requested size, continuing past per-size failures.
///
/// The outer `Err` only covers failure to create the output directory;
/// otherwise the per-size outcomes come back in input order so the caller
/// can report each and decide the overall exit status.
pub fn generate_all(
    sources: &[Box<dyn IconSource>],
    sizes: &[u32],
    dir: &Path,
) -> Result<Vec<(u32, Result<PathBuf>)>> {
    std::fs::create_dir_all(dir).map_err(|e| Error::WriteError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    Ok(sizes
        .iter()
        .map(|&size| (size, generate_icon(sources, size, dir)))
        .collect())
}
