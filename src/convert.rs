//! External vector-to-raster converter backends
//!
//! Each backend shells out to a system tool (`rsvg-convert`, `inkscape`)
//! to rasterize an SVG source at the requested size, then reads the PNG
//! back into a [`Canvas`]. A missing tool, a nonzero exit, or a missing
//! SVG source all report `Error::ToolUnavailable` so the source chain can
//! fall through to the procedural renderer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::rendering::Canvas;
use crate::{Error, IconSource, Result};

/// Backend for `rsvg-convert` (librsvg), tried first because it is the
/// faster of the two converters.
pub struct RsvgConvert {
    svg: PathBuf,
}

impl RsvgConvert {
    pub fn new(svg: impl Into<PathBuf>) -> Self {
        Self { svg: svg.into() }
    }
}

impl IconSource for RsvgConvert {
    fn name(&self) -> &str {
        "rsvg-convert"
    }

    fn render(&self, size: u32) -> Result<Canvas> {
        let out = scratch_path("rsvg", size);
        let mut cmd = Command::new("rsvg-convert");
        cmd.arg("-w")
            .arg(size.to_string())
            .arg("-h")
            .arg(size.to_string())
            .arg("-o")
            .arg(&out)
            .arg(&self.svg);
        run_converter(cmd, "rsvg-convert", &self.svg)?;
        read_canvas(&out, size)
    }
}

/// Backend for Inkscape's command-line export.
pub struct Inkscape {
    svg: PathBuf,
}

impl Inkscape {
    pub fn new(svg: impl Into<PathBuf>) -> Self {
        Self { svg: svg.into() }
    }
}

impl IconSource for Inkscape {
    fn name(&self) -> &str {
        "inkscape"
    }

    fn render(&self, size: u32) -> Result<Canvas> {
        let out = scratch_path("inkscape", size);
        let mut cmd = Command::new("inkscape");
        cmd.arg("--export-type=png")
            .arg(format!("--export-filename={}", out.display()))
            .arg(format!("--export-width={}", size))
            .arg(format!("--export-height={}", size))
            .arg(&self.svg);
        run_converter(cmd, "inkscape", &self.svg)?;
        read_canvas(&out, size)
    }
}

/// Scratch file for one converter invocation; unique per process so
/// parallel test runs do not collide.
fn scratch_path(tool: &str, size: u32) -> PathBuf {
    std::env::temp_dir().join(format!(
        "iconforge-{}-{}-{}.png",
        tool,
        std::process::id(),
        size
    ))
}

/// Spawn one converter and map every failure mode to `ToolUnavailable`.
fn run_converter(mut cmd: Command, tool: &str, svg: &Path) -> Result<()> {
    if !svg.exists() {
        return Err(Error::ToolUnavailable(format!(
            "{}: vector source {} not found",
            tool,
            svg.display()
        )));
    }
    let output = cmd.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ToolUnavailable(format!("{} not found in PATH", tool)),
        _ => Error::ToolUnavailable(format!("{} failed to start: {}", tool, e)),
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::ToolUnavailable(format!(
            "{} exited with {}: {}",
            tool,
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

/// Read a converter-produced PNG back into an owned canvas and drop the
/// scratch file.
fn read_canvas(path: &Path, size: u32) -> Result<Canvas> {
    let decoded = image::open(path).map_err(|e| Error::DecodeError(e.to_string()));
    let _ = std::fs::remove_file(path);
    let rgba = decoded?.to_rgba8();
    if rgba.width() != size || rgba.height() != size {
        return Err(Error::DecodeError(format!(
            "converter produced {}x{}, expected {}x{}",
            rgba.width(),
            rgba.height(),
            size,
            size
        )));
    }
    Canvas::from_rgba(size, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_svg_reports_unavailable() {
        let src = RsvgConvert::new("does/not/exist.svg");
        match src.render(16) {
            Err(Error::ToolUnavailable(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected ToolUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn scratch_paths_differ_per_tool() {
        assert_ne!(scratch_path("a", 16), scratch_path("b", 16));
        assert_ne!(scratch_path("a", 16), scratch_path("a", 48));
    }
}
