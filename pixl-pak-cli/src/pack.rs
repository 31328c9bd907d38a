use std::path::{Path, PathBuf};

use anyhow::Context;
use pixl_pak_core::PackBuilder;

use crate::{PackCommand, check_pak_extension};

pub fn package(cmd: &PackCommand) -> anyhow::Result<()> {
    check_pak_extension(&cmd.output)?;

    let input_dir = Path::new(&cmd.input);
    if !input_dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {}", input_dir.display());
    }

    let output_path = PathBuf::from(&cmd.output);
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let report = PackBuilder::new(input_dir, &output_path)
        .emit_map(cmd.map)
        .overwrite(!cmd.no_override)
        .allow_empty(false)
        .run()
        .with_context(|| format!("Failed to pack `{}`", cmd.input))?;

    for entry in report.archive.entries() {
        log::debug!("Packed file: {}", entry.name());
    }
    println!(
        "Packed {} files into {} ({} bytes)",
        report.archive.entries().len(),
        output_path.display(),
        report.archive_size
    );
    if let Some(map_path) = &report.map_path {
        println!("Map file: {}", map_path.display());
    }
    println!("Done!");

    Ok(())
}
