use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use pixl_pak_core::{ExtractEvent, PakFile};

use crate::{CatCommand, ListCommand, UnpackCommand, check_pak_extension};

/// Explicit `output`, else a directory named after the archive's stem next to it.
/// A bare file name has an empty parent, so `game.pak` resolves to `game`.
fn output_path<P: AsRef<Path>>(output: &Option<String>, input: P) -> PathBuf {
    if let Some(output) = &output {
        // specified output directory
        output.into()
    } else if let Some(parent) = input.as_ref().parent() {
        // relative to input directory
        let dir_name = input
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or("output".to_string());
        parent.join(dir_name)
    } else {
        // current directory
        ".".into()
    }
}

fn open(input: &str) -> anyhow::Result<PakFile> {
    check_pak_extension(input)?;
    PakFile::open(input).with_context(|| format!("Failed to open `{}`", input))
}

pub fn unpack(cmd: &UnpackCommand) -> anyhow::Result<()> {
    let mut pak = open(&cmd.input)?;
    let output_path = output_path(&cmd.output, &cmd.input);

    let bar = ProgressBar::new(pak.entries().len() as u64);
    bar.set_style(
        ProgressStyle::default_bar().template("{pos}/{len} files written {wide_bar} elapsed: {elapsed} eta: {eta}")?,
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.println(format!("Output directory: `{}`", output_path.display()));

    let bar1 = bar.clone();
    let result = pak
        .extractor(&output_path)
        .overwrite(!cmd.no_override)
        .on_event(move |event| {
            if let ExtractEvent::FileDone { .. } = event {
                bar1.inc(1);
            }
        })
        .run();
    bar.finish();

    let report = result.with_context(|| format!("Failed to extract `{}`", cmd.input))?;
    println!("Done. {} files, {} bytes.", report.extracted, report.bytes);

    Ok(())
}

pub fn cat(cmd: &CatCommand) -> anyhow::Result<()> {
    let mut pak = open(&cmd.input)?;
    let data = pak.read_entry(&cmd.name)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&data)?;
    stdout.flush()?;
    Ok(())
}

pub fn list(cmd: &ListCommand) -> anyhow::Result<()> {
    let pak = open(&cmd.input)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(pak.archive())?);
        return Ok(());
    }

    let header = pak.header();
    println!(
        "{} v{}, data at {}, {} entries",
        header.magic_str(),
        header.version(),
        header.data_offset(),
        header.entry_count()
    );
    for entry in pak.entries() {
        println!("{:>12} {:>12}  {}", entry.offset(), entry.size(), entry.name());
    }
    Ok(())
}
