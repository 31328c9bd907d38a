use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PakError, Result};
use crate::filename;
use crate::pakfile::PakFile;
use crate::read::PakEntryReader;

#[derive(Debug, Clone)]
pub enum ExtractEvent {
    Start { total: usize },
    FileDone { name: String, size: u32 },
    Finish { extracted: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub extracted: usize,
    pub bytes: u64,
}

/// Extract every entry, in index order, stopping at the first failure.
///
/// Files written before a failure are left in place.
pub struct PakExtractBuilder<'a> {
    pak: &'a mut PakFile,
    output_dir: PathBuf,
    overwrite: bool,
    on_event: Option<Box<dyn Fn(ExtractEvent) + 'a>>,
}

impl<'a> PakExtractBuilder<'a> {
    pub fn new(pak: &'a mut PakFile, output_dir: impl AsRef<Path>) -> Self {
        Self {
            pak,
            output_dir: output_dir.as_ref().to_path_buf(),
            overwrite: true,
            on_event: None,
        }
    }

    /// Replace existing files. When off, an existing target aborts extraction.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn on_event<F>(mut self, on_event: F) -> Self
    where
        F: Fn(ExtractEvent) + 'a,
    {
        self.on_event = Some(Box::new(on_event));
        self
    }

    pub fn run(mut self) -> Result<ExtractReport> {
        if self.pak.entries().is_empty() {
            return Err(PakError::EmptyArchive);
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(PakError::EmptyOutputDir);
        }

        let emit = |event: ExtractEvent| {
            if let Some(on_event) = &self.on_event {
                on_event(event);
            }
        };

        let (archive, reader) = self.pak.parts_mut();
        let data_offset = archive.header().data_offset();

        // refuse the whole archive before writing anything if a name would escape
        let rel_paths = archive
            .entries()
            .iter()
            .map(|entry| filename::check_entry_name(entry.name()))
            .collect::<Result<Vec<_>>>()?;

        emit(ExtractEvent::Start {
            total: archive.entries().len(),
        });

        let mut report = ExtractReport::default();
        for (entry, rel_path) in archive.entries().iter().zip(rel_paths) {
            let out_path = self.output_dir.join(rel_path);
            if let Some(parent) = out_path.parent()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }

            let mut open_options = OpenOptions::new();
            if self.overwrite {
                open_options.create(true).write(true).truncate(true);
            } else {
                open_options.create_new(true).write(true);
            }
            let mut file = BufWriter::new(open_options.open(&out_path)?);

            let written = PakEntryReader::new(&mut *reader, data_offset, entry)?.copy_to(&mut file)?;
            file.flush()?;
            log::trace!("Extracted {} to {}", entry.name(), out_path.display());

            report.extracted += 1;
            report.bytes += written;
            emit(ExtractEvent::FileDone {
                name: entry.name().to_string(),
                size: entry.size(),
            });
        }

        emit(ExtractEvent::Finish {
            extracted: report.extracted,
        });
        log::info!(
            "Extracted {} files ({} bytes) to {}",
            report.extracted,
            report.bytes,
            self.output_dir.display()
        );

        Ok(report)
    }
}

impl PakFile {
    pub fn extractor(&mut self, output_dir: impl AsRef<Path>) -> PakExtractBuilder<'_> {
        PakExtractBuilder::new(self, output_dir)
    }

    /// Extract every entry under `output_dir`, creating parent directories as needed.
    pub fn extract_all(&mut self, output_dir: impl AsRef<Path>) -> Result<ExtractReport> {
        self.extractor(output_dir).run()
    }
}
