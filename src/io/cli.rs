//! Command-line interface for batch quantization of PNG files

use crate::io::asset::{default_palette, load_palette_file};
use crate::io::configuration::{DEFAULT_GRID_WIDTH, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::decode::load_or_synthetic;
use crate::io::error::{Result, fs_error};
use crate::io::progress::ProgressManager;
use crate::io::store;
use crate::palette::Palette;
use crate::quantize::generator::{UsageCounts, generate};
use crate::sampler::region::SamplerConfig;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "beadgrid")]
#[command(
    version,
    about = "Quantize images into palette-constrained bead patterns"
)]
/// Command-line arguments for the pattern generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Palette text file (Name<TAB>#RRGGBB per line); built-in 16-color
    /// palette when omitted
    #[arg(short, long)]
    pub palette: Option<PathBuf>,

    /// Target grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Target grid height in cells (defaults to the width)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Seed for the synthetic fallback when decoding fails
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Drop fully transparent source pixels before averaging
    #[arg(short = 't', long)]
    pub skip_transparent: bool,

    /// Print per-color usage counts after each file
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Target grid height, defaulting to a square grid
    pub fn grid_height(&self) -> usize {
        self.height.unwrap_or(self.width)
    }
}

/// Orchestrates batch quantization of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, palette loading, or pattern
    /// persistence fails.
    pub fn process(&mut self) -> Result<()> {
        let palette = match self.cli.palette {
            Some(ref path) => load_palette_file(path)?,
            None => default_palette(),
        };

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &palette)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(fs_error(
                    &self.cli.target,
                    "validate target",
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "target file must be a PNG image",
                    ),
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)
                .map_err(|e| fs_error(&self.cli.target, "read directory", e))?
            {
                let path = entry
                    .map_err(|e| fs_error(&self.cli.target, "read directory entry", e))?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(fs_error(
                &self.cli.target,
                "validate target",
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be a PNG file or directory",
                ),
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path_for(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, palette: &Palette) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_or_synthetic(input_path, self.cli.seed);
        let config = SamplerConfig {
            include_transparent_samples: !self.cli.skip_transparent,
            ..SamplerConfig::default()
        };

        let (pattern, usage) = generate(
            &source,
            self.cli.width,
            self.cli.grid_height(),
            palette,
            &config,
        );

        store::save(&output_path_for(input_path), &pattern)?;

        if self.cli.stats {
            print_usage(input_path, &usage);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}

// Allow print for user-requested statistics output
#[allow(clippy::print_stderr)]
fn print_usage(input_path: &Path, usage: &UsageCounts) {
    let mut counts: Vec<(&str, usize)> = usage
        .iter()
        .map(|(code, count)| (code.as_str(), *count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    eprintln!("{}:", input_path.display());
    for (code, count) in counts {
        eprintln!("  {code} x{count}");
    }
}

fn output_path_for(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.json", stem.to_string_lossy(), OUTPUT_SUFFIX);

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
