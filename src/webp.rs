//! Batch conversion of bitmap assets to WebP siblings.
//!
//! `public/images/foo/bar.png` becomes `public/images/foo/bar.webp`. A source is
//! skipped when its WebP sibling is already newer than it, and a file that fails
//! to convert is recorded and logged without stopping the walk.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::codecs::webp::WebPEncoder;
use thiserror::Error;
use walkdir::WalkDir;

pub const SOURCE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Convert even when the WebP sibling is up to date.
    pub force: bool,
    /// Report what would be converted without writing anything.
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Converted {
        output: PathBuf,
        /// Negative when the WebP ended up larger than the source.
        saved_percent: f64,
    },
    Pending {
        output: PathBuf,
    },
    Skipped {
        output: PathBuf,
    },
    Failed(ConvertError),
}

#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub files: Vec<FileReport>,
}

impl ConversionReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Converted { .. }))
    }

    pub fn pending(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Pending { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }
}

pub fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SOURCE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("webp")
}

fn modified(path: &Path) -> Result<SystemTime, ConvertError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| ConvertError::Io {
            path: path.to_owned(),
            source,
        })
}

/// True when `output` exists and is strictly newer than `input`.
pub fn is_up_to_date(input: &Path, output: &Path) -> Result<bool, ConvertError> {
    if !output.exists() {
        return Ok(false);
    }
    Ok(modified(output)? > modified(input)?)
}

fn file_len(path: &Path) -> Result<u64, ConvertError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| ConvertError::Io {
            path: path.to_owned(),
            source,
        })
}

/// Encodes `input` as WebP at `output` and returns the size saving in percent.
pub fn convert_file(input: &Path, output: &Path) -> Result<f64, ConvertError> {
    let img = image::open(input).map_err(|source| ConvertError::Image {
        path: input.to_owned(),
        source,
    })?;
    // the WebP encoder only takes 8-bit RGB(A)
    let rgba = image::DynamicImage::ImageRgba8(img.to_rgba8());

    let file = File::create(output).map_err(|source| ConvertError::Io {
        path: output.to_owned(),
        source,
    })?;
    let encoded = rgba.write_with_encoder(WebPEncoder::new_lossless(BufWriter::new(file)));
    if let Err(source) = encoded {
        // don't leave a truncated file behind, it would look up to date next run
        let _ = fs::remove_file(output);
        return Err(ConvertError::Image {
            path: input.to_owned(),
            source,
        });
    }

    let before = file_len(input)? as f64;
    let after = file_len(output)? as f64;
    Ok(if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    })
}

fn process(input: &Path, opts: &ConvertOptions) -> Outcome {
    let output = output_path(input);
    if !opts.force {
        match is_up_to_date(input, &output) {
            Ok(true) => return Outcome::Skipped { output },
            Ok(false) => {}
            Err(e) => return Outcome::Failed(e),
        }
    }
    if opts.dry_run {
        return Outcome::Pending { output };
    }
    match convert_file(input, &output) {
        Ok(saved_percent) => Outcome::Converted {
            output,
            saved_percent,
        },
        Err(e) => Outcome::Failed(e),
    }
}

/// Walks `root` and converts every bitmap found. Directory entries that cannot
/// be read are logged and skipped.
pub fn convert_tree(root: &Path, opts: &ConvertOptions) -> ConversionReport {
    let mut report = ConversionReport::default();
    let entries = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::error!("cannot read directory entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_source(e.path()));

    for entry in entries {
        let input = entry.into_path();
        let outcome = process(&input, opts);
        match &outcome {
            Outcome::Converted {
                output,
                saved_percent,
            } => tracing::info!(
                "converted {} -> {} ({saved_percent:.1}% smaller)",
                input.display(),
                output.display()
            ),
            Outcome::Pending { output } => {
                tracing::info!("would convert {} -> {}", input.display(), output.display())
            }
            Outcome::Skipped { .. } => {
                tracing::info!("skipping (already converted): {}", input.display())
            }
            Outcome::Failed(e) => tracing::error!("error converting {}: {e}", input.display()),
        }
        report.files.push(FileReport { input, outcome });
    }
    report
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    use super::*;

    fn write_png(path: &Path) {
        let img = ImageBuffer::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 128]));
        img.save(path).expect("should write png fixture");
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        File::options()
            .write(true)
            .open(path)
            .and_then(|f| f.set_modified(time))
            .expect("should set mtime");
    }

    #[test]
    fn test_mixed_directory() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("photo.png");
        let webp = dir.path().join("logo.webp");
        let txt = dir.path().join("notes.txt");
        write_png(&png);
        fs::write(&webp, b"already webp").unwrap();
        fs::write(&txt, b"hello").unwrap();

        let report = convert_tree(dir.path(), &ConvertOptions::default());

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.converted(), 1);
        assert!(dir.path().join("photo.webp").exists());
        assert_eq!(fs::read(&webp).unwrap(), b"already webp");
        assert!(!dir.path().join("notes.webp").exists());
    }

    #[test]
    fn test_skips_when_webp_is_newer() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("hero.png");
        let out = dir.path().join("hero.webp");
        write_png(&png);
        fs::write(&out, b"current").unwrap();
        let now = SystemTime::now();
        set_mtime(&png, now - Duration::from_secs(3600));
        set_mtime(&out, now);

        let report = convert_tree(dir.path(), &ConvertOptions::default());
        assert_eq!(report.skipped(), 1);
        assert_eq!(fs::read(&out).unwrap(), b"current");

        let forced = convert_tree(
            dir.path(),
            &ConvertOptions {
                force: true,
                ..Default::default()
            },
        );
        assert_eq!(forced.converted(), 1);
        assert_ne!(fs::read(&out).unwrap(), b"current");
    }

    #[test]
    fn test_reconverts_stale_output() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("card.PNG");
        let out = dir.path().join("card.webp");
        write_png(&png);
        fs::write(&out, b"stale").unwrap();
        let now = SystemTime::now();
        set_mtime(&out, now - Duration::from_secs(3600));
        set_mtime(&png, now);

        let report = convert_tree(dir.path(), &ConvertOptions::default());
        assert_eq!(report.converted(), 1);
    }

    #[test]
    fn test_failure_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("projects");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("a_broken.jpg"), b"not a jpeg").unwrap();
        write_png(&nested.join("b_fine.png"));

        let report = convert_tree(dir.path(), &ConvertOptions::default());
        assert_eq!(report.failed(), 1);
        assert_eq!(report.converted(), 1);
        assert!(nested.join("b_fine.webp").exists());
        assert!(!dir.path().join("a_broken.webp").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        write_png(&dir.path().join("x.png"));
        let report = convert_tree(
            dir.path(),
            &ConvertOptions {
                dry_run: true,
                ..Default::default()
            },
        );
        assert_eq!(report.pending(), 1);
        assert!(!dir.path().join("x.webp").exists());
    }

    #[test]
    fn test_is_source() {
        assert!(is_source(Path::new("a/b.jpeg")));
        assert!(is_source(Path::new("a/b.JPG")));
        assert!(!is_source(Path::new("a/b.webp")));
        assert!(!is_source(Path::new("a/b")));
    }
}
