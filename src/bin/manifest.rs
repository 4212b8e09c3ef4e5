//! Generates `data.json` from a local checkout of the solutions repository.
//!
//! Uses the same walk and file classification as the browser's live scan,
//! so the site shows the same tree with or without the manifest.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use solution_browser::config::{PLATFORMS, PlatformInfo};
    use solution_browser::core::RepositoryScan;
    use solution_browser::models::{DirectoryEntry, EntryKind};

    #[derive(Parser, Debug)]
    #[command(
        name = "manifest",
        version,
        about = "Generate the data.json manifest for the solution browser"
    )]
    struct Args {
        /// Root of the repository checkout.
        root: PathBuf,

        /// Output file.
        #[arg(short, long, default_value = "data.json")]
        output: PathBuf,

        /// Only include these platforms (repeatable).
        #[arg(short, long = "platform")]
        platforms: Vec<String>,

        /// Directory (relative to the root) holding `<platform>.png` card images.
        #[arg(long, default_value = "images")]
        images: String,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        if !args.root.is_dir() {
            bail!("not a directory: {}", args.root.display());
        }

        let platforms: Vec<PlatformInfo> = PLATFORMS
            .iter()
            .filter(|p| args.platforms.is_empty() || args.platforms.iter().any(|k| k == p.key))
            .copied()
            .collect();
        if platforms.is_empty() {
            bail!("no known platform matches {:?}", args.platforms);
        }

        let mut scan = RepositoryScan::new(&platforms);
        while let Some(path) = scan.next_path().map(str::to_string) {
            let listing = list_directory(&args.root, &path);
            if listing.is_none() {
                eprintln!("skipping unreadable directory: {}", path);
            }
            scan.apply(listing);
        }

        let tree = scan.finish();
        let mut manifest = tree.to_manifest();
        for platform in &mut manifest.platforms {
            let image = format!("{}/{}.png", args.images.trim_matches('/'), platform.name);
            if args.root.join(&image).is_file() {
                platform.image = Some(image);
            }
        }

        let json =
            serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
        let mut writer = BufWriter::new(
            File::create(&args.output)
                .with_context(|| format!("failed to create {}", args.output.display()))?,
        );
        writer
            .write_all(json.as_bytes())
            .and_then(|_| writer.flush())
            .with_context(|| format!("failed to write {}", args.output.display()))?;

        for platform in &manifest.platforms {
            println!("{:>10}  {}", platform.count, platform.name);
        }
        println!("wrote {}", args.output.display());
        Ok(())
    }

    /// List `path` (relative to `root`) as contents API entries.
    fn list_directory(root: &Path, path: &str) -> Option<Vec<DirectoryEntry>> {
        let entries = fs::read_dir(root.join(path)).ok()?;
        let mut listing: Vec<DirectoryEntry> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let name = entry.file_name().to_str()?.to_string();
                let file_type = entry.file_type().ok()?;
                let kind = if file_type.is_dir() {
                    EntryKind::Dir
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                Some(DirectoryEntry {
                    path: format!("{}/{}", path, name),
                    name,
                    kind,
                    download_url: None,
                })
            })
            .collect();
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        Some(listing)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
