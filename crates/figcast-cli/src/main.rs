use clap::{Parser, Subcommand};
use figcast_api::{collect_image_ids, download_images, parse_file_key, FigmaClient, FigmaFile};
use figcast_node::{DesignNode, ImageUrlMap};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figcast")]
#[command(about = "figcast: Figma design to HTML/CSS generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a file's node tree and save it as a JSON snapshot
    Fetch {
        /// Figma file key or share URL
        file: String,

        /// Personal access token
        #[arg(long, env = "FIGMA_TOKEN")]
        token: String,

        /// Snapshot output path
        #[arg(short, long, default_value = "tree.json")]
        output: PathBuf,
    },

    /// Generate index.html and styles.css from a snapshot or live file
    Generate {
        /// Snapshot path, or a Figma file key / share URL
        source: String,

        /// Personal access token (required for live fetch)
        #[arg(long, env = "FIGMA_TOKEN")]
        token: Option<String>,

        /// Top-level frame names to include (repeatable; default all)
        #[arg(long = "frame")]
        frames: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },

    /// Package a generated directory into a zip archive
    Bundle {
        /// Directory produced by `generate`
        dir: PathBuf,

        /// Archive path (default: <dir>.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Fetch {
            file,
            token,
            output,
        } => cmd_fetch(&file, &token, &output).await,
        Command::Generate {
            source,
            token,
            frames,
            output,
        } => cmd_generate(&source, token.as_deref(), &frames, &output).await,
        Command::Bundle { dir, output } => cmd_bundle(&dir, output),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

async fn cmd_fetch(file: &str, token: &str, output: &Path) {
    let Some(key) = parse_file_key(file) else {
        fail(&format!("not a Figma file key or share URL: {file}"));
    };

    let client = FigmaClient::new(token);
    let figma_file = match client.fetch_file(&key).await {
        Ok(file) => file,
        Err(e) => fail(&e.to_string()),
    };

    let json = match serde_json::to_string_pretty(&figma_file) {
        Ok(json) => json,
        Err(e) => fail(&format!("could not encode snapshot: {e}")),
    };
    if let Err(e) = std::fs::write(output, json) {
        fail(&format!("could not write {}: {e}", output.display()));
    }

    eprintln!("Fetched '{}' to {}", figma_file.name, output.display());
}

async fn cmd_generate(source: &str, token: Option<&str>, frames: &[String], output: &Path) {
    let snapshot_path = Path::new(source);
    let live = !snapshot_path.exists();

    let (figma_file, file_key) = if live {
        let Some(key) = parse_file_key(source) else {
            fail(&format!("no such snapshot and not a file key: {source}"));
        };
        let Some(token) = token else {
            fail("a token is required for live fetch (--token or FIGMA_TOKEN)");
        };
        let client = FigmaClient::new(token);
        match client.fetch_file(&key).await {
            Ok(file) => (file, Some((client, key))),
            Err(e) => fail(&e.to_string()),
        }
    } else {
        let data = match std::fs::read_to_string(snapshot_path) {
            Ok(data) => data,
            Err(e) => fail(&format!("could not read {source}: {e}")),
        };
        match serde_json::from_str::<FigmaFile>(&data) {
            Ok(file) => (file, None),
            Err(e) => fail(&format!("could not parse snapshot {source}: {e}")),
        }
    };

    let selected = select_frames(&figma_file.document, frames);
    eprintln!(
        "Generating {} frame(s) from '{}'",
        selected.len(),
        figma_file.name
    );

    if let Err(e) = std::fs::create_dir_all(output) {
        fail(&format!("could not create {}: {e}", output.display()));
    }

    let images = resolve_images(&selected, file_key.as_ref(), output).await;
    let page = figcast_codegen::generate(&selected, &images);

    let html = wrap_document(&figma_file.name, &page.html);
    let html_path = output.join("index.html");
    if let Err(e) = std::fs::write(&html_path, html) {
        fail(&format!("could not write {}: {e}", html_path.display()));
    }
    let css_path = output.join("styles.css");
    if let Err(e) = std::fs::write(&css_path, page.css) {
        fail(&format!("could not write {}: {e}", css_path.display()));
    }

    eprintln!("Generated: {}", html_path.display());
}

/// Pick top-level frames: every container child of every canvas, or
/// the named subset. An empty selection degrades to the whole document
/// so generation still produces output.
fn select_frames(document: &DesignNode, wanted: &[String]) -> Vec<DesignNode> {
    let mut frames = Vec::new();
    for canvas in &document.children {
        for child in &canvas.children {
            let keep = wanted.is_empty()
                || wanted.iter().any(|w| child.name.eq_ignore_ascii_case(w));
            if keep && child.is_container() {
                frames.push(child.clone());
            }
        }
    }
    if frames.is_empty() {
        frames.push(document.clone());
    }
    frames
}

/// Live mode: resolve thumbnail URLs in one batch, download the fleet
/// concurrently, and rewrite successful downloads to local paths.
/// Every failure along the way is logged and skipped; generation
/// never stops over an image.
async fn resolve_images(
    frames: &[DesignNode],
    session: Option<&(FigmaClient, String)>,
    output: &Path,
) -> ImageUrlMap {
    let Some((client, key)) = session else {
        return ImageUrlMap::new();
    };

    let ids = collect_image_ids(frames);
    if ids.is_empty() {
        return ImageUrlMap::new();
    }

    let urls = match client.fetch_image_urls(key, &ids).await {
        Ok(urls) => urls,
        Err(e) => {
            log::warn!("image url batch failed: {e}");
            return ImageUrlMap::new();
        }
    };

    let images_dir = output.join("images");
    if let Err(e) = std::fs::create_dir_all(&images_dir) {
        log::warn!("could not create {}: {e}", images_dir.display());
        return urls;
    }

    let blobs = download_images(&reqwest::Client::new(), &urls).await;
    let mut resolved = urls;
    for (id, bytes) in &blobs {
        let filename = format!("{}.png", safe_name(id));
        match std::fs::write(images_dir.join(&filename), bytes) {
            Ok(()) => {
                resolved.insert(id.clone(), format!("images/{filename}"));
            }
            Err(e) => log::warn!("could not write image {filename}: {e}"),
        }
    }
    resolved
}

fn safe_name(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Build a standalone HTML document around the generated fragment.
fn wrap_document(title: &str, fragment: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str("  <link rel=\"stylesheet\" href=\"styles.css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(fragment);
    html.push_str("</body>\n</html>\n");
    html
}

fn cmd_bundle(dir: &Path, output: Option<PathBuf>) {
    if !dir.is_dir() {
        fail(&format!("not a directory: {}", dir.display()));
    }
    let out_path = output.unwrap_or_else(|| dir.with_extension("zip"));

    match write_archive(dir, &out_path) {
        Ok(count) => eprintln!("Bundled {count} file(s) into {}", out_path.display()),
        Err(e) => fail(&format!("could not bundle {}: {e}", dir.display())),
    }
}

fn write_archive(dir: &Path, out_path: &Path) -> Result<usize, zip::result::ZipError> {
    use zip::write::FileOptions;
    use zip::CompressionMethod;

    let file = std::fs::File::create(out_path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    add_dir(&mut writer, dir, dir, &options, &mut count)?;
    writer.finish()?;
    Ok(count)
}

fn add_dir(
    writer: &mut zip::ZipWriter<std::fs::File>,
    root: &Path,
    dir: &Path,
    options: &zip::write::FileOptions<'static, ()>,
    count: &mut usize,
) -> Result<(), zip::result::ZipError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            add_dir(writer, root, &path, options, count)?;
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let name = relative.to_string_lossy().replace('\\', "/");
        writer.start_file(name, options.clone())?;
        writer.write_all(&std::fs::read(&path)?)?;
        *count += 1;
    }
    Ok(())
}
