use clap::{Parser, Subcommand};
use gita_gen::videos::VideoLibrary;
use gita_gen::{address, config, content, output, routes};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "gita-gen")]
#[command(about = "Build tooling for a static Bhagavad Gita site")]
#[command(long_about = "\
Build tooling for a static Bhagavad Gita site

The chapter catalog (18 chapters, 700 verses) is compiled in; everything
else is read from the project directory:

  project/
  ├── config.toml                       # Site config (optional)
  ├── content/                          # Verse text store
  │   └── chapter-1/
  │       └── verse-1/
  │           ├── sanskrit-shloka.txt
  │           ├── romanized-transliteration.txt
  │           ├── english-translation.txt
  │           └── word-by-word-translation.txt
  └── data/verse-videos/
      └── te_videos.json                # One video catalog per language

Artifacts land in the output directory: routes.json, sitemap.xml, and
videos.json (verse address → per-language video sources).

Run 'gita-gen gen-config' for a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory (config.toml, content store, video catalogs)
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Output directory for generated artifacts
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content store against the catalog
    Check,
    /// Enumerate all site routes into routes.json
    Routes,
    /// Emit sitemap.xml
    Sitemap,
    /// Index video catalogs into videos.json
    Videos,
    /// Run everything: routes + sitemap + videos
    Build,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            let content_root = cli.root.join(&config.content_root);
            println!("==> Checking {}", content_root.display());
            let coverage = content::coverage(&content_root);
            output::print_check_output(&coverage);
            if coverage.is_complete() {
                println!("==> Content is complete");
            } else {
                println!("==> {} verses missing content", coverage.missing.len());
            }
        }
        Command::Routes => {
            let config = config::load_config(&cli.root)?;
            write_routes(&config, &cli.output)?;
        }
        Command::Sitemap => {
            let config = config::load_config(&cli.root)?;
            write_sitemap(&config, &cli.output)?;
        }
        Command::Videos => {
            let config = config::load_config(&cli.root)?;
            write_videos(&config, &cli.root, &cli.output)?;
        }
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            println!("==> Routes");
            write_routes(&config, &cli.output)?;
            println!("==> Sitemap");
            write_sitemap(&config, &cli.output)?;
            println!("==> Videos");
            write_videos(&config, &cli.root, &cli.output)?;
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_routes(
    config: &config::SiteConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let all = routes::generate_all_routes(&config.base_url);
    std::fs::create_dir_all(output_dir)?;
    let json = serde_json::to_string_pretty(&all)?;
    std::fs::write(output_dir.join("routes.json"), json)?;
    output::print_routes_output(&all);
    println!("Generated routes.json");
    Ok(())
}

fn write_sitemap(
    config: &config::SiteConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let xml = routes::generate_sitemap(&config.base_url);
    std::fs::create_dir_all(output_dir)?;
    std::fs::write(output_dir.join("sitemap.xml"), xml)?;
    println!("Generated sitemap.xml");
    Ok(())
}

fn write_videos(
    config: &config::SiteConfig,
    root: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let videos_dir = root.join(&config.videos_dir);
    let result = VideoLibrary::load(&videos_dir)?;
    output::print_videos_output(&result.reports);

    // Manifest: composite verse key → language → source, valid verses only.
    let mut manifest = BTreeMap::new();
    for key in address::all_verse_keys() {
        let sources = result.library.verse_video_sources(key.chapter, key.verse);
        if !sources.is_empty() {
            manifest.insert(key.key(), sources);
        }
    }

    std::fs::create_dir_all(output_dir)?;
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(output_dir.join("videos.json"), json)?;
    println!("Generated videos.json ({} verses with video)", manifest.len());
    Ok(())
}
