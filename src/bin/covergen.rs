use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "covergen", version, about = "Render a gradient book cover as a PNG")]
struct Cli {
    /// JSON config with every cover field; replaces the individual cover flags.
    #[arg(
        long,
        conflicts_with_all = ["width", "height", "title", "subtitle", "author", "font", "out"]
    )]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 630)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1200)]
    height: u32,

    #[arg(long, default_value = "Go编程完全指南")]
    title: String,

    #[arg(long, default_value = "构建高效、可靠的现代后端服务")]
    subtitle: String,

    #[arg(long, default_value = "AI生成 © 2024")]
    author: String,

    /// TrueType/OpenType font with glyphs for the cover text.
    #[arg(long, default_value = "fonts/NotoSansSC-Regular.ttf")]
    font: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "cover_chinese.png")]
    out: PathBuf,

    /// Seed for the background palette choice (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Print the computed layout as JSON before rendering.
    #[arg(long)]
    dump_layout: bool,

    /// Print the font family name and SHA-256 of the font bytes.
    #[arg(long)]
    dump_font: bool,
}

impl Cli {
    fn cover_config(&self) -> anyhow::Result<covergen::CoverConfig> {
        if let Some(path) = &self.config {
            return covergen::CoverConfig::from_json_file(path)
                .with_context(|| format!("load config '{}'", path.display()));
        }
        let config = covergen::CoverConfig {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
            font_path: self.font.clone(),
            output_path: self.out.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.cover_config()?;

    if !config.font_path.exists() {
        eprintln!("font file not found: {}", config.font_path.display());
        eprintln!("use a font that covers the cover text, for example:");
        eprintln!("  1. Noto Sans SC (Source Han Sans): https://github.com/adobe-fonts/source-han-sans");
        eprintln!("  2. place it under fonts/ or pass --font <path>");
        anyhow::bail!("missing font '{}'", config.font_path.display());
    }

    if cli.dump_font || cli.dump_layout {
        dump_diagnostics(&cli, &config)?;
    }

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    covergen::generate_cover(&config, &mut rng)
        .with_context(|| format!("generate cover '{}'", config.output_path.display()))?;

    eprintln!("wrote {}", config.output_path.display());
    Ok(())
}

fn dump_diagnostics(cli: &Cli, config: &covergen::CoverConfig) -> anyhow::Result<()> {
    let font = covergen::LoadedFont::load(&config.font_path)
        .with_context(|| format!("load font '{}'", config.font_path.display()))?;

    if cli.dump_font {
        eprintln!("font:");
        eprintln!("  path:    {}", config.font_path.display());
        eprintln!(
            "  family:  {}",
            font.family_name().unwrap_or_else(|| "<unknown>".to_string())
        );
        eprintln!("  sha256:  {}", font.sha256_hex());
    }

    if cli.dump_layout {
        let layout = covergen::plan_cover(config, &font)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&layout).context("serialize layout")?
        );
    }
    Ok(())
}
