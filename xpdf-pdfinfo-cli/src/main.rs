use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xpdf_pdfinfo::{DocumentInfo, PdfInfo, PdfInfoConfig};

#[derive(Parser)]
#[command(
    name = "xpdfinfo",
    about = "Show document information using the pdfinfo tool",
    version,
    author
)]
struct Cli {
    /// PDF file to inspect
    file: PathBuf,

    /// Path to the pdfinfo binary (overrides XPDF_PDFINFO_BIN)
    #[arg(long = "bin", value_name = "PATH")]
    bin: Option<PathBuf>,

    /// Owner password for protected files
    #[arg(short, long)]
    owner_password: Option<String>,

    /// User password for protected files
    #[arg(short, long)]
    user_password: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log resolution and invocation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Labelled summary
    Text,
    /// Pretty-printed JSON record
    Json,
    /// The tool output as printed by pdfinfo
    Raw,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = PdfInfoConfig::from_env();
    if let Some(bin) = &cli.bin {
        config = config.with_binary_path(bin);
    }
    debug!(binary = %config.binary_candidate().display(), "using pdfinfo binary");

    let pdfinfo = PdfInfo::from_config(&config).context("Could not set up pdfinfo")?;
    let info = pdfinfo
        .extract_info(
            &cli.file,
            cli.owner_password.as_deref(),
            cli.user_password.as_deref(),
        )
        .with_context(|| format!("Failed to read document info from {}", cli.file.display()))?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&info)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&info).context("Failed to encode JSON")?;
            println!("{json}");
        }
        OutputFormat::Raw => println!("{info}"),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "xpdf_pdfinfo=debug,xpdfinfo=debug"
    } else {
        "xpdf_pdfinfo=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Render a record as an aligned, labelled summary
fn render_text(info: &DocumentInfo) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: &dyn std::fmt::Display| {
        let _ = writeln!(out, "{:<16}{}", format!("{label}:"), value);
    };

    let optional = [
        ("Title", &info.title),
        ("Subject", &info.subject),
        ("Keywords", &info.keywords),
        ("Author", &info.author),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            line(label, value);
        }
    }

    line("Creator", &info.creator);
    line("Producer", &info.producer);
    line("CreationDate", &info.creation_date);
    line("ModDate", &info.mod_date);
    line("Tagged", &yes_no(info.tagged));
    line("Form", &info.form);
    line("Pages", &info.pages);
    line("Encrypted", &yes_no(info.encrypted));

    let size = &info.page_size;
    if !size.raw.is_empty() {
        let mut value = format!(
            "{} x {} pts ({:.1} x {:.1} mm)",
            size.width_pts,
            size.height_pts,
            size.width_mm(),
            size.height_mm()
        );
        if let Some(format) = &size.format {
            let _ = write!(value, " {format}");
        }
        let _ = write!(value, ", rotated {} degrees", size.rotated_degrees);
        line("Page size", &value);
    }

    for (kind, page_box) in info.boxes() {
        if page_box.is_present() {
            let value = format!(
                "{:.2} {:.2} {:.2} {:.2}",
                page_box.x, page_box.y, page_box.width, page_box.height
            );
            line(kind.label(), &value);
        }
    }

    if !info.file_size.raw.is_empty() {
        line("File size", &format!("{} bytes", info.file_size.bytes));
    }
    line("Optimized", &yes_no(info.optimized));
    line("PDF version", &info.pdf_version);

    out
}
