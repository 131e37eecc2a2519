//! PDF export: print the rendered HTML page with a headless
//! Chromium-family browser.

use std::path::{Path, PathBuf};

use depviz_util::errors::DepvizError;
use depviz_util::fs::ensure_parent_dir;
use depviz_util::process::CommandBuilder;

/// Environment variable overriding browser discovery.
pub const BROWSER_ENV: &str = "DEPVIZ_BROWSER";

/// Well-known binary names probed on PATH, in order.
const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

/// PDF export settings.
#[derive(Debug, Clone, Default)]
pub struct PdfOptions {
    /// Explicit browser binary; wins over `DEPVIZ_BROWSER` and PATH
    /// probing.
    pub browser: Option<String>,
    /// Virtual-time budget granted to the page so the physics simulation
    /// settles before printing.
    pub physics_wait_ms: u64,
}

/// Locate a browser binary: explicit configuration, then the
/// `DEPVIZ_BROWSER` environment variable, then well-known names on PATH.
pub fn find_browser(configured: Option<&str>) -> Option<PathBuf> {
    if let Some(browser) = configured {
        return Some(PathBuf::from(browser));
    }
    if let Ok(browser) = std::env::var(BROWSER_ENV) {
        if !browser.is_empty() {
            return Some(PathBuf::from(browser));
        }
    }
    let path = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path) {
        for candidate in BROWSER_CANDIDATES {
            let binary = dir.join(candidate);
            if binary.is_file() {
                return Some(binary);
            }
        }
    }
    None
}

/// Print `html_path` to `pdf_path`.
///
/// The HTML file must already exist on disk; it is loaded over a `file://`
/// URL. A missing browser or a non-zero browser exit is fatal — the HTML
/// output already written stays in place either way.
pub fn export_pdf(html_path: &Path, pdf_path: &Path, opts: &PdfOptions) -> miette::Result<()> {
    let browser = find_browser(opts.browser.as_deref()).ok_or_else(|| DepvizError::Export {
        message: "no Chromium-family browser found on PATH".to_string(),
    })?;

    let html_abs = html_path.canonicalize().map_err(|e| DepvizError::Export {
        message: format!("Cannot locate rendered page {}: {e}", html_path.display()),
    })?;
    ensure_parent_dir(pdf_path).map_err(DepvizError::Io)?;

    tracing::info!(browser = %browser.display(), output = %pdf_path.display(), "printing graph to PDF");
    let output = CommandBuilder::new(browser.display().to_string())
        .arg("--headless=new")
        .arg("--disable-gpu")
        .arg("--no-pdf-header-footer")
        .arg(format!("--virtual-time-budget={}", opts.physics_wait_ms))
        .arg(format!("--print-to-pdf={}", pdf_path.display()))
        .arg(format!("file://{}", html_abs.display()))
        .exec()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DepvizError::Export {
            message: format!(
                "browser exited with {}: {}",
                output.status,
                stderr.lines().last().unwrap_or("").trim()
            ),
        }
        .into());
    }
    Ok(())
}
