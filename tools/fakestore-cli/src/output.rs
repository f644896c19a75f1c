//! Output formatting for the CLI.

use console::{style, StyledObject};
use fakestore_commerce::cart::{CartTotals, LineItem};
use fakestore_commerce::Currency;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg, false);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg, false);
    }

    /// Print a warning to stderr.
    pub fn warn(&self, msg: &str) {
        self.status(style("⚠").yellow(), msg, true);
    }

    /// Print an error to stderr. In JSON mode it becomes `{"error": msg}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Print a dimmed message when `--verbose` is set.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(style("→").dim(), &style(msg).dim().to_string(), true);
        }
    }

    fn status(&self, icon: StyledObject<&str>, msg: &str, stderr: bool) {
        if self.json {
            return;
        }
        if stderr {
            eprintln!("{} {}", icon, msg);
        } else {
            println!("{} {}", icon, msg);
        }
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print cart lines followed by the totals.
    pub fn cart(&self, items: &[LineItem], totals: &CartTotals, currency: Currency) {
        if self.json {
            return;
        }
        if items.is_empty() {
            self.info("Cart is empty.");
            return;
        }

        let widths = [6, 40, 5, 12];
        self.table_row(&["ID", "PRODUCT", "QTY", "LINE TOTAL"], &widths);
        for item in items {
            self.table_row(
                &[
                    &item.product.id.to_string(),
                    &truncate(&item.product.title, widths[1]),
                    &item.quantity.to_string(),
                    &item.line_total(currency).display(),
                ],
                &widths,
            );
        }
        println!();
        self.kv("items", &totals.item_count.to_string());
        self.kv("total", &style(totals.total.display()).bold().to_string());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
