//! Terminal styling for regions, cross-check status and messages.

use console::style;

use fibeval_core::Region;

/// Whether output is coloured. Colour is off when `NO_COLOR` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Palette honouring `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            color: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Palette that never emits escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self { color: false }
    }

    #[must_use]
    pub fn is_colored(self) -> bool {
        self.color
    }

    /// Region name, coloured by cost class: constant-time regions dim,
    /// additive series green, multiplicative ladders yellow/magenta.
    #[must_use]
    pub fn region(self, region: Region) -> String {
        if !self.color {
            return region.to_string();
        }
        let name = style(region.as_str());
        match region {
            Region::Zero | Region::Table => name.dim(),
            Region::Series => name.green(),
            Region::Blenkinsop => name.yellow(),
            Region::Takahashi => name.magenta(),
        }
        .to_string()
    }

    /// `OK` when a result agrees with the reference, `MISMATCH` otherwise.
    #[must_use]
    pub fn status(self, agrees: bool) -> String {
        let label = if agrees { "OK" } else { "MISMATCH" };
        match (self.color, agrees) {
            (false, _) => label.to_string(),
            (true, true) => style(label).green().to_string(),
            (true, false) => style(label).red().bold().to_string(),
        }
    }

    /// Section header line.
    #[must_use]
    pub fn header(self, text: &str) -> String {
        let line = format!("=== {text} ===");
        if self.color {
            style(line).bold().cyan().to_string()
        } else {
            line
        }
    }

    /// Message prefixed with `[OK]` or `[ERROR]`.
    #[must_use]
    pub fn tagged(self, ok: bool, text: &str) -> String {
        let tag = if ok { "[OK]" } else { "[ERROR]" };
        match (self.color, ok) {
            (false, _) => format!("{tag} {text}"),
            (true, true) => format!("{} {text}", style(tag).green().bold()),
            (true, false) => format!("{} {text}", style(tag).red().bold()),
        }
    }
}

/// Print a success line on stdout.
pub fn print_success(text: &str) {
    println!("{}", Palette::from_env().tagged(true, text));
}

/// Print an error line on stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", Palette::from_env().tagged(false, text));
}
