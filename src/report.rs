use riftmatch::{EngineMetrics, MatchResult, PairSummary};
use serde::Serialize;

/// Terminal styling, keyed by what the text is rather than by color.
#[derive(Clone, Copy)]
enum Style {
    Heading,
    Input,
    Pattern,
    Output,
    Winner,
    Group,
    Quiet,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Heading => "\x1b[90m",
            Style::Input => "\x1b[1;36m",
            Style::Pattern => "\x1b[36m",
            Style::Output => "\x1b[1;32m",
            Style::Winner => "\x1b[33m",
            Style::Group => "\x1b[34m",
            Style::Quiet => "\x1b[2m",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, text: impl AsRef<str>, style: Style) -> String {
        let text = text.as_ref();
        if self.enabled { format!("{}{text}\x1b[0m", style.code()) } else { text.to_string() }
    }
}

pub struct Report {
    palette: Palette,
    json: bool,
}

#[derive(Serialize)]
struct MatchLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

#[derive(Serialize)]
struct MetricsLine<'a> {
    metrics: &'a EngineMetrics,
}

#[derive(Serialize)]
struct PairsLine<'a> {
    pairs: &'a [PairSummary],
}

impl Report {
    pub fn new(color: bool, json: bool) -> Self {
        Self { palette: Palette { enabled: color && !json }, json }
    }

    pub fn pairs(&self, pairs: &[PairSummary]) -> Result<(), String> {
        if self.json {
            return emit(&PairsLine { pairs });
        }

        let palette = &self.palette;
        println!("{}", palette.paint(format!("━━━ Pairs ({}) ━━━", pairs.len()), Style::Heading));
        if pairs.is_empty() {
            println!("{}", palette.paint("  No pairs loaded", Style::Quiet));
        }
        for pair in pairs {
            let kind = if pair.callable {
                "callable"
            } else if pair.right_is_literal {
                "literal"
            } else {
                "template"
            };
            println!(
                "  {} {} {} {}  {} {}",
                palette.paint(format!("[{}]", pair.transform_id), Style::Heading),
                palette.paint(&pair.left, Style::Pattern),
                palette.paint("=>", Style::Quiet),
                palette.paint(&pair.right, Style::Pattern),
                palette.paint(format!("p={}", pair.priority), Style::Quiet),
                palette.paint(kind, Style::Quiet),
            );
        }
        println!();
        Ok(())
    }

    pub fn result(&self, input: &str, result: &MatchResult) -> Result<(), String> {
        if self.json {
            return emit(&MatchLine { input, result });
        }

        let palette = &self.palette;
        println!("{}", palette.paint(format!("⚙  Input: \"{input}\""), Style::Input));

        let Some(output) = result.output.as_deref().filter(|_| result.matched) else {
            println!("  {}", palette.paint("✗ no pair matched", Style::Quiet));
            return Ok(());
        };

        println!(
            "  {} {} {} {}",
            palette.paint("✓", Style::Output),
            palette.paint(output, Style::Output),
            palette.paint("│", Style::Quiet),
            palette.paint(format!("pair {} p={}", result.transform_id, result.priority), Style::Winner),
        );
        for (name, value) in &result.groups {
            println!("      {} {}", palette.paint(format!("{name}:"), Style::Group), palette.paint(value, Style::Quiet));
        }
        Ok(())
    }

    pub fn metrics(&self, metrics: &EngineMetrics) -> Result<(), String> {
        if self.json {
            return emit(&MetricsLine { metrics });
        }

        let palette = &self.palette;
        println!("\n{}", palette.paint("━━━ Metrics ━━━", Style::Heading));
        println!(
            "  Matches: {}  │  Failures: {}  │  Mean: {}  │  Pairs: {}",
            palette.paint(metrics.total_matches.to_string(), Style::Output),
            palette.paint(metrics.total_failures.to_string(), Style::Winner),
            palette.paint(format!("{:.4} ms", metrics.average_match_time_ms), Style::Pattern),
            palette.paint(metrics.pair_count.to_string(), Style::Quiet),
        );
        println!();
        Ok(())
    }
}

fn emit(line: &impl Serialize) -> Result<(), String> {
    let text = serde_json::to_string(line).map_err(|err| format!("failed to encode JSON: {err}"))?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_leaves_text_alone() {
        let palette = Palette { enabled: false };
        assert_eq!(palette.paint("fn foo() {}", Style::Output), "fn foo() {}");
    }

    #[test]
    fn styled_text_is_reset() {
        let palette = Palette { enabled: true };
        assert_eq!(palette.paint("p=1", Style::Winner), "\x1b[33mp=1\x1b[0m");
    }
}
