//! Text output for histories and rule tables.

use std::io::{self, Write};

use rhizome_resin_wolfram::{ElementaryRule, History, TotalisticRule};

/// Shades from empty to full, indexed by scaled intensity.
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

fn shade(intensity: f32) -> char {
    let index = (intensity.clamp(0.0, 1.0) * (SHADES.len() - 1) as f32).round() as usize;
    SHADES[index]
}

/// Writes one line per generation, shading each cell by its intensity.
pub fn write_text<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    for row in history.intensities() {
        let line: String = row.into_iter().map(shade).collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Lines of an elementary rule table, "111" first.
pub fn elementary_table(rule: &ElementaryRule) -> Vec<String> {
    let mut lines = vec![format!("rule {} = {}", rule.rule(), rule)];
    lines.extend(
        rule.entries()
            .iter()
            .map(|(pattern, output)| format!("  {pattern} -> {output}")),
    );
    lines
}

/// Lines of a totalistic table, highest average first.
pub fn totalistic_table(rule: &TotalisticRule) -> Vec<String> {
    let mut lines = vec![format!("code {} = {}", rule.code(), rule)];
    lines.extend(rule.entries().iter().map(|entry| {
        format!(
            "  sum {} (avg {:.2}) -> {}",
            entry.sum,
            entry.average(),
            entry.output
        )
    }));
    lines
}

/// One summary line for a finished run.
pub fn summary(name: &str, note: &str, history: &History) -> String {
    let last = history.generations();
    format!(
        "{name:<10} {note:<20} {rows} rows x {width} cells, final population {population}",
        rows = history.len(),
        width = history.width(),
        population = history.population(last).unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhizome_resin_wolfram::{RunConfig, Simulation, elementary_1d};

    #[test]
    fn test_shade_extremes() {
        assert_eq!(shade(0.0), ' ');
        assert_eq!(shade(0.5), '▒');
        assert_eq!(shade(1.0), '█');
    }

    #[test]
    fn test_write_text() {
        let history = Simulation::new(ElementaryRule::new(90))
            .run(vec![0, 0, 1, 0, 0], 1)
            .unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &history).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  █\n █ █\n");
    }

    #[test]
    fn test_tables() {
        let lines = elementary_table(&ElementaryRule::new(110));
        assert_eq!(lines[0], "rule 110 = 01101110");
        assert_eq!(lines[1], "  111 -> 0");
        assert_eq!(lines.len(), 9);

        let lines = totalistic_table(&TotalisticRule::new(1023).unwrap());
        assert_eq!(lines[0], "code 1023 = 1101220");
        assert_eq!(lines[1], "  sum 6 (avg 2.00) -> 1");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_summary() {
        let history = elementary_1d(90, &RunConfig::new(4)).unwrap();
        let line = summary("rule 90", "Sierpinski triangle", &history);
        assert!(line.ends_with("5 rows x 1001 cells, final population 2"));
    }
}
