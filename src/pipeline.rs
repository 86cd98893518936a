use crate::color::Color;

/// Outcome for a single input line. `number` is the 1-based line number in
/// the original file, counting skipped lines too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Converted { number: usize, color: Color },
    Skipped { number: usize, text: String },
}

/// Ordered per-line outcomes for a whole input, in input-line order.
#[derive(Debug)]
pub struct ConversionReport {
    outcomes: Vec<LineOutcome>,
}

impl ConversionReport {
    pub fn outcomes(&self) -> &[LineOutcome] {
        &self.outcomes
    }

    /// Successfully converted colors, preserving input order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LineOutcome::Converted { color, .. } => Some(*color),
            LineOutcome::Skipped { .. } => None,
        })
    }

    /// Formatted hex codes for the converted lines, one per line, in order.
    pub fn hex_codes(&self) -> impl Iterator<Item = String> + '_ {
        self.colors().map(Color::hex)
    }

    /// Skipped lines as (line number, raw text).
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LineOutcome::Skipped { number, text } => Some((*number, text.as_str())),
            LineOutcome::Converted { .. } => None,
        })
    }
}

/// Run every line through the grammar. A malformed line is recorded as a
/// skip and never aborts the run; each line is independent of the others.
pub fn convert_lines<'a, I>(lines: I) -> ConversionReport
where
    I: IntoIterator<Item = &'a str>,
{
    let outcomes = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let number = index + 1;
            match line.parse::<Color>() {
                Ok(color) => LineOutcome::Converted { number, color },
                Err(_) => LineOutcome::Skipped {
                    number,
                    text: line.to_owned(),
                },
            }
        })
        .collect();
    ConversionReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_codes(input: &str) -> Vec<String> {
        convert_lines(input.lines()).hex_codes().collect()
    }

    #[test]
    fn converts_rgb_lines() {
        assert_eq!(hex_codes("160, 25, 60\n48, 60, 0"), ["#A0193C", "#303C00"]);
    }

    #[test]
    fn converts_rgba_lines() {
        assert_eq!(
            hex_codes("20, 127, 30, 127\n255, 127, 127, 60"),
            ["#147F1E7F", "#FF7F7F3C"]
        );
    }

    #[test]
    fn skips_malformed_lines_and_keeps_numbering() {
        let report = convert_lines("10, 10, 10, 255\nbad line\n20, 20, 20".lines());
        assert_eq!(
            report.hex_codes().collect::<Vec<_>>(),
            ["#0A0A0A", "#141414"]
        );
        assert_eq!(report.skipped().collect::<Vec<_>>(), [(2, "bad line")]);
    }

    #[test]
    fn preserves_input_order_around_skips() {
        let input = "256, 0, 0\n1, 2, 3\n\n4, 5, 6\na, b, c\n7, 8, 9";
        let report = convert_lines(input.lines());
        assert_eq!(
            report.hex_codes().collect::<Vec<_>>(),
            ["#010203", "#040506", "#070809"]
        );
        assert_eq!(
            report.skipped().map(|(number, _)| number).collect::<Vec<_>>(),
            [1, 3, 5]
        );
    }

    #[test]
    fn empty_input_produces_empty_report() {
        let report = convert_lines("".lines());
        assert!(report.outcomes().is_empty());
        assert_eq!(report.hex_codes().count(), 0);
    }

    #[test]
    fn skipped_lines_keep_their_raw_text() {
        let report = convert_lines("1,2,3".lines());
        assert_eq!(report.skipped().collect::<Vec<_>>(), [(1, "1,2,3")]);
    }
}
