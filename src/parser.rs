//! Command-line grammar.
//!
//! ```text
//! program    := "edit_image" "--image" PATH command*
//! command    := filter_cmd | adjust_cmd | display_cmd | output_cmd
//! filter_cmd := "--filter" filter_name filter_args?
//! adjust_cmd := "--adjust" (adjust_name SIGNED_INT)+
//! display_cmd:= "--display"
//! output_cmd := "--output" PATH
//! ```
//!
//! Parsing is a single greedy left-to-right pass over the tokens. A token
//! is never reconsidered once a command has consumed it.

use std::path::PathBuf;

use crate::error::GrammarError;
use crate::operation::{Adjustment, AdjustmentKind, Filter, Operation};

pub const PROGRAM_NAME: &str = "edit_image";
pub const IMAGE_FLAG: &str = "--image";
pub const FILTER_FLAG: &str = "--filter";
pub const ADJUST_FLAG: &str = "--adjust";
pub const DISPLAY_FLAG: &str = "--display";
pub const OUTPUT_FLAG: &str = "--output";
pub const X_FLAG: &str = "--x";
pub const Y_FLAG: &str = "--y";

/// One-line usage summary printed by the binary on grammar errors.
pub const USAGE: &str = "usage: edit_image --image <path> [--filter <blur --x <int> --y <int> | \
edge_detection | sharpen --x <number> | invert | sepia>] [--adjust (<brightness|contrast|\
saturation|temperature|exposure> <int>)+] [--display] [--output <path>] ...";

/// Source image and the operations to run on it, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    pub image_path: PathBuf,
    pub operations: Vec<Operation>,
}

/// Parse a full argument list (without the executable name).
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<ParsedCommand, GrammarError> {
    let mut cursor = Cursor::new(args);
    let image_path = cursor.parse_preamble()?;

    let mut operations = Vec::new();
    while let Some(token) = cursor.advance() {
        match token {
            FILTER_FLAG => operations.push(cursor.parse_filter()?),
            ADJUST_FLAG => cursor.parse_adjustments(&mut operations)?,
            DISPLAY_FLAG => operations.push(Operation::Display),
            OUTPUT_FLAG => operations.push(cursor.parse_output()?),
            other => return Err(GrammarError::UnknownCommand(other.to_string())),
        }
    }

    Ok(ParsedCommand {
        image_path,
        operations,
    })
}

struct Cursor<'a, S> {
    args: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> Cursor<'a, S> {
    fn new(args: &'a [S]) -> Self {
        Self { args, pos: 0 }
    }

    fn peek(&self) -> Option<&'a str> {
        self.args.get(self.pos).map(AsRef::as_ref)
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn parse_preamble(&mut self) -> Result<PathBuf, GrammarError> {
        if self.advance() != Some(PROGRAM_NAME) {
            return Err(GrammarError::MissingProgramName);
        }
        if self.advance() != Some(IMAGE_FLAG) {
            return Err(GrammarError::MissingImageFlag);
        }
        self.advance()
            .map(PathBuf::from)
            .ok_or(GrammarError::MissingImagePath)
    }

    fn parse_filter(&mut self) -> Result<Operation, GrammarError> {
        let filter = match self.advance() {
            Some("blur") => self.parse_blur_args()?,
            Some("edge_detection") => Filter::EdgeDetection,
            Some("sharpen") => self.parse_sharpen_args()?,
            Some("invert") => Filter::Invert,
            Some("sepia") => Filter::Sepia,
            other => return Err(GrammarError::UnknownFilter(other.map(str::to_string))),
        };
        Ok(Operation::Filter(filter))
    }

    fn parse_blur_args(&mut self) -> Result<Filter, GrammarError> {
        let x = self.flag_value(X_FLAG).and_then(parse_digits);
        let y = self.flag_value(Y_FLAG).and_then(parse_digits);
        match (x, y) {
            (Some(x), Some(y)) => Ok(Filter::Blur { x, y }),
            _ => Err(GrammarError::InvalidBlurArguments),
        }
    }

    fn parse_sharpen_args(&mut self) -> Result<Filter, GrammarError> {
        self.flag_value(X_FLAG)
            .and_then(parse_real)
            .map(|magnitude| Filter::Sharpen { magnitude })
            .ok_or(GrammarError::InvalidSharpenArguments)
    }

    /// Consume `flag <value>` and return the value token.
    fn flag_value(&mut self, flag: &str) -> Option<&'a str> {
        if self.advance()? != flag {
            return None;
        }
        self.advance()
    }

    fn parse_adjustments(&mut self, operations: &mut Vec<Operation>) -> Result<(), GrammarError> {
        let first = self.peek();
        if first.and_then(AdjustmentKind::from_name).is_none() {
            return Err(GrammarError::MissingAdjustment(first.map(str::to_string)));
        }

        while let Some(kind) = self.peek().and_then(AdjustmentKind::from_name) {
            self.pos += 1;
            let token = self.advance();
            let value = token
                .and_then(parse_signed)
                .ok_or_else(|| GrammarError::InvalidAdjustmentValue {
                    adjustment: kind,
                    value: token.map(str::to_string),
                })?;
            operations.push(Operation::Adjust(Adjustment { kind, value }));
        }
        Ok(())
    }

    fn parse_output(&mut self) -> Result<Operation, GrammarError> {
        self.advance()
            .map(|path| Operation::Output {
                path: PathBuf::from(path),
            })
            .ok_or(GrammarError::MissingOutputPath)
    }
}

fn parse_digits(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Signed decimal integer. Magnitudes beyond `i64` saturate; the range
/// check at execution rejects them.
fn parse_signed(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let saturated = if token.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(token.parse().unwrap_or(saturated))
}

fn parse_real(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with(tail: &[&str]) -> Result<ParsedCommand, GrammarError> {
        let mut args = vec![PROGRAM_NAME, IMAGE_FLAG, "in.png"];
        args.extend_from_slice(tail);
        parse(args.as_slice())
    }

    fn adjust(kind: AdjustmentKind, value: i64) -> Operation {
        Operation::Adjust(Adjustment { kind, value })
    }

    #[test]
    fn test_display_only() {
        let parsed = parse(&["edit_image", "--image", "foo.png", "--display"]).unwrap();
        assert_eq!(parsed.image_path, PathBuf::from("foo.png"));
        assert_eq!(parsed.operations, vec![Operation::Display]);
    }

    #[test]
    fn test_no_commands() {
        let parsed = parse_with(&[]).unwrap();
        assert!(parsed.operations.is_empty());
    }

    #[test]
    fn test_preamble_errors_are_distinct() {
        assert_eq!(parse::<&str>(&[]), Err(GrammarError::MissingProgramName));
        assert_eq!(
            parse(&["edit", "--image", "a.png"]),
            Err(GrammarError::MissingProgramName)
        );
        assert_eq!(
            parse(&["edit_image", "a.png"]),
            Err(GrammarError::MissingImageFlag)
        );
        assert_eq!(
            parse(&["edit_image"]),
            Err(GrammarError::MissingImageFlag)
        );
        assert_eq!(
            parse(&["edit_image", "--image"]),
            Err(GrammarError::MissingImagePath)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_with(&["--bogus"]),
            Err(GrammarError::UnknownCommand("--bogus".to_string()))
        );
    }

    #[test]
    fn test_filters_without_arguments() {
        let parsed = parse_with(&[
            "--filter",
            "edge_detection",
            "--filter",
            "invert",
            "--filter",
            "sepia",
        ])
        .unwrap();
        assert_eq!(
            parsed.operations,
            vec![
                Operation::Filter(Filter::EdgeDetection),
                Operation::Filter(Filter::Invert),
                Operation::Filter(Filter::Sepia),
            ]
        );
    }

    #[test]
    fn test_unknown_filter() {
        assert_eq!(
            parse_with(&["--filter", "emboss"]),
            Err(GrammarError::UnknownFilter(Some("emboss".to_string())))
        );
        assert_eq!(
            parse_with(&["--filter"]),
            Err(GrammarError::UnknownFilter(None))
        );
    }

    #[test]
    fn test_blur_arguments() {
        let parsed = parse_with(&["--filter", "blur", "--x", "3", "--y", "5"]).unwrap();
        assert_eq!(
            parsed.operations,
            vec![Operation::Filter(Filter::Blur { x: 3, y: 5 })]
        );
    }

    #[test]
    fn test_blur_rejects_bad_arguments() {
        let cases: &[&[&str]] = &[
            &["--filter", "blur"],
            &["--filter", "blur", "--x", "3"],
            &["--filter", "blur", "--x", "3", "--y"],
            &["--filter", "blur", "--y", "3", "--x", "3"],
            &["--filter", "blur", "--x", "-3", "--y", "3"],
            &["--filter", "blur", "--x", "3.5", "--y", "3"],
            &["--filter", "blur", "--x", "a", "--y", "3"],
        ];
        for tail in cases {
            assert_eq!(
                parse_with(tail),
                Err(GrammarError::InvalidBlurArguments),
                "{tail:?}"
            );
        }
    }

    #[test]
    fn test_sharpen_accepts_any_real() {
        let parsed = parse_with(&["--filter", "sharpen", "--x", "-0.5"]).unwrap();
        assert_eq!(
            parsed.operations,
            vec![Operation::Filter(Filter::Sharpen { magnitude: -0.5 })]
        );

        let parsed = parse_with(&["--filter", "sharpen", "--x", "+2"]).unwrap();
        assert_eq!(
            parsed.operations,
            vec![Operation::Filter(Filter::Sharpen { magnitude: 2.0 })]
        );
    }

    #[test]
    fn test_sharpen_rejects_bad_arguments() {
        let cases: &[&[&str]] = &[
            &["--filter", "sharpen"],
            &["--filter", "sharpen", "--y", "2"],
            &["--filter", "sharpen", "--x", "strong"],
            &["--filter", "sharpen", "--x", "nan"],
        ];
        for tail in cases {
            assert_eq!(
                parse_with(tail),
                Err(GrammarError::InvalidSharpenArguments)
            );
        }
    }

    #[test]
    fn test_adjust_chain_keeps_order() {
        let parsed =
            parse_with(&["--adjust", "brightness", "10", "contrast", "5"]).unwrap();
        assert_eq!(
            parsed.operations,
            vec![
                adjust(AdjustmentKind::Brightness, 10),
                adjust(AdjustmentKind::Contrast, 5),
            ]
        );
    }

    #[test]
    fn test_adjust_chain_ends_at_next_command() {
        let parsed = parse_with(&[
            "--adjust",
            "exposure",
            "-20",
            "temperature",
            "+15",
            "--display",
            "--adjust",
            "saturation",
            "30",
        ])
        .unwrap();
        assert_eq!(
            parsed.operations,
            vec![
                adjust(AdjustmentKind::Exposure, -20),
                adjust(AdjustmentKind::Temperature, 15),
                Operation::Display,
                adjust(AdjustmentKind::Saturation, 30),
            ]
        );
    }

    #[test]
    fn test_adjust_chain_end_token_is_reparsed_as_command() {
        assert_eq!(
            parse_with(&["--adjust", "brightness", "10", "sharpness", "3"]),
            Err(GrammarError::UnknownCommand("sharpness".to_string()))
        );
    }

    #[test]
    fn test_adjust_rejects_non_integer_value() {
        assert_eq!(
            parse_with(&["--adjust", "brightness", "foo"]),
            Err(GrammarError::InvalidAdjustmentValue {
                adjustment: AdjustmentKind::Brightness,
                value: Some("foo".to_string()),
            })
        );
        assert_eq!(
            parse_with(&["--adjust", "contrast", "1.5"]),
            Err(GrammarError::InvalidAdjustmentValue {
                adjustment: AdjustmentKind::Contrast,
                value: Some("1.5".to_string()),
            })
        );
        assert_eq!(
            parse_with(&["--adjust", "contrast"]),
            Err(GrammarError::InvalidAdjustmentValue {
                adjustment: AdjustmentKind::Contrast,
                value: None,
            })
        );
    }

    #[test]
    fn test_adjust_accepts_integers_beyond_i32() {
        let parsed = parse_with(&[
            "--adjust",
            "brightness",
            "3000000000",
            "contrast",
            "+7",
            "exposure",
            "-99999999999999999999999",
        ])
        .unwrap();
        assert_eq!(
            parsed.operations,
            vec![
                adjust(AdjustmentKind::Brightness, 3_000_000_000),
                adjust(AdjustmentKind::Contrast, 7),
                adjust(AdjustmentKind::Exposure, i64::MIN),
            ]
        );

        assert_eq!(
            parse_with(&["--adjust", "brightness", "-"]),
            Err(GrammarError::InvalidAdjustmentValue {
                adjustment: AdjustmentKind::Brightness,
                value: Some("-".to_string()),
            })
        );
    }

    #[test]
    fn test_adjust_requires_one_pair() {
        assert_eq!(
            parse_with(&["--adjust"]),
            Err(GrammarError::MissingAdjustment(None))
        );
        assert_eq!(
            parse_with(&["--adjust", "--display"]),
            Err(GrammarError::MissingAdjustment(Some("--display".to_string())))
        );
    }

    #[test]
    fn test_output_path() {
        let parsed = parse_with(&["--output", "a.png", "--display", "--output", "b.png"]).unwrap();
        assert_eq!(
            parsed.operations,
            vec![
                Operation::Output {
                    path: PathBuf::from("a.png")
                },
                Operation::Display,
                Operation::Output {
                    path: PathBuf::from("b.png")
                },
            ]
        );
        assert_eq!(
            parse_with(&["--output"]),
            Err(GrammarError::MissingOutputPath)
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args: Vec<String> = ["edit_image", "--image", "x.jpg", "--filter", "invert"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse(args.as_slice()).unwrap();
        assert_eq!(parsed.operations, vec![Operation::Filter(Filter::Invert)]);
    }
}
