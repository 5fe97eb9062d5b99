//! `.cube` text decoding.
//!
//! ```text
//! # comment
//! TITLE "name"
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.000000 0.000000 0.000000
//! ...
//! ```
//!
//! Data rows are stored in file order, which is already the lattice's
//! red-fastest linear order.

use crate::error::ParseError;
use crate::lut::lattice::{DEFAULT_DOMAIN_MAX, DEFAULT_DOMAIN_MIN, Lattice};

/// Sizes that ship with most grading tools. Anything else is accepted with a warning.
pub const CONVENTIONAL_SIZES: [u32; 3] = [17, 33, 64];

/// One classified line of `.cube` text.
#[derive(Debug, PartialEq)]
enum Directive<'a> {
    Title(&'a str),
    Size(Option<&'a str>),
    DomainMin(Option<[f32; 3]>),
    DomainMax(Option<[f32; 3]>),
    Data([&'a str; 3]),
    Ignored,
}

impl<'a> Directive<'a> {
    /// Classify a trimmed, non-empty, non-comment line.
    fn classify(line: &'a str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Self::Ignored;
        };

        match keyword {
            "TITLE" => Self::Title(line[keyword.len()..].trim().trim_matches('"')),
            "LUT_3D_SIZE" => Self::Size(tokens.next()),
            "DOMAIN_MIN" => Self::DomainMin(parse_triple(tokens)),
            "DOMAIN_MAX" => Self::DomainMax(parse_triple(tokens)),
            first => match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(second), Some(third), None) if parse_finite(first).is_some() => {
                    Self::Data([first, second, third])
                }
                _ => Self::Ignored,
            },
        }
    }
}

/// A finite float. `nan`, `inf` and `infinity` are rejected.
fn parse_finite(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Exactly three parseable floats, or `None`.
fn parse_triple<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[f32; 3]> {
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    let c = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some([a, b, c])
}

/// Decode `.cube` text into a [`Lattice`].
///
/// Fails when `LUT_3D_SIZE` is missing or zero, when a data row carries an
/// unparsable number, or when the row count is not `size³`. A malformed
/// `DOMAIN_MIN`/`DOMAIN_MAX` is ignored and the default kept. The result is
/// not validated; import flows call [`validate`](crate::lut::validate).
pub fn parse(text: &str) -> Result<Lattice, ParseError> {
    let mut size_token: Option<String> = None;
    let mut size = 0_u32;
    let mut domain_min = DEFAULT_DOMAIN_MIN;
    let mut domain_max = DEFAULT_DOMAIN_MAX;
    let mut title = None;
    let mut samples: Vec<[f32; 3]> = Vec::new();
    let mut invalid_number: Option<ParseError> = None;

    for (line_idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Directive::classify(line) {
            Directive::Title(t) => title = Some(t.to_string()),
            Directive::Size(token) => {
                let token = token.unwrap_or_default();
                match token.parse::<u32>() {
                    Ok(n) => {
                        size = n;
                        size_token = None;
                    }
                    Err(_) => size_token = Some(token.to_string()),
                }
            }
            Directive::DomainMin(Some(v)) => domain_min = v,
            Directive::DomainMax(Some(v)) => domain_max = v,
            Directive::DomainMin(None) | Directive::DomainMax(None) => {}
            Directive::Data(tokens) => {
                let mut rgb = [0.0_f32; 3];
                for (slot, token) in rgb.iter_mut().zip(tokens) {
                    match parse_finite(token) {
                        Some(v) => *slot = v,
                        None if invalid_number.is_none() => {
                            invalid_number = Some(ParseError::InvalidNumber {
                                line: line_idx + 1,
                                token: token.to_string(),
                            });
                        }
                        None => {}
                    }
                }
                samples.push(rgb);
            }
            Directive::Ignored => {}
        }
    }

    if let Some(token) = size_token {
        return Err(ParseError::InvalidSize(token));
    }
    if size == 0 {
        return Err(ParseError::MissingSize);
    }
    if let Some(err) = invalid_number {
        return Err(err);
    }

    if !CONVENTIONAL_SIZES.contains(&size) {
        tracing::warn!(size, "unusual LUT size; conventional sizes are 17, 33 and 64");
    }

    let n = size as usize;
    let expected = n
        .checked_mul(n)
        .and_then(|sq| sq.checked_mul(n))
        .ok_or_else(|| ParseError::InvalidSize(size.to_string()))?;
    if samples.len() != expected {
        return Err(ParseError::DataCountMismatch {
            expected,
            found: samples.len(),
        });
    }

    Ok(Lattice {
        size,
        domain_min,
        domain_max,
        samples,
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::validate;

    const IDENTITY_2: &str = "\
# identity
TITLE \"Identity 2\"
LUT_3D_SIZE 2

0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";

    #[test]
    fn test_parse_identity_two_keeps_file_order() {
        let lattice = parse(IDENTITY_2).unwrap();
        assert_eq!(lattice.size, 2);
        assert_eq!(lattice.title.as_deref(), Some("Identity 2"));
        assert_eq!(
            lattice.samples,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
            ]
        );
        assert_eq!(lattice.domain_min, [0.0; 3]);
        assert_eq!(lattice.domain_max, [1.0; 3]);
        assert!(validate(&lattice));
    }

    #[test]
    fn test_parse_missing_size() {
        let err = parse("0 0 0\n1 1 1\n").unwrap_err();
        assert_eq!(err, ParseError::MissingSize);
    }

    #[test]
    fn test_parse_zero_size_is_missing() {
        assert_eq!(parse("LUT_3D_SIZE 0\n").unwrap_err(), ParseError::MissingSize);
    }

    #[test]
    fn test_parse_non_numeric_size() {
        assert_eq!(
            parse("LUT_3D_SIZE big\n").unwrap_err(),
            ParseError::InvalidSize("big".into())
        );
    }

    #[test]
    fn test_parse_count_mismatch() {
        let text = "LUT_3D_SIZE 2\n0 0 0\n1 1 1\n";
        assert_eq!(
            parse(text).unwrap_err(),
            ParseError::DataCountMismatch {
                expected: 8,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_bad_number_in_data_row() {
        let text = IDENTITY_2.replace("1 0 1", "1 x 1");
        match parse(&text).unwrap_err() {
            ParseError::InvalidNumber { line, token } => {
                assert_eq!(line, 10);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_finite_first_token_is_not_data() {
        let text = IDENTITY_2.replace("1 1 1", "nan inf -infinity");
        assert_eq!(
            parse(&text).unwrap_err(),
            ParseError::DataCountMismatch {
                expected: 8,
                found: 7
            }
        );
    }

    #[test]
    fn test_parse_non_finite_value_is_invalid_number() {
        let text = IDENTITY_2.replace("1 1 1", "1 inf 1");
        assert_eq!(
            parse(&text).unwrap_err(),
            ParseError::InvalidNumber {
                line: 12,
                token: "inf".into()
            }
        );
    }

    #[test]
    fn test_parse_domain_directives() {
        let text = IDENTITY_2.replace(
            "LUT_3D_SIZE 2",
            "LUT_3D_SIZE 2\nDOMAIN_MIN -0.5 0 0\nDOMAIN_MAX 2 2 2",
        );
        let lattice = parse(&text).unwrap();
        assert_eq!(lattice.domain_min, [-0.5, 0.0, 0.0]);
        assert_eq!(lattice.domain_max, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_parse_malformed_domain_keeps_default() {
        let text = IDENTITY_2.replace(
            "LUT_3D_SIZE 2",
            "LUT_3D_SIZE 2\nDOMAIN_MIN 0 0\nDOMAIN_MAX 1 nope 1",
        );
        let lattice = parse(&text).unwrap();
        assert_eq!(lattice.domain_min, DEFAULT_DOMAIN_MIN);
        assert_eq!(lattice.domain_max, DEFAULT_DOMAIN_MAX);
    }

    #[test]
    fn test_parse_ignores_unknown_lines() {
        let text = IDENTITY_2.replace(
            "LUT_3D_SIZE 2",
            "LUT_3D_SIZE 2\nLUT_3D_INPUT_RANGE 0 1\nLUT_1D_SIZE 4\n0.5 0.5",
        );
        assert_eq!(parse(&text).unwrap().samples.len(), 8);
    }

    #[test]
    fn test_parse_unusual_size_is_accepted() {
        let text = Lattice::identity(5).to_cube_string();
        let lattice = parse(&text).unwrap();
        assert_eq!(lattice.size, 5);
        assert!(validate(&lattice));
    }

    #[test]
    fn test_parse_crlf_and_indentation() {
        let text = IDENTITY_2.replace('\n', "\r\n   ");
        assert_eq!(parse(&text).unwrap().samples.len(), 8);
    }

    #[test]
    fn test_directive_classification() {
        assert_eq!(Directive::classify("TITLE \"x y\""), Directive::Title("x y"));
        assert_eq!(Directive::classify("LUT_3D_SIZE 33"), Directive::Size(Some("33")));
        assert_eq!(
            Directive::classify("DOMAIN_MAX 1 1 1 1"),
            Directive::DomainMax(None)
        );
        assert_eq!(Directive::classify("0.1 0.2 0.3"), Directive::Data(["0.1", "0.2", "0.3"]));
        assert_eq!(Directive::classify("foo 0.2 0.3"), Directive::Ignored);
        assert_eq!(Directive::classify("NaN 0.2 0.3"), Directive::Ignored);
    }
}
