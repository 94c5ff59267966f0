use super::leading_run;
use crate::cursor::Cursor;
use crate::parser::Parser;
use tracing::debug;

const DECIMAL_POINT: char = '.';

/// Parser that matches a run of ASCII digits and decimal points as an `f64`
///
/// The whole run is taken greedily and must parse as a float, so `"1.2.3"`
/// and a lone `"."` are no-matches. Nothing is consumed on a no-match.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatParser;

impl<'code> Parser<'code> for FloatParser {
    type Output = f64;

    fn run(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let run = leading_run(cursor.remaining(), |c| {
            c.is_ascii_digit() || c == DECIMAL_POINT
        });
        if run.is_empty() {
            return None;
        }

        match run.parse::<f64>() {
            Ok(value) => {
                cursor.bump(run.len());
                Some(value)
            }
            Err(error) => {
                debug!(run, %error, "numeric run is not a valid float");
                None
            }
        }
    }
}

/// Convenience function to create a FloatParser
pub fn float() -> FloatParser {
    FloatParser
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a float");
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_float_with_fraction() {
        let mut cursor = Cursor::new("123.3333 Hello World");

        assert_close(float().run(&mut cursor), 123.3333);
        assert_eq!(cursor.remaining(), " Hello World");
    }

    #[test]
    fn test_float_without_fraction() {
        assert_close(float().parse("42"), 42.0);
    }

    #[test]
    fn test_float_whole_input() {
        let mut cursor = Cursor::new("123.2");

        assert_close(float().run(&mut cursor), 123.2);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_float_stops_before_degree_sign() {
        let mut cursor = Cursor::new("40.446° N");

        assert_close(float().run(&mut cursor), 40.446);
        assert_eq!(cursor.remaining(), "° N");
    }

    #[test]
    fn test_no_match_fails_without_consuming() {
        let mut cursor = Cursor::new("Hello World 123");

        assert_eq!(float().run(&mut cursor), None);
        assert_eq!(cursor.remaining(), "Hello World 123");
    }

    #[test]
    fn test_empty_input_fails() {
        let mut cursor = Cursor::new("");

        assert_eq!(float().run(&mut cursor), None);
    }

    #[test]
    fn test_just_dot_fails_without_consuming() {
        let mut cursor = Cursor::new(".abc");

        assert_eq!(float().run(&mut cursor), None);
        assert_eq!(cursor.remaining(), ".abc");
    }

    #[test]
    fn test_two_decimal_points_fail_without_consuming() {
        let mut cursor = Cursor::new("1.2.3xyz");

        assert_eq!(float().run(&mut cursor), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_exponent_is_not_part_of_the_run() {
        let mut cursor = Cursor::new("1.5e3");

        assert_close(float().run(&mut cursor), 1.5);
        assert_eq!(cursor.remaining(), "e3");
    }
}
