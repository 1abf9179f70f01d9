use crate::core::age::age;
use crate::domain::model::CalendarDate;
use crate::domain::ports::Clock;
use crate::utils::error::{AgeError, Result};
use crate::utils::validation::validate_birth_date;
use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind, Write};

pub const INVALID_INPUT: &str = "Invalid input";

/// The three values asked for, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthField {
    Year,
    Month,
    Day,
}

impl BirthField {
    pub const ORDER: [BirthField; 3] = [BirthField::Year, BirthField::Month, BirthField::Day];

    pub fn prompt(self) -> &'static str {
        match self {
            BirthField::Year => "Enter your birth year: ",
            BirthField::Month => "Enter your birth month (1-12): ",
            BirthField::Day => "Enter your birth day: ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BirthField::Year => "birth year",
            BirthField::Month => "birth month",
            BirthField::Day => "birth day",
        }
    }
}

/// Interactive driver: prompt, validate, compute, print.
pub struct AgeEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> AgeEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Runs one session against `input`/`output` and returns the printed age.
    ///
    /// Any input error is reported as `Invalid input` on `output` before it
    /// is returned, so the caller only has to pick the exit status.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<i64> {
        match self.session(&mut input, &mut output) {
            Ok(age) => Ok(age),
            Err(e) if e.is_input_error() => {
                tracing::debug!("❌ Rejected input: {}", e);
                writeln!(output, "{}", INVALID_INPUT)?;
                output.flush()?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    fn session<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<i64> {
        // Read once; the same date backs both validation and the calculation.
        let today = self.clock.today();
        tracing::debug!("Reference date: {}", today);

        let mut tokens = Tokens::new(input);
        let mut values = [0i32; 3];
        for (slot, field) in values.iter_mut().zip(BirthField::ORDER) {
            *slot = read_value(&mut tokens, output, field)?;
            tracing::debug!("Read {} = {}", field.name(), slot);
        }
        let [year, month, day] = values;
        let birth = CalendarDate::new(year, month, day);

        validate_birth_date(&birth, &today)?;

        let age = age(&birth, &today);
        tracing::debug!("Age for {} as of {}: {}", birth, today, age);

        writeln!(output, "Your age is: {}", age)?;
        output.flush()?;
        Ok(age)
    }
}

/// Whitespace-separated tokens, pulled from the input a line at a time.
///
/// Blank lines are skipped and several values may share one line, so
/// `2000 6 15` answers all three prompts.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `Ok(None)` once the input is exhausted.
    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn read_value<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
    field: BirthField,
) -> Result<i32> {
    write!(output, "{}", field.prompt())?;
    output.flush()?;

    let token = match tokens.next_token() {
        Ok(Some(token)) => token,
        Ok(None) => {
            return Err(AgeError::MissingInputError {
                field: field.name().to_string(),
            })
        }
        // 非 UTF-8 位元組視為無法解析的輸入
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(AgeError::MalformedInputError {
                field: field.name().to_string(),
                input: String::new(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    token.parse::<i32>().map_err(|_| AgeError::MalformedInputError {
        field: field.name().to_string(),
        input: token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::clock::FixedClock;
    use std::io::Cursor;

    fn engine() -> AgeEngine<FixedClock> {
        AgeEngine::new(FixedClock::new(CalendarDate::new(2024, 6, 20)))
    }

    fn run_with(input: &str) -> (Result<i64>, String) {
        let mut output = Vec::new();
        let result = engine().run(Cursor::new(input.as_bytes()), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompts_in_order_then_prints_age() {
        let (result, output) = run_with("2000\n6\n15\n");

        assert_eq!(result.unwrap(), 24);
        assert_eq!(
            output,
            "Enter your birth year: Enter your birth month (1-12): Enter your birth day: Your age is: 24\n"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let (result, _) = run_with("  2000 \r\n\t6\n15");
        assert_eq!(result.unwrap(), 24);
    }

    #[test]
    fn test_future_year_prints_invalid_input() {
        let (result, output) = run_with("2030\n1\n1\n");

        assert!(matches!(result, Err(AgeError::InvalidInputError { .. })));
        assert!(output.ends_with("Enter your birth day: Invalid input\n"));
        assert!(!output.contains("Your age is"));
    }

    #[test]
    fn test_out_of_range_month_and_day() {
        for input in ["2000\n0\n1\n", "2000\n13\n1\n", "2000\n1\n0\n", "2000\n1\n32\n"] {
            let (result, output) = run_with(input);
            assert_eq!(result.unwrap_err().exit_code(), 1, "input {:?}", input);
            assert!(output.ends_with("Invalid input\n"));
        }
    }

    #[test]
    fn test_malformed_token_stops_at_that_prompt() {
        let (result, output) = run_with("2000\nJune\n15\n");

        match result {
            Err(AgeError::MalformedInputError { field, input }) => {
                assert_eq!(field, "birth month");
                assert_eq!(input, "June");
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
        assert_eq!(
            output,
            "Enter your birth year: Enter your birth month (1-12): Invalid input\n"
        );
    }

    #[test]
    fn test_values_on_one_line() {
        let (result, output) = run_with("2000 6 15\n");

        assert_eq!(result.unwrap(), 24);
        assert_eq!(
            output,
            "Enter your birth year: Enter your birth month (1-12): Enter your birth day: Your age is: 24\n"
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (result, _) = run_with("\n\n2000\n   \n6 15\n");
        assert_eq!(result.unwrap(), 24);
    }

    #[test]
    fn test_only_blank_lines_is_missing_input() {
        let (result, _) = run_with("\n  \n\n");
        assert!(matches!(result, Err(AgeError::MissingInputError { .. })));
    }

    #[test]
    fn test_trailing_garbage_token_is_malformed() {
        let (result, _) = run_with("2000 6x 15\n");
        match result {
            Err(AgeError::MalformedInputError { field, input }) => {
                assert_eq!(field, "birth month");
                assert_eq!(input, "6x");
            }
            other => panic!("expected malformed input, got {:?}", other),
        }
    }

    #[test]
    fn test_write_failure_is_not_an_input_error() {
        struct BrokenWriter;
        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = engine().run(Cursor::new("2000\n6\n15\n"), BrokenWriter);

        match result {
            Err(e @ AgeError::IoError(_)) => {
                assert!(!e.is_input_error());
                assert_eq!(e.exit_code(), 3);
            }
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_prompt_does_not_print_invalid_input() {
        // Accepts the first prompt, then fails.
        struct FlakyWriter {
            written: Vec<u8>,
            budget: usize,
        }
        impl Write for FlakyWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if self.budget == 0 {
                    return Err(std::io::Error::new(ErrorKind::BrokenPipe, "closed"));
                }
                self.budget -= 1;
                self.written.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = FlakyWriter {
            written: Vec::new(),
            budget: 1,
        };
        let result = engine().run(Cursor::new("2000\n6\n15\n"), &mut writer);

        assert!(matches!(result, Err(AgeError::IoError(_))));
        let written = String::from_utf8(writer.written).unwrap();
        assert_eq!(written, "Enter your birth year: ");
        assert!(!written.contains(INVALID_INPUT));
    }

    #[test]
    fn test_end_of_input_is_missing_input() {
        let (result, output) = run_with("2000\n6\n");

        match result {
            Err(AgeError::MissingInputError { field }) => assert_eq!(field, "birth day"),
            other => panic!("expected missing input, got {:?}", other),
        }
        assert!(output.ends_with("Invalid input\n"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut output = Vec::new();
        let result = engine().run(Cursor::new(&[0xff, 0xfe, b'\n'][..]), &mut output);
        assert!(matches!(result, Err(AgeError::MalformedInputError { .. })));
    }

    #[test]
    fn test_clock_read_once() {
        use std::cell::Cell;

        struct CountingClock(Cell<u32>);
        impl Clock for CountingClock {
            fn today(&self) -> CalendarDate {
                self.0.set(self.0.get() + 1);
                CalendarDate::new(2024, 6, 20)
            }
        }

        let clock = CountingClock(Cell::new(0));
        let engine = AgeEngine::new(&clock);
        let mut output = Vec::new();
        engine.run(Cursor::new("1990\n6\n21\n"), &mut output).unwrap();

        assert_eq!(clock.0.get(), 1);
    }
}
