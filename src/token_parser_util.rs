/// Interprets one input line as a base-10 signed integer.
/// Leading and trailing whitespace is ignored. Empty lines, lines with
/// non-digit characters and values that overflow i64 all return None;
/// malformed tokens are expected in the input and must not abort the run.
pub fn parse_integer(line: &str) -> Option<i64> {
    line.trim().parse::<i64>().ok()
}
