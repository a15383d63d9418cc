//! Output formatting for match results

use memchr::{memchr, memrchr};
use std::io::{self, Write};
use std::ops::Range;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Bytes of context shown on each side of a match
pub const CONTEXT_BYTES: usize = 32;

/// A match split into its surrounding line fragment
#[derive(Debug, PartialEq, Eq)]
pub struct MatchContext<'a> {
    pub offset: usize,
    pub before: &'a [u8],
    pub hit: &'a [u8],
    pub after: &'a [u8],
}

/// Cut the line fragment around `range`, at most `max_context` bytes each way
pub fn match_context(text: &[u8], range: Range<usize>, max_context: usize) -> MatchContext<'_> {
    let start = range.start.min(text.len());
    let end = range.end.clamp(start, text.len());

    let window_start = start.saturating_sub(max_context);
    let line_start = memrchr(b'\n', &text[window_start..start])
        .map(|i| window_start + i + 1)
        .unwrap_or(window_start);

    let window_end = (end + max_context).min(text.len());
    let line_end = memchr(b'\n', &text[end..window_end])
        .map(|i| end + i)
        .unwrap_or(window_end);

    MatchContext {
        offset: start,
        before: &text[line_start..start],
        hit: &text[start..end],
        after: &text[end..line_end],
    }
}

/// Print one `offset:context` line per match, highlighting the matched bytes
pub fn print_matches(text: &[u8], ranges: &[Range<usize>], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    for range in ranges {
        let ctx = match_context(text, range.clone(), CONTEXT_BYTES);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", ctx.offset)?;
        stdout.reset()?;
        write!(stdout, ":{}", String::from_utf8_lossy(ctx.before))?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", String::from_utf8_lossy(ctx.hit))?;
        stdout.reset()?;

        writeln!(stdout, "{}", String::from_utf8_lossy(ctx.after))?;
    }

    Ok(())
}
