//! Parser for seed files describing an initial population.
//!
//! A seed file is line oriented. Each line is a header and a body separated
//! by the first `:`:
//!
//! ```text
//! # glider, shifted right by 5 columns
//! >>:5
//! 01: @
//! ++:  @
//! ++:@@@
//! ```
//!
//! * `#...` and lines without `:` are ignored.
//! * `>>:N` sets the column offset for every following line (`N >= 0`).
//! * `N:<marks>` describes row `N`; `++:<marks>` describes the row after the
//!   last one seen.
//!
//! Within `<marks>` (trailing whitespace removed) the character at index `i`
//! marks column `i + offset` alive unless it is a space.

use life_core::Coordinate;
use tracing::{debug, warn};

const COMMENT_PREFIX: char = '#';
const HEADER_SEPARATOR: char = ':';
const COLUMN_OFFSET_HEADER: &str = ">>";
const NEXT_ROW_HEADER: &str = "++";

/// Live columns on one row of a seed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRecord {
    pub row: i32,
    pub columns: Vec<i32>,
}

impl SeedRecord {
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.columns.iter().map(move |&x| Coordinate::new(x, self.row))
    }
}

/// State carried from one line to the next during a single parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserState {
    /// Added to every mark index to get the absolute column
    pub column_offset: i32,
    /// Row of the last row directive, the base for `++:`
    pub last_row: i32,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            column_offset: 0,
            last_row: -1,
        }
    }
}

/// Result of parsing a whole seed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSeed {
    /// Live cells in file order, left to right within a line
    pub coordinates: Vec<Coordinate>,
    /// Smallest field width that holds every parsed column
    pub min_width: i32,
    /// Smallest field height that holds every parsed row
    pub min_height: i32,
}

/// Parse the full text of a seed file. Malformed lines are logged and skipped.
pub fn parse(text: &str) -> ParsedSeed {
    let mut state = ParserState::default();
    let mut coordinates = Vec::new();
    let mut max_column = 0;
    let mut max_row = 0;

    for (index, line) in text.lines().enumerate() {
        let record = parse_line(index + 1, line, &mut state);
        max_row = max_row.max(state.last_row);

        if let Some(record) = record {
            if let Some(&column) = record.columns.iter().max() {
                max_column = max_column.max(column);
            }
            coordinates.extend(record.coordinates());
        }
    }

    debug!(
        cells = coordinates.len(),
        max_column, max_row, "Parsed seed file"
    );

    ParsedSeed {
        coordinates,
        min_width: bound_after(max_column, "width"),
        min_height: bound_after(max_row, "height"),
    }
}

/// Size needed to hold index `max`, saturating at `i32::MAX`
fn bound_after(max: i32, dimension: &str) -> i32 {
    max.checked_add(1).unwrap_or_else(|| {
        warn!(max, "Seed file {} does not fit in a field", dimension);
        i32::MAX
    })
}

/// Parse one line, updating `state` as the directive requires.
///
/// Returns the live columns of a row directive, or `None` for anything that
/// contributes no cells.
pub fn parse_line(line_number: usize, line: &str, state: &mut ParserState) -> Option<SeedRecord> {
    if line.starts_with(COMMENT_PREFIX) {
        debug!(line_number, "Comment: {}", line);
        return None;
    }

    let Some((header, body)) = line.split_once(HEADER_SEPARATOR) else {
        if line.trim().is_empty() {
            debug!(line_number, "Blank line");
        } else {
            warn!(line_number, "Ignoring line without a header: {}", line);
        }
        return None;
    };
    let marks = body.trim_end();

    if header == COLUMN_OFFSET_HEADER {
        match marks.parse::<i32>() {
            Ok(offset) if offset >= 0 => {
                debug!(line_number, offset, "Column offset set");
                state.column_offset = offset;
            }
            _ => warn!(line_number, "Ignoring invalid column offset: {}", line),
        }
        return None;
    }

    let row = if header == NEXT_ROW_HEADER {
        match state.last_row.checked_add(1) {
            Some(row) => row,
            None => {
                warn!(line_number, "Ignoring row past the last addressable row: {}", line);
                return None;
            }
        }
    } else {
        match header.parse::<i32>() {
            Ok(row) => row,
            Err(_) => {
                warn!(line_number, "Ignoring line with unknown header: {}", line);
                return None;
            }
        }
    };
    state.last_row = row;

    let columns = mark_columns(line_number, marks, state.column_offset);
    if columns.is_empty() {
        warn!(line_number, row, "Ignoring row without live cells: {}", line);
        return None;
    }

    Some(SeedRecord { row, columns })
}

/// Columns marked alive in `marks`, shifted by `offset`. Marks whose column
/// would not fit in an `i32` are dropped.
fn mark_columns(line_number: usize, marks: &str, offset: i32) -> Vec<i32> {
    marks
        .chars()
        .enumerate()
        .filter(|&(_, mark)| mark != ' ')
        .filter_map(|(i, _)| {
            let column = i32::try_from(i).ok().and_then(|i| i.checked_add(offset));
            if column.is_none() {
                warn!(line_number, index = i, offset, "Ignoring mark past the last addressable column");
            }
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(i32, i32)]) -> Vec<Coordinate> {
        pairs.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    #[test]
    fn test_absolute_and_relative_rows() {
        let parsed = parse("01:@ @\n++: @ \n");
        assert_eq!(parsed.coordinates, coords(&[(0, 1), (2, 1), (1, 2)]));
        assert_eq!(parsed.min_width, 3);
        assert_eq!(parsed.min_height, 3);
    }

    #[test]
    fn test_column_offset() {
        let parsed = parse(">>:5\n01:@\n");
        assert_eq!(parsed.coordinates, coords(&[(5, 1)]));
        assert_eq!(parsed.min_width, 6);
        assert_eq!(parsed.min_height, 2);
    }

    #[test]
    fn test_line_without_colon_changes_nothing() {
        let mut state = ParserState {
            column_offset: 3,
            last_row: 7,
        };
        assert_eq!(parse_line(1, "bad line no colon", &mut state), None);
        assert_eq!(
            state,
            ParserState {
                column_offset: 3,
                last_row: 7
            }
        );

        let parsed = parse("02:@\nbad line no colon\n++:@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 2), (0, 3)]));
    }

    #[test]
    fn test_comments_are_ignored() {
        let parsed = parse("# 05:@@@ looks like a row\n#>>:4\n00:@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 0)]));
    }

    #[test]
    fn test_leading_relative_row_is_row_zero() {
        let parsed = parse("++:@@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 0), (1, 0)]));
    }

    #[test]
    fn test_invalid_column_offset_is_ignored() {
        let parsed = parse(">>:2\n>>:-4\n>>:abc\n00:@\n");
        assert_eq!(parsed.coordinates, coords(&[(2, 0)]));
    }

    #[test]
    fn test_offset_applies_to_later_lines_only() {
        let parsed = parse("00:@\n>>:10\n++:@\n>>:0\n++:@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 0), (10, 1), (0, 2)]));
    }

    #[test]
    fn test_empty_marks_still_update_last_row() {
        let mut state = ParserState::default();
        assert_eq!(parse_line(1, "10:   ", &mut state), None);
        assert_eq!(state.last_row, 10);

        let parsed = parse("10:   \n++:@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 11)]));
        assert_eq!(parsed.min_height, 12);
    }

    #[test]
    fn test_unknown_header_is_ignored() {
        let mut state = ParserState::default();
        assert_eq!(parse_line(1, "xx:@@", &mut state), None);
        assert_eq!(state, ParserState::default());
    }

    #[test]
    fn test_any_non_space_is_a_mark() {
        let parsed = parse("03:a.\t #\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 3), (1, 3), (2, 3), (4, 3)]));
    }

    #[test]
    fn test_marks_run_to_end_of_line() {
        let parsed = parse("00:@:@\n");
        assert_eq!(parsed.coordinates, coords(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn test_state_resets_per_parse() {
        let first = parse(">>:4\n00:@\n");
        let second = parse("++:@\n");
        assert_eq!(first.coordinates, coords(&[(4, 0)]));
        assert_eq!(second.coordinates, coords(&[(0, 0)]));
    }

    #[test]
    fn test_columns_past_i32_range_are_dropped() {
        let parsed = parse(">>:2147483647\n00:@@\n");
        assert_eq!(parsed.coordinates, coords(&[(i32::MAX, 0)]));
    }

    #[test]
    fn test_bounds_saturate_at_i32_max() {
        let parsed = parse(">>:2147483647\n00:@\n");
        assert_eq!(parsed.coordinates, coords(&[(i32::MAX, 0)]));
        assert_eq!(parsed.min_width, i32::MAX);
        assert_eq!(parsed.min_height, 1);
    }

    #[test]
    fn test_relative_row_after_last_addressable_row_is_ignored() {
        let mut state = ParserState {
            column_offset: 0,
            last_row: i32::MAX,
        };
        assert_eq!(parse_line(1, "++:@", &mut state), None);
        assert_eq!(state.last_row, i32::MAX);

        let parsed = parse("2147483647: \n++:@\n");
        assert!(parsed.coordinates.is_empty());
        assert_eq!(parsed.min_width, 1);
        assert_eq!(parsed.min_height, i32::MAX);
    }

    #[test]
    fn test_nothing_parsed_gives_unit_bounds() {
        let parsed = parse("# only a comment\n");
        assert!(parsed.coordinates.is_empty());
        assert_eq!((parsed.min_width, parsed.min_height), (1, 1));
    }
}
