use crate::models::TicketCategory;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Number of digits in a ticket sequence
pub const TICKET_WIDTH: usize = 4;

/// Highest sequence that still fits in `TICKET_WIDTH` digits
pub const MAX_SEQUENCE: u32 = 9999;

static PREFIXED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])([0-9]{4})$").expect("valid regex"));
static UNPREFIXED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})$").expect("valid regex"));

/// Errors raised while computing tickets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("ticket sequence for {category} exhausted: {requested} tickets requested after {last}")]
    SequenceExhausted {
        category: TicketCategory,
        last: u32,
        requested: usize,
    },
}

/// Anchored SQL regex selecting the tickets of one category
///
/// Used with PostgreSQL's `~` operator.
pub fn sql_pattern(category: TicketCategory) -> String {
    match category.prefix() {
        Some(prefix) => format!("^{}[0-9]{{{}}}$", prefix, TICKET_WIDTH),
        None => format!("^[0-9]{{{}}}$", TICKET_WIDTH),
    }
}

/// Parse the numeric suffix of a ticket belonging to `category`
///
/// Returns `None` for tickets of another category or malformed values.
pub fn parse_sequence(ticket: &str, category: TicketCategory) -> Option<u32> {
    let digits = match category.prefix() {
        Some(prefix) => {
            let caps = PREFIXED_RE.captures(ticket)?;
            if !caps[1].starts_with(prefix) {
                return None;
            }
            caps.get(2)?.as_str()
        }
        None => UNPREFIXED_RE.captures(ticket)?.get(1)?.as_str(),
    };

    digits.parse().ok()
}

/// Highest sequence among `tickets` for `category`, 0 when there is none
///
/// Values that do not parse are skipped.
pub fn highest_sequence<'a, I>(tickets: I, category: TicketCategory) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    tickets
        .into_iter()
        .filter_map(|ticket| {
            let parsed = parse_sequence(ticket, category);
            if parsed.is_none() && looks_like(ticket, category) {
                tracing::debug!("Skipping malformed ticket {:?} for category {}", ticket, category);
            }
            parsed
        })
        .max()
        .unwrap_or(0)
}

fn looks_like(ticket: &str, category: TicketCategory) -> bool {
    match category.prefix() {
        Some(prefix) => ticket.starts_with(prefix),
        None => ticket.starts_with(|c: char| c.is_ascii_digit()),
    }
}

/// Render a sequence number as a ticket
pub fn format_ticket(category: TicketCategory, sequence: u32) -> Result<String, TicketError> {
    if sequence > MAX_SEQUENCE {
        return Err(TicketError::SequenceExhausted {
            category,
            last: MAX_SEQUENCE,
            requested: 1,
        });
    }

    Ok(match category.prefix() {
        Some(prefix) => format!("{}{:0width$}", prefix, sequence, width = TICKET_WIDTH),
        None => format!("{:0width$}", sequence, width = TICKET_WIDTH),
    })
}

/// Next ticket after the ones already stored
///
/// Pure: calling it twice over the same input returns the same ticket.
pub fn next_ticket<'a, I>(existing: I, category: TicketCategory) -> Result<String, TicketError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut block = allocate_block(existing, category, 1)?;
    Ok(block.remove(0))
}

/// Reserve `count` contiguous tickets after the ones already stored
///
/// All tickets derive from a single lookup (`base + 1 ..= base + count`).
/// Fails without producing anything if the block would run past
/// `MAX_SEQUENCE`.
pub fn allocate_block<'a, I>(
    existing: I,
    category: TicketCategory,
    count: usize,
) -> Result<Vec<String>, TicketError>
where
    I: IntoIterator<Item = &'a str>,
{
    let base = highest_sequence(existing, category);

    let exhausted = || TicketError::SequenceExhausted {
        category,
        last: base,
        requested: count,
    };
    let count_u32 = u32::try_from(count).map_err(|_| exhausted())?;
    if base.checked_add(count_u32).map_or(true, |last| last > MAX_SEQUENCE) {
        return Err(exhausted());
    }

    (1..=count_u32)
        .map(|offset| format_ticket(category, base + offset))
        .collect()
}
