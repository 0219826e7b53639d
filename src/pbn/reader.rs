use crate::model::{BoardRecord, Deal, Hand, Seat, Vulnerability};
use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    sequence::delimited,
    IResult, Parser,
};
use thiserror::Error;

/// A parsed PBN tag pair
#[derive(Debug, Clone, Copy)]
struct TagPair<'a> {
    name: &'a str,
    value: &'a str,
}

/// Parse a tag name (alphanumeric and underscore)
fn tag_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_').parse(input)
}

/// Parse a quoted string value
fn quoted_string(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_until("\""), char('"')).parse(input)
}

/// Parse a tag pair: [TagName "value"]
fn tag_pair(input: &str) -> IResult<&str, TagPair<'_>> {
    let (input, _) = char('[').parse(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, name) = tag_name(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, value) = quoted_string(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, _) = char(']').parse(input)?;

    Ok((input, TagPair { name, value }))
}

/// Something the decoder skipped over. Decoding never fails; these are the
/// only record of what was dropped along the way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    #[error("line {line}: board number {value:?} is not a positive integer")]
    BadBoardNumber { line: usize, value: String },

    #[error("line {line}: dealer {value:?} is not one of N, E, S, W")]
    BadDealer { line: usize, value: String },

    #[error("line {line}: unknown vulnerability {value:?}")]
    UnknownVulnerability { line: usize, value: String },

    #[error("line {line}: deal string has no valid seat anchor")]
    BadDealAnchor { line: usize },

    #[error("line {line}: deal string has {got} groups, expected 4")]
    ShortDeal { line: usize, got: usize },

    #[error("line {line}: deal group for {seat} does not split into four suits")]
    BadDealGroup { line: usize, seat: Seat },

    #[error("line {line}: incomplete board dropped")]
    IncompleteBoard { line: usize },
}

/// Result of one decode pass: the boards that made it through the
/// completeness gate, plus a record of everything that was skipped.
#[derive(Debug, Default)]
pub struct Decoded {
    pub boards: Vec<BoardRecord>,
    pub warnings: Vec<DecodeWarning>,
}

/// In-progress board, replaced wholesale at each `[Board ...]` header
#[derive(Debug, Default)]
struct Draft {
    number: Option<u32>,
    dealer: Option<Seat>,
    vulnerability: Option<Vulnerability>,
    hands: Option<Deal>,
}

impl Draft {
    fn is_blank(&self) -> bool {
        self.number.is_none()
            && self.dealer.is_none()
            && self.vulnerability.is_none()
            && self.hands.is_none()
    }

    /// A board is only emitted once all four fields are populated
    fn finish(self) -> Option<BoardRecord> {
        Some(BoardRecord {
            number: self.number?,
            dealer: self.dealer?,
            vulnerability: self.vulnerability?,
            hands: self.hands?,
        })
    }
}

/// Decode PBN text into board records, discarding diagnostics.
///
/// Total function: malformed tags and incomplete boards are dropped, the
/// worst possible input yields an empty list.
pub fn decode(input: &str) -> Vec<BoardRecord> {
    decode_verbose(input).boards
}

/// Decode PBN text, keeping a warning for every line or board skipped
pub fn decode_verbose(input: &str) -> Decoded {
    let mut out = Decoded::default();
    let mut draft = Draft::default();
    let mut line_no = 0;

    for raw in input.lines() {
        line_no += 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        // Anything that is not a tag pair (commentary, directives, play
        // sections) is skipped without comment.
        let Ok((_, tag)) = tag_pair(line) else {
            continue;
        };

        match tag.name {
            "Board" => {
                flush(&mut out, std::mem::take(&mut draft), line_no);
                match tag.value.parse::<u32>() {
                    Ok(n) if n > 0 => draft.number = Some(n),
                    _ => out.warnings.push(DecodeWarning::BadBoardNumber {
                        line: line_no,
                        value: tag.value.to_string(),
                    }),
                }
            }
            "Dealer" => match seat_literal(tag.value) {
                Some(seat) => draft.dealer = Some(seat),
                None => out.warnings.push(DecodeWarning::BadDealer {
                    line: line_no,
                    value: tag.value.to_string(),
                }),
            },
            "Vulnerable" => match Vulnerability::from_pbn(tag.value) {
                Some(vuln) => draft.vulnerability = Some(vuln),
                None => out.warnings.push(DecodeWarning::UnknownVulnerability {
                    line: line_no,
                    value: tag.value.to_string(),
                }),
            },
            "Deal" => {
                if let Some(deal) = deal_from_pbn(tag.value, line_no, &mut out.warnings) {
                    draft.hands = Some(deal);
                }
            }
            _ => {}
        }
    }

    flush(&mut out, draft, line_no);
    out
}

/// Emit the draft if complete, warn if started but incomplete
fn flush(out: &mut Decoded, draft: Draft, line: usize) {
    if draft.is_blank() {
        return;
    }
    match draft.finish() {
        Some(board) => out.boards.push(board),
        None => out.warnings.push(DecodeWarning::IncompleteBoard { line }),
    }
}

/// Exact single-letter seat, uppercase only, as the tag grammar requires
fn seat_literal(s: &str) -> Option<Seat> {
    match s {
        "N" => Some(Seat::North),
        "E" => Some(Seat::East),
        "S" => Some(Seat::South),
        "W" => Some(Seat::West),
        _ => None,
    }
}

/// Decode a deal string "<SEAT>:<g1> <g2> <g3> <g4>" into four hands.
///
/// Groups are assigned clockwise from the anchor seat. A group that does not
/// split into exactly four dot-separated suits leaves that seat's hand empty;
/// so does a missing group. Either way the deal as a whole still counts as
/// present for the completeness gate.
fn deal_from_pbn(value: &str, line: usize, warnings: &mut Vec<DecodeWarning>) -> Option<Deal> {
    let Some((anchor_str, rest)) = value.split_once(':') else {
        warnings.push(DecodeWarning::BadDealAnchor { line });
        return None;
    };
    let Some(anchor) = seat_literal(anchor_str) else {
        warnings.push(DecodeWarning::BadDealAnchor { line });
        return None;
    };

    let groups: Vec<&str> = rest.split(' ').collect();
    if groups.iter().filter(|g| !g.is_empty()).count() < 4 {
        warnings.push(DecodeWarning::ShortDeal {
            line,
            got: groups.iter().filter(|g| !g.is_empty()).count(),
        });
    }

    let mut deal = Deal::new();
    for (i, seat) in anchor.clockwise_from().into_iter().enumerate() {
        match groups.get(i) {
            Some(group) if !group.is_empty() => match Hand::from_group(group) {
                Some(hand) => deal.set_hand(seat, hand),
                None => warnings.push(DecodeWarning::BadDealGroup { line, seat }),
            },
            _ => {}
        }
    }

    Some(deal)
}
