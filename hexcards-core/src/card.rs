//! Move cards and their text/JSON formats
//!
//! A card line looks like `Charge,Quick strike,1F,2RF`: title, flavor text,
//! then any number of movement tokens. Quoted fields may contain commas.

use crate::board::Direction;
use crate::error::ParseError;
use crate::movement::{resolve_reachable, Distance, MovementToken, ReachableSet};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One printable move card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub flavor: String,
    pub movements: Vec<MovementToken>,
}

impl Card {
    pub fn new(title: impl Into<String>, flavor: impl Into<String>, movements: Vec<MovementToken>) -> Self {
        Self {
            title: title.into(),
            flavor: flavor.into(),
            movements,
        }
    }

    pub fn reachable(&self) -> ReachableSet {
        resolve_reachable(&self.movements)
    }

    /// Movements in token form, e.g. `1F, 2RB`
    pub fn movements_text(&self) -> String {
        self.movements
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Card as a single text line that [`parse_card_line`] reads back
    pub fn to_line(&self) -> String {
        let mut fields = vec![quote_field(&self.title), quote_field(&self.flavor)];
        fields.extend(self.movements.iter().map(|m| m.to_string()));
        fields.join(",")
    }

    /// File name stem for exports: whitespace runs become underscores
    pub fn file_stem(&self) -> String {
        self.title.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

fn quote_field(field: &str) -> String {
    if field.contains(',') {
        format!("\"{}\"", field)
    } else {
        field.to_string()
    }
}

/// Split a line on commas outside of quotes.
///
/// A `"` toggles quoting and is dropped, so `""` inside a quoted field does
/// not produce a literal quote. Fields are trimmed.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Parse a movement token such as `1F` or `2 rb`
pub fn parse_movement(line: usize, raw: &str) -> Result<MovementToken, ParseError> {
    let malformed = || ParseError::MalformedMovement {
        line,
        token: raw.to_string(),
    };

    let text = raw.trim().to_ascii_uppercase();
    let mut chars = text.chars();
    let distance = match chars.next() {
        Some('1') => Distance::One,
        Some('2') => Distance::Two,
        _ => return Err(malformed()),
    };
    let code = chars.as_str().trim_start();
    if code.is_empty() || code.len() > 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(malformed());
    }
    let direction = Direction::from_code(code).ok_or_else(|| ParseError::UnknownDirection {
        line,
        token: raw.to_string(),
    })?;
    Ok(MovementToken::new(distance, direction))
}

/// Parse a comma-separated token list such as `1F, 2RB`
pub fn parse_movement_list(line: usize, text: &str) -> Result<Vec<MovementToken>, ParseError> {
    split_fields(text)
        .iter()
        .filter(|f| !f.is_empty())
        .map(|f| parse_movement(line, f))
        .collect()
}

/// Parse a single card line
pub fn parse_card_line(line: usize, text: &str) -> Result<Card, ParseError> {
    let fields: Vec<String> = split_fields(text)
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() < 2 {
        return Err(ParseError::MalformedCardLine { line });
    }
    let movements = fields[2..]
        .iter()
        .map(|raw| parse_movement(line, raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Card::new(fields[0].clone(), fields[1].clone(), movements))
}

/// Parse one card per non-blank line. Any bad line rejects the whole batch.
pub fn parse_batch(text: &str) -> Result<Vec<Card>, ParseError> {
    let cards = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| parse_card_line(number, line))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("parsed {} cards", cards.len());
    Ok(cards)
}

/// Cards as pretty-printed JSON
pub fn cards_to_json(cards: &[Card]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

pub fn cards_from_json(json: &str) -> anyhow::Result<Vec<Card>> {
    serde_json::from_str(json).context("invalid card JSON")
}

/// Save cards to a JSON file
pub fn save_cards(cards: &[Card], path: &Path) -> anyhow::Result<()> {
    let content = cards_to_json(cards)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Load cards from a JSON file
pub fn load_cards(path: &Path) -> anyhow::Result<Vec<Card>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    cards_from_json(&content).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Charge,Quick strike,1F,2RF
\"Sweep Attack\",\"Wide arc, heavy\",2LF,1B
Guard,Hold the line,1B,1LB";

    fn token(distance: Distance, direction: Direction) -> MovementToken {
        MovementToken::new(distance, direction)
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(split_fields("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_fields("\"Sweep Attack\",\"Wide arc, heavy\",2LF"),
            vec!["Sweep Attack", "Wide arc, heavy", "2LF"]
        );
    }

    #[test]
    fn test_doubled_quote_not_unescaped() {
        assert_eq!(split_fields("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn test_parse_sample_batch() {
        let cards = parse_batch(SAMPLE).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Charge");
        assert_eq!(
            cards[0].movements,
            vec![
                token(Distance::One, Direction::Forward),
                token(Distance::Two, Direction::RightForward)
            ]
        );
        assert_eq!(cards[1].title, "Sweep Attack");
        assert_eq!(cards[1].flavor, "Wide arc, heavy");
        assert_eq!(cards[2].movements_text(), "1B, 1LB");
    }

    #[test]
    fn test_tokens_case_insensitive_and_spaced() {
        assert_eq!(
            parse_movement(1, " 2 rb ").unwrap(),
            token(Distance::Two, Direction::RightBack)
        );
        assert_eq!(parse_movement(1, "1lf").unwrap(), token(Distance::One, Direction::LeftForward));
    }

    #[test]
    fn test_malformed_token() {
        for raw in ["3X", "F1", "1", "1FFF", "12F", "1F!"] {
            let err = parse_movement(4, raw).unwrap_err();
            assert_eq!(
                err,
                ParseError::MalformedMovement {
                    line: 4,
                    token: raw.to_string()
                },
                "{raw}"
            );
        }
    }

    #[test]
    fn test_unknown_direction() {
        let err = parse_card_line(2, "Dash,Zoom,1X").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownDirection {
                line: 2,
                token: "1X".into()
            }
        );
        assert!(matches!(
            parse_movement(1, "2FB"),
            Err(ParseError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn test_missing_flavor() {
        assert_eq!(
            parse_card_line(7, "Lonely"),
            Err(ParseError::MalformedCardLine { line: 7 })
        );
        // Empty fields are dropped before counting
        assert_eq!(
            parse_card_line(1, "Title,,"),
            Err(ParseError::MalformedCardLine { line: 1 })
        );
    }

    #[test]
    fn test_card_without_movements() {
        let card = parse_card_line(1, "Rest,Catch your breath").unwrap();
        assert!(card.movements.is_empty());
        assert!(card.reachable().is_empty());
    }

    #[test]
    fn test_batch_fails_fast() {
        let input = "Charge,Quick strike,1F\n\nBad,Line,3X\nGuard,Hold,1B";
        let err = parse_batch(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedMovement {
                line: 3,
                token: "3X".into()
            }
        );
        assert!(err.to_string().contains("3X"));
    }

    #[test]
    fn test_batch_skips_blank_lines_and_crlf() {
        let cards = parse_batch("\r\n  A,B,1F\r\n\r\nC,D\r\n").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].title, "C");
    }

    #[test]
    fn test_movements_text_round_trip() {
        let card = Card::new(
            "T",
            "F",
            vec![
                token(Distance::One, Direction::Forward),
                token(Distance::Two, Direction::RightBack),
            ],
        );
        let text = card.movements_text();
        assert_eq!(text, "1F, 2RB");
        assert_eq!(parse_movement_list(1, &text).unwrap(), card.movements);
    }

    #[test]
    fn test_line_round_trip() {
        let card = Card::new(
            "Sweep Attack",
            "Wide arc, heavy",
            vec![token(Distance::Two, Direction::LeftForward)],
        );
        assert_eq!(parse_card_line(1, &card.to_line()).unwrap(), card);
    }

    #[test]
    fn test_json_format() {
        let cards = vec![Card::new(
            "Charge",
            "Quick strike",
            vec![token(Distance::One, Direction::Forward)],
        )];
        let json = cards_to_json(&cards).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Charge");
        assert_eq!(value[0]["flavor"], "Quick strike");
        assert_eq!(value[0]["movements"][0]["distance"], 1);
        assert_eq!(value[0]["movements"][0]["direction"], "F");
        assert_eq!(cards_from_json(&json).unwrap(), cards);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("move-cards.json");
        let cards = parse_batch(SAMPLE).unwrap();
        save_cards(&cards, &path).unwrap();
        assert_eq!(load_cards(&path).unwrap(), cards);
        assert!(load_cards(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_file_stem() {
        let card = Card::new("Sweep  Attack", "x", vec![]);
        assert_eq!(card.file_stem(), "Sweep_Attack");
    }
}
