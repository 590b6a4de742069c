//! Serde adapters that only accept pieces a pawn can promote to
//!
//! Used with `#[serde(deserialize_with = ...)]` on config and script fields so
//! a pawn or king choice is refused when the file is read, not mid-game.

use chess_rules::PieceType;
use serde::{de, Deserialize, Deserializer};

fn check<E: de::Error>(choice: PieceType) -> Result<PieceType, E> {
    if choice.is_promotion_choice() {
        Ok(choice)
    } else {
        Err(E::custom(format!("cannot promote to {choice:?}")))
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PieceType, D::Error> {
    check(PieceType::deserialize(deserializer)?)
}

pub fn deserialize_option<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<PieceType>, D::Error> {
    Option::<PieceType>::deserialize(deserializer)?
        .map(check)
        .transpose()
}
