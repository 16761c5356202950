//! Wire format for the matchup battle calculator.
//!
//! `client` holds what a caller sends (a [`CalcRequest`]) and `server` holds
//! what the engine sends back (a [`CalcResponse`] or an [`ErrorResponse`]).
//! Nothing in this crate interprets the values; range checks and type
//! lookups happen in `matchup-battle`.

use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{CalcRequest, FieldConditionsPayload, PokemonPayload, parse_request};
pub use server::{CalcResponse, DamagePayload, ErrorKind, ErrorPayload, ErrorResponse};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
