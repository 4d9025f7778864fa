//! Courtwatch: a live tennis match monitor.
//!
//! Polls a live-scores provider, classifies each match's tournament and
//! watches for three situations: a match reaching one set all, a player
//! down a set breaking serve in the second set, and a deciding-set 6-6
//! tiebreak. Each raises a Telegram alert at most once per match, annotated
//! with market odds and a stats comparison. Matches early in a deciding set
//! at one set all are appended to a CSV log.
//!
//! # Modules
//!
//! - [`domain`] - Scores, statistics, detectors and odds conversion
//! - [`port`] - Traits for the live feed, odds source, notifier and recorder
//! - [`adapter`] - SofaScore, Polymarket, Telegram and CSV implementations,
//!   plus the CLI
//! - [`application`] - Match tracker, alert senders, pipeline and poll loop
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Deliver alerts through the Telegram Bot API

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
