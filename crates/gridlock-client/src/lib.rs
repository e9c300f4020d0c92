//! Client-side controller for a Gridlock game session.
//!
//! This crate sits between a rendering shell and the game-session state
//! machine in `gridlock-game`. The shell forwards user interactions and
//! collaborator responses as [`controller::ClientEvent`]s; the controller
//! applies each one as a single atomic state transition and hands back the
//! [`controller::Effect`]s to perform (fetch a puzzle, read or write the
//! leaderboard). Derived view state is rebuilt from scratch by
//! [`view_model`] on every frame the shell cares to ask.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod controller;
pub mod dto;
pub mod view_model;
