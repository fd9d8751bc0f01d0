//! # `walkabout`
//!
//! `walkabout` walks a little sprite around a canvas in your terminal.
//!
//! The game itself is [`state::GameState`]: a heading, a position and one animation frame
//! counter per direction, stepped once per tick by [`state::GameState::advance`]. Everything
//! else draws that state in unicode Braille characters and feeds it keyboard and mouse input.
pub mod app;
pub mod cell;
pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod event;
pub mod frames;
pub mod screen;
pub mod sprite;
pub mod state;
pub mod timer;
pub(crate) mod units;
pub mod view;

pub use error::{Error, Result};
