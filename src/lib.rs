//! Topsy-Turvy: a connection game where, besides ordinary column drops,
//! a *disarray* move reverses the stacking order of every column and an
//! *offset* move removes the mover's oldest piece and the opponent's
//! newest, with gravity re-settling the rest.

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod r#move;
pub mod notation;
pub mod outcome;
pub mod player;
pub mod position;
pub mod queue;
