mod automaton;
mod basic_life;
mod config;
mod engine;
mod error;
mod grid;
mod moore;


pub use crate::{
    automaton::Automaton,
    basic_life::BasicLife,
    config::Config,
    engine::{Engine, Transitions},
    error::{Error, Result},
    grid::{MacroCell, MacroGrid},
};
