//! Orbital situational-awareness view library
//!
//! Maintains a population of simulated orbital objects, advances them over
//! time, projects them from orbital space onto a 2D surface and re-renders
//! every display refresh while live layer/debris filters are applied.
//!
//! The engine core (`population`, `motion`, `projection`, `filter`,
//! `frame_loop`, `scene`) emits primitive [`draw::DrawCommand`]s to any
//! [`draw::DrawSurface`]; [`simulation::OrbitalViewPlugin`] drives it from a
//! Bevy app.

pub mod config;
pub mod constants;
pub mod controls;
pub mod draw;
pub mod error;
pub mod filter;
pub mod frame_loop;
pub mod graphics;
pub mod motion;
pub mod object;
pub mod population;
pub mod projection;
pub mod rendering;
pub mod scene;
pub mod simulation;
