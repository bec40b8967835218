#![cfg_attr(not(feature = "std"), no_std)]

//! Flocking simulation for schools of animated agents.
//!
//! A [`World`] owns any number of [`School`]s. Each frame the host calls
//! [`World::advance`] (or [`School::step`] directly) with the elapsed time;
//! every agent then steers against a snapshot of its school, integrates,
//! eases its heading, records its trail and wraps at the bounds.

extern crate alloc;

pub mod agent;
pub mod behavior;
pub mod bounds;
mod math;
pub mod motion;
pub mod school;
pub mod trail;
pub mod vector;
pub mod world;

pub use agent::{Agent, AgentConfig, AgentOverrides, Pulse};
pub use behavior::Steering;
pub use school::School;
pub use trail::{Trail, TrailPoint, TrailSample, MAX_TRAIL_LENGTH};
pub use vector::Vector3;
pub use world::{clamp_delta, Tick, World, MAX_DELTA};
