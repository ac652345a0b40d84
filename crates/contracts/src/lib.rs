//! Shared types and state logic of the document extraction workbench.
//!
//! Everything here is free of browser dependencies: the frontend wraps these
//! stores in reactive signals and talks to the backend with the DTOs from
//! [`usecases`].

pub mod domain;
pub mod shared;
pub mod usecases;
