//! Glim: platform input backend bridging a GLFM-style mobile display to an
//! immediate-mode GUI input queue.
//!
//! The crate sits between two collaborators:
//!
//! - the platform side ([`platform`]): a mobile windowing/input library that
//!   delivers touch, key, character and mouse-wheel callbacks and answers
//!   display-size/time/clipboard queries;
//! - the GUI side ([`io`]): an immediate-mode input model that consumes a
//!   queue of normalized events once per rendered frame.
//!
//! [`backend`] holds the translator itself: lifecycle (`init_for_*`,
//! `shutdown`, `new_frame`), callback installation with depth-1 chaining of
//! previously registered platform handlers, and the four event entry points.

pub mod backend;
pub mod io;
pub mod logging;
pub mod platform;
pub mod time;
