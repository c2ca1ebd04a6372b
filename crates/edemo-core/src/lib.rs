//! Demo orchestration core.
//!
//! One generic pipeline runs every demonstration. A demo is described by a
//! [`DemoDescriptor`]: how to collect its inputs from the host, how to
//! validate them, how to turn them into a module call, and how to render a
//! successful result. The pipeline sequences those capabilities with
//! short-circuiting on every failure branch:
//!
//! ```text
//! ready? → collect → surface? → validate → loading → compute → render
//!    ↓                   ↓          ↓                    ↓
//!  notice          silent abort  inline error      inline error
//! ```
//!
//! Exactly one outcome occurs per invocation, and the display surface is
//! always replaced wholesale, never appended to.

pub mod descriptor;
pub mod error;
pub mod outcome;
pub mod parse;
pub mod pipeline;
pub mod validate;

pub use descriptor::DemoDescriptor;
pub use error::{ComputeFault, GENERIC_FAULT_MESSAGE};
pub use outcome::{ModuleOutcome, RunOutcome, ValidationOutcome};
pub use parse::parse_result;
pub use pipeline::{run_demo, STILL_LOADING_NOTICE};
