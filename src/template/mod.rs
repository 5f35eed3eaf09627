//! Compiled templates
//!
//! Scanning and validation happen once, in [`Template::compile`]. The compiled
//! template keeps the segment list and is rendered any number of times against
//! argument lists of the arity it was compiled for.
//!
//! # Example
//!
//! ```rust
//! use brace_fmt::Template;
//!
//! let template = Template::compile("{1} owes {0:x}", 2).unwrap();
//! assert_eq!(template.format(&(255, "bob")).unwrap(), "bob owes ff");
//! assert_eq!(template.format(&(16, "amy")).unwrap(), "amy owes 10");
//! ```

mod compiled;
mod engine;
mod registry;

pub use compiled::Template;
pub use registry::TemplateCache;
