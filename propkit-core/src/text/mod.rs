//! Text preparation.
//!
//! - **Splitter**: cuts a selection into candidate blocks
//! - **Comments**: strips `//` and `/* */` comments before matching
//! - **Layout**: field naming and indentation reapplication

pub mod comments;
pub mod layout;
pub mod splitter;

pub use comments::strip_comments;
pub use splitter::{blocks, split, Block, Blocks};
