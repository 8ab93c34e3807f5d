// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front end for omok: board rendering and the win banner.

pub mod banner;
pub mod render;

pub use banner::Banner;
pub use render::{render_board, render_status};
