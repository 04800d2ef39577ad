//! WordPress theme generation.
//!
//! - [`defaults`]: default property bags per component kind
//! - [`blocks`]: per-kind markup and style renderers
//! - [`assembler`]: combines rendered fragments into the theme file set
//! - [`escape`] and [`css`]: output helpers shared by the renderers

pub mod assembler;
pub mod blocks;
pub mod css;
pub mod defaults;
pub mod escape;

pub use assembler::{assemble, ThemeFiles, ThemeGenerator};
pub use blocks::{render_component, render_markup, render_style, wrap_with_style, Block};
pub use defaults::defaults_for;
