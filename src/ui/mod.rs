/// Console layer: interactive menus and report rendering.
///
/// Everything here either reads a selection from the injected input source
/// or prints a structured result computed by the data layer; no statistics
/// are computed in this module tree.
pub mod prompt;
pub mod render;
