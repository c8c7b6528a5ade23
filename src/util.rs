/// Numeric presentation helpers.
///
/// Functions for turning evaluation results into text the way the shell
/// prints them, so that integral results read as integers.
pub mod num;
