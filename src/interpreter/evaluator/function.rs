/// The built-in standard library.
///
/// A static table of number and string helpers (`formatted`, `rounded`,
/// `uppercased`, `lowercased`) that every interpreter starts with.
pub mod builtin;

pub mod core;
