/// Native functions.
///
/// Defines `Callable`, the host-supplied function value that expressions can
/// call directly (`f(x)`) or through method syntax (`x.f()`), in which case
/// the receiver is bound as the callable's caller.
pub mod callable;
/// Host-supplied variable bindings.
///
/// Defines `Variable`, one named value in the table a host passes to the
/// interpreter.
pub mod variable;

pub mod core;
