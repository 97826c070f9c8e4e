use std::fmt;

use crate::{
    interpreter::value::{callable::Callable, core::Value},
    util::num::{MAX_FRACTION_DIGITS, f64_to_usize_checked, format_fixed, format_number},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its subject (the bound caller, or the first argument
/// when called as a plain function) and the remaining arguments.
type BuiltinFn = fn(&Value, &[Value]) -> Result<Value, String>;

/// Specifies the allowed number of arguments for a builtin, not counting the
/// subject.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the standard library is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "formatted"  => { arity: Arity::OneOf(&[0, 1]), func: formatted },
    "rounded"    => { arity: Arity::Exact(0), func: rounded },
    "uppercased" => { arity: Arity::Exact(0), func: |subject, _| map_text(subject, str::to_uppercase) },
    "lowercased" => { arity: Arity::Exact(0), func: |subject, _| map_text(subject, str::to_lowercase) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
        }
    }
}

impl BuiltinDef {
    /// Picks the subject, checks the arity of what is left and runs the
    /// handler.
    fn invoke(&self, caller: Option<&Value>, args: &[Value]) -> Result<Value, String> {
        let (subject, rest) = match caller {
            Some(caller) => (caller, args),
            None => args.split_first()
                        .ok_or_else(|| format!("'{}' needs a value to work on", self.name))?,
        };

        if !self.arity.check(rest.len()) {
            return Err(format!("expected {} argument(s), found {}", self.arity, rest.len()));
        }

        (self.func)(subject, rest)
    }
}

/// Builds the standard library as callables, in table order.
///
/// # Example
/// ```
/// use glint::interpreter::evaluator::function::builtin::{BUILTIN_FUNCTIONS, standard_library};
///
/// let library = standard_library();
///
/// assert_eq!(library.len(), BUILTIN_FUNCTIONS.len());
/// assert!(library.iter().any(|f| f.selector() == "formatted"));
/// ```
#[must_use]
pub fn standard_library() -> Vec<Callable> {
    BUILTIN_TABLE.iter()
                 .map(|def| Callable::new(def.name, move |caller, args| def.invoke(caller, args)))
                 .collect()
}

fn expect_number(subject: &Value) -> Result<f64, String> {
    subject.as_number()
           .ok_or_else(|| format!("expected a number, found {}", subject.type_name()))
}

/// Formats a number as text, optionally with a fixed number of fraction
/// digits.
///
/// `x.formatted()` uses the canonical formatter; `x.formatted(2)` always
/// prints two fraction digits.
fn formatted(subject: &Value, args: &[Value]) -> Result<Value, String> {
    let n = expect_number(subject)?;

    match args {
        [] => Ok(Value::Text(format_number(n))),
        [Value::Number(digits)] => {
            let digits = f64_to_usize_checked(*digits, MAX_FRACTION_DIGITS).ok_or_else(|| {
                format!("fraction digits must be a whole number from 0 to {MAX_FRACTION_DIGITS}, found {}",
                        format_number(*digits))
            })?;
            Ok(Value::Text(format_fixed(n, digits)))
        },
        [other, ..] => Err(format!("fraction digits must be a number, found {}", other.type_name())),
    }
}

/// Rounds to the nearest whole number, halves away from zero.
fn rounded(subject: &Value, _args: &[Value]) -> Result<Value, String> {
    Ok(Value::Number(expect_number(subject)?.round()))
}

fn map_text(subject: &Value, f: fn(&str) -> String) -> Result<Value, String> {
    subject.as_text()
           .map(|text| Value::Text(f(text)))
           .ok_or_else(|| format!("expected a string, found {}", subject.type_name()))
}
