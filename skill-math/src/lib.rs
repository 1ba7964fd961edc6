//! Math skill exposing native arithmetic functions.
//!
//! Functions follow the string-in, string-out contract of the host kernel:
//! inputs are parsed as `f64` at the boundary and results are rendered back in
//! canonical form. Negative square roots and division by zero keep their
//! IEEE-754 results (`NaN`, infinities) rather than failing; only malformed
//! numeric input is an error.

#![warn(missing_docs, clippy::pedantic)]

use skill_core::{FunctionMetadata, Result};
use skill_kernel::{ContextVariables, Skill};

/// Name of the second operand variable read by two-argument functions.
pub const NUMBER2_VARIABLE: &str = "number2";

/// Builds the math skill with all of its functions and metadata.
///
/// # Errors
///
/// Returns an error if function registration fails; the function names and
/// metadata used here are statically valid, so this only surfaces a
/// programming mistake.
pub fn math_skill() -> Result<Skill> {
    Ok(Skill::builder()
        .add_function(
            FunctionMetadata::new("Sqrt")?
                .with_description("Take the square root of a number")
                .with_input_description("The number to take a square root of"),
            sqrt,
        )?
        .add_function(
            FunctionMetadata::new("Multiply")?
                .with_description("Multiply two numbers")
                .with_input_description("The first number to multiply"),
            multiply,
        )?
        .add_function(
            FunctionMetadata::new("Divide")?
                .with_description("Divide the first number by the second")
                .with_input_description("The number to be divided"),
            divide,
        )?
        .build())
}

async fn sqrt(ctx: ContextVariables) -> Result<String> {
    let number: f64 = ctx.input().parse()?;
    Ok(format_number(number.sqrt()))
}

async fn multiply(ctx: ContextVariables) -> Result<String> {
    let first: f64 = ctx.input().parse()?;
    let second: f64 = ctx.require(NUMBER2_VARIABLE)?.parse()?;
    Ok(format_number(first * second))
}

async fn divide(ctx: ContextVariables) -> Result<String> {
    let dividend: f64 = ctx.input().parse()?;
    let divisor: f64 = ctx.require(NUMBER2_VARIABLE)?.parse()?;
    Ok(format_number(dividend / divisor))
}

/// Renders a number in canonical decimal form: integral values keep a
/// trailing `.0`, everything else uses the shortest representation that
/// round-trips.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
