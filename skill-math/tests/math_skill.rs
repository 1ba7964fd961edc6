use skill_core::Error;
use skill_kernel::{ContextVariables, Kernel, SkillHandle};
use skill_math::{math_skill, NUMBER2_VARIABLE};

fn kernel_with_math() -> (Kernel, SkillHandle) {
    let mut kernel = Kernel::builder().build();
    let math = kernel
        .import_skill(math_skill().expect("build math skill"), "MathPlugin")
        .expect("import math skill");
    (kernel, math)
}

#[tokio::test]
async fn sqrt_of_twelve_matches_expected_output() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    let result = kernel.run("12", &[sqrt]).await.expect("run");
    assert_eq!(result, "3.4641016151377544");
}

#[tokio::test]
async fn sqrt_round_trips_for_non_negative_inputs() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    for input in ["0.25", "1", "2", "144", "10000"] {
        let result = kernel.run(input, &[sqrt.clone()]).await.expect("run");
        let value: f64 = result.parse().expect("numeric result");
        let expected = input.parse::<f64>().expect("numeric input").sqrt();
        assert!(
            (value - expected).abs() < 1e-12,
            "sqrt({input}) returned {result}"
        );
    }
}

#[tokio::test]
async fn sqrt_of_zero_keeps_trailing_zero() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    let result = kernel.run("0", &[sqrt]).await.expect("run");
    assert_eq!(result, "0.0");
}

#[tokio::test]
async fn sqrt_of_negative_input_is_nan() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    let result = kernel.run("-1", &[sqrt]).await.expect("run");
    assert_eq!(result, "NaN");
}

#[tokio::test]
async fn sqrt_of_non_numeric_input_fails_to_parse() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    let err = kernel
        .run("abc", &[sqrt])
        .await
        .expect_err("must fail to parse");
    assert!(matches!(err, Error::Parse { .. }));
}

#[tokio::test]
async fn multiply_reads_both_operands() {
    let (kernel, math) = kernel_with_math();
    let multiply = math.get("Multiply").expect("lookup");

    let mut variables = ContextVariables::with_input("5");
    variables.set(NUMBER2_VARIABLE, "7");
    let result = kernel
        .run_with_variables(variables, &[multiply])
        .await
        .expect("run");
    assert_eq!(result, "35.0");
}

#[tokio::test]
async fn divide_reads_both_operands() {
    let (kernel, math) = kernel_with_math();
    let divide = math.get("Divide").expect("lookup");

    let mut variables = ContextVariables::with_input("10");
    variables.set(NUMBER2_VARIABLE, "4");
    let result = kernel
        .run_with_variables(variables, &[divide])
        .await
        .expect("run");
    assert_eq!(result, "2.5");
}

#[tokio::test]
async fn divide_by_zero_keeps_ieee_semantics() {
    let (kernel, math) = kernel_with_math();
    let divide = math.get("Divide").expect("lookup");

    let mut variables = ContextVariables::with_input("10");
    variables.set(NUMBER2_VARIABLE, "0");
    let result = kernel
        .run_with_variables(variables, &[divide])
        .await
        .expect("run");
    assert_eq!(result, "Infinity");
}

#[tokio::test]
async fn chained_sqrt_runs_as_a_pipeline() {
    let (kernel, math) = kernel_with_math();
    let sqrt = math.get("Sqrt").expect("lookup");

    let result = kernel
        .run("16", &[sqrt.clone(), sqrt])
        .await
        .expect("run");
    assert_eq!(result, "2.0");
}

#[tokio::test]
async fn qualified_lookup_reaches_the_math_skill() {
    let (kernel, _math) = kernel_with_math();
    let sqrt = kernel.func("MathPlugin", "Sqrt").expect("lookup");

    let result = kernel.run("144", &[sqrt]).await.expect("run");
    assert_eq!(result, "12.0");
}
