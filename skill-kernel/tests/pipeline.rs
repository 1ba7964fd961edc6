use skill_core::{Error, FunctionMetadata};
use skill_kernel::{ContextVariables, Kernel, Skill};

fn text_skill() -> Skill {
    Skill::builder()
        .add_function(
            FunctionMetadata::new("Upper")
                .expect("valid name")
                .with_description("Uppercase the input payload")
                .with_input_description("The text to uppercase"),
            |ctx: ContextVariables| async move { Ok(ctx.input().to_uppercase()) },
        )
        .expect("register upper")
        .add_function(
            FunctionMetadata::new("Exclaim")
                .expect("valid name")
                .with_description("Append an exclamation mark"),
            |ctx: ContextVariables| async move { Ok(format!("{}!", ctx.input())) },
        )
        .expect("register exclaim")
        .build()
}

#[tokio::test]
async fn pipeline_feeds_output_into_next_input() {
    let mut kernel = Kernel::builder().build();
    let text = kernel.import_skill(text_skill(), "TextPlugin").expect("import");

    let pipeline = [
        text.get("Upper").expect("lookup"),
        text.get("Exclaim").expect("lookup"),
    ];
    let output = kernel.run("hello", &pipeline).await.expect("run");
    assert_eq!(output, "HELLO!");
}

#[tokio::test]
async fn variables_beyond_input_reach_the_function() {
    let mut kernel = Kernel::builder().build();
    let skill = Skill::builder()
        .add_function(
            FunctionMetadata::new("Join").expect("valid name"),
            |ctx: ContextVariables| async move {
                let suffix = ctx.require("suffix")?;
                Ok(format!("{}{suffix}", ctx.input()))
            },
        )
        .expect("register join")
        .build();
    let handle = kernel.import_skill(skill, "JoinPlugin").expect("import");

    let mut variables = ContextVariables::with_input("a");
    variables.set("suffix", "b");
    let output = kernel
        .run_with_variables(variables, &[handle.get("Join").expect("lookup")])
        .await
        .expect("run");
    assert_eq!(output, "ab");
}

#[tokio::test]
async fn pipeline_stops_at_first_error() {
    let mut kernel = Kernel::builder().build();
    let skill = Skill::builder()
        .add_function(
            FunctionMetadata::new("Fail").expect("valid name"),
            |_ctx: ContextVariables| async move {
                Err::<String, _>(Error::execution("always fails"))
            },
        )
        .expect("register fail")
        .build();
    let handle = kernel.import_skill(skill, "FailPlugin").expect("import");
    let text = kernel.import_skill(text_skill(), "TextPlugin").expect("import");

    let pipeline = [
        handle.get("Fail").expect("lookup"),
        text.get("Upper").expect("lookup"),
    ];
    let err = kernel
        .run("ignored", &pipeline)
        .await
        .expect_err("pipeline must fail");
    assert!(matches!(err, Error::Execution { .. }));
}

#[test]
fn skill_listing_serializes_for_discovery() {
    let mut kernel = Kernel::builder().build();
    kernel.import_skill(text_skill(), "TextPlugin").expect("import");

    let skills = kernel.skills();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name().as_str(), "TextPlugin");

    let listing = serde_json::to_value(skills[0].metadata()).expect("serialize");
    assert_eq!(
        listing,
        serde_json::json!([
            {
                "name": "Exclaim",
                "description": "Append an exclamation mark",
            },
            {
                "name": "Upper",
                "description": "Uppercase the input payload",
                "input_description": "The text to uppercase",
            },
        ])
    );
}
