//! Simple native functions sample: import the math skill and run `Sqrt`.

use anyhow::Result;
use native_skills::kernel::Kernel;
use native_skills::math::math_skill;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Create the kernel
    let mut kernel = Kernel::builder().build();

    // Import the math skill under its plugin namespace
    let math_plugin = kernel.import_skill(math_skill()?, "MathPlugin")?;

    // Run the Sqrt function with "12" as input
    let sqrt = math_plugin.get("Sqrt")?;
    let result = kernel.run("12", &[sqrt]).await?;
    debug!(%result, "sqrt invocation finished");

    println!("{result}");
    Ok(())
}
