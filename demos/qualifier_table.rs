//! Prints how `like` and `forward_like` re-qualify a target type.
//!
//! `cargo run --example qualifier_table -- "std::string const"`

use anyhow::{Context, Result};
use likewise::profile::{forward_like, like, QualifiedType, QualifierProfile};

fn main() -> Result<()> {
    let spelling = std::env::args().nth(1).unwrap_or_else(|| String::from("int"));
    let target: QualifiedType = spelling.parse().with_context(|| format!("cannot read `{spelling}` as a type"))?;

    println!("Transfers onto `{target}`");
    println!("{}", "=".repeat(17 + target.to_string().len()));
    println!("{:<22} {:<32} {}", "model", "like", "forward_like");

    for model in QualifierProfile::ALL {
        let forwarded = match forward_like(model, &target) {
            Ok(t) => t.to_string(),
            Err(err) => format!("error: {err}"),
        };
        println!("{:<22} {:<32} {}", model.to_string(), like(model, &target).to_string(), forwarded);
    }
    Ok(())
}
