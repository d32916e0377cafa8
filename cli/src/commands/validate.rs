use anyhow::Result;
use geovalid::{ValidationPolicy, validate};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ValidateArgs) -> Result<()> {
    let policy = match &args.policy {
        Some(path) => ValidationPolicy::from_path(path)?,
        None => ValidationPolicy::default(),
    };

    let verdict = validate(args.declared, &args.wkt, &policy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if verdict.accepted {
        println!("[validate] accepted {} geometry", args.declared);
    } else {
        println!("[validate] rejected {} geometry:", args.declared);
        for error in &verdict.errors {
            println!("[validate]   {}: {}", error.code(), error);
        }
    }

    if verdict.accepted {
        Ok(())
    } else {
        anyhow::bail!("[validate] geometry rejected with {} finding(s)", verdict.errors.len())
    }
}
