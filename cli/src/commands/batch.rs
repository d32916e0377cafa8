use anyhow::{Context, Result};
use geovalid::{GeometryRecord, ValidationPolicy, validate};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::BatchArgs) -> Result<()> {
    let policy = match &args.policy {
        Some(path) => ValidationPolicy::from_path(path)?,
        None => ValidationPolicy::default(),
    };

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("[batch] Failed to read {}", args.file.display()))?;
    let records: Vec<GeometryRecord> = serde_json::from_str(&text)
        .with_context(|| format!("[batch] Failed to parse {}", args.file.display()))?;

    println!("[batch] validating {} record(s) from {}", records.len(), args.file.display());

    let mut rejected = 0usize;
    for record in &records {
        let verdict = validate(record.geom_type, &record.wkt, &policy);
        if verdict.accepted {
            if cli.verbose > 0 {
                println!("[batch] {} ok", record.name);
            }
        } else {
            rejected += 1;
            println!("[batch] {} rejected:", record.name);
            for error in &verdict.errors {
                println!("[batch]   {}: {}", error.code(), error);
            }
        }
    }

    if rejected > 0 {
        anyhow::bail!("[batch] {} of {} record(s) rejected", rejected, records.len());
    }
    println!("[batch] all {} record(s) accepted", records.len());
    Ok(())
}
