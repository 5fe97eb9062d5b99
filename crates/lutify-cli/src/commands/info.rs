//! LUT info command

use anyhow::{Context, Result};
use lutify_core::import::display_name;
use lutify_core::{LutMeta, parse, validate};

use crate::InfoArgs;

pub fn run(args: InfoArgs) -> Result<()> {
    let text = super::read_text(&args.input)?;
    let lattice =
        parse(&text).with_context(|| format!("Failed to parse: {}", args.input.display()))?;
    let valid = validate(&lattice);

    let meta = LutMeta {
        name: display_name(lattice.title.as_deref(), super::file_name(&args.input)),
        size: lattice.size,
        domain_min: lattice.domain_min,
        domain_max: lattice.domain_max,
        title: lattice.title.clone(),
    };

    if args.json {
        let mut value = serde_json::to_value(&meta)?;
        value["valid"] = serde_json::Value::Bool(valid);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", args.input.display());
    println!("  Name:    {}", meta.name);
    if let Some(title) = &meta.title {
        println!("  Title:   {title}");
    }
    println!("  Size:    {0}x{0}x{0}", meta.size);
    println!("  Domain:  {:?} .. {:?}", meta.domain_min, meta.domain_max);
    println!("  Valid:   {}", if valid { "yes" } else { "no" });

    Ok(())
}
