//! # Jurisdictions CLI — List registered rule modules.

use anyhow::{Context, Result};
use clap::Args;

use regmap_rules::ModuleRegistry;

/// Arguments for `regmap jurisdictions`.
#[derive(Args, Debug)]
pub struct JurisdictionsArgs {
    /// Print the registry as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute `regmap jurisdictions`.
pub fn run_jurisdictions(args: &JurisdictionsArgs, registry: &ModuleRegistry) -> Result<u8> {
    if args.json {
        let json = serde_json::to_string_pretty(&registry.list())
            .context("failed to serialize registry")?;
        println!("{json}");
        return Ok(0);
    }
    print!("{}", render_list(registry));
    Ok(0)
}

fn render_list(registry: &ModuleRegistry) -> String {
    let mut out = String::from("Registered jurisdictions:\n\n");
    for entry in registry.list() {
        out.push_str(&format!("  {:<12} {:<4} {}\n", entry.id.as_str(), entry.region, entry.name));
    }
    out.push_str(&format!("\nTotal: {} jurisdictions\n", registry.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use regmap_rules::builtin_registry;

    #[test]
    fn list_names_every_builtin() {
        let registry = builtin_registry();
        let text = render_list(&registry);
        for entry in registry.list() {
            assert!(text.contains(entry.id.as_str()), "{}", entry.id);
        }
        assert!(text.ends_with(&format!("Total: {} jurisdictions\n", registry.len())));
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let text = render_list(&ModuleRegistry::new());
        assert!(text.contains("Total: 0 jurisdictions"));
    }
}
