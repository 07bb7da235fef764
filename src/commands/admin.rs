use crate::cli::{Cli, Commands, GateCommands, LensCommands};
use crate::domain::models::ClassifyReport;
use crate::services::classify::classify;
use crate::services::lens;
use crate::services::output::{print_one, print_out};
use crate::services::registry;

pub fn handle_admin_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Classify { name } => {
            let tag = classify(name);
            let report = ClassifyReport {
                name: name.clone(),
                ecosystem: tag.label().to_string(),
            };
            print_one(cli.json, report, |r| format!("{}\t{}", r.name, r.ecosystem))?;
        }
        Commands::Gates { command } => match command {
            GateCommands::List => {
                let gates = registry::list_gates();
                print_out(cli.json, &gates, |g| {
                    format!("{}\t{}\t{}", g.slug, g.name, g.description)
                })?;
            }
            GateCommands::Show { slug } => {
                let gate = registry::gate_by_slug(slug)
                    .ok_or_else(|| anyhow::anyhow!("unknown gate slug: {slug}"))?;
                print_one(cli.json, gate, |g| {
                    format!(
                        "slug: {}\nname: {}\nbadge: {}\ndescription: {}",
                        g.slug, g.name, g.badge, g.description
                    )
                })?;
            }
        },
        Commands::Lens { command } => match command {
            LensCommands::Show { persona } => {
                let cfg = lens::config(*persona);
                print_one(cli.json, cfg, |c| {
                    format!(
                        "{}\n{}\nA: {}\nB: {}\n-: {}",
                        c.gate_title, c.question, c.label_a, c.label_b, c.label_not_sure
                    )
                })?;
            }
        },
        _ => {}
    }
    Ok(())
}
