//! Implementation of the `pyskel templates` command.

use pyskel_core::application::TemplateService;

use crate::{
    cli::{TemplatesAction, TemplatesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = super::template_store(args.templates.as_deref(), &config)?;
    let service = TemplateService::new(store);

    match args.action.unwrap_or(TemplatesAction::List) {
        TemplatesAction::List => {
            let infos = service.list()?;

            if output.is_json() {
                output.json(&infos)?;
                return Ok(());
            }

            output.header("Available Templates:")?;
            for info in &infos {
                let row = format!("  {:<24} {:>3} lines  ", info.name, info.lines);
                match &info.problem {
                    Some(problem) => output.warning(&format!("{row}{problem}"))?,
                    None if info.verbatim => output.print(&format!("{row}(copied as-is)"))?,
                    None if info.placeholders.is_empty() => output.print(&format!("{row}-"))?,
                    None => output.print(&format!("{row}{}", info.placeholders.join(", ")))?,
                }
            }
        }

        TemplatesAction::Show { name } => {
            if output.is_json() {
                output.json(&service.describe(&name)?)?;
            } else {
                output.raw(service.get(&name)?.source())?;
            }
        }
    }

    Ok(())
}
