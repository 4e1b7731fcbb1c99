//! `restdocs templates`: list the built-in templates.

use restdocs_core::TEMPLATE_NAMES;

use crate::bootstrap::CliContext;

/// Execute the templates command.
pub fn execute(ctx: &CliContext) {
    let format = ctx.settings.effective_format();
    println!("Built-in templates ({format}):");
    for name in TEMPLATE_NAMES {
        println!("  {name}.{}", format.file_extension());
    }
}
