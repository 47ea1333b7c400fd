//! Implementation of the `readmequick prompts` command.

use crate::error::Result;
use crate::prompt::ALL_PROMPTS;

/// Print every prompt with its inputs and answer schema.
pub fn cmd_prompts() -> Result<()> {
    print!("{}", format_prompts());
    Ok(())
}

fn format_prompts() -> String {
    let mut out = String::new();
    for prompt in &ALL_PROMPTS {
        out.push_str(&format!("## {}\n\n", prompt.name));
        out.push_str(&format!("Inputs: {}\n\n", prompt.inputs.join(", ")));
        out.push_str(&format!("```json\n{:#}\n```\n\n", prompt.output_schema()));
    }
    out
}
