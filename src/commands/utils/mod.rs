//! Argument helpers shared by the single-name commands.

use crate::commands::ShellError;

/// Fetch the first argument as a flat entry name.
///
/// Fails when it is missing or contains a `/`: mkdir, touch, rm and cat only
/// address entries of the current directory.
pub fn flat_name<'a>(
    args: &'a [String],
    command: &'static str,
    operand: &'static str,
) -> Result<&'a str, ShellError> {
    let name = args
        .first()
        .ok_or(ShellError::MissingOperand { command, operand })?;
    if name.contains('/') {
        return Err(ShellError::UnsupportedArgument {
            command,
            name: name.clone(),
        });
    }
    Ok(name)
}
