use crate::commands::{Command, CommandContext, CommandResult, Output};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn summary(&self) -> &'static str {
        "clear the terminal screen"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> CommandResult {
        Ok(Output::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;

    #[test]
    fn test_clear_signals_renderer() {
        let mut env = TestEnv::new();
        let before = env.fs.get_all_paths();
        assert_eq!(env.run(&ClearCommand, &[]).unwrap(), Output::Clear);
        assert_eq!(env.fs.get_all_paths(), before);
    }
}
