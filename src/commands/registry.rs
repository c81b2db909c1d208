// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// Commands keyed by name, in registration order.
pub struct CommandRegistry {
    commands: IndexMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| -> &dyn Command { c.as_ref() })
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;

/// 注册所有内置命令
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(HistCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(HelpCommand));
}

/// 创建包含所有内置命令的注册表
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = create_default_registry();
        assert_eq!(
            registry.names(),
            vec!["cd", "mkdir", "touch", "rm", "ls", "tree", "mv", "hist", "cat", "clear", "help"]
        );
        assert!(registry.contains("tree"));
        assert!(registry.get("history").is_none());
    }
}
