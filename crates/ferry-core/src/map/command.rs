use ferry_model::{
    Task,
    wire::{CommandInfo, CommandUri, Environment, Variable},
};

/// Command section: no shell, no value, the task environment and its fetch uris.
pub fn to_command_info(task: &Task) -> CommandInfo {
    let variables = task
        .env
        .iter()
        .map(|(name, value)| Variable {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect();

    CommandInfo {
        shell: Some(false),
        value: None,
        environment: Some(Environment { variables }),
        uris: task
            .uris
            .iter()
            .map(|u| CommandUri { value: u.clone() })
            .collect(),
    }
}
