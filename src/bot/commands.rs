use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

pub const COMMAND_NAME: &str = "tn";
pub const OPTION_SKU: &str = "sku";

/// Definition of the `/tn` slash command, registered globally on ready.
pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Recherche dans la base de données de TN Universe")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPTION_SKU,
                "SKU de la paire que tu cherches dans le format 604133001 ou BQ4629-001",
            )
            .required(true),
        )
}
