//! Discord surface: gateway session, slash-command registration and reply
//! rendering. The lookup pipeline knows nothing about any of this.

pub mod commands;

use anyhow::Result;
use serenity::all::{
    Command, CommandInteraction, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateEmbedFooter, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditInteractionResponse, EventHandler, GatewayIntents, Interaction, Ready, ResolvedValue,
    Timestamp,
};
use serenity::async_trait;
use tracing::{error, info};

use crate::config::Config;
use crate::formatter::{self, ProductCard};
use crate::pipeline;

const WRONG_CHANNEL_REPLY: &str = "Désolé, cette commande n'est pas disponible dans ce channel.";

pub struct Handler {
    config: Config,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    async fn handle_tn(&self, ctx: &Context, command: &CommandInteraction) -> serenity::Result<()> {
        if command.channel_id.get() != self.config.tn_channel_id() {
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new().content(WRONG_CHANNEL_REPLY),
                    ),
                )
                .await?;
            return Ok(());
        }

        // The option is registered as required; a command without it is
        // malformed and gets the invalid-SKU wording.
        let Some(raw) = sku_option(command) else {
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(pipeline::LookupError::InvalidSku.user_message()),
                    ),
                )
                .await?;
            return Ok(());
        };

        info!(sku = %raw, "tn lookup requested");
        command.defer_ephemeral(&ctx.http).await?;

        match pipeline::lookup(&raw).await {
            Ok(lookup) => {
                let card = formatter::render(&lookup.product, Some(&lookup.url));
                command
                    .channel_id
                    .send_message(&ctx.http, card_message(&card))
                    .await?;
                // The deferred placeholder has served its purpose.
                command.delete_response(&ctx.http).await?;
            }
            Err(err) => {
                command
                    .edit_response(
                        &ctx.http,
                        EditInteractionResponse::new().content(err.user_message()),
                    )
                    .await?;
            }
        }

        Ok(())
    }
}

fn sku_option(command: &CommandInteraction) -> Option<String> {
    command.data.options().into_iter().find_map(|opt| {
        if opt.name != commands::OPTION_SKU {
            return None;
        }
        match opt.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        }
    })
}

/// Map the renderer-agnostic card onto a Discord embed with an optional
/// link-button row.
fn card_message(card: &ProductCard) -> CreateMessage {
    let mut embed = CreateEmbed::new()
        .title(&card.title)
        .footer(CreateEmbedFooter::new(card.footer))
        .timestamp(
            Timestamp::from_unix_timestamp(card.generated_at.timestamp())
                .unwrap_or_else(|_| Timestamp::now()),
        );

    for field in &card.fields {
        embed = embed.field(field.name, &field.value, field.inline);
    }
    if let Some(image_url) = &card.image_url {
        embed = embed.image(image_url);
    }

    let mut message = CreateMessage::new().embed(embed);
    if let Some(link) = &card.link {
        message = message.components(vec![CreateActionRow::Buttons(vec![
            CreateButton::new_link(&link.url).label(link.label),
        ])]);
    }
    message
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "gateway session ready");
        if let Err(err) = Command::create_global_command(&ctx.http, commands::register()).await {
            error!(error = %err, "slash command registration failed");
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != commands::COMMAND_NAME {
            return;
        }

        // A failed reply must never take down the session.
        if let Err(err) = self.handle_tn(&ctx, &command).await {
            error!(error = %err, "tn command handling failed");
        }
    }
}

/// Open the gateway session and run until the process is stopped.
pub async fn run(config: Config) -> Result<()> {
    let token = config.discord_token().to_string();
    let mut client = serenity::Client::builder(&token, GatewayIntents::GUILDS)
        .event_handler(Handler::new(config))
        .await?;
    client.start().await?;
    Ok(())
}
