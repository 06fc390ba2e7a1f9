use poise::serenity_prelude as serenity;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::{ActionRowComponent, ModalInteraction};

use crate::bingo::PlayerId;
use crate::utils::{components, embed};
use crate::{Data, Error};

fn input_value(interaction: &ModalInteraction, custom_id: &str) -> Option<String> {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
}

pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ModalInteraction,
    data: &Data,
) -> Result<(), Error> {
    let Some((action, name)) = components::split_custom_id(&interaction.data.custom_id) else {
        return Ok(());
    };
    if action != components::MARK_MODAL {
        return Ok(());
    }

    let user = PlayerId::from(interaction.user.id);
    let word = input_value(interaction, components::MARK_INPUT)
        .map(|w| w.trim().to_string())
        .unwrap_or_default();

    let result = {
        let mut games = data.games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.mark_word(user, &word))
    };

    let message = match result {
        Ok(true) => {
            tracing::info!("빙고 달성: {name} / {user}");
            CreateInteractionResponseMessage::new().embed(embed::success(&format!(
                "🎉 {} 님이 `{word}` 표시로 **빙고**를 달성했습니다!",
                user.mention()
            )))
        }
        Ok(false) => CreateInteractionResponseMessage::new()
            .embed(embed::success(&format!("`{word}` 단어를 표시했습니다.")))
            .ephemeral(true),
        Err(e) => CreateInteractionResponseMessage::new()
            .embed(embed::error(&e.to_string()))
            .ephemeral(true),
    };

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;
    Ok(())
}
