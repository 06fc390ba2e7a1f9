use poise::serenity_prelude as serenity;
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::model::application::ComponentInteraction;

use crate::bingo::{GameError, GameName, GameStatus, PlayerId};
use crate::utils::{components, embed};
use crate::{Data, Error};

async fn respond_ephemeral(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn respond_error(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    error: &GameError,
) -> Result<(), Error> {
    respond_ephemeral(ctx, interaction, embed::error(&error.to_string())).await
}

async fn update_message(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    );
    interaction.create_response(&ctx.http, response).await?;
    Ok(())
}

async fn announce(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    message: String,
) -> Result<(), Error> {
    interaction
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().content(message),
        )
        .await?;
    Ok(())
}

pub async fn handle(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let Some((action, name)) = components::split_custom_id(&interaction.data.custom_id) else {
        return Ok(());
    };
    let user = PlayerId::from(interaction.user.id);

    match action {
        components::JOIN => join(ctx, interaction, data, &name, user).await,
        components::LEAVE => leave(ctx, interaction, data, &name, user).await,
        components::START => start(ctx, interaction, data, &name, user).await,
        components::CANCEL => cancel(ctx, interaction, data, &name, user).await,
        components::CARD => show_card(ctx, interaction, data, &name, user).await,
        components::MARK => open_mark_modal(ctx, interaction, data, &name, user).await,
        components::STATUS => status(ctx, interaction, data, &name).await,
        components::FINISH => finish(ctx, interaction, data, &name, user).await,
        _ => Ok(()),
    }
}

async fn join(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let mut games = data.games.write().await;
        games.get_mut(name).and_then(|game| {
            let card = game.join(user)?.clone();
            Ok((card, embed::lobby(game)))
        })
    };

    match result {
        Ok((card, lobby)) => {
            update_message(ctx, interaction, lobby, components::lobby_components(name)).await?;
            announce(ctx, interaction, format!("✅ {} 님이 **{name}** 게임에 참가했습니다!", user.mention())).await?;
            interaction
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new()
                        .embed(embed::card("🎯 내 카드", &card))
                        .ephemeral(true),
                )
                .await?;
            Ok(())
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn leave(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let mut games = data.games.write().await;
        games.get_mut(name).and_then(|game| {
            game.leave(user)?;
            Ok(embed::lobby(game))
        })
    };

    match result {
        Ok(lobby) => {
            update_message(ctx, interaction, lobby, components::lobby_components(name)).await?;
            announce(ctx, interaction, format!("👋 {} 님이 **{name}** 게임에서 나갔습니다.", user.mention())).await
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn start(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let mut games = data.games.write().await;
        games.get_mut(name).and_then(|game| {
            game.start(user)?;
            Ok(embed::game_view(game))
        })
    };

    match result {
        Ok(view) => {
            tracing::info!("빙고 게임 시작: {name}");
            update_message(ctx, interaction, view, components::game_components(name)).await?;
            announce(
                ctx,
                interaction,
                format!("🎮 **{name}** 게임이 시작되었습니다! 버튼으로 카드를 보고 단어를 표시하세요."),
            )
            .await
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn cancel(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let mut games = data.games.write().await;
        games.cancel(name, user)
    };

    match result {
        Ok(game) => {
            tracing::info!("빙고 게임 취소: {name}");
            update_message(
                ctx,
                interaction,
                embed::cancelled(&game),
                components::lobby_components_disabled(name),
            )
            .await?;
            announce(ctx, interaction, format!("🗑️ **{name}** 게임이 취소되었습니다.")).await
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn show_card(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let games = data.games.read().await;
        games
            .get(name)
            .and_then(|game| game.card(user).cloned().ok_or(GameError::NotJoined))
    };

    match result {
        Ok(card) => {
            let title = format!("🎯 `{name}` 게임의 내 카드");
            respond_ephemeral(ctx, interaction, embed::card(&title, &card)).await
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

/// Only members of a started game get the word input modal.
async fn open_mark_modal(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let check = {
        let games = data.games.read().await;
        games.get(name).and_then(|game| {
            if !game.has_player(user) {
                Err(GameError::NotJoined)
            } else if game.status() != GameStatus::Started {
                Err(GameError::InvalidStatus(game.status()))
            } else {
                Ok(())
            }
        })
    };

    match check {
        Ok(()) => {
            let response = CreateInteractionResponse::Modal(components::mark_modal(name));
            interaction.create_response(&ctx.http, response).await?;
            Ok(())
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn status(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
) -> Result<(), Error> {
    let result = {
        let games = data.games.read().await;
        games.get(name).map(embed::game_status)
    };

    match result {
        Ok(e) => respond_ephemeral(ctx, interaction, e).await,
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}

async fn finish(
    ctx: &serenity::Context,
    interaction: &ComponentInteraction,
    data: &Data,
    name: &GameName,
    user: PlayerId,
) -> Result<(), Error> {
    let result = {
        let mut games = data.games.write().await;
        games.get_mut(name).and_then(|game| {
            game.finish(user)?;
            Ok(embed::finished(game))
        })
    };

    match result {
        Ok(summary) => {
            tracing::info!("빙고 게임 종료: {name}");
            update_message(ctx, interaction, summary, components::game_components_disabled(name)).await?;
            announce(ctx, interaction, format!("🏁 **{name}** 게임이 종료되었습니다! 참가해주셔서 감사합니다.")).await
        }
        Err(e) => respond_error(ctx, interaction, &e).await,
    }
}
