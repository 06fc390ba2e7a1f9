use poise::CreateReply;

use crate::bingo::{GameError, GameName};
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_error};

async fn show_impl(ctx: Context<'_>, name: String, public: bool) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let games = ctx.data().games.read().await;
        games
            .get(&name)
            .and_then(|game| game.card(author(ctx)).cloned().ok_or(GameError::NotJoined))
    };

    let card = match result {
        Ok(card) => card,
        Err(e) => return reply_error(ctx, e).await,
    };

    let title = if public {
        format!("{} 님의 `{name}` 빙고 카드", ctx.author().name)
    } else {
        format!("🎯 `{name}` 게임의 내 카드")
    };

    ctx.send(
        CreateReply::default()
            .embed(embed::card(&title, &card))
            .ephemeral(!public),
    )
    .await?;
    Ok(())
}

/// 내 빙고 카드를 다른 사람에게 보여줍니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_show(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    show_impl(ctx, name, true).await
}

/// 내 빙고 카드를 확인합니다 (나만 보기)
#[poise::command(slash_command, guild_only)]
pub async fn bingo_card(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    show_impl(ctx, name, false).await
}
