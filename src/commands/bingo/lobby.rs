use poise::CreateReply;

use crate::bingo::{GameName, GameStatus};
use crate::utils::{components, embed};
use crate::{Context, Error};

use super::reply_error;

/// Posts the interactive lobby (or game view once started) for a game.
async fn lobby_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let games = ctx.data().games.read().await;
        games.get(&name).map(|game| match game.status() {
            GameStatus::Preparing => (embed::lobby(game), components::lobby_components(&name)),
            GameStatus::Started => (embed::game_view(game), components::game_components(&name)),
            GameStatus::Finished => (embed::finished(game), Vec::new()),
        })
    };

    match result {
        Ok((e, rows)) => {
            ctx.send(CreateReply::default().embed(e).components(rows))
                .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 버튼으로 참가/시작할 수 있는 빙고 로비를 엽니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_lobby(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    lobby_impl(ctx, name).await
}
