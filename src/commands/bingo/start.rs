use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::{components, embed};
use crate::{Context, Error};

use super::{author, reply_error};

async fn start_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);

    let result = {
        let mut games = ctx.data().games.write().await;
        games.get_mut(&name).and_then(|game| {
            game.start(author(ctx))?;
            Ok(embed::game_view(game))
        })
    };

    match result {
        Ok(view) => {
            tracing::info!("빙고 게임 시작: {name}");
            ctx.send(
                CreateReply::default()
                    .content(format!("🎮 `{name}` 게임이 시작되었습니다!"))
                    .embed(view)
                    .components(components::game_components(&name)),
            )
            .await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임을 시작합니다 (생성자 전용)
#[poise::command(slash_command, guild_only)]
pub async fn bingo_start(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    start_impl(ctx, name).await
}
