use poise::CreateReply;

use crate::bingo::GameName;
use crate::utils::embed;
use crate::{Context, Error};

use super::{author, reply_ephemeral, reply_error};

async fn mark_impl(ctx: Context<'_>, name: String, word: String) -> Result<(), Error> {
    let name = GameName::new(name);
    let word = word.trim().to_string();

    let result = {
        let mut games = ctx.data().games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.mark_word(author(ctx), &word))
    };

    match result {
        Ok(true) => {
            tracing::info!("빙고 달성: {name} / {}", ctx.author().id);
            ctx.send(CreateReply::default().embed(embed::success(&format!(
                "🎉 {} 님이 `{word}` 표시로 **빙고**를 달성했습니다!",
                author(ctx).mention()
            ))))
            .await?;
            Ok(())
        }
        Ok(false) => reply_ephemeral(ctx, &format!("`{word}` 단어를 표시했습니다.")).await,
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 내 빙고 카드에 단어를 표시합니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_mark(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
    #[description = "표시할 단어"] word: String,
) -> Result<(), Error> {
    mark_impl(ctx, name, word).await
}
