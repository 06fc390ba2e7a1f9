use crate::bingo::{self, GameName};
use crate::{Context, Error};

use super::{author, reply_ephemeral, reply_error};

async fn addwords_impl(ctx: Context<'_>, name: String, words: String) -> Result<(), Error> {
    let name = GameName::new(name);
    let words = bingo::parse_words(&words);
    let count = words.len();

    let result = {
        let mut games = ctx.data().games.write().await;
        games
            .get_mut(&name)
            .and_then(|game| game.set_words(author(ctx), words))
    };

    match result {
        Ok(dimension) => {
            reply_ephemeral(
                ctx,
                &format!(
                    "`{name}` 게임에 단어 {count}개를 등록했습니다. 카드 크기: {dimension}x{dimension}"
                ),
            )
            .await
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 빙고 게임에 단어를 등록합니다 (N*N 개)
#[poise::command(slash_command, guild_only)]
pub async fn bingo_addwords(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
    #[description = "쉼표로 구분한 단어 목록"] words: String,
) -> Result<(), Error> {
    addwords_impl(ctx, name, words).await
}
