use crate::bingo::GameName;
use crate::{Context, Error};

use super::{author, reply_ephemeral, reply_error};

/// Longest game name that still fits in a component custom id.
const MAX_NAME_LEN: usize = 80;

async fn create_impl(ctx: Context<'_>, name: String) -> Result<(), Error> {
    let name = GameName::new(name);
    if name.as_str().is_empty() || name.as_str().chars().count() > MAX_NAME_LEN {
        return reply_error(ctx, format!("게임 이름은 1~{MAX_NAME_LEN}자여야 합니다.")).await;
    }

    let result = {
        let mut games = ctx.data().games.write().await;
        games.create(name.clone(), author(ctx)).map(|_| ())
    };

    match result {
        Ok(()) => {
            tracing::info!("빙고 게임 생성: {name} (생성자 {})", ctx.author().id);
            reply_ephemeral(
                ctx,
                &format!("`{name}` 게임을 만들었습니다! `/bingo_addwords`로 단어를 등록하세요."),
            )
            .await
        }
        Err(e) => reply_error(ctx, e).await,
    }
}

/// 새 빙고 게임을 만듭니다
#[poise::command(slash_command, guild_only)]
pub async fn bingo_create(
    ctx: Context<'_>,
    #[description = "게임 이름"] name: String,
) -> Result<(), Error> {
    create_impl(ctx, name).await
}
