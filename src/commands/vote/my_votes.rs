use poise::CreateReply;

use crate::utils::embed;
use crate::{Context, Error};

use super::{reply_error, vote_db};

const HISTORY_LIMIT: u32 = 20;

async fn my_votes_impl(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("서버에서만 사용할 수 있습니다")?;

    let Some(db) = vote_db(ctx).await? else {
        return Ok(());
    };

    let records = db.history(ctx.author().id.get(), guild_id.get(), HISTORY_LIMIT)?;
    if records.is_empty() {
        return reply_error(ctx, "아직 투표한 기록이 없습니다!").await;
    }

    ctx.send(
        CreateReply::default()
            .embed(embed::vote_history(&records))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// 내가 한 투표 기록을 확인합니다 (나만 보기)
#[poise::command(slash_command, guild_only)]
pub async fn my_votes(ctx: Context<'_>) -> Result<(), Error> {
    my_votes_impl(ctx).await
}
